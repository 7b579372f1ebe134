use leptos::prelude::*;

/// A loading spinner component
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    let size_class = match size {
        "sm" => "w-4 h-4",
        "lg" => "w-10 h-10",
        _ => "w-6 h-6",
    };

    view! {
        <div class="flex justify-center items-center h-full mx-auto py-4">
            <div class=format!(
                "{size_class} animate-spin rounded-full border-2 border-gray-300 border-t-blue-800"
            )></div>
        </div>
    }
}
