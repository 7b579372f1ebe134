use leptos::prelude::*;

#[component]
pub fn Vendors() -> impl IntoView {
    view! {
        <div class="px-4 py-8">
            <h1 class="text-xl font-semibold">"Vendors"</h1>
            <p class="mt-2 text-sm text-gray-500">"Vendor management is not available yet."</p>
        </div>
    }
}
