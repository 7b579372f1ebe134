use leptos::prelude::*;

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="px-4 py-8">
            <h1 class="text-xl font-semibold">"Settings"</h1>
            <p class="mt-2 text-sm text-gray-500">"Nothing to configure yet."</p>
        </div>
    }
}
