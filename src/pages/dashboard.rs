use leptos::prelude::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="px-4 py-8">
            <h1 class="text-xl font-semibold">"Dashboard"</h1>
            <p class="mt-2 text-sm text-gray-500">
                "Head over to Invoices to manage your records."
            </p>
        </div>
    }
}
