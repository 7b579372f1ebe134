pub mod sidebar;

pub use sidebar::Sidebar;

use leptos::prelude::*;

/// Application frame: static sidebar plus the routed page content.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-white">
            <Sidebar />
            <div class="flex-grow w-full">{children()}</div>
        </div>
    }
}
