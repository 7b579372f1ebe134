use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use phosphor_leptos::{Icon, GAUGE, GEAR, RECEIPT, STOREFRONT};

/// Static navigation sidebar. Hidden below the md breakpoint; no business
/// logic beyond active-route highlighting.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="hidden md:block bg-blue-100 min-h-screen w-64 shadow-md">
            <div class="flex items-center py-4 px-6">
                <A href="/">
                    <span class="text-xl font-bold text-blue-800">"Invoice Console"</span>
                </A>
            </div>
            <nav class="mt-4 flex flex-col space-y-2">
                <SidebarLink href="/" label="Dashboard">
                    <Icon icon=GAUGE size="22px" />
                </SidebarLink>
                <SidebarLink href="/invoice" label="Invoices">
                    <Icon icon=RECEIPT size="22px" />
                </SidebarLink>
                <SidebarLink href="/vendors" label="Vendors">
                    <Icon icon=STOREFRONT size="22px" />
                </SidebarLink>
                <SidebarLink href="/setting" label="Settings">
                    <Icon icon=GEAR size="22px" />
                </SidebarLink>
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink(href: &'static str, label: &'static str, children: Children) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == href;

    view! {
        <A href=href>
            <div class=move || {
                format!(
                    "flex items-center px-6 py-3 rounded-l-full cursor-pointer {}",
                    if is_active() {
                        "bg-blue-700 text-white"
                    } else {
                        "text-blue-700 hover:bg-blue-300 hover:text-white"
                    }
                )
            }>
                {children()}
                <span class="ml-4 font-medium">{label}</span>
            </div>
        </A>
    }
}
