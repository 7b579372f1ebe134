use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::{provide_invoice_service, HttpInvoiceService};
use crate::components::design_system::ToastContainer;
use crate::components::layout::Layout;
use crate::pages::{Dashboard, InvoicesPage, Settings, Vendors};
use crate::services::notification_service::provide_notification_state;

#[component]
pub fn App() -> impl IntoView {
    provide_notification_state();
    provide_invoice_service(Arc::new(HttpInvoiceService));

    view! {
        <Router>
            <ToastContainer />
            <Layout>
                <Routes fallback=|| view! { <div class="p-8">"404 - Page Not Found"</div> }>
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/invoice") view=InvoicesPage />
                    <Route path=path!("/vendors") view=Vendors />
                    <Route path=path!("/setting") view=Settings />
                </Routes>
            </Layout>
        </Router>
    }
}
