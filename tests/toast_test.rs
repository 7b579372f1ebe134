#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use wasm_bindgen_test::*;

use invoice_console::components::design_system::ToastContainer;
use invoice_console::services::notification_service::{
    provide_notification_state, use_notification_state,
};

wasm_bindgen_test_configure!(run_in_browser);

fn body_html() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .body()
        .unwrap()
        .inner_html()
}

#[wasm_bindgen_test]
fn success_and_error_toasts_render() {
    leptos::mount::mount_to_body(|| {
        provide_notification_state();
        let state = use_notification_state();
        state.success("Invoice deleted successfully");
        state.error("Failed to fetch invoices");
        view! { <ToastContainer /> }
    });

    let html = body_html();
    assert!(html.contains("Invoice deleted successfully"));
    assert!(html.contains("Failed to fetch invoices"));
}

#[wasm_bindgen_test]
fn dismiss_removes_a_toast() {
    leptos::mount::mount_to_body(|| {
        provide_notification_state();
        let state = use_notification_state();
        state.success("short-lived");
        let id = state.toasts.get_untracked()[0].id;
        state.dismiss(id);
        view! { <ToastContainer /> }
    });

    assert!(!body_html().contains("short-lived"));
}
