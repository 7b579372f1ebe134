#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use wasm_bindgen_test::*;

use invoice_console::api::invoices::Invoice;
use invoice_console::components::data_table::{Column, DataTable};

wasm_bindgen_test_configure!(run_in_browser);

const TEST_COLUMNS: &[Column] = &[
    Column { key: "checkbox", label: "" },
    Column { key: "vendorName", label: "Vendor Name" },
    Column { key: "status", label: "Status" },
];

fn body_html() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .body()
        .unwrap()
        .inner_html()
}

fn invoice(id: &str, vendor: &str, status: &str) -> Invoice {
    Invoice {
        id: Some(id.to_string()),
        vendor_name: vendor.to_string(),
        status: status.to_string(),
        ..Invoice::default()
    }
}

#[wasm_bindgen_test]
fn renders_empty_state() {
    leptos::mount::mount_to_body(|| {
        let rows = RwSignal::new(Vec::<Invoice>::new());
        view! {
            <DataTable
                columns=TEST_COLUMNS
                rows=rows
                is_loading=false
                on_edit=Callback::new(|_| {})
                on_delete=Callback::new(|_| {})
            />
        }
    });

    assert!(body_html().contains("No data found"));
}

#[wasm_bindgen_test]
fn renders_rows_with_status_badges() {
    leptos::mount::mount_to_body(|| {
        let rows = RwSignal::new(vec![
            invoice("1", "Acme Corp", "Open"),
            invoice("2", "Globex", "Paid"),
        ]);
        view! {
            <DataTable
                columns=TEST_COLUMNS
                rows=rows
                is_loading=false
                on_edit=Callback::new(|_| {})
                on_delete=Callback::new(|_| {})
            />
        }
    });

    let html = body_html();
    assert!(html.contains("Acme Corp"));
    assert!(html.contains("Globex"));
    assert!(html.contains("Edit"));
    assert!(html.contains("Delete"));
}

#[wasm_bindgen_test]
fn pagination_appears_beyond_one_page() {
    leptos::mount::mount_to_body(|| {
        let rows = RwSignal::new(
            (0..7)
                .map(|i| invoice(&format!("id-{i}"), &format!("Vendor {i}"), "Open"))
                .collect::<Vec<_>>(),
        );
        view! {
            <DataTable
                columns=TEST_COLUMNS
                rows=rows
                is_loading=false
                on_edit=Callback::new(|_| {})
                on_delete=Callback::new(|_| {})
            />
        }
    });

    let html = body_html();
    assert!(html.contains("Previous"));
    assert!(html.contains("Next"));
    // First page shows the first five rows only
    assert!(html.contains("Vendor 0"));
    assert!(html.contains("Vendor 4"));
    assert!(!html.contains("Vendor 5"));
}
