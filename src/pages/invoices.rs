//! Invoice management page: wires the list state ([`InvoiceState`]) to the
//! status tabs, the free-text search, the data table, and the entry-form
//! modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, BELL, MAGNIFYING_GLASS, PLUS};

use crate::api::invoices::Invoice;
use crate::api::use_invoice_service;
use crate::components::data_table::{Column, DataTable};
use crate::components::design_system::Modal;
use crate::components::entry_form::EntryForm;
use crate::services::invoice_state::InvoiceState;
use crate::services::notification_service::use_notification_state;

/// Status tabs; "All" maps to an empty server-side filter.
pub const TABS: [&str; 10] = [
    "All",
    "Open",
    "Awaiting Approval",
    "Approved",
    "Processing",
    "Paid",
    "Rejected",
    "Vendor Not Found",
    "Duplicate",
    "Void",
];

pub const COLUMNS: &[Column] = &[
    Column { key: "checkbox", label: "" },
    Column { key: "vendorName", label: "Vendor Name" },
    Column { key: "invoice", label: "Invoice" },
    Column { key: "status", label: "Status" },
    Column { key: "netAmount", label: "Net Amount" },
    Column { key: "invoiceDate", label: "Invoice Date" },
    Column { key: "dueDate", label: "Due Date" },
    Column { key: "department", label: "Department" },
    Column { key: "costCenter", label: "Cost Center" },
];

/// Which field the search box matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    #[default]
    ByVendor,
    ByInvoice,
}

impl SearchType {
    pub fn value(self) -> &'static str {
        match self {
            SearchType::ByVendor => "byVendor",
            SearchType::ByInvoice => "byInvoice",
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value == "byInvoice" {
            SearchType::ByInvoice
        } else {
            SearchType::ByVendor
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SearchType::ByVendor => "Search Vendor Name",
            SearchType::ByInvoice => "Search Invoice Number",
        }
    }
}

/// Case-insensitive substring filter over the selected field, applied on top
/// of whatever server-side status filter produced the list.
pub fn filter_invoices(list: &[Invoice], term: &str, search_type: SearchType) -> Vec<Invoice> {
    if term.is_empty() {
        return list.to_vec();
    }
    let needle = term.to_lowercase();
    list.iter()
        .filter(|invoice| {
            let haystack = match search_type {
                SearchType::ByVendor => &invoice.vendor_name,
                SearchType::ByInvoice => &invoice.invoice,
            };
            haystack.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let state = InvoiceState::new(use_invoice_service(), use_notification_state());
    let invoices = state.invoices;
    let active_tab = state.active_tab;
    let is_loading = state.is_loading;

    let search_term = RwSignal::new(String::new());
    let search_type = RwSignal::new(SearchType::ByVendor);
    let is_modal_open = RwSignal::new(false);
    let selected = RwSignal::new(Invoice::default());

    // Refetch whenever the active tab changes (including the initial load).
    // A pending request is not cancelled; a stale response may land after a
    // fresher one.
    Effect::new({
        let state = state.clone();
        move |_| {
            state.active_tab.track();
            let state = state.clone();
            spawn_local(async move { state.refetch().await });
        }
    });

    let filtered = Signal::derive(move || {
        invoices.with(|list| filter_invoices(list, &search_term.get(), search_type.get()))
    });

    let close_modal = Callback::new(move |_: ()| {
        is_modal_open.set(false);
        selected.set(Invoice::default());
    });

    let open_create = move |_| {
        selected.set(Invoice::default());
        is_modal_open.set(true);
    };

    let on_edit = Callback::new(move |row: Invoice| {
        selected.set(row);
        is_modal_open.set(true);
    });

    let on_delete = Callback::new({
        let state = state.clone();
        move |row: Invoice| {
            let state = state.clone();
            spawn_local(async move { state.delete(row).await });
        }
    });

    let on_saved = Callback::new({
        let state = state.clone();
        move |_: ()| {
            let state = state.clone();
            spawn_local(async move { state.refetch().await });
        }
    });

    view! {
        <Modal is_open=is_modal_open on_close=close_modal>
            <EntryForm initial=selected.get() on_saved=on_saved on_close=close_modal />
        </Modal>

        <div class="px-4 py-2 w-full">
            <div class="flex justify-between items-center">
                <h1 class="text-xl font-semibold">"Manage Invoices"</h1>
                <div class="flex items-center gap-3">
                    <span class="text-red-500 border border-gray-300 rounded-full p-1">
                        <Icon icon=BELL size="20px" />
                    </span>
                    <div class="flex items-center gap-2">
                        <div class="w-10 h-10 rounded-full bg-blue-200 flex items-center justify-center font-medium text-blue-800">
                            "AM"
                        </div>
                        <div>
                            <p class="text-sm font-medium">"Alex Morgan"</p>
                            <p class="text-xs text-gray-500">"alex.morgan@example.com"</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="flex border-y border-gray-300 overflow-x-auto">
                {TABS
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <button
                                class=move || {
                                    format!(
                                        "px-2 py-2 text-sm whitespace-nowrap {}",
                                        if active_tab.get() == tab {
                                            "border-b-2 border-blue-500 font-medium"
                                        } else {
                                            "text-gray-500 md:px-4"
                                        }
                                    )
                                }
                                on:click=move |_| active_tab.set(tab.to_string())
                            >
                                {tab}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex justify-between items-center my-4">
                <div class="flex items-center gap-2 border border-gray-300 rounded px-2 py-2 bg-gray-50">
                    <span class="text-gray-500">
                        <Icon icon=MAGNIFYING_GLASS size="16px" />
                    </span>
                    <select
                        class="outline-none bg-transparent text-sm"
                        prop:value=move || search_type.get().value()
                        on:change=move |evt| {
                            search_type.set(SearchType::from_value(&event_target_value(&evt)))
                        }
                    >
                        <option value="byVendor">"By Vendor"</option>
                        <option value="byInvoice">"By Invoice"</option>
                    </select>
                    <input
                        type="text"
                        class="px-4 flex-grow outline-none bg-transparent text-sm font-medium"
                        placeholder=move || search_type.get().placeholder()
                        prop:value=move || search_term.get()
                        on:input=move |evt| search_term.set(event_target_value(&evt))
                    />
                </div>
                <button
                    class="flex items-center gap-2 px-4 py-2 bg-black text-white rounded text-sm"
                    on:click=open_create
                >
                    <Icon icon=PLUS size="16px" />
                    "Add"
                </button>
            </div>

            <DataTable
                columns=COLUMNS
                rows=filtered
                is_loading=is_loading
                on_edit=on_edit
                on_delete=on_delete
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::invoices::InvoiceStatus;

    fn invoice(vendor: &str, number: &str) -> Invoice {
        Invoice {
            id: Some(format!("id-{number}")),
            vendor_name: vendor.to_string(),
            invoice: number.to_string(),
            ..Invoice::default()
        }
    }

    #[test]
    fn tabs_are_all_plus_every_status() {
        assert_eq!(TABS[0], "All");
        let statuses: Vec<&str> = InvoiceStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(&TABS[1..], statuses.as_slice());
    }

    #[test]
    fn vendor_search_is_case_insensitive() {
        let list = vec![
            invoice("Acme Corp", "INV-1"),
            invoice("ACME Industries", "INV-2"),
            invoice("Globex", "INV-3"),
        ];
        let hits = filter_invoices(&list, "acme", SearchType::ByVendor);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|i| i.vendor_name.to_lowercase().contains("acme")));
    }

    #[test]
    fn invoice_search_matches_the_number_field_only() {
        let list = vec![invoice("Acme Corp", "INV-1042"), invoice("INV Vendor", "X-1")];
        let hits = filter_invoices(&list, "inv-10", SearchType::ByInvoice);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].invoice, "INV-1042");
    }

    #[test]
    fn empty_term_passes_everything_through() {
        let list = vec![invoice("Acme Corp", "INV-1"), invoice("Globex", "INV-2")];
        assert_eq!(filter_invoices(&list, "", SearchType::ByVendor), list);
    }

    #[test]
    fn search_type_values_round_trip() {
        assert_eq!(SearchType::from_value("byVendor"), SearchType::ByVendor);
        assert_eq!(SearchType::from_value("byInvoice"), SearchType::ByInvoice);
        assert_eq!(SearchType::from_value("anything"), SearchType::ByVendor);
        assert_eq!(SearchType::ByInvoice.value(), "byInvoice");
    }
}
