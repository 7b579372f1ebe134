//! Create/edit form for a single invoice.
//!
//! An initial value with an id means edit (PUT); without one, create (POST).
//! Validation runs synchronously on submit and blocks the request. Saves
//! report through the shared notification contract: success refetches the
//! list and closes the form, failure leaves it open with a toast.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::invoices::{Invoice, InvoiceStatus};
use crate::api::use_invoice_service;
use crate::services::invoice_state::submit_invoice;
use crate::services::notification_service::use_notification_state;
use crate::validation::{FieldErrors, InvoiceDraft};

#[component]
pub fn EntryForm(
    /// Seed values: empty for create, the selected row for edit
    initial: Invoice,
    /// Invoked after a successful save, before closing
    #[prop(into)]
    on_saved: Callback<()>,
    /// Closes the enclosing modal
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let service = use_invoice_service();
    let notifier = use_notification_state();
    let record_id = initial.id.clone();
    let is_edit = record_id.is_some();

    let vendor_name = RwSignal::new(initial.vendor_name.clone());
    let invoice = RwSignal::new(initial.invoice.clone());
    let net_amount = RwSignal::new(if initial.net_amount == 0.0 {
        String::new()
    } else {
        initial.net_amount.to_string()
    });
    let invoice_date = RwSignal::new(initial.invoice_date.clone());
    let due_date = RwSignal::new(initial.due_date.clone());
    let department = RwSignal::new(initial.department.clone());
    let cost_center = RwSignal::new(initial.cost_center.clone());
    let status = RwSignal::new(initial.status.clone());

    let errors = RwSignal::new(FieldErrors::default());
    let is_submitting = RwSignal::new(false);

    let handle_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        let draft = InvoiceDraft {
            vendor_name: vendor_name.get(),
            invoice: invoice.get(),
            net_amount: net_amount.get(),
            invoice_date: invoice_date.get(),
            due_date: due_date.get(),
            department: department.get(),
            cost_center: cost_center.get(),
            status: status.get(),
        };
        match draft.to_invoice(record_id.clone()) {
            Err(field_errors) => errors.set(field_errors),
            Ok(record) => {
                errors.set(FieldErrors::default());
                is_submitting.set(true);
                let service = service.clone();
                spawn_local(async move {
                    // On failure neither callback runs; the form stays open
                    // with its values.
                    submit_invoice(service, notifier, record, on_saved, on_close).await;
                    is_submitting.set(false);
                });
            }
        }
    };

    view! {
        <form
            class="h-full w-full p-5 bg-white flex flex-col gap-3 overflow-y-auto"
            on:submit=handle_submit
        >
            <h2 class="text-lg font-semibold text-gray-800">
                {if is_edit { "Edit" } else { "Create" }}
            </h2>

            <FormField
                label="Vendor Name"
                value=vendor_name
                error=Signal::derive(move || errors.with(|e| e.vendor_name.clone()))
            />
            <FormField
                label="Invoice"
                value=invoice
                error=Signal::derive(move || errors.with(|e| e.invoice.clone()))
            />
            <FormField
                label="Net Amount"
                input_type="number"
                value=net_amount
                error=Signal::derive(move || errors.with(|e| e.net_amount.clone()))
            />
            <FormField
                label="Invoice Date"
                input_type="date"
                value=invoice_date
                error=Signal::derive(move || errors.with(|e| e.invoice_date.clone()))
            />
            <FormField
                label="Due Date"
                input_type="date"
                value=due_date
                error=Signal::derive(move || errors.with(|e| e.due_date.clone()))
            />
            <FormField label="Department" value=department error=Signal::derive(|| None::<String>) />
            <FormField label="Cost Center" value=cost_center error=Signal::derive(|| None::<String>) />

            <div class="flex flex-col">
                <label class="text-sm font-medium text-gray-700 mb-1">"Status"</label>
                <select
                    class="p-2 text-sm border rounded-md focus:ring-2 focus:ring-gray-400 outline-none"
                    prop:value=move || status.get()
                    on:change=move |evt| status.set(event_target_value(&evt))
                >
                    <option value="">"Select Status"</option>
                    {InvoiceStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
                <div class="text-xs text-red-500 min-h-[1rem]">
                    {move || errors.with(|e| e.status.clone())}
                </div>
            </div>

            <div class="flex gap-4 justify-center mt-4">
                <button
                    type="button"
                    class="px-4 py-2 text-sm font-medium text-gray-700 border rounded-md hover:bg-gray-100"
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class=move || {
                        format!(
                            "px-4 py-2 text-sm font-medium text-white rounded-md {}",
                            if is_submitting.get() { "bg-gray-400" } else { "bg-black hover:bg-gray-800" }
                        )
                    }
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <label class="text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type
                class="p-2 text-sm border rounded-md focus:ring-2 focus:ring-gray-400 outline-none"
                prop:value=move || value.get()
                on:input=move |evt| value.set(event_target_value(&evt))
            />
            <div class="text-xs text-red-500 min-h-[1rem]">{move || error.get()}</div>
        </div>
    }
}
