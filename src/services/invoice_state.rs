//! Reactive state and mutation flows for the invoice collection.
//!
//! Components own the rendering; the fetch/delete/save flows live here
//! against the [`InvoiceService`](crate::api::InvoiceService) seam so their
//! outcome branches can be exercised without a live backend.

use leptos::logging;
use leptos::prelude::*;

use crate::api::invoices::Invoice;
use crate::api::SharedInvoiceService;
use crate::services::notification_service::NotificationState;

/// Page-level state for the invoice list: the fetched collection, the active
/// status tab, and the loading flag, plus the flows that mutate them.
#[derive(Clone)]
pub struct InvoiceState {
    pub invoices: RwSignal<Vec<Invoice>>,
    pub active_tab: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    service: SharedInvoiceService,
    notifier: NotificationState,
}

impl InvoiceState {
    pub fn new(service: SharedInvoiceService, notifier: NotificationState) -> Self {
        Self {
            invoices: RwSignal::new(Vec::new()),
            active_tab: RwSignal::new("All".to_string()),
            is_loading: RwSignal::new(false),
            service,
            notifier,
        }
    }

    /// GET the list for the active tab and replace the collection. "All" maps
    /// to an empty server-side filter. A fetch failure leaves the current
    /// list in place and reports through the notification contract; the
    /// loading flag clears either way.
    pub async fn refetch(&self) {
        let tab = self.active_tab.get_untracked();
        let status = if tab == "All" { String::new() } else { tab };
        self.is_loading.set(true);
        match self.service.fetch_invoices(status).await {
            Ok(list) => self.invoices.set(list),
            Err(err) => {
                logging::error!("error fetching invoices: {err}");
                self.notifier.error("Failed to fetch invoices");
            }
        }
        self.is_loading.set(false);
    }

    /// DELETE a row, then refetch the list. On failure the list is left
    /// untouched, no refetch is issued, and a failure toast is raised. Rows
    /// the server never assigned an id are ignored.
    pub async fn delete(&self, row: Invoice) {
        let Some(id) = row.id else { return };
        match self.service.delete_invoice(id).await {
            Ok(()) => {
                self.notifier.success("Invoice deleted successfully");
                self.refetch().await;
            }
            Err(err) => {
                logging::error!("error deleting invoice: {err}");
                self.notifier.error("Failed to delete invoice");
            }
        }
    }
}

/// Persist a validated record: id present routes to PUT, absent to POST. On
/// success `on_saved` runs before `on_close`; on failure neither runs, so the
/// enclosing form stays open with its values.
pub async fn submit_invoice(
    service: SharedInvoiceService,
    notifier: NotificationState,
    record: Invoice,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) {
    let result = match record.id.clone() {
        Some(id) => service.update_invoice(id, record).await,
        None => service.create_invoice(record).await.map(|_| ()),
    };
    match result {
        Ok(()) => {
            notifier.success("Invoice saved successfully");
            on_saved.run(());
            on_close.run(());
        }
        Err(err) => {
            logging::error!("error submitting invoice form: {err}");
            notifier.error("Failed to save invoice");
        }
    }
}
