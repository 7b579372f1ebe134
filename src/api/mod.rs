//! REST client for the invoice backend.
//!
//! All requests go to a single hard-coded base URL. Non-2xx responses are
//! mapped uniformly to [`ApiError::Status`]; transport and decoding failures
//! surface as [`ApiError::Http`]. There is no retry and no timeout beyond
//! whatever the browser applies.

pub mod invoices;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::{expect_context, provide_context};
use thiserror::Error;

use invoices::Invoice;

pub const API_BASE_URL: &str = "https://finifi-backend-27au.onrender.com";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] gloo_net::Error),
    #[error("server responded with status {status}")]
    Status { status: u16 },
}

/// Treat any non-2xx response as a failure.
pub(crate) fn ensure_ok(response: &gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
        })
    }
}

pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

/// Backend seam for the invoice endpoints. The app runs against
/// [`HttpInvoiceService`]; tests substitute a canned implementation.
pub trait InvoiceService {
    fn fetch_invoices(&self, status: String) -> ApiFuture<Vec<Invoice>>;
    fn create_invoice(&self, invoice: Invoice) -> ApiFuture<Invoice>;
    fn update_invoice(&self, id: String, invoice: Invoice) -> ApiFuture<()>;
    fn delete_invoice(&self, id: String) -> ApiFuture<()>;
}

pub type SharedInvoiceService = Arc<dyn InvoiceService + Send + Sync>;

/// Production implementation: delegates to the [`invoices`] endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpInvoiceService;

impl InvoiceService for HttpInvoiceService {
    fn fetch_invoices(&self, status: String) -> ApiFuture<Vec<Invoice>> {
        Box::pin(async move { invoices::fetch_invoices(&status).await })
    }

    fn create_invoice(&self, invoice: Invoice) -> ApiFuture<Invoice> {
        Box::pin(async move { invoices::create_invoice(&invoice).await })
    }

    fn update_invoice(&self, id: String, invoice: Invoice) -> ApiFuture<()> {
        Box::pin(async move { invoices::update_invoice(&id, &invoice).await })
    }

    fn delete_invoice(&self, id: String) -> ApiFuture<()> {
        Box::pin(async move { invoices::delete_invoice(&id).await })
    }
}

pub fn provide_invoice_service(service: SharedInvoiceService) {
    provide_context(service);
}

pub fn use_invoice_service() -> SharedInvoiceService {
    expect_context::<SharedInvoiceService>()
}
