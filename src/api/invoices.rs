//! Invoice model and typed endpoints.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::{ensure_ok, ApiError, API_BASE_URL};

/// The single domain record managed by the console.
///
/// Field names follow the wire format (camelCase, Mongo-style `_id`). The
/// server assigns `id`; a record without one has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub invoice: String,
    #[serde(default)]
    pub net_amount: f64,
    #[serde(default)]
    pub invoice_date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub cost_center: String,
    #[serde(default)]
    pub status: String,
}

impl Invoice {
    /// Cell value for a column key, formatted for display. Unknown keys and
    /// zero amounts yield an empty string (rendered as "-" by the table).
    pub fn field(&self, key: &str) -> String {
        match key {
            "vendorName" => self.vendor_name.clone(),
            "invoice" => self.invoice.clone(),
            "status" => self.status.clone(),
            "netAmount" => format_amount(self.net_amount),
            "invoiceDate" => self.invoice_date.clone(),
            "dueDate" => self.due_date.clone(),
            "department" => self.department.clone(),
            "costCenter" => self.cost_center.clone(),
            _ => String::new(),
        }
    }
}

fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        String::new()
    } else {
        format!("{amount}")
    }
}

/// The fixed status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Open,
    AwaitingApproval,
    Approved,
    Processing,
    Paid,
    Rejected,
    VendorNotFound,
    Duplicate,
    Void,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 9] = [
        InvoiceStatus::Open,
        InvoiceStatus::AwaitingApproval,
        InvoiceStatus::Approved,
        InvoiceStatus::Processing,
        InvoiceStatus::Paid,
        InvoiceStatus::Rejected,
        InvoiceStatus::VendorNotFound,
        InvoiceStatus::Duplicate,
        InvoiceStatus::Void,
    ];

    /// Display name, which is also the wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Open => "Open",
            InvoiceStatus::AwaitingApproval => "Awaiting Approval",
            InvoiceStatus::Approved => "Approved",
            InvoiceStatus::Processing => "Processing",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Rejected => "Rejected",
            InvoiceStatus::VendorNotFound => "Vendor Not Found",
            InvoiceStatus::Duplicate => "Duplicate",
            InvoiceStatus::Void => "Void",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Truncate an ISO timestamp at the `T` separator, leaving a date-only
/// string. Values without a `T` pass through unchanged.
pub fn date_only(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => timestamp.to_string(),
    }
}

/// GET the invoice collection, optionally filtered by status on the server.
/// An empty filter means "All". Timestamp fields are truncated to date-only
/// strings before the list is handed to the UI.
pub async fn fetch_invoices(status: &str) -> Result<Vec<Invoice>, ApiError> {
    let response = Request::get(&format!("{API_BASE_URL}/api/invoices"))
        .query([("status", status)])
        .send()
        .await?;
    ensure_ok(&response)?;
    let mut invoices: Vec<Invoice> = response.json().await?;
    for invoice in &mut invoices {
        invoice.invoice_date = date_only(&invoice.invoice_date);
        invoice.due_date = date_only(&invoice.due_date);
    }
    Ok(invoices)
}

/// POST a new invoice. The body carries no `_id`; the created record comes
/// back with one.
pub async fn create_invoice(invoice: &Invoice) -> Result<Invoice, ApiError> {
    let response = Request::post(&format!("{API_BASE_URL}/api/invoices"))
        .json(invoice)?
        .send()
        .await?;
    ensure_ok(&response)?;
    Ok(response.json().await?)
}

/// PUT the full record. Only the response status is consumed.
pub async fn update_invoice(id: &str, invoice: &Invoice) -> Result<(), ApiError> {
    let response = Request::put(&format!("{API_BASE_URL}/api/invoices/{id}"))
        .json(invoice)?
        .send()
        .await?;
    ensure_ok(&response)
}

/// DELETE by id. Success is indicated by the response status alone.
pub async fn delete_invoice(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{API_BASE_URL}/api/invoices/{id}"))
        .send()
        .await?;
    ensure_ok(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_truncates_iso_timestamp() {
        assert_eq!(date_only("2024-01-05T00:00:00Z"), "2024-01-05");
    }

    #[test]
    fn date_only_passes_through_plain_dates() {
        assert_eq!(date_only("2024-01-05"), "2024-01-05");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn status_names_round_trip() {
        for status in InvoiceStatus::ALL {
            assert_eq!(InvoiceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(InvoiceStatus::parse("All"), None);
        assert_eq!(InvoiceStatus::parse(""), None);
    }

    #[test]
    fn deserializes_server_payload() {
        let payload = r#"{
            "_id": "65a1b2c3",
            "vendorName": "Acme Corp",
            "invoice": "INV-1042",
            "netAmount": 100.5,
            "invoiceDate": "2024-01-05T00:00:00Z",
            "dueDate": "2024-02-05T00:00:00Z",
            "status": "Open",
            "__v": 0
        }"#;
        let invoice: Invoice = serde_json::from_str(payload).unwrap();
        assert_eq!(invoice.id.as_deref(), Some("65a1b2c3"));
        assert_eq!(invoice.vendor_name, "Acme Corp");
        assert_eq!(invoice.net_amount, 100.5);
        // Optional fields absent on the wire default to empty
        assert_eq!(invoice.department, "");
        assert_eq!(invoice.cost_center, "");
    }

    #[test]
    fn create_body_omits_missing_id() {
        let invoice = Invoice {
            vendor_name: "Acme Corp".to_string(),
            invoice: "INV-1042".to_string(),
            net_amount: 100.5,
            invoice_date: "2024-01-05".to_string(),
            due_date: "2024-02-05".to_string(),
            status: "Open".to_string(),
            ..Invoice::default()
        };
        let body = serde_json::to_string(&invoice).unwrap();
        assert!(!body.contains("_id"));
        assert!(body.contains("\"vendorName\":\"Acme Corp\""));
        assert!(body.contains("\"netAmount\":100.5"));
    }

    #[test]
    fn field_lookup_formats_cells() {
        let invoice = Invoice {
            vendor_name: "Acme Corp".to_string(),
            net_amount: 250.0,
            ..Invoice::default()
        };
        assert_eq!(invoice.field("vendorName"), "Acme Corp");
        assert_eq!(invoice.field("netAmount"), "250");
        // Empty and unknown keys render as empty (the table shows "-")
        assert_eq!(invoice.field("department"), "");
        assert_eq!(invoice.field("nope"), "");
    }
}
