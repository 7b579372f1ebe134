//! Synchronous form validation for the invoice entry form.
//!
//! Pure logic, no UI types: the form collects its field signals into an
//! [`InvoiceDraft`] and converts it with [`InvoiceDraft::to_invoice`], which
//! either yields a well-formed [`Invoice`] or the per-field error messages to
//! render inline. Validation failures never reach the network.

use chrono::NaiveDate;

use crate::api::invoices::{Invoice, InvoiceStatus};

/// Raw field values as typed into the form. Amount stays a string until
/// validation parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub vendor_name: String,
    pub invoice: String,
    pub net_amount: String,
    pub invoice_date: String,
    pub due_date: String,
    pub department: String,
    pub cost_center: String,
    pub status: String,
}

/// One optional message per validated field. Department and cost center are
/// optional and never carry errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub vendor_name: Option<String>,
    pub invoice: Option<String>,
    pub net_amount: Option<String>,
    pub invoice_date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.vendor_name.is_none()
            && self.invoice.is_none()
            && self.net_amount.is_none()
            && self.invoice_date.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}

pub fn validate(draft: &InvoiceDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.vendor_name.trim().is_empty() {
        errors.vendor_name = Some("Vendor Name is required".to_string());
    }
    if draft.invoice.trim().is_empty() {
        errors.invoice = Some("Invoice is required".to_string());
    }

    let amount = draft.net_amount.trim();
    if amount.is_empty() {
        errors.net_amount = Some("Net Amount is required".to_string());
    } else {
        match amount.parse::<f64>() {
            Ok(value) if value > 0.0 => {}
            Ok(_) => errors.net_amount = Some("Net Amount must be positive".to_string()),
            Err(_) => errors.net_amount = Some("Net Amount must be a number".to_string()),
        }
    }

    errors.invoice_date = date_error(&draft.invoice_date, "Invoice Date");
    errors.due_date = date_error(&draft.due_date, "Due Date");

    if draft.status.trim().is_empty() {
        errors.status = Some("Status is required".to_string());
    } else if InvoiceStatus::parse(draft.status.trim()).is_none() {
        errors.status = Some("Status is invalid".to_string());
    }

    errors
}

fn date_error(value: &str, label: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some(format!("{label} is required"))
    } else if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        Some(format!("{label} must be a valid date"))
    } else {
        None
    }
}

impl InvoiceDraft {
    /// Validate and build the record to submit. `id` is the server-assigned
    /// identifier carried over in edit mode, `None` for create.
    pub fn to_invoice(&self, id: Option<String>) -> Result<Invoice, FieldErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        // validate() guarantees the amount parses
        let net_amount = self.net_amount.trim().parse::<f64>().unwrap_or_default();
        Ok(Invoice {
            id,
            vendor_name: self.vendor_name.trim().to_string(),
            invoice: self.invoice.trim().to_string(),
            net_amount,
            invoice_date: self.invoice_date.trim().to_string(),
            due_date: self.due_date.trim().to_string(),
            department: self.department.trim().to_string(),
            cost_center: self.cost_center.trim().to_string(),
            status: self.status.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> InvoiceDraft {
        InvoiceDraft {
            vendor_name: "Acme Corp".to_string(),
            invoice: "INV-1042".to_string(),
            net_amount: "100.50".to_string(),
            invoice_date: "2024-01-05".to_string(),
            due_date: "2024-02-05".to_string(),
            department: String::new(),
            cost_center: String::new(),
            status: "Open".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let errors = validate(&valid_draft());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn empty_draft_reports_all_required_fields() {
        let errors = validate(&InvoiceDraft::default());
        assert_eq!(errors.vendor_name.as_deref(), Some("Vendor Name is required"));
        assert_eq!(errors.invoice.as_deref(), Some("Invoice is required"));
        assert_eq!(errors.net_amount.as_deref(), Some("Net Amount is required"));
        assert_eq!(errors.invoice_date.as_deref(), Some("Invoice Date is required"));
        assert_eq!(errors.due_date.as_deref(), Some("Due Date is required"));
        assert_eq!(errors.status.as_deref(), Some("Status is required"));
    }

    #[test]
    fn zero_and_negative_amounts_rejected() {
        let mut draft = valid_draft();
        draft.net_amount = "0".to_string();
        assert_eq!(
            validate(&draft).net_amount.as_deref(),
            Some("Net Amount must be positive")
        );

        draft.net_amount = "-12.50".to_string();
        assert_eq!(
            validate(&draft).net_amount.as_deref(),
            Some("Net Amount must be positive")
        );

        draft.net_amount = "abc".to_string();
        assert_eq!(
            validate(&draft).net_amount.as_deref(),
            Some("Net Amount must be a number")
        );
    }

    #[test]
    fn malformed_dates_rejected() {
        let mut draft = valid_draft();
        draft.invoice_date = "05/01/2024".to_string();
        assert_eq!(
            validate(&draft).invoice_date.as_deref(),
            Some("Invoice Date must be a valid date")
        );

        draft.invoice_date = "2024-13-40".to_string();
        assert!(validate(&draft).invoice_date.is_some());
    }

    #[test]
    fn unknown_status_rejected() {
        let mut draft = valid_draft();
        draft.status = "All".to_string();
        assert_eq!(validate(&draft).status.as_deref(), Some("Status is invalid"));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut draft = valid_draft();
        draft.department = String::new();
        draft.cost_center = String::new();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn to_invoice_builds_parsed_record() {
        let invoice = valid_draft().to_invoice(None).unwrap();
        assert_eq!(invoice.id, None);
        assert_eq!(invoice.net_amount, 100.50);
        assert_eq!(invoice.status, "Open");

        let edited = valid_draft().to_invoice(Some("65a1b2c3".to_string())).unwrap();
        assert_eq!(edited.id.as_deref(), Some("65a1b2c3"));
    }

    #[test]
    fn to_invoice_blocks_invalid_drafts() {
        let mut draft = valid_draft();
        draft.net_amount = "0".to_string();
        let errors = draft.to_invoice(None).unwrap_err();
        assert!(errors.net_amount.is_some());
    }
}
