use leptos::prelude::*;

/// Style lookup for status badges. Unrecognized statuses fall back to the
/// default gray style.
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Open" => "px-4 bg-blue-100 text-blue-700 border-blue-500",
        "Awaiting Approval" => "px-4 bg-yellow-100 text-yellow-700 border-yellow-500 whitespace-nowrap",
        "Approved" => "px-4 bg-green-100 text-green-700 border-green-500",
        "Processing" => "px-4 bg-blue-100 text-blue-700 border-blue-500",
        "Paid" => "px-4 bg-purple-100 text-purple-700 border-purple-500",
        "Rejected" => "px-4 bg-red-100 text-red-700 border-red-500",
        "Vendor Not Found" => "bg-red-100 text-red-700 border-red-500 whitespace-nowrap",
        _ => "px-4 bg-gray-100 text-gray-700 border-gray-500",
    }
}

/// A pill-shaped status badge.
#[component]
pub fn Badge(
    /// The status text, which also selects the style
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let style = status_badge_class(&status);
    view! {
        <span class=format!("py-2 px-2 text-xs font-semibold rounded-full border {style}")>
            {status}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::invoices::InvoiceStatus;

    const DEFAULT_STYLE: &str = "px-4 bg-gray-100 text-gray-700 border-gray-500";

    #[test]
    fn unknown_status_gets_default_style() {
        assert_eq!(status_badge_class("Quarantined"), DEFAULT_STYLE);
        assert_eq!(status_badge_class(""), DEFAULT_STYLE);
    }

    #[test]
    fn known_statuses_have_non_default_styles() {
        for status in ["Open", "Awaiting Approval", "Approved", "Paid", "Rejected"] {
            assert_ne!(status_badge_class(status), DEFAULT_STYLE, "{status}");
        }
    }

    #[test]
    fn every_enum_status_resolves_to_a_style() {
        for status in InvoiceStatus::ALL {
            assert!(!status_badge_class(status.as_str()).is_empty());
        }
    }
}
