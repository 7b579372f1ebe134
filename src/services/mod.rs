pub mod invoice_state;
pub mod notification_service;
