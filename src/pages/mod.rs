pub mod dashboard;
pub mod invoices;
pub mod settings;
pub mod vendors;

pub use dashboard::Dashboard;
pub use invoices::InvoicesPage;
pub use settings::Settings;
pub use vendors::Vendors;
