pub mod data_table;
pub mod design_system;
pub mod entry_form;
pub mod layout;
