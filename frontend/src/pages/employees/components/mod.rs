pub mod create_form;
pub mod table;

pub use create_form::CreateEmployeeForm;
pub use table::RosterTable;
