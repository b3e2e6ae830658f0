pub mod components;
pub mod panel;
pub mod repository;
pub mod view_model;

pub use panel::{DirectoryOptions, EmployeeDirectory};
pub use view_model::{use_directory_view_model, DirectoryViewModel};
