pub mod components;
pub mod panel;
pub mod repository;
pub mod view_model;

pub use panel::EmployeesPage;
pub use view_model::{use_roster_view_model, RosterViewModel};
