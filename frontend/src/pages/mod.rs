pub mod attendance;
pub mod dashboard;
pub mod directory;
pub mod employees;
pub mod people;
