pub mod filters;
pub mod pagination;
pub mod table;

pub use filters::{DirectoryToolbar, StatusTabs};
pub use pagination::Pagination;
pub use table::DirectoryTable;
