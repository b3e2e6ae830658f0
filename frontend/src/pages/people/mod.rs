pub mod panel;

pub use panel::PeoplePage;
