pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod feedback;
pub mod layout;
