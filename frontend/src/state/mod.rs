pub mod directory;
pub mod feedback;
pub mod roster;
