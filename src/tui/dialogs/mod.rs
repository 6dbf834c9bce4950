//! Modal dialogs

pub mod confirm;
pub mod help;
pub mod movement;
