//! Core data models for MiBolsillo
//!
//! The domain is intentionally small: a single flat collection of movements
//! (income or expense entries) plus the money and id types they carry.

pub mod ids;
pub mod money;
pub mod movement;

pub use ids::MovementId;
pub use money::Money;
pub use movement::{
    suggested_categories, Movement, MovementKind, NewMovement, EXPENSE_CATEGORIES,
    INCOME_CATEGORIES,
};
