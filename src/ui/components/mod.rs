//! Reusable UI components

mod button;
mod field;

pub use button::*;
pub use field::*;
