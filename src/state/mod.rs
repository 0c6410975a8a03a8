//! Application state module

mod app_state;
mod form_state;
mod record;
mod validation;

pub use app_state::*;
pub use form_state::*;
pub use record::*;
pub use validation::*;
