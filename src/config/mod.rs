//! Estimator configuration as data.
//!
//! A [`BoundChoice`] is a tagged enum (`{"type": …, "params": {…}}`) naming the
//! bound strategy and its parameters; [`BoundChoice::build`] validates it.

mod bound_choice;
mod loader;

pub use bound_choice::*;
pub use loader::{load_bound_choice, load_estimator};
