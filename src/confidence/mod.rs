//! Error bounds for running averages.
//!
//! Each strategy is a pure function of the confidence level, the number of
//! observations and the value domain. [`BoundStrategy`] closes over the
//! parameters a strategy needs and dispatches to it.

mod bound_strategy;
pub(crate) mod bounds;
pub mod conservative;
pub mod deterministic;
mod error;
pub mod large_sample;

pub use bound_strategy::BoundStrategy;
pub use bounds::{Bounds, check_confidence};
pub use error::{ConfidenceError, ErrorKind};
