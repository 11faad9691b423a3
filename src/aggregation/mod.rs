mod accumulator;
mod confidence_aggregation_function;
mod convergence_trace;
mod estimate;
mod estimator;
mod fixed_precision;

pub use accumulator::MeanAccumulator;
pub use confidence_aggregation_function::ConfidenceAggregationFunction;
pub use convergence_trace::{ConvergenceTrace, ReportSchedule, TraceFormat};
pub use estimate::Estimate;
pub use estimator::{ConfidenceEstimator, Estimator};
pub use fixed_precision::{FixedPrecision, FixedPrecisionExt};
