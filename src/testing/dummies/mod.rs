mod samples;

pub use samples::*;
