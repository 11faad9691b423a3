pub mod uniform_source;

pub use uniform_source::UniformSource;
