pub mod error;
pub mod graph;
pub mod math;
pub mod operations;
pub mod plan;

pub use error::{PlankitError, Result};
