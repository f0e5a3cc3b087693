mod from_graph;
mod to_graph;

pub use from_graph::{FromGraph, STUB_HALF_LENGTH};
pub use to_graph::{BuildReport, GraphBuild, ToGraph};
