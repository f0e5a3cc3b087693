pub mod convert;
pub mod query;
