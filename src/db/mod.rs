pub mod initialize;
pub mod queries;
pub mod store;
