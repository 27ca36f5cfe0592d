pub mod error;
pub mod feasibility;
pub mod sensors;
