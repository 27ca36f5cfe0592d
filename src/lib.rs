pub mod aoi;
pub mod feasibility;
pub mod web;
