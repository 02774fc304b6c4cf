pub mod composition_grid;
pub mod engine;
pub mod interpolation;
pub mod metrics;
pub mod plotting;
pub mod report;
pub mod scheil_curve;
pub mod type_lib;
