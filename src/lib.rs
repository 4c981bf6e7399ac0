//! Payload capacity estimates for launch vehicles, interpolated from tabulated
//! altitude/inclination performance data.

pub mod config;
pub mod constants;
pub mod errors;
pub mod interpolation;
pub mod mission;
pub mod performance;

pub use errors::{Axis, CapacityErrors};
pub use performance::{
    build_table, capacity, safe_capacity, CapacityEstimator, CapacityModel, PerformanceTable,
    SafeCapacityQuery,
};
