pub mod estimator;
pub mod safe_query;
pub mod table;
pub mod table_io;

pub use estimator::CapacityEstimator;
pub use safe_query::{CapacityModel, SafeCapacityQuery};
pub use table::PerformanceTable;

use crate::errors::CapacityErrors;

/// Builds a validated [`PerformanceTable`].
pub fn build_table<I>(altitude_grid: Vec<f64>, curves: I) -> Result<PerformanceTable, CapacityErrors>
where
    I: IntoIterator<Item = (f64, Vec<f64>)>,
{
    PerformanceTable::new(altitude_grid, curves)
}

/// Strict capacity query; out-of-domain coordinates are an error.
pub fn capacity(
    table: &PerformanceTable,
    altitude_km: f64,
    inclination_deg: f64,
) -> Result<f64, CapacityErrors> {
    CapacityEstimator::new(table).capacity(altitude_km, inclination_deg)
}

/// Capacity query returning `None` for out-of-domain coordinates.
pub fn safe_capacity(
    table: &PerformanceTable,
    altitude_km: f64,
    inclination_deg: f64,
) -> Result<Option<f64>, CapacityErrors> {
    SafeCapacityQuery::new(table).capacity(altitude_km, inclination_deg)
}
