use super::table::PerformanceTable;
use crate::errors::{Axis, CapacityErrors};
use crate::interpolation::linear::{interpolate, Bracket};

/// Two-stage linear interpolation of payload capacity over a [`PerformanceTable`].
///
/// Stage 1 interpolates every inclination curve along altitude; stage 2
/// interpolates the resulting (inclination, payload) profile at the requested
/// inclination. Queries outside the tabulated domain are rejected, never
/// extrapolated.
#[derive(Debug, Clone, Copy)]
pub struct CapacityEstimator<'a> {
    table: &'a PerformanceTable,
}

impl<'a> CapacityEstimator<'a> {
    pub fn new(table: &'a PerformanceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a PerformanceTable {
        self.table
    }

    /// Stage 1: payload (kg) at `altitude_km` for every tabulated inclination,
    /// as `(inclination_deg, payload_kg)` pairs in ascending inclination order.
    pub fn altitude_profile(&self, altitude_km: f64) -> Result<Vec<(f64, f64)>, CapacityErrors> {
        let grid = self.table.altitude_grid();
        // Every curve shares the grid, so the bracket is located once
        let bracket = Bracket::locate(grid, altitude_km, Axis::Altitude)?;

        Ok(self
            .table
            .inclinations()
            .iter()
            .enumerate()
            .map(|(j, &inc)| (inc, bracket.apply(grid, self.table.curve_at(j), altitude_km)))
            .collect())
    }

    /// Estimated maximum payload (kg) to a circular orbit at `altitude_km` and `inclination_deg`.
    pub fn capacity(&self, altitude_km: f64, inclination_deg: f64) -> Result<f64, CapacityErrors> {
        let inclinations = self.table.inclinations();
        let payloads: Vec<f64> = self
            .altitude_profile(altitude_km)?
            .into_iter()
            .map(|(_, payload)| payload)
            .collect();

        interpolate(inclinations, &payloads, inclination_deg, Axis::Inclination)
    }
}
