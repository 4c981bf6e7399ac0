use crate::errors::CapacityErrors;
use nalgebra as na;
use tracing::debug;

/// Tabulated payload capacity of a launch vehicle to circular orbits.
///
/// Column `j` of the payload matrix is the curve for `inclinations[j]`; row `i`
/// holds the masses at `altitudes[i]`. Inclinations are kept in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceTable {
    altitudes: na::DVector<f64>,
    inclinations: Vec<f64>,
    payloads: na::DMatrix<f64>,
}

impl PerformanceTable {
    /// Builds a table from an altitude grid (km) and inclination (deg) -> payload (kg) curves.
    pub fn new<I>(altitude_grid: Vec<f64>, curves: I) -> Result<Self, CapacityErrors>
    where
        I: IntoIterator<Item = (f64, Vec<f64>)>,
    {
        let n = altitude_grid.len();
        if n < 2 {
            return Err(CapacityErrors::InsufficientGridPoints(n));
        }
        if let Some(bad) = altitude_grid.iter().find(|a| !a.is_finite()) {
            return Err(CapacityErrors::NonFiniteValue(format!(
                "altitude grid ({})",
                bad
            )));
        }
        for (index, pair) in altitude_grid.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(CapacityErrors::NonAscendingGrid {
                    index: index + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }

        let mut curves: Vec<(f64, Vec<f64>)> = curves.into_iter().collect();
        for (inclination, masses) in &curves {
            if !inclination.is_finite() {
                return Err(CapacityErrors::NonFiniteValue(format!(
                    "inclination key ({})",
                    inclination
                )));
            }
            if masses.len() != n {
                return Err(CapacityErrors::CurveLengthMismatch {
                    inclination: *inclination,
                    expected: n,
                    found: masses.len(),
                });
            }
            if masses.iter().any(|m| !m.is_finite()) {
                return Err(CapacityErrors::NonFiniteValue(format!(
                    "payload curve for inclination {}°",
                    inclination
                )));
            }
        }

        curves.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = curves.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(CapacityErrors::DuplicateInclination(pair[0].0));
        }
        if curves.len() < 2 {
            return Err(CapacityErrors::InsufficientInclinations(curves.len()));
        }

        let inclinations: Vec<f64> = curves.iter().map(|(inc, _)| *inc).collect();
        let payloads = na::DMatrix::from_iterator(
            n,
            curves.len(),
            curves.iter().flat_map(|(_, masses)| masses.iter().copied()),
        );

        debug!(
            altitudes = n,
            inclinations = inclinations.len(),
            "Built performance table"
        );

        Ok(Self {
            altitudes: na::DVector::from_vec(altitude_grid),
            inclinations,
            payloads,
        })
    }

    /// Ascending altitude grid (km).
    pub fn altitude_grid(&self) -> &[f64] {
        self.altitudes.as_slice()
    }

    /// Ascending inclination keys (deg), sorted once at construction.
    pub fn inclinations(&self) -> &[f64] {
        &self.inclinations
    }

    /// Payload curve (kg) tabulated for exactly `inclination_deg`, if any.
    pub fn curve(&self, inclination_deg: f64) -> Option<&[f64]> {
        self.inclinations
            .iter()
            .position(|&inc| inc == inclination_deg)
            .map(|j| self.curve_at(j))
    }

    /// Payload curve for the `j`-th inclination in ascending order.
    pub(crate) fn curve_at(&self, j: usize) -> &[f64] {
        let n = self.altitudes.len();
        &self.payloads.as_slice()[j * n..(j + 1) * n]
    }

    /// Full payload matrix (altitude rows, inclination columns).
    pub fn payloads(&self) -> &na::DMatrix<f64> {
        &self.payloads
    }

    pub fn altitude_domain(&self) -> (f64, f64) {
        (self.altitudes[0], self.altitudes[self.altitudes.len() - 1])
    }

    pub fn inclination_domain(&self) -> (f64, f64) {
        (self.inclinations[0], self.inclinations[self.inclinations.len() - 1])
    }
}
