use super::estimator::CapacityEstimator;
use super::table::PerformanceTable;
use crate::errors::CapacityErrors;
use tracing::debug;

/// Anything that can answer a strict capacity query.
pub trait CapacityModel {
    fn capacity(&self, altitude_km: f64, inclination_deg: f64) -> Result<f64, CapacityErrors>;
}

impl CapacityModel for CapacityEstimator<'_> {
    fn capacity(&self, altitude_km: f64, inclination_deg: f64) -> Result<f64, CapacityErrors> {
        CapacityEstimator::capacity(self, altitude_km, inclination_deg)
    }
}

/// Capacity query that reports out-of-domain orbits as `None` instead of an error.
///
/// Only [`CapacityErrors::OutOfBounds`] is absorbed. Anything else coming out of
/// the model is a configuration defect and is returned to the caller.
#[derive(Debug, Clone, Copy)]
pub struct SafeCapacityQuery<M> {
    model: M,
}

impl<'a> SafeCapacityQuery<CapacityEstimator<'a>> {
    pub fn new(table: &'a PerformanceTable) -> Self {
        Self::with_model(CapacityEstimator::new(table))
    }
}

impl<M: CapacityModel> SafeCapacityQuery<M> {
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn capacity(
        &self,
        altitude_km: f64,
        inclination_deg: f64,
    ) -> Result<Option<f64>, CapacityErrors> {
        match self.model.capacity(altitude_km, inclination_deg) {
            Ok(kg) => Ok(Some(kg)),
            Err(e) if e.is_out_of_bounds() => {
                debug!("No capacity estimate: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PerformanceTable {
        PerformanceTable::new(
            vec![400.0, 500.0],
            vec![(40.0, vec![270.0, 263.8]), (60.0, vec![249.0, 243.0])],
        )
        .unwrap()
    }

    // Stands in for a table whose validation was deferred to query time.
    struct MisconfiguredModel;

    impl CapacityModel for MisconfiguredModel {
        fn capacity(&self, _: f64, _: f64) -> Result<f64, CapacityErrors> {
            Err(CapacityErrors::InsufficientInclinations(1))
        }
    }

    #[test]
    fn in_domain_query_returns_estimate() {
        let table = table();
        let query = SafeCapacityQuery::new(&table);
        assert_eq!(query.capacity(400.0, 40.0).unwrap(), Some(270.0));
    }

    #[test]
    fn out_of_domain_query_returns_none() {
        let table = table();
        let query = SafeCapacityQuery::new(&table);
        assert_eq!(query.capacity(300.0, 40.0).unwrap(), None);
        assert_eq!(query.capacity(400.0, 150.0).unwrap(), None);
        assert_eq!(query.capacity(400.0, 39.0).unwrap(), None);
        assert_eq!(query.capacity(f64::NAN, 40.0).unwrap(), None);
    }

    #[test]
    fn config_errors_are_not_swallowed() {
        let query = SafeCapacityQuery::with_model(MisconfiguredModel);
        let err = query.capacity(450.0, 50.0).unwrap_err();
        assert!(err.is_config_error());
        assert!(matches!(err, CapacityErrors::InsufficientInclinations(1)));
    }
}
