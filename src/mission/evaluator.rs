use super::record::MissionRecord;
use crate::constants::PERCENT;
use crate::errors::CapacityErrors;
use crate::interpolation::linear::surrounding;
use crate::performance::{CapacityEstimator, PerformanceTable, SafeCapacityQuery};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacityStatus {
    /// Interpolated maximum payload (kg).
    Estimated(f64),
    /// The orbit lies outside the tabulated domain.
    OutOfBounds,
    /// Altitude or inclination is unknown, so no query was made.
    MissingOrbit,
}

impl CapacityStatus {
    pub fn estimate(&self) -> Option<f64> {
        match self {
            CapacityStatus::Estimated(kg) => Some(*kg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissionAssessment<'r> {
    pub record: &'r MissionRecord,
    pub status: CapacityStatus,
    /// Actual payload as a percentage of the estimate.
    pub utilization_pct: Option<f64>,
    pub altitude_bracket: Option<(f64, f64)>,
    pub inclination_bracket: Option<(f64, f64)>,
}

/// Compares flown missions against the capacity of a performance table.
pub struct MissionEvaluator<'a> {
    table: &'a PerformanceTable,
    query: SafeCapacityQuery<CapacityEstimator<'a>>,
}

impl<'a> MissionEvaluator<'a> {
    pub fn new(table: &'a PerformanceTable) -> Self {
        Self {
            table,
            query: SafeCapacityQuery::new(table),
        }
    }

    pub fn evaluate<'r>(
        &self,
        record: &'r MissionRecord,
    ) -> Result<MissionAssessment<'r>, CapacityErrors> {
        let mut assessment = MissionAssessment {
            record,
            status: CapacityStatus::MissingOrbit,
            utilization_pct: None,
            altitude_bracket: None,
            inclination_bracket: None,
        };

        let Some((altitude_km, inclination_deg)) = record.orbit() else {
            return Ok(assessment);
        };

        let Some(estimate) = self.query.capacity(altitude_km, inclination_deg)? else {
            assessment.status = CapacityStatus::OutOfBounds;
            return Ok(assessment);
        };

        assessment.status = CapacityStatus::Estimated(estimate);
        assessment.utilization_pct = record
            .payload_mass_kg
            .filter(|&kg| kg > 0.0)
            .map(|kg| kg / estimate * PERCENT);
        assessment.altitude_bracket = surrounding(self.table.altitude_grid(), altitude_km);
        assessment.inclination_bracket = surrounding(self.table.inclinations(), inclination_deg);

        Ok(assessment)
    }

    /// Evaluates every numbered record in mission-number order.
    /// Records without a usable mission number are skipped.
    pub fn evaluate_all<'r>(
        &self,
        records: &'r [MissionRecord],
    ) -> Result<Vec<MissionAssessment<'r>>, CapacityErrors> {
        let mut ordered: Vec<(u32, &MissionRecord)> = records
            .iter()
            .filter_map(|r| r.mission_number.map(|n| (n, r)))
            .collect();
        let skipped = records.len() - ordered.len();
        if skipped > 0 {
            debug!("Skipping {} records without a mission number", skipped);
        }
        ordered.sort_by_key(|(n, _)| *n);
        ordered.into_iter().map(|(_, r)| self.evaluate(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn table() -> PerformanceTable {
        PerformanceTable::new(
            vec![400.0, 500.0, 600.0],
            vec![
                (40.0, vec![300.0, 280.0, 260.0]),
                (60.0, vec![200.0, 180.0, 160.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn estimates_utilization_and_brackets() {
        let table = table();
        let evaluator = MissionEvaluator::new(&table);
        let record = MissionRecord::new("rideshare", Some(450.0), Some(50.0)).with_payload(120.0);

        let assessment = evaluator.evaluate(&record).unwrap();
        let estimate = assessment.status.estimate().unwrap();
        assert_abs_diff_eq!(estimate, 240.0, epsilon = 1e-9);
        assert_abs_diff_eq!(assessment.utilization_pct.unwrap(), 50.0, epsilon = 1e-9);
        assert_eq!(assessment.altitude_bracket, Some((400.0, 500.0)));
        assert_eq!(assessment.inclination_bracket, Some((40.0, 60.0)));
    }

    #[test]
    fn lower_boundary_has_no_bracket() {
        let table = table();
        let evaluator = MissionEvaluator::new(&table);
        let record = MissionRecord::new("edge", Some(400.0), Some(40.0));

        let assessment = evaluator.evaluate(&record).unwrap();
        assert_eq!(assessment.status, CapacityStatus::Estimated(300.0));
        assert_eq!(assessment.altitude_bracket, None);
        assert_eq!(assessment.inclination_bracket, None);
        assert_eq!(assessment.utilization_pct, None);
    }

    #[test]
    fn missing_orbit_is_not_queried() {
        let table = table();
        let evaluator = MissionEvaluator::new(&table);
        let record = MissionRecord::new("unknown", None, Some(45.0)).with_payload(100.0);

        let assessment = evaluator.evaluate(&record).unwrap();
        assert_eq!(assessment.status, CapacityStatus::MissingOrbit);
        assert_eq!(assessment.utilization_pct, None);
    }

    #[test]
    fn out_of_domain_orbit_is_reported() {
        let table = table();
        let evaluator = MissionEvaluator::new(&table);
        let record = MissionRecord::new("low", Some(210.0), Some(45.0)).with_payload(100.0);

        let assessment = evaluator.evaluate(&record).unwrap();
        assert_eq!(assessment.status, CapacityStatus::OutOfBounds);
        assert_eq!(assessment.altitude_bracket, None);
    }

    #[test]
    fn zero_payload_has_no_utilization() {
        let table = table();
        let evaluator = MissionEvaluator::new(&table);
        let record = MissionRecord::new("empty", Some(500.0), Some(40.0)).with_payload(0.0);

        let assessment = evaluator.evaluate(&record).unwrap();
        assert_eq!(assessment.status, CapacityStatus::Estimated(280.0));
        assert_eq!(assessment.utilization_pct, None);
    }

    #[test]
    fn evaluate_all_orders_by_number_and_drops_unnumbered() {
        let table = table();
        let evaluator = MissionEvaluator::new(&table);
        let records = vec![
            MissionRecord::new("unnumbered", None, None),
            MissionRecord::new("third", None, None).with_number(3),
            MissionRecord::new("first", None, None).with_number(1),
        ];

        let assessments = evaluator.evaluate_all(&records).unwrap();
        let names: Vec<&str> = assessments
            .iter()
            .map(|a| a.record.mission_name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "third"]);
    }
}
