pub mod evaluator;
pub mod loader;
pub mod record;

pub use evaluator::{CapacityStatus, MissionAssessment, MissionEvaluator};
pub use record::MissionRecord;
