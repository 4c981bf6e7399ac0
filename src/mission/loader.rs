use super::record::MissionRecord;
use crate::errors::CapacityErrors;
use csv::ReaderBuilder;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Loads mission records from a CSV file.
pub fn load_missions(path: &Path) -> Result<Vec<MissionRecord>, CapacityErrors> {
    let data = fs::read(path)?;
    let missions = read_missions(data.as_slice())?;
    info!("Loaded {} missions from {:?}", missions.len(), path);
    Ok(missions)
}

/// Parses in-memory mission CSV data. Rows with no cells at all are skipped.
pub fn read_missions<R: io::Read>(reader: R) -> Result<Vec<MissionRecord>, CapacityErrors> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut missions = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let mission: MissionRecord = record.deserialize(Some(&headers))?;
        if mission.orbit().is_none() {
            warn!(
                "Mission {:?} ({}) has no complete orbit",
                mission.mission_number, mission.mission_name
            );
        }
        missions.push(mission);
    }

    Ok(missions)
}
