use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

const DATE_FORMATS: [&str; 2] = ["%m/%d/%y", "%Y-%m-%d"];

/// One flown mission, as supplied by the mission dataset.
///
/// Every orbital quantity is optional; a missing altitude or inclination means
/// no capacity query can be made for the mission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissionRecord {
    /// `None` when the cell is empty or not a whole number.
    #[serde(default, deserialize_with = "deserialize_mission_number")]
    pub mission_number: Option<u32>,
    #[serde(default)]
    pub mission_name: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, rename = "orbit_altitude_km")]
    pub altitude_km: Option<f64>,
    #[serde(default, rename = "orbital_inclination_deg")]
    pub inclination_deg: Option<f64>,
    #[serde(default)]
    pub payload_mass_kg: Option<f64>,
}

impl MissionRecord {
    pub fn new(name: &str, altitude_km: Option<f64>, inclination_deg: Option<f64>) -> Self {
        Self {
            mission_number: None,
            mission_name: name.to_string(),
            date: None,
            altitude_km,
            inclination_deg,
            payload_mass_kg: None,
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.mission_number = Some(number);
        self
    }

    pub fn with_payload(mut self, payload_mass_kg: f64) -> Self {
        self.payload_mass_kg = Some(payload_mass_kg);
        self
    }

    /// The (altitude, inclination) pair, when both are known.
    pub fn orbit(&self) -> Option<(f64, f64)> {
        self.altitude_km.zip(self.inclination_deg)
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
}

/// Accepts integers and integral floats such as `1.0`.
pub fn parse_mission_number(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
}

fn deserialize_mission_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_mission_number))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date `{}`", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("01/21/18" => Some(NaiveDate::from_ymd_opt(2018, 1, 21).unwrap()); "us short year")]
    #[test_case("2024-03-15" => Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()); "iso")]
    #[test_case("last tuesday" => None; "garbage")]
    fn parses_dates(raw: &str) -> Option<NaiveDate> {
        parse_date(raw)
    }

    #[test_case("7" => Some(7); "integer")]
    #[test_case("1.0" => Some(1); "integral float")]
    #[test_case(" 12 " => Some(12); "padded")]
    #[test_case("2.5" => None; "fractional")]
    #[test_case("NaN" => None; "not a number")]
    #[test_case("-3" => None; "negative")]
    #[test_case("" => None; "empty")]
    fn parses_mission_numbers(raw: &str) -> Option<u32> {
        parse_mission_number(raw)
    }

    #[test]
    fn orbit_requires_both_coordinates() {
        assert_eq!(
            MissionRecord::new("a", Some(500.0), Some(45.0)).orbit(),
            Some((500.0, 45.0))
        );
        assert_eq!(MissionRecord::new("b", Some(500.0), None).orbit(), None);
        assert_eq!(MissionRecord::new("c", None, Some(45.0)).orbit(), None);
    }
}
