use super::table::PerformanceTable;
use crate::errors::CapacityErrors;
use csv::ReaderBuilder;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

pub const ALTITUDE_COLUMN: &str = "altitude_km";

/// Loads a performance table from a CSV file.
///
/// The header is `altitude_km` followed by one column per inclination (deg);
/// each row holds the payload masses (kg) at one altitude.
pub fn load_table(path: &Path) -> Result<PerformanceTable, CapacityErrors> {
    let data = fs::read(path)?;
    let table = read_table(data.as_slice())?;
    info!(
        "Loaded performance table from {:?} ({} altitudes, {} inclinations)",
        path,
        table.altitude_grid().len(),
        table.inclinations().len()
    );
    Ok(table)
}

/// Parses in-memory CSV performance data.
pub fn read_table<R: io::Read>(reader: R) -> Result<PerformanceTable, CapacityErrors> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    match headers.get(0) {
        Some(first) if first.eq_ignore_ascii_case(ALTITUDE_COLUMN) => {}
        _ => {
            return Err(CapacityErrors::MalformedTableHeader(format!(
                "first column must be `{}`",
                ALTITUDE_COLUMN
            )))
        }
    }

    let inclinations = headers
        .iter()
        .skip(1)
        .map(|h| {
            h.trim_end_matches('°').parse::<f64>().map_err(|_| {
                CapacityErrors::MalformedTableHeader(format!("`{}` is not an inclination", h))
            })
        })
        .collect::<Result<Vec<f64>, CapacityErrors>>()?;

    let mut altitudes = Vec::new();
    let mut curves: Vec<Vec<f64>> = vec![Vec::new(); inclinations.len()];

    for result in rdr.records() {
        let record = result?;
        altitudes.push(record[0].parse::<f64>()?);
        for (curve, cell) in curves.iter_mut().zip(record.iter().skip(1)) {
            curve.push(cell.parse::<f64>()?);
        }
    }

    PerformanceTable::new(altitudes, inclinations.into_iter().zip(curves))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
altitude_km,40,60
400,270.0,249.0
450,266.6,245.9
500,263.8,243.0
";

    #[test]
    fn reads_columns_as_curves() {
        let table = read_table(CSV.as_bytes()).unwrap();
        assert_eq!(table.altitude_grid(), &[400.0, 450.0, 500.0]);
        assert_eq!(table.inclinations(), &[40.0, 60.0]);
        assert_eq!(table.curve(60.0).unwrap(), &[249.0, 245.9, 243.0]);
    }

    #[test]
    fn rejects_missing_altitude_column() {
        let err = read_table("alt,40,60\n400,1,2\n450,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CapacityErrors::MalformedTableHeader(_)));
    }

    #[test]
    fn rejects_non_numeric_inclination_header() {
        let err = read_table("altitude_km,low,high\n400,1,2\n450,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CapacityErrors::MalformedTableHeader(_)));
    }

    #[test]
    fn table_validation_still_applies() {
        let err = read_table("altitude_km,40,60\n450,1,2\n400,1,2\n".as_bytes()).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let err = read_table("altitude_km,40,60\n400,1\n450,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CapacityErrors::CsvError(_)));
    }
}
