use std::{error::Error, fmt, io, num::ParseFloatError};

/// Axis of the performance table a query coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Altitude,
    Inclination,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Altitude => write!(f, "altitude"),
            Axis::Inclination => write!(f, "inclination"),
        }
    }
}

#[derive(Debug)]
pub enum CapacityErrors {
    IoError(std::io::Error),
    CsvError(csv::Error),
    ParseFloatError(ParseFloatError),
    MalformedTableHeader(String),
    InsufficientGridPoints(usize),
    NonAscendingGrid {
        index: usize,
        previous: f64,
        value: f64,
    },
    CurveLengthMismatch {
        inclination: f64,
        expected: usize,
        found: usize,
    },
    InsufficientInclinations(usize),
    DuplicateInclination(f64),
    NonFiniteValue(String),
    OutOfBounds {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CapacityErrors {
    /// True for a malformed performance table. These are never absorbed.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CapacityErrors::InsufficientGridPoints(_)
                | CapacityErrors::NonAscendingGrid { .. }
                | CapacityErrors::CurveLengthMismatch { .. }
                | CapacityErrors::InsufficientInclinations(_)
                | CapacityErrors::DuplicateInclination(_)
                | CapacityErrors::NonFiniteValue(_)
        )
    }

    /// True when a query coordinate falls outside the tabulated domain.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, CapacityErrors::OutOfBounds { .. })
    }
}

impl fmt::Display for CapacityErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityErrors::IoError(e) => write!(f, "I/O error: {}", e),
            CapacityErrors::CsvError(e) => write!(f, "CSV parsing error: {}", e),
            CapacityErrors::ParseFloatError(e) => write!(f, "Float parsing error: {}", e),
            CapacityErrors::MalformedTableHeader(h) => {
                write!(f, "Malformed performance table header: {}", h)
            }
            CapacityErrors::InsufficientGridPoints(n) => {
                write!(f, "Altitude grid needs at least 2 points, got {}", n)
            }
            CapacityErrors::NonAscendingGrid {
                index,
                previous,
                value,
            } => write!(
                f,
                "Altitude grid is not strictly ascending at index {}: {} after {}",
                index, value, previous
            ),
            CapacityErrors::CurveLengthMismatch {
                inclination,
                expected,
                found,
            } => write!(
                f,
                "Curve for inclination {}° has {} values, expected {}",
                inclination, found, expected
            ),
            CapacityErrors::InsufficientInclinations(n) => {
                write!(f, "At least 2 distinct inclinations required, got {}", n)
            }
            CapacityErrors::DuplicateInclination(inc) => {
                write!(f, "Inclination {}° is tabulated more than once", inc)
            }
            CapacityErrors::NonFiniteValue(what) => write!(f, "Non-finite value in {}", what),
            CapacityErrors::OutOfBounds {
                axis,
                value,
                min,
                max,
            } => write!(
                f,
                "Requested {} {} is outside the tabulated range [{}, {}]",
                axis, value, min, max
            ),
        }
    }
}

impl Error for CapacityErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CapacityErrors::IoError(e) => Some(e),
            CapacityErrors::CsvError(e) => Some(e),
            CapacityErrors::ParseFloatError(e) => Some(e),
            _ => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for CapacityErrors {
    fn from(err: io::Error) -> Self {
        CapacityErrors::IoError(err)
    }
}

impl From<csv::Error> for CapacityErrors {
    fn from(err: csv::Error) -> Self {
        CapacityErrors::CsvError(err)
    }
}

impl From<ParseFloatError> for CapacityErrors {
    fn from(err: ParseFloatError) -> Self {
        CapacityErrors::ParseFloatError(err)
    }
}
