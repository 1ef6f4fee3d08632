//! Error types for natal chart computation.

use thiserror::Error;

use crate::ephemeris::EphemerisError;

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Everything that can stop a chart from being computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// `birth_date` is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid birth date '{0}': expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// `birth_time` is not a valid `HH:MM` clock time
    #[error("Invalid birth time '{0}': expected HH:MM")]
    InvalidTimeFormat(String),

    /// UTC offset is not finite or not strictly within ±24 hours
    #[error("Invalid timezone offset {0} hours: expected a value between -24 and 24")]
    InvalidTimezoneOffset(f64),

    /// Coordinates are not finite or off the globe
    #[error("Invalid coordinates latitude={latitude}, longitude={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Input was well-formed but the ephemeris could not compute a result
    #[error("Ephemeris computation failed: {0}")]
    EphemerisComputation(#[from] EphemerisError),
}

impl ChartError {
    /// Whether the caller sent bad input (as opposed to an unsolvable computation).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ChartError::EphemerisComputation(_))
    }

    /// Stable error code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            ChartError::InvalidDateFormat(_) => "INVALID_DATE_FORMAT",
            ChartError::InvalidTimeFormat(_) => "INVALID_TIME_FORMAT",
            ChartError::InvalidTimezoneOffset(_) => "INVALID_TZ_OFFSET",
            ChartError::InvalidCoordinates { .. } => "INVALID_COORDINATES",
            ChartError::EphemerisComputation(_) => "EPHEMERIS_COMPUTATION_ERROR",
        }
    }
}
