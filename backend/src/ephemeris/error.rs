//! Errors raised by the ephemeris oracle and its adapter.

use thiserror::Error;

use super::houses::HouseSystem;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("{system} houses are undefined at latitude {latitude}")]
    HouseSystemUndefined { system: HouseSystem, latitude: f64 },

    #[error("Failed to calculate position for {body} at JD {jd}: {message}")]
    CalculationFailed {
        body: String,
        jd: f64,
        message: String,
    },

    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },

    #[error("Invalid house system: {0}. Valid systems: placidus")]
    InvalidHouseSystem(String),

    #[error("Ephemeris data path {path} is not usable: {message}")]
    DataPath { path: String, message: String },
}
