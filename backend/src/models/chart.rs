//! Natal chart input and output values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::zodiac::{sign_of, ZodiacSign};
use crate::error::ChartError;

/// Celestial bodies the ephemeris can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Localized display name.
    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Солнце",
            Body::Moon => "Луна",
        }
    }

    /// Stable identifier used in logs and error messages.
    pub fn id(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Bodies reported in every chart, in response order.
///
/// Adding a body here (and teaching the oracle about it) is enough to have it
/// show up in `planets`.
pub const CHART_BODIES: &[Body] = &[Body::Sun, Body::Moon];

/// Birth data as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Free-form label, not used in computation
    #[serde(default)]
    pub name: Option<String>,
    /// Birth date, `YYYY-MM-DD`
    pub birth_date: String,
    /// Local clock time, `HH:MM`; absent means unknown
    #[serde(default)]
    pub birth_time: Option<String>,
    /// Informational only
    #[serde(default)]
    pub time_unknown: bool,
    /// Geographic latitude in degrees, north positive
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive
    pub longitude: f64,
    /// Offset from UTC in hours at the moment of birth
    #[serde(default)]
    pub tz_offset_hours: f64,
}

impl BirthInput {
    pub fn new(birth_date: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            birth_date: birth_date.into(),
            birth_time: None,
            time_unknown: false,
            latitude,
            longitude,
            tz_offset_hours: 0.0,
        }
    }

    pub fn with_time(mut self, birth_time: impl Into<String>) -> Self {
        self.birth_time = Some(birth_time.into());
        self
    }

    pub fn with_tz_offset(mut self, hours: f64) -> Self {
        self.tz_offset_hours = hours;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check that the coordinates are finite and on the globe.
    pub fn validate_coordinates(&self) -> Result<(), ChartError> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(ChartError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// One body's place in the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub name: String,
    pub sign: ZodiacSign,
    pub longitude: f64,
}

impl PlanetPosition {
    pub fn new(body: Body, longitude: f64) -> Self {
        Self {
            name: body.name().to_string(),
            sign: sign_of(longitude),
            longitude,
        }
    }
}

/// Computed natal chart. Serializes directly to the API response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChartResult {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub ascendant_sign: ZodiacSign,
    pub ascendant_degree: f64,
    pub planets: Vec<PlanetPosition>,
}
