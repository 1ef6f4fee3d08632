//! # Natal Chart Backend
//!
//! Computes a minimal natal chart (Sun sign, Moon sign and ascendant) from
//! birth data and serves it over a small REST API.
//!
//! ## Features
//!
//! - **Time Handling**: Local birth date/time plus UTC offset to Julian Day (UT)
//! - **Ephemeris Access**: Oracle session with Sun/Moon longitudes and Placidus houses
//! - **Sign Mapping**: Ecliptic longitude to one of the twelve tropical signs
//! - **HTTP API**: `POST /api/natal-chart/calculate` and `GET /health`
//!
//! ## Architecture
//!
//! - [`models`]: Birth input, chart result, zodiac signs and time normalization
//! - [`ephemeris`]: Oracle trait, Swiss Ephemeris oracle, house systems and session adapter
//! - [`services`]: Chart computation pipeline
//! - [`config`]: TOML file and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ```no_run
//! use natal_chart::ephemeris::{Ephemeris, EphemerisSettings};
//! use natal_chart::models::BirthInput;
//! use natal_chart::services::calculate_natal_chart;
//!
//! let ephemeris = Ephemeris::swiss(EphemerisSettings::default())?;
//! let input = BirthInput::new("2000-01-01", 55.75, 37.62)
//!     .with_time("15:00")
//!     .with_tz_offset(3.0);
//! let chart = calculate_natal_chart(&ephemeris, &input)?;
//! println!("{} / {} / {}", chart.sun_sign, chart.moon_sign, chart.ascendant_sign);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod ephemeris;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ChartError, ChartResult};
