//! Ephemeris access for chart computation.
//!
//! The ephemeris itself is treated as an opaque oracle behind
//! [`EphemerisOracle`]: given a Universal Time Julian Day it answers with
//! ecliptic longitudes for bodies and with house cusps/angles for a place.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Ephemeris (adapter.rs)                                   │
//! │  - data path configured once per session                  │
//! │  - global lock for oracles that are not thread-safe       │
//! │  - one query -> body longitudes + ascendant               │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  EphemerisOracle (trait)                                  │
//! │  - SwissEphemeris: swisseph bindings (calc_ut, houses_ex) │
//! │  - houses.rs: house system selector and positions         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod adapter;
pub mod error;
pub mod houses;
pub mod swiss;

pub use adapter::{Ephemeris, EphemerisReading, EphemerisSettings};
pub use error::EphemerisError;
pub use houses::{HousePositions, HouseSystem};
pub use swiss::SwissEphemeris;

use std::path::Path;

use crate::models::{Body, JulianDay};

/// An ephemeris backend.
///
/// Longitudes are geocentric apparent tropical ecliptic longitudes in degrees,
/// expected in [0, 360). Implementations report their own failures (time out
/// of range, house system undefined at a latitude) as [`EphemerisError`].
pub trait EphemerisOracle: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Whether concurrent calls are safe. When `false` the adapter serializes
    /// every call behind a single process-wide lock.
    fn is_thread_safe(&self) -> bool {
        false
    }

    /// Point the backend at its auxiliary data files. Must be idempotent.
    fn set_data_path(&self, path: &Path) -> Result<(), EphemerisError>;

    /// Release backend resources. Called once when the owning session drops.
    fn close(&self) {}

    /// Ecliptic longitude of `body` at `jd_ut`.
    fn body_longitude(&self, jd_ut: JulianDay, body: Body) -> Result<f64, EphemerisError>;

    /// House cusps and angles for a place; angles start with the ascendant.
    fn houses(
        &self,
        jd_ut: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError>;
}
