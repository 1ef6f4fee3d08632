//! Swiss Ephemeris oracle.
//!
//! Thin layer over the `swisseph` bindings. When no `.se1` data files are
//! found under the data path the library falls back to its built-in Moshier
//! theory, which covers years -3000..3000.
//!
//! The C library keeps its configuration in process globals and is not
//! thread-safe, so this oracle reports `is_thread_safe() == false` and the
//! adapter serializes every call.

use std::path::{Path, PathBuf};

use log::{debug, info};
use parking_lot::Mutex;
use swisseph::swe;
use swisseph::{AscMc, Cusp};

use super::error::EphemerisError;
use super::houses::{normalize_degrees, HousePositions, HouseSystem};
use super::EphemerisOracle;
use crate::models::{Body, JulianDay};

const SE_SUN: u32 = 0;
const SE_MOON: u32 = 1;
/// Pseudo-body returning nutation and obliquity; `out[0]` is the true obliquity.
const SE_ECL_NUT: u32 = -1i32 as u32;

const FLG_SWIEPH: u32 = 2;
const FLG_SPEED: u32 = 256;

/// Library defaults: Swiss Ephemeris files, geocentric apparent positions.
const BODY_FLAGS: u32 = FLG_SWIEPH | FLG_SPEED;

fn planet_id(body: Body) -> u32 {
    match body {
        Body::Sun => SE_SUN,
        Body::Moon => SE_MOON,
    }
}

/// Oracle backed by the Swiss Ephemeris.
#[derive(Debug, Default)]
pub struct SwissEphemeris {
    data_path: Mutex<Option<PathBuf>>,
}

impl SwissEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data path last handed to the library, if any.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_path.lock().clone()
    }

    fn true_obliquity(&self, jd_ut: JulianDay) -> Result<f64, EphemerisError> {
        let result = swe::calc_ut(jd_ut.value(), SE_ECL_NUT, 0).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: "ecliptic".to_string(),
                jd: jd_ut.value(),
                message: failure_message(jd_ut, e),
            }
        })?;
        Ok(result.out[0])
    }
}

impl EphemerisOracle for SwissEphemeris {
    fn name(&self) -> &'static str {
        "swisseph"
    }

    fn set_data_path(&self, path: &Path) -> Result<(), EphemerisError> {
        let mut current = self.data_path.lock();
        if current.as_deref() == Some(path) {
            return Ok(());
        }

        if !path.is_dir() {
            return Err(EphemerisError::DataPath {
                path: path.display().to_string(),
                message: "not a directory".to_string(),
            });
        }
        let path_str = path.to_str().ok_or_else(|| EphemerisError::DataPath {
            path: path.display().to_string(),
            message: "path is not valid UTF-8".to_string(),
        })?;

        swe::set_ephe_path(path_str);
        info!("Swiss Ephemeris data path set to {}", path_str);
        *current = Some(path.to_path_buf());
        Ok(())
    }

    fn close(&self) {
        if self.data_path.lock().take().is_some() {
            swe::close();
            debug!("Swiss Ephemeris closed");
        }
    }

    fn body_longitude(&self, jd_ut: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        let result = swe::calc_ut(jd_ut.value(), planet_id(body), BODY_FLAGS).map_err(|e| {
            EphemerisError::CalculationFailed {
                body: body.id().to_string(),
                jd: jd_ut.value(),
                message: failure_message(jd_ut, e),
            }
        })?;
        Ok(normalize_degrees(result.out[0]))
    }

    fn houses(
        &self,
        jd_ut: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HousePositions, EphemerisError> {
        // The library silently switches to Porphyry where the system breaks down
        let obliquity = self.true_obliquity(jd_ut)?;
        if !system.is_defined_at(latitude, obliquity) {
            return Err(EphemerisError::HouseSystemUndefined { system, latitude });
        }

        let flags: i32 = 0;
        let (c, a) = swe::houses_ex(
            jd_ut.value(),
            flags,
            latitude,
            longitude,
            system.code() as i32,
        );
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let houses = HousePositions {
            system,
            cusps: [
                cusps.first,
                cusps.second,
                cusps.third,
                cusps.fourth,
                cusps.fifth,
                cusps.sixth,
                cusps.seventh,
                cusps.eighth,
                cusps.ninth,
                cusps.tenth,
                cusps.eleventh,
                cusps.twelfth,
            ]
            .map(normalize_degrees),
            angles: [
                normalize_degrees(ascmc.ascendant),
                normalize_degrees(ascmc.mc),
            ],
        };

        if !houses.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "non-finite {} cusps at {} (lat={}, lon={})",
                    system,
                    describe_instant(jd_ut),
                    latitude,
                    longitude
                ),
            });
        }
        Ok(houses)
    }
}

fn failure_message(jd: JulianDay, error: impl std::fmt::Display) -> String {
    format!("Swiss Ephemeris error at {}: {}", describe_instant(jd), error)
}

/// UTC rendering of `jd` for error messages, falling back to the raw day count.
fn describe_instant(jd: JulianDay) -> String {
    jd.to_datetime()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("JD {:.6}", jd.value()))
}
