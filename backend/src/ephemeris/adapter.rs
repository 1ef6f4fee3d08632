//! Adapter between chart computation and an [`EphemerisOracle`].

use std::path::{Path, PathBuf};

use log::{debug, info};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::error::EphemerisError;
use super::houses::HouseSystem;
use super::swiss::SwissEphemeris;
use super::EphemerisOracle;
use crate::models::{Body, JulianDay, CHART_BODIES};

/// Serializes calls into oracles that are not thread-safe.
pub(crate) static ORACLE_LOCK: Mutex<()> = Mutex::new(());

/// Ephemeris session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    /// Search path for the oracle's auxiliary data files
    pub data_path: PathBuf,
    /// House system used to derive the ascendant
    pub house_system: HouseSystem,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("."),
            house_system: HouseSystem::Placidus,
        }
    }
}

/// Raw oracle output for one moment and place.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisReading {
    /// Moment the reading was taken for
    pub jd: JulianDay,
    /// Body longitudes, in [`CHART_BODIES`] order
    pub bodies: Vec<(Body, f64)>,
    /// Ascendant longitude (first house angle)
    pub ascendant: f64,
}

impl EphemerisReading {
    pub fn longitude_of(&self, body: Body) -> Option<f64> {
        self.bodies
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, lon)| *lon)
    }
}

/// An open ephemeris session.
///
/// The session owns its oracle: the data path is configured once when it
/// opens and the oracle is closed when it is dropped. Share the session
/// (e.g. behind an `Arc`), not the oracle.
pub struct Ephemeris {
    oracle: Box<dyn EphemerisOracle>,
    settings: EphemerisSettings,
}

impl Ephemeris {
    /// Open a session on `oracle`.
    pub fn open(
        oracle: Box<dyn EphemerisOracle>,
        settings: EphemerisSettings,
    ) -> Result<Self, EphemerisError> {
        {
            let _guard = (!oracle.is_thread_safe()).then(|| ORACLE_LOCK.lock());
            oracle.set_data_path(&settings.data_path)?;
        }
        info!(
            "Ephemeris session opened (oracle={}, data_path={}, houses={})",
            oracle.name(),
            settings.data_path.display(),
            settings.house_system
        );
        Ok(Self { oracle, settings })
    }

    /// Open a session on the Swiss Ephemeris.
    pub fn swiss(settings: EphemerisSettings) -> Result<Self, EphemerisError> {
        Self::open(Box::new(SwissEphemeris::new()), settings)
    }

    pub fn data_path(&self) -> &Path {
        &self.settings.data_path
    }

    pub fn house_system(&self) -> HouseSystem {
        self.settings.house_system
    }

    pub fn oracle_name(&self) -> &'static str {
        self.oracle.name()
    }

    /// Longitudes of all chart bodies and the ascendant at `jd` for a place.
    ///
    /// Any oracle failure is returned as-is; nothing is retried since the
    /// computation is deterministic.
    pub fn query(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
    ) -> Result<EphemerisReading, EphemerisError> {
        let _guard = (!self.oracle.is_thread_safe()).then(|| ORACLE_LOCK.lock());

        let bodies = CHART_BODIES
            .iter()
            .map(|&body| {
                let lon = self.oracle.body_longitude(jd, body)?;
                ensure_finite(lon, body.id(), jd)?;
                Ok((body, lon))
            })
            .collect::<Result<Vec<_>, EphemerisError>>()?;

        let houses = self
            .oracle
            .houses(jd, latitude, longitude, self.settings.house_system)?;
        let ascendant = houses.ascendant();
        ensure_finite(ascendant, "ascendant", jd)?;

        debug!(
            "Ephemeris query jd={:.6} lat={} lon={} -> bodies={:?} asc={:.6} mc={:.6}",
            jd.value(),
            latitude,
            longitude,
            bodies,
            ascendant,
            houses.midheaven()
        );

        Ok(EphemerisReading {
            jd,
            bodies,
            ascendant,
        })
    }
}

impl Drop for Ephemeris {
    fn drop(&mut self) {
        let _guard = (!self.oracle.is_thread_safe()).then(|| ORACLE_LOCK.lock());
        self.oracle.close();
        info!("Ephemeris session closed (oracle={})", self.oracle.name());
    }
}

impl std::fmt::Debug for Ephemeris {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ephemeris")
            .field("oracle", &self.oracle.name())
            .field("settings", &self.settings)
            .finish()
    }
}

fn ensure_finite(value: f64, what: &str, jd: JulianDay) -> Result<(), EphemerisError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EphemerisError::CalculationFailed {
            body: what.to_string(),
            jd: jd.value(),
            message: format!("oracle returned non-finite longitude {}", value),
        })
    }
}
