//! House systems and the positions an oracle reports for them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EphemerisError;

/// Supported house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
}

impl HouseSystem {
    /// Single-letter selector passed to the ephemeris library.
    pub fn code(self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
        }
    }

    /// Whether cusps exist at `latitude` for an ecliptic of the given
    /// obliquity. Placidus breaks down inside the polar circles.
    pub fn is_defined_at(self, latitude: f64, obliquity: f64) -> bool {
        match self {
            HouseSystem::Placidus => latitude.abs() < 90.0 - obliquity,
        }
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placidus" | "p" => Ok(Self::Placidus),
            _ => Err(EphemerisError::InvalidHouseSystem(s.to_string())),
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HouseSystem::Placidus => f.write_str("Placidus"),
        }
    }
}

/// House cusps and angles for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePositions {
    pub system: HouseSystem,
    /// Cusps of houses 1..=12, index 0 is the first house
    pub cusps: [f64; 12],
    /// Ascendant, then MC
    pub angles: [f64; 2],
}

impl HousePositions {
    pub fn ascendant(&self) -> f64 {
        self.angles[0]
    }

    pub fn midheaven(&self) -> f64 {
        self.angles[1]
    }

    /// Whether every cusp and angle is a finite number.
    pub fn is_finite(&self) -> bool {
        self.cusps.iter().chain(self.angles.iter()).all(|v| v.is_finite())
    }
}

/// Reduce an angle to [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4377;

    #[test]
    fn test_house_system_parsing() {
        assert_eq!("placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!("P".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!(" Placidus ".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert!(matches!(
            "koch".parse::<HouseSystem>(),
            Err(EphemerisError::InvalidHouseSystem(_))
        ));
    }

    #[test]
    fn test_house_system_code() {
        assert_eq!(HouseSystem::Placidus.code(), b'P');
        assert_eq!(HouseSystem::default(), HouseSystem::Placidus);
        assert_eq!(HouseSystem::Placidus.to_string(), "Placidus");
    }

    #[test]
    fn test_placidus_defined_outside_polar_circles() {
        assert!(HouseSystem::Placidus.is_defined_at(55.75, EPS));
        assert!(HouseSystem::Placidus.is_defined_at(-66.0, EPS));
        assert!(!HouseSystem::Placidus.is_defined_at(66.6, EPS));
        assert!(!HouseSystem::Placidus.is_defined_at(-89.9, EPS));
        assert!(!HouseSystem::Placidus.is_defined_at(90.0 - EPS, EPS));
    }

    #[test]
    fn test_house_positions_accessors() {
        let houses = HousePositions {
            system: HouseSystem::Placidus,
            cusps: [0.0; 12],
            angles: [87.78, 315.62],
        };
        assert_eq!(houses.ascendant(), 87.78);
        assert_eq!(houses.midheaven(), 315.62);
        assert!(houses.is_finite());

        let broken = HousePositions {
            angles: [f64::NAN, 0.0],
            ..houses
        };
        assert!(!broken.is_finite());
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.5), 5.5);
        assert_eq!(normalize_degrees(-1e-17), 0.0);
    }
}
