//! The twelve 30° zodiac bands and longitude-to-sign mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tropical zodiac sign. Serialized as its localized (Russian) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in ecliptic order, starting at 0° Aries.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Width of every sign band in degrees.
    pub const SPAN_DEGREES: f64 = 30.0;

    /// Sign at a band index, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position of the sign in ecliptic order (Aries = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Ecliptic longitude where the band begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * Self::SPAN_DEGREES
    }

    /// Localized display name.
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Овен",
            ZodiacSign::Taurus => "Телец",
            ZodiacSign::Gemini => "Близнецы",
            ZodiacSign::Cancer => "Рак",
            ZodiacSign::Leo => "Лев",
            ZodiacSign::Virgo => "Дева",
            ZodiacSign::Libra => "Весы",
            ZodiacSign::Scorpio => "Скорпион",
            ZodiacSign::Sagittarius => "Стрелец",
            ZodiacSign::Capricorn => "Козерог",
            ZodiacSign::Aquarius => "Водолей",
            ZodiacSign::Pisces => "Рыбы",
        }
    }

    /// Look a sign up by its localized name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sign| sign.name() == name)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ZodiacSign> for &'static str {
    fn from(sign: ZodiacSign) -> Self {
        sign.name()
    }
}

impl TryFrom<String> for ZodiacSign {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("Unknown zodiac sign: {}", value))
    }
}

/// Map an ecliptic longitude in degrees to its zodiac sign.
///
/// Longitudes outside [0, 360) are accepted: the band index uses floored
/// division and a Euclidean remainder, so -10° lands in Pisces and 370° in
/// Aries. Non-finite input falls back to Aries.
pub fn sign_of(longitude_degrees: f64) -> ZodiacSign {
    let band = (longitude_degrees / ZodiacSign::SPAN_DEGREES)
        .floor()
        .rem_euclid(ZodiacSign::ALL.len() as f64);
    ZodiacSign::from_index(band as usize)
}
