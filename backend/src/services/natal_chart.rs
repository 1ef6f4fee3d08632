//! Natal chart computation service.
//!
//! Normalizes the birth time, queries the ephemeris and maps the resulting
//! longitudes onto zodiac signs. Either the whole chart is produced or the
//! call fails; there are no partial results.

use log::debug;

use crate::ephemeris::{Ephemeris, EphemerisError, EphemerisReading};
use crate::error::{ChartError, ChartResult};
use crate::models::{
    sign_of, BirthInput, Body, NatalChartResult, NormalizedInstant, PlanetPosition,
};

/// Compute the natal chart for `input`.
pub fn calculate_natal_chart(
    ephemeris: &Ephemeris,
    input: &BirthInput,
) -> ChartResult<NatalChartResult> {
    input.validate_coordinates()?;

    let instant = NormalizedInstant::parse(
        &input.birth_date,
        input.birth_time.as_deref(),
        input.tz_offset_hours,
    )?;
    let jd = instant.julian_day();
    debug!(
        "Normalized birth time local={} utc={} jd={:.6}",
        instant.local(),
        instant.utc(),
        jd.value()
    );

    let reading = ephemeris.query(jd, input.latitude, input.longitude)?;
    assemble_chart(&reading)
}

/// Build the response from raw ephemeris output.
pub fn assemble_chart(reading: &EphemerisReading) -> ChartResult<NatalChartResult> {
    let sun = required_longitude(reading, Body::Sun)?;
    let moon = required_longitude(reading, Body::Moon)?;

    let planets = reading
        .bodies
        .iter()
        .map(|&(body, lon)| PlanetPosition::new(body, lon))
        .collect();

    Ok(NatalChartResult {
        sun_sign: sign_of(sun),
        moon_sign: sign_of(moon),
        ascendant_sign: sign_of(reading.ascendant),
        ascendant_degree: reading.ascendant,
        planets,
    })
}

fn required_longitude(reading: &EphemerisReading, body: Body) -> ChartResult<f64> {
    reading.longitude_of(body).ok_or_else(|| {
        ChartError::EphemerisComputation(EphemerisError::CalculationFailed {
            body: body.id().to_string(),
            jd: reading.jd.value(),
            message: "body missing from ephemeris reading".to_string(),
        })
    })
}
