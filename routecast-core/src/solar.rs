//! Solar position from waypoint coordinates and time
//!
//! Low-precision NOAA solar-position algorithm: mean longitude, mean
//! anomaly, equation of center, apparent longitude, corrected obliquity,
//! declination, equation of time, hour angle, then elevation via the
//! spherical-astronomy formula. Accurate to well under a degree for the
//! decades around J2000, which is far tighter than the solar-gain term
//! needs.
//!
//! Pure and deterministic: same instant and coordinates, same elevation.
//! Polar day/night need no special-casing - nighttime instants simply
//! yield elevations at or below zero.
//!
//! Internals run in `f64`: Julian dates sit around 2.45e6 where `f32`
//! resolution is worse than a tenth of a day.

use core::f64::consts::PI;

use libm::{asin, cos, fmod, sin, tan};

use crate::time::{seconds_of_day, Timestamp, SECS_PER_DAY};

/// Unix epoch expressed as a Julian date.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// J2000.0 reference epoch as a Julian date.
const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Eccentricity of Earth's orbit (J2000, slowly varying terms dropped).
const EARTH_ORBIT_ECCENTRICITY: f64 = 0.016_708_634;

fn rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

fn deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Solar elevation angle in degrees for a point and instant.
///
/// `latitude_deg` in [-90, 90]; `longitude_deg` east-positive, assumed
/// normalized to [-180, 180] by the caller. Negative results mean the sun
/// is below the horizon.
pub fn solar_elevation(latitude_deg: f32, longitude_deg: f32, timestamp: Timestamp) -> f32 {
    let lat = f64::from(latitude_deg);
    let lon = f64::from(longitude_deg);

    let jd = timestamp as f64 / SECS_PER_DAY as f64 + UNIX_EPOCH_JD;
    let jc = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;

    // Geometric mean longitude and anomaly of the sun (degrees)
    let l0 = fmod(280.46646 + jc * (36000.76983 + jc * 0.0003032), 360.0);
    let m = 357.52911 + jc * (35999.05029 - 0.0001537 * jc);
    let m_rad = rad(m);

    // Equation of center
    let c = sin(m_rad) * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + sin(2.0 * m_rad) * (0.019993 - 0.000101 * jc)
        + sin(3.0 * m_rad) * 0.000289;

    // Apparent longitude, corrected for nutation and aberration
    let true_long = l0 + c;
    let omega = 125.04 - 1934.136 * jc;
    let app_long = true_long - 0.00569 - 0.00478 * sin(rad(omega));

    // Obliquity of the ecliptic, corrected
    let e0 = 23.0 + (26.0 + (21.448 - jc * (46.8150 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0;
    let e = e0 + 0.00256 * cos(rad(omega));

    // Solar declination
    let dec = asin(sin(rad(e)) * sin(rad(app_long)));

    // Equation of time (minutes)
    let y = tan(rad(e / 2.0)) * tan(rad(e / 2.0));
    let eq_time = 4.0
        * deg(
            y * sin(2.0 * rad(l0)) - 2.0 * EARTH_ORBIT_ECCENTRICITY * sin(m_rad)
                + 4.0 * EARTH_ORBIT_ECCENTRICITY * y * sin(m_rad) * cos(2.0 * rad(l0))
                - 0.5 * y * y * sin(4.0 * rad(l0))
                - 1.25 * EARTH_ORBIT_ECCENTRICITY * EARTH_ORBIT_ECCENTRICITY * sin(2.0 * m_rad),
        );

    // True solar time (minutes) and hour angle (degrees). The hour angle
    // only ever feeds a cosine, so wrapping past the day boundary is
    // harmless.
    let time_offset = eq_time + 4.0 * lon;
    let tst = seconds_of_day(timestamp) as f64 / 60.0 + time_offset;
    let ha = tst / 4.0 - 180.0;

    let sin_elev = sin(rad(lat)) * sin(dec) + cos(rad(lat)) * cos(dec) * cos(rad(ha));

    deg(asin(sin_elev)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-20 12:00:00 UTC, a few hours after the March equinox
    const EQUINOX_NOON: Timestamp = 1_710_936_000;
    // 2024-12-21 12:00:00 UTC, December solstice day
    const SOLSTICE_NOON: Timestamp = 1_734_782_400;
    // 2024-12-21 00:00:00 UTC
    const SOLSTICE_MIDNIGHT: Timestamp = 1_734_739_200;

    #[test]
    fn equinox_noon_near_zenith_at_origin() {
        // Declination ~0 and solar noon close to 12:00 UTC at the prime
        // meridian: the sun should stand nearly overhead.
        let elev = solar_elevation(0.0, 0.0, EQUINOX_NOON);
        assert!(elev > 80.0, "got {elev}");
    }

    #[test]
    fn night_is_below_horizon() {
        // Midnight in northern Portugal in December.
        let elev = solar_elevation(41.27, -8.08, SOLSTICE_MIDNIGHT);
        assert!(elev < 0.0, "got {elev}");
    }

    #[test]
    fn winter_noon_stays_low_at_mid_latitude() {
        let elev = solar_elevation(41.27, -8.08, SOLSTICE_NOON);
        // Max possible at 41.27°N on the solstice is ~25°.
        assert!(elev > 15.0 && elev < 30.0, "got {elev}");
    }

    #[test]
    fn polar_night_has_no_daylight() {
        // 80°N at local noon on the December solstice: the sun never rises.
        let elev = solar_elevation(80.0, 0.0, SOLSTICE_NOON);
        assert!(elev < 0.0, "got {elev}");
    }

    #[test]
    fn southern_summer_solstice_high_sun() {
        // Tropic of Capricorn at noon UTC on the December solstice.
        let elev = solar_elevation(-23.44, 0.0, SOLSTICE_NOON);
        assert!(elev > 80.0, "got {elev}");
    }

    #[test]
    fn deterministic() {
        let a = solar_elevation(41.2484, -7.8862, EQUINOX_NOON);
        let b = solar_elevation(41.2484, -7.8862, EQUINOX_NOON);
        assert_eq!(a, b);
    }
}
