//! Waypoint profiles and weather samples
//!
//! Input value types for the model. A [`WaypointProfile`] is defined once
//! at configuration time and never mutated. A [`WeatherSample`] is a
//! read-only snapshot of the hourly feed: the model never edits one in
//! place, it derives an altitude-adjusted copy via
//! [`AltitudeAdjustment::apply`] before any computation. That keeps the
//! exposure model and the phase classifier consuming the exact same
//! adjusted values, and keeps every call referentially transparent.
//!
//! Missing upstream fields are the data-retrieval collaborator's problem:
//! it defaults them (irradiance to 0, freezing level to the 9999 m
//! sentinel) before samples reach this crate.

use crate::constants::physics::{
    ALTITUDE_TEMP_OFFSET_C, HIGH_ALTITUDE_THRESHOLD_M, RIDGE_WIND_FACTOR_DEFAULT,
};
use crate::errors::{ModelError, ModelResult};
use crate::time::Timestamp;
use crate::traits::Validatable;
use crate::weathercode::ConditionLabel;

/// Terrain category of a waypoint, for display and route context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainCategory {
    /// Valley floor or plateau.
    Flat,
    /// Sustained ascent.
    Climb,
    /// Sustained descent.
    Descend,
}

impl TerrainCategory {
    /// Uppercase card label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Flat => "FLAT",
            Self::Climb => "CLIMB",
            Self::Descend => "DESCEND",
        }
    }
}

/// Static description of a route waypoint. Immutable after configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaypointProfile {
    /// Stable identity used for ordering evaluation output.
    pub id: u16,
    /// Display name.
    pub name: &'static str,
    /// Latitude in degrees, north-positive.
    pub latitude: f32,
    /// Longitude in degrees, east-positive.
    pub longitude: f32,
    /// Altitude above sea level in meters.
    pub altitude_m: f32,
    /// Terrain category at the waypoint.
    pub terrain: TerrainCategory,
}

/// One hour of weather-model fields for a waypoint. Read-only value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherSample {
    /// Air temperature (°C).
    pub temp_c: f32,
    /// Wind speed (km/h).
    pub wind_kmh: f32,
    /// Relative humidity (0-100 %).
    pub humidity_pct: f32,
    /// Precipitation rate (mm/h).
    pub precip_mm_h: f32,
    /// Snowfall rate (cm/h), carried for display only.
    pub snowfall_cm_h: f32,
    /// Global tilted irradiance (W/m²).
    pub irradiance_w_m2: f32,
    /// Reported freezing-level height (m); ~9999 means unknown.
    pub freezing_level_m: f32,
    /// Upstream categorical weather code, cosmetic labeling only.
    pub weather_code: u16,
    /// Valid time of the sample, unix seconds UTC.
    pub timestamp: Timestamp,
}

impl WeatherSample {
    /// Check the caller contract: every field finite, humidity within
    /// [0, 100], and no negative wind/precipitation/irradiance.
    ///
    /// This is the only error path in the model. Physical edge cases
    /// (night, calm air, dry hours) are regular branches downstream.
    pub fn check(&self) -> ModelResult<()> {
        for (name, value) in [
            ("temp_c", self.temp_c),
            ("wind_kmh", self.wind_kmh),
            ("humidity_pct", self.humidity_pct),
            ("precip_mm_h", self.precip_mm_h),
            ("snowfall_cm_h", self.snowfall_cm_h),
            ("irradiance_w_m2", self.irradiance_w_m2),
            ("freezing_level_m", self.freezing_level_m),
        ] {
            if !value.is_valid() {
                return Err(ModelError::InvalidInput { field: name });
            }
        }

        if !(0.0..=100.0).contains(&self.humidity_pct) {
            return Err(ModelError::OutOfRange {
                field: "humidity_pct",
                value: self.humidity_pct,
                min: 0.0,
                max: 100.0,
            });
        }
        for (name, value) in [
            ("wind_kmh", self.wind_kmh),
            ("precip_mm_h", self.precip_mm_h),
            ("irradiance_w_m2", self.irradiance_w_m2),
        ] {
            if value < 0.0 {
                return Err(ModelError::OutOfRange {
                    field: name,
                    value,
                    min: 0.0,
                    max: f32::MAX,
                });
            }
        }
        Ok(())
    }

    /// Cosmetic condition label for this sample's weather code.
    pub const fn condition(&self) -> ConditionLabel {
        ConditionLabel::from_code(self.weather_code)
    }
}

/// High-altitude correction applied to raw samples before the model runs.
///
/// Forecast grids reference valley conditions; exposed ridgelines see
/// faster wind and colder air. Above the threshold altitude, wind is
/// multiplied by the ridge factor and temperature reduced by a fixed
/// offset. The factor is a tuning constant (field calibrations span
/// 1.35-1.60), not a physical law.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AltitudeAdjustment {
    /// Altitude above which the correction applies (m).
    pub threshold_m: f32,
    /// Wind multiplier for exposed waypoints.
    pub wind_factor: f32,
    /// Temperature reduction for exposed waypoints (°C).
    pub temp_offset_c: f32,
}

impl Default for AltitudeAdjustment {
    fn default() -> Self {
        Self {
            threshold_m: HIGH_ALTITUDE_THRESHOLD_M,
            wind_factor: RIDGE_WIND_FACTOR_DEFAULT,
            temp_offset_c: ALTITUDE_TEMP_OFFSET_C,
        }
    }
}

impl AltitudeAdjustment {
    /// Adjustment with a custom ridge wind factor.
    pub fn with_wind_factor(wind_factor: f32) -> Self {
        Self {
            wind_factor,
            ..Self::default()
        }
    }

    /// Derive the adjusted copy of a sample for a waypoint altitude.
    ///
    /// Returns a fresh value; the input sample is never mutated. Below
    /// the threshold the copy is identical. Callers must apply this
    /// exactly once per sample, upstream of both the exposure model and
    /// the phase classifier.
    pub fn apply(&self, sample: &WeatherSample, altitude_m: f32) -> WeatherSample {
        let mut adjusted = *sample;
        if altitude_m > self.threshold_m {
            adjusted.wind_kmh = sample.wind_kmh * self.wind_factor;
            adjusted.temp_c = sample.temp_c - self.temp_offset_c;
        }
        adjusted
    }
}

/// The three forecast horizons the model evaluates: now, +3 h, +6 h.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizonSamples {
    /// Current hour.
    pub now: WeatherSample,
    /// Three hours ahead.
    pub in_3h: WeatherSample,
    /// Six hours ahead.
    pub in_6h: WeatherSample,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::physics::FREEZING_LEVEL_SENTINEL_M;

    fn sample() -> WeatherSample {
        WeatherSample {
            temp_c: 6.0,
            wind_kmh: 20.0,
            humidity_pct: 75.0,
            precip_mm_h: 0.0,
            snowfall_cm_h: 0.0,
            irradiance_w_m2: 120.0,
            freezing_level_m: FREEZING_LEVEL_SENTINEL_M,
            weather_code: 2,
            timestamp: 1_734_768_000,
        }
    }

    #[test]
    fn well_formed_sample_passes() {
        assert!(sample().check().is_ok());
    }

    #[test]
    fn non_finite_field_rejected() {
        let mut s = sample();
        s.temp_c = f32::NAN;
        assert!(matches!(
            s.check(),
            Err(ModelError::InvalidInput { field: "temp_c" })
        ));
    }

    #[test]
    fn out_of_range_humidity_rejected() {
        let mut s = sample();
        s.humidity_pct = 130.0;
        assert!(matches!(s.check(), Err(ModelError::OutOfRange { .. })));

        s.humidity_pct = -1.0;
        assert!(matches!(s.check(), Err(ModelError::OutOfRange { .. })));
    }

    #[test]
    fn negative_irradiance_rejected() {
        let mut s = sample();
        s.irradiance_w_m2 = -5.0;
        assert!(matches!(s.check(), Err(ModelError::OutOfRange { .. })));
    }

    #[test]
    fn adjustment_above_threshold() {
        let adj = AltitudeAdjustment::default();
        let raw = sample();
        let high = adj.apply(&raw, 1415.0);

        assert_eq!(high.wind_kmh, 20.0 * 1.35);
        assert_eq!(high.temp_c, 4.0);
        // Everything else is untouched
        assert_eq!(high.humidity_pct, raw.humidity_pct);
        assert_eq!(high.freezing_level_m, raw.freezing_level_m);
        // And the input itself is intact
        assert_eq!(raw.wind_kmh, 20.0);
    }

    #[test]
    fn adjustment_below_threshold_is_identity() {
        let adj = AltitudeAdjustment::default();
        let raw = sample();
        assert_eq!(adj.apply(&raw, 760.0), raw);
    }

    #[test]
    fn custom_wind_factor() {
        let adj = AltitudeAdjustment::with_wind_factor(1.60);
        let high = adj.apply(&sample(), 1200.0);
        assert_eq!(high.wind_kmh, 32.0);
    }

    #[test]
    fn condition_label_from_code() {
        let mut s = sample();
        s.weather_code = 73;
        assert_eq!(s.condition(), ConditionLabel::Snow);
    }
}
