//! Effective Exposure Index (EEI)
//!
//! ## Model
//!
//! ```text
//! EEI = T_wc - P_wet + G_sol
//! ```
//!
//! - `T_wc` - convective term: the JAG/TI wind-chill power law
//!   (Osczevski & Bluestein, 2001) driven by an *effective* velocity
//!   `v_eff = v_meteo * MU + V_RIDER`, which folds the rider's own motion
//!   into the airflow. Below the 4.8 km/h laminar floor there is no
//!   convective enhancement and `T_wc = T_a`.
//! - `P_wet` - wet conductive loss from soaked clothing/skin. Zero unless
//!   the precipitation rate exceeds 0.5 mm/h; when active it grows as air
//!   cools below a 20 °C equilibrium and as humidity rises.
//! - `G_sol` - radiative gain, irradiance scaled by an absorption
//!   coefficient and the sine of the solar elevation. Zero at or below the
//!   horizon, regardless of what the irradiance field claims (grid cells
//!   can report residual twilight values).
//!
//! The composite index is rounded to one decimal and classified into five
//! severity bands with exclusive lower bounds at 15/10/5/0 °C-equivalent.
//!
//! Range validation is the caller's job ([`crate::WeatherSample::check`]);
//! `compute` assumes well-formed numeric inputs.

use libm::{powf, roundf, sinf};

use crate::constants::model::{
    EFFECTIVE_RAIN_THRESHOLD_MM_H, LAMINAR_FLOW_FLOOR_KMH, RIDER_SPEED_KMH, SOLAR_ABSORPTION_ALPHA,
    VECTOR_INCIDENCE_MU, WET_EQUILIBRIUM_TEMP_C, WET_LOSS_BASE_FACTOR, WET_LOSS_HUMIDITY_FACTOR,
    WIND_CHILL_BASE, WIND_CHILL_CROSS_COEFF, WIND_CHILL_EXPONENT, WIND_CHILL_TEMP_COEFF,
    WIND_CHILL_WIND_COEFF,
};
use crate::constants::thresholds::{
    SEVERITY_CAUTION_MIN_EEI, SEVERITY_DANGER_MIN_EEI, SEVERITY_SAFE_MIN_EEI,
    SEVERITY_WARNING_MIN_EEI,
};

/// Severity of rider exposure, declared in increasing order so `Ord`
/// reflects "more severe is greater".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Comfortable conditions.
    Safe,
    /// Pack an extra layer.
    Caution,
    /// Deteriorating; plan shelter options.
    Warning,
    /// Serious cold stress for a moving rider.
    Danger,
    /// Stop-and-shelter conditions.
    Critical,
}

impl Severity {
    /// Uppercase card label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Caution => "CAUTION",
            Self::Warning => "WARNING",
            Self::Danger => "DANGER",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Severity band bounds, exclusive lower bounds on the index.
///
/// Ties fall into the band below: an index of exactly 15.0 is CAUTION.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeverityBands {
    /// Index must exceed this for SAFE.
    pub safe_min: f32,
    /// Index must exceed this for CAUTION.
    pub caution_min: f32,
    /// Index must exceed this for WARNING.
    pub warning_min: f32,
    /// Index must exceed this for DANGER; at or below is CRITICAL.
    pub danger_min: f32,
}

impl Default for SeverityBands {
    fn default() -> Self {
        Self {
            safe_min: SEVERITY_SAFE_MIN_EEI,
            caution_min: SEVERITY_CAUTION_MIN_EEI,
            warning_min: SEVERITY_WARNING_MIN_EEI,
            danger_min: SEVERITY_DANGER_MIN_EEI,
        }
    }
}

impl SeverityBands {
    /// Classify an index value. Total over all finite inputs.
    pub fn classify(&self, index: f32) -> Severity {
        if index > self.safe_min {
            Severity::Safe
        } else if index > self.caution_min {
            Severity::Caution
        } else if index > self.warning_min {
            Severity::Warning
        } else if index > self.danger_min {
            Severity::Danger
        } else {
            Severity::Critical
        }
    }
}

/// Exposure index with its component breakdown. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureResult {
    /// Composite index (°C-equivalent), rounded to one decimal.
    pub index: f32,
    /// Convective term `T_wc` (°C).
    pub convective_c: f32,
    /// Wet conductive loss `P_wet` (°C-equivalent, non-negative).
    pub wet_loss_c: f32,
    /// Solar radiative gain `G_sol` (°C-equivalent, non-negative).
    pub solar_gain_c: f32,
    /// Solar elevation used for the gain term (degrees).
    pub solar_elevation_deg: f32,
    /// Effective velocity fed to the convective term (km/h).
    pub effective_wind_kmh: f32,
    /// Severity band of the index.
    pub severity: Severity,
}

impl ExposureResult {
    /// Integer display value, as rendered on cards and dashboards.
    pub fn display_index(&self) -> i32 {
        self.index as i32
    }
}

/// The exposure model with its calibration coefficients.
///
/// `Default` is the shipped calibration; alternate calibrations build a
/// custom value and never touch the computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureModel {
    /// Vector incidence coefficient on meteorological wind.
    pub mu: f32,
    /// Assumed rider ground speed (km/h).
    pub rider_speed_kmh: f32,
    /// Laminar-flow floor for convective enhancement (km/h).
    pub laminar_floor_kmh: f32,
    /// Wet-loss equilibrium temperature (°C).
    pub wet_equilibrium_c: f32,
    /// Base wet-loss factor.
    pub wet_base_factor: f32,
    /// Humidity contribution to the wet-loss factor.
    pub wet_humidity_factor: f32,
    /// Precipitation rate above which wet loss activates (mm/h).
    pub rain_threshold_mm_h: f32,
    /// Solar absorption coefficient (°C per W/m²).
    pub solar_alpha: f32,
    /// Severity classification bands.
    pub bands: SeverityBands,
}

impl Default for ExposureModel {
    fn default() -> Self {
        Self {
            mu: VECTOR_INCIDENCE_MU,
            rider_speed_kmh: RIDER_SPEED_KMH,
            laminar_floor_kmh: LAMINAR_FLOW_FLOOR_KMH,
            wet_equilibrium_c: WET_EQUILIBRIUM_TEMP_C,
            wet_base_factor: WET_LOSS_BASE_FACTOR,
            wet_humidity_factor: WET_LOSS_HUMIDITY_FACTOR,
            rain_threshold_mm_h: EFFECTIVE_RAIN_THRESHOLD_MM_H,
            solar_alpha: SOLAR_ABSORPTION_ALPHA,
            bands: SeverityBands::default(),
        }
    }
}

/// Round to one decimal place.
fn round1(value: f32) -> f32 {
    roundf(value * 10.0) / 10.0
}

impl ExposureModel {
    /// Model with a custom rider speed, e.g. for hike-a-bike sections.
    pub fn with_rider_speed(rider_speed_kmh: f32) -> Self {
        Self {
            rider_speed_kmh,
            ..Self::default()
        }
    }

    /// Compute the exposure index for one (already adjusted) sample.
    ///
    /// `solar_elevation_deg` comes from [`crate::solar_elevation`] for
    /// the sample's instant and the waypoint's coordinates.
    pub fn compute(
        &self,
        temp_c: f32,
        wind_kmh: f32,
        humidity_pct: f32,
        precip_mm_h: f32,
        irradiance_w_m2: f32,
        solar_elevation_deg: f32,
    ) -> ExposureResult {
        // 1. Effective velocity: scaled wind plus self-generated airflow
        let v_eff = wind_kmh * self.mu + self.rider_speed_kmh;

        // 2. Convective term: laminar floor, else the JAG/TI power law
        let convective = if v_eff < self.laminar_floor_kmh {
            temp_c
        } else {
            let v_exp = powf(v_eff, WIND_CHILL_EXPONENT);
            WIND_CHILL_BASE + WIND_CHILL_TEMP_COEFF * temp_c - WIND_CHILL_WIND_COEFF * v_exp
                + WIND_CHILL_CROSS_COEFF * temp_c * v_exp
        };

        // 3. Wet conductive loss, gated on effective precipitation
        let wet_loss = if precip_mm_h > self.rain_threshold_mm_h {
            let factor = self.wet_base_factor + self.wet_humidity_factor * humidity_pct / 100.0;
            ((self.wet_equilibrium_c - temp_c) * factor).max(0.0)
        } else {
            0.0
        };

        // 4. Solar gain, only while the sun is above the horizon
        let solar_gain = if solar_elevation_deg > 0.0 {
            irradiance_w_m2 * self.solar_alpha * sinf(solar_elevation_deg.to_radians())
        } else {
            0.0
        };

        // 5-6. Composite index and classification
        let index = round1(convective - wet_loss + solar_gain);

        ExposureResult {
            index,
            convective_c: round1(convective),
            wet_loss_c: round1(wet_loss),
            solar_gain_c: round1(solar_gain),
            solar_elevation_deg: round1(solar_elevation_deg),
            effective_wind_kmh: round1(v_eff),
            severity: self.bands.classify(index),
        }
    }
}
