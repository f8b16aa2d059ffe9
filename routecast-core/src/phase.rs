//! Precipitation-phase classification from temperature/altitude physics
//!
//! ## Rule order
//!
//! Rules apply in strict priority, first match wins:
//!
//! 1. **Mixed zone**: `0 < T ≤ 3 °C` with measurable precipitation. The
//!    phase is genuinely ambiguous; above 1.5 °C it classifies as MIXED,
//!    at or below as probable SNOW.
//! 2. **Cold-confirmed snow**: `T ≤ 1 °C` with measurable precipitation.
//!    Temperature alone is decisive at or below freezing.
//! 3. **Altitude above freezing level**: the waypoint sits above a valid
//!    (non-sentinel) freezing layer while precipitation falls. Fallback
//!    for temperatures just above the gray zone where the air column
//!    overhead is still freezing.
//! 4. **Otherwise**: RAIN when precipitation is measurable, NONE when not.
//!
//! Temperature dominates because it is the most physically direct signal;
//! the freezing-level comparison only breaks ties it cannot. Both gates
//! require measurable precipitation so dry, cold days never alert.
//!
//! Intensity tiers come from the precipitation rate alone and are
//! independent of which rule fired.

use crate::constants::physics::FREEZING_LEVEL_VALID_MAX_M;
use crate::constants::thresholds::{
    COLD_SNOW_MAX_TEMP_C, HEAVY_PRECIP_MM_H, MEASURABLE_PRECIP_MM_H, MIXED_ZONE_MAX_TEMP_C,
    MIXED_ZONE_SNOW_SPLIT_C, MODERATE_PRECIP_MM_H,
};
use crate::traits::PhasePolicy;
use crate::validators::CorrectedFreezingLevel;

/// Precipitation phase at a waypoint and instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No measurable precipitation.
    None,
    /// Liquid precipitation.
    Rain,
    /// Rain/snow mix in the thermal gray zone.
    Mixed,
    /// Solid precipitation.
    Snow,
}

impl Phase {
    /// Uppercase card label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Rain => "RAIN",
            Self::Mixed => "MIXED",
            Self::Snow => "SNOW",
        }
    }

    /// True for the phases that carry snow risk (SNOW or MIXED).
    pub const fn is_wintry(&self) -> bool {
        matches!(self, Self::Snow | Self::Mixed)
    }
}

/// Precipitation intensity tier, from rate alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intensity {
    /// Up to 3 mm/h.
    Light,
    /// More than 3 mm/h.
    Moderate,
    /// More than 10 mm/h.
    Heavy,
}

impl Intensity {
    /// Uppercase card label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Moderate => "MODERATE",
            Self::Heavy => "HEAVY",
        }
    }
}

/// Phase verdict for one sample, with the corrected freezing level that
/// backed it. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseVerdict {
    /// Classified phase.
    pub phase: Phase,
    /// Intensity tier; only meaningful when `phase` is wintry.
    pub intensity: Intensity,
    /// Freezing level the verdict was reached with.
    pub freezing_level: CorrectedFreezingLevel,
    /// Gray-zone qualifier: SNOW from the mixed zone rather than
    /// cold-confirmed.
    pub probable: bool,
}

/// The physics-only phase policy: temperature and altitude decide,
/// upstream categorical codes never do.
///
/// This replaced an earlier weather-code-driven policy on purpose - the
/// two must not be merged. See [`PhasePolicy`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsPhasePolicy {
    /// Upper bound of the mixed-phase gray zone (°C).
    pub mixed_zone_max_c: f32,
    /// MIXED/probable-SNOW split inside the gray zone (°C).
    pub mixed_snow_split_c: f32,
    /// Cold-confirmed snow bound (°C).
    pub cold_snow_max_c: f32,
    /// Minimum measurable precipitation rate (mm/h).
    pub measurable_mm_h: f32,
    /// Freezing levels at or above this are sentinels, never decisive (m).
    pub freezing_level_valid_max_m: f32,
    /// HEAVY tier bound (mm/h).
    pub heavy_mm_h: f32,
    /// MODERATE tier bound (mm/h).
    pub moderate_mm_h: f32,
}

impl Default for PhysicsPhasePolicy {
    fn default() -> Self {
        Self {
            mixed_zone_max_c: MIXED_ZONE_MAX_TEMP_C,
            mixed_snow_split_c: MIXED_ZONE_SNOW_SPLIT_C,
            cold_snow_max_c: COLD_SNOW_MAX_TEMP_C,
            measurable_mm_h: MEASURABLE_PRECIP_MM_H,
            freezing_level_valid_max_m: FREEZING_LEVEL_VALID_MAX_M,
            heavy_mm_h: HEAVY_PRECIP_MM_H,
            moderate_mm_h: MODERATE_PRECIP_MM_H,
        }
    }
}

impl PhysicsPhasePolicy {
    fn intensity(&self, precip_mm_h: f32) -> Intensity {
        if precip_mm_h > self.heavy_mm_h {
            Intensity::Heavy
        } else if precip_mm_h > self.moderate_mm_h {
            Intensity::Moderate
        } else {
            Intensity::Light
        }
    }
}

impl PhasePolicy for PhysicsPhasePolicy {
    fn classify(
        &self,
        temp_c: f32,
        precip_mm_h: f32,
        altitude_m: f32,
        freezing_level: CorrectedFreezingLevel,
    ) -> PhaseVerdict {
        let measurable = precip_mm_h > self.measurable_mm_h;
        let intensity = self.intensity(precip_mm_h);

        let (phase, probable) = if measurable && temp_c > 0.0 && temp_c <= self.mixed_zone_max_c {
            // Rule 1: thermal gray zone
            if temp_c > self.mixed_snow_split_c {
                (Phase::Mixed, false)
            } else {
                (Phase::Snow, true)
            }
        } else if measurable && temp_c <= self.cold_snow_max_c {
            // Rule 2: temperature alone confirms snow
            (Phase::Snow, false)
        } else if measurable
            && altitude_m > freezing_level.height_m
            && freezing_level.height_m < self.freezing_level_valid_max_m
        {
            // Rule 3: waypoint above the freezing layer
            (Phase::Snow, false)
        } else if measurable {
            (Phase::Rain, false)
        } else {
            (Phase::None, false)
        };

        PhaseVerdict {
            phase,
            intensity,
            freezing_level,
            probable,
        }
    }
}
