//! Freezing-level validator with lapse-rate cross-check
//!
//! The expected freezing level above a waypoint follows from the
//! standard-atmosphere lapse rate: starting at the waypoint's altitude
//! and temperature, air reaches 0 °C at
//!
//! ```text
//! FL_expected = altitude + temp / 0.0065
//! ```
//!
//! A reported height more than 500 m away from that estimate is
//! inconsistent with the local temperature (typically a grid
//! interpolation artifact) and is replaced by the estimate. Exactly-zero
//! temperature makes the division degenerate, so the reported value
//! passes through unchanged - a regular branch, not an error.
//!
//! The snow rules must only ever see heights that went through this
//! validator.

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

use crate::constants::physics::{FREEZING_LEVEL_TOLERANCE_M, LAPSE_RATE_C_PER_M};

/// A freezing-level height that has been cross-checked, plus whether the
/// reported value was replaced. The flag exists for observability; no
/// decision logic reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrectedFreezingLevel {
    /// Height to use for phase decisions (m).
    pub height_m: f32,
    /// True if the reported height was replaced by the lapse-rate
    /// estimate.
    pub corrected: bool,
}

/// Cross-validates reported freezing levels against a lapse-rate estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreezingLevelValidator {
    /// Environmental lapse rate (°C/m).
    pub lapse_rate_c_per_m: f32,
    /// Tolerated disagreement before correction (m).
    pub tolerance_m: f32,
}

impl Default for FreezingLevelValidator {
    fn default() -> Self {
        Self {
            lapse_rate_c_per_m: LAPSE_RATE_C_PER_M,
            tolerance_m: FREEZING_LEVEL_TOLERANCE_M,
        }
    }
}

impl FreezingLevelValidator {
    /// Validator with custom lapse rate and tolerance.
    pub fn new_with_limits(lapse_rate_c_per_m: f32, tolerance_m: f32) -> Self {
        Self {
            lapse_rate_c_per_m,
            tolerance_m: tolerance_m.abs(),
        }
    }

    /// Cross-check a reported freezing level against local conditions.
    ///
    /// Idempotent: feeding a corrected height back in with the same
    /// altitude and temperature leaves it unchanged, since the estimate
    /// itself is always within tolerance of itself.
    pub fn validate(&self, reported_m: f32, altitude_m: f32, temp_c: f32) -> CorrectedFreezingLevel {
        // Degenerate lapse division at exactly 0 °C: pass through
        if temp_c == 0.0 {
            return CorrectedFreezingLevel {
                height_m: reported_m,
                corrected: false,
            };
        }

        let expected_m = altitude_m + temp_c / self.lapse_rate_c_per_m;
        if (reported_m - expected_m).abs() > self.tolerance_m {
            log_debug!(
                "freezing level corrected: reported {reported_m} m, expected {expected_m} m \
                 at altitude {altitude_m} m / {temp_c} °C"
            );
            return CorrectedFreezingLevel {
                height_m: expected_m,
                corrected: true,
            };
        }

        CorrectedFreezingLevel {
            height_m: reported_m,
            corrected: false,
        }
    }
}
