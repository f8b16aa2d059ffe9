//! Constants for the Routecast core model
//!
//! Centralized, documented constants used throughout the exposure and
//! precipitation-phase model. All numeric values live here with their
//! purpose, units, and source noted.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Model**: exposure-index coefficients (convection, wet loss, solar gain)
//! - **Physics**: atmospheric relationships and terrain adjustments
//! - **Thresholds**: classification bands and decision cutoffs
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in the constant name where ambiguity is possible
//! 3. Components take their coefficients as struct fields defaulted from
//!    here, so alternate calibrations never touch computation logic

/// Exposure-index model coefficients.
pub mod model;

/// Atmospheric physics relationships and terrain adjustments.
pub mod physics;

/// Classification bands and decision thresholds.
pub mod thresholds;

// Re-export commonly used constants for convenience
pub use model::{
    EFFECTIVE_RAIN_THRESHOLD_MM_H, LAMINAR_FLOW_FLOOR_KMH, RIDER_SPEED_KMH, SOLAR_ABSORPTION_ALPHA,
    VECTOR_INCIDENCE_MU, WET_EQUILIBRIUM_TEMP_C,
};

pub use physics::{
    FREEZING_LEVEL_TOLERANCE_M, FREEZING_LEVEL_VALID_MAX_M, HIGH_ALTITUDE_THRESHOLD_M,
    LAPSE_RATE_C_PER_M, RIDGE_WIND_FACTOR_DEFAULT,
};

pub use thresholds::{
    COLD_SNOW_MAX_TEMP_C, MEASURABLE_PRECIP_MM_H, MIXED_ZONE_MAX_TEMP_C, TREND_DEAD_BAND_EEI,
};
