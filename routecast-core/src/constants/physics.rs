//! Atmospheric Physics and Terrain Adjustments
//!
//! Relationships used to cross-check upstream forecast fields against local
//! conditions, and the terrain corrections applied to raw samples before
//! the model runs.

// ===== FREEZING LEVEL =====

/// Environmental lapse rate (°C per meter).
///
/// Standard-atmosphere temperature decrease with altitude in the
/// troposphere. Used to estimate the local freezing level from a
/// waypoint's altitude and air temperature.
///
/// Source: International Standard Atmosphere (6.5 °C/km)
pub const LAPSE_RATE_C_PER_M: f32 = 0.0065;

/// Tolerated disagreement between reported and lapse-rate-derived
/// freezing levels (meters).
///
/// Beyond this the reported value is treated as an interpolation artifact
/// of the source forecast grid and replaced with the local estimate.
pub const FREEZING_LEVEL_TOLERANCE_M: f32 = 500.0;

/// Ceiling above which a reported freezing level is a sentinel (meters).
///
/// Upstream feeds report ~9999 m when the freezing level is unknown or not
/// applicable. Readings at or above this ceiling never drive snow
/// decisions.
pub const FREEZING_LEVEL_VALID_MAX_M: f32 = 9000.0;

/// Sentinel value for an unknown freezing level (meters).
///
/// The data-retrieval collaborator substitutes this when the upstream
/// field is missing; the core never defaults fields itself.
pub const FREEZING_LEVEL_SENTINEL_M: f32 = 9999.0;

// ===== TERRAIN ADJUSTMENTS =====

/// Altitude above which ridge exposure corrections apply (meters).
///
/// Waypoints above this sit on exposed ridgelines where valley-referenced
/// forecast winds underestimate conditions and temperatures run colder.
pub const HIGH_ALTITUDE_THRESHOLD_M: f32 = 1000.0;

/// Default ridge wind acceleration factor (dimensionless).
///
/// Multiplies forecast wind at high-altitude waypoints. A tuning constant,
/// not a physical law: field calibrations range 1.35–1.60 depending on how
/// exposed the ridgeline is. See also [`RIDGE_WIND_FACTOR_MAX`].
pub const RIDGE_WIND_FACTOR_DEFAULT: f32 = 1.35;

/// Upper end of the calibrated ridge wind factor range.
pub const RIDGE_WIND_FACTOR_MAX: f32 = 1.60;

/// Temperature offset for high-altitude waypoints (°C).
///
/// Subtracted from the forecast temperature above
/// [`HIGH_ALTITUDE_THRESHOLD_M`] to correct for grid cells centered below
/// the ridgeline.
pub const ALTITUDE_TEMP_OFFSET_C: f32 = 2.0;
