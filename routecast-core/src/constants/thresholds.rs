//! Classification Bands and Decision Thresholds
//!
//! Cutoffs for exposure severity, precipitation phase, intensity tiers,
//! and trend indication. All severity bounds are exclusive lower bounds:
//! an index of exactly 15.0 falls into the band below.

// ===== EXPOSURE SEVERITY BANDS (°C-equivalent EEI) =====

/// Exclusive lower bound of the SAFE band.
pub const SEVERITY_SAFE_MIN_EEI: f32 = 15.0;

/// Exclusive lower bound of the CAUTION band.
pub const SEVERITY_CAUTION_MIN_EEI: f32 = 10.0;

/// Exclusive lower bound of the WARNING band.
pub const SEVERITY_WARNING_MIN_EEI: f32 = 5.0;

/// Exclusive lower bound of the DANGER band. Anything at or below is
/// CRITICAL.
pub const SEVERITY_DANGER_MIN_EEI: f32 = 0.0;

// ===== PRECIPITATION PHASE =====

/// Upper bound of the mixed-phase gray zone (°C).
///
/// Between 0 °C (exclusive) and this temperature, precipitation phase is
/// genuinely ambiguous and needs sub-classification.
pub const MIXED_ZONE_MAX_TEMP_C: f32 = 3.0;

/// Split point inside the mixed zone (°C).
///
/// Above it the gray zone classifies as mixed rain/snow; at or below,
/// probable snow.
pub const MIXED_ZONE_SNOW_SPLIT_C: f32 = 1.5;

/// Temperature at or below which precipitation is confirmed snow (°C).
///
/// Temperature alone is decisive here; altitude and freezing level are
/// not consulted.
pub const COLD_SNOW_MAX_TEMP_C: f32 = 1.0;

/// Minimum measurable precipitation rate (mm/h).
///
/// Phase rules only activate above this, avoiding false positives on
/// dry, cold days.
pub const MEASURABLE_PRECIP_MM_H: f32 = 0.1;

// ===== INTENSITY TIERS (mm/h) =====
//
// Given constants, not derived physics: tier bounds come straight from
// the shipped calibration.

/// Precipitation rate above which intensity is HEAVY.
pub const HEAVY_PRECIP_MM_H: f32 = 10.0;

/// Precipitation rate above which intensity is MODERATE.
pub const MODERATE_PRECIP_MM_H: f32 = 3.0;

// ===== TREND =====

/// Dead band for the trend indicator (°C-equivalent EEI).
///
/// Exposure-index differences within ±this value read as stable, keeping
/// sub-2-degree forecast noise out of the displayed arrows.
pub const TREND_DEAD_BAND_EEI: f32 = 2.0;
