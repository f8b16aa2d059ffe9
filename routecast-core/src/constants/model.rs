//! Exposure-Index Model Coefficients
//!
//! Coefficients of the composite exposure index
//! `EEI = T_wc - P_wet + G_sol`, where `T_wc` is the convective term,
//! `P_wet` the wet conductive loss, and `G_sol` the solar radiative gain.
//! The convective term follows the JAG/TI wind-chill formulation
//! (Osczevski & Bluestein, 2001) driven by an effective velocity that
//! accounts for the rider's own motion.

// ===== EFFECTIVE VELOCITY =====

/// Vector incidence coefficient for meteorological wind (dimensionless).
///
/// Scales the reported wind speed before adding the rider's self-generated
/// airflow. Less than 1.0 because wind rarely hits a moving rider head-on.
pub const VECTOR_INCIDENCE_MU: f32 = 0.6;

/// Assumed rider ground speed over mixed terrain (km/h).
///
/// Added to the scaled wind to model self-generated airflow. Calibrated
/// for mountain-bike pace across climbs and descents.
pub const RIDER_SPEED_KMH: f32 = 16.0;

/// Laminar-flow floor for the convective term (km/h).
///
/// Below this effective velocity the boundary layer stays laminar and no
/// convective enhancement applies: the convective term equals air
/// temperature. Matches the validity floor of the JAG/TI formula.
pub const LAMINAR_FLOW_FLOOR_KMH: f32 = 4.8;

// ===== JAG/TI CONVECTIVE TERM =====
//
// T_wc = 13.12 + 0.6215*T - 11.37*v^0.16 + 0.3965*T*v^0.16
// with T in Celsius and v in km/h.

/// Constant term of the JAG/TI wind-chill formula.
pub const WIND_CHILL_BASE: f32 = 13.12;

/// Air-temperature coefficient of the JAG/TI formula.
pub const WIND_CHILL_TEMP_COEFF: f32 = 0.6215;

/// Wind-speed coefficient of the JAG/TI formula.
pub const WIND_CHILL_WIND_COEFF: f32 = 11.37;

/// Temperature-wind cross-term coefficient of the JAG/TI formula.
pub const WIND_CHILL_CROSS_COEFF: f32 = 0.3965;

/// Wind-speed exponent of the JAG/TI formula.
pub const WIND_CHILL_EXPONENT: f32 = 0.16;

// ===== WET CONDUCTIVE LOSS =====

/// Thermal equilibrium threshold for soaked clothing/skin (°C).
///
/// Wet loss grows as air temperature falls below this value; above it,
/// evaporative cooling is no longer a net exposure penalty.
pub const WET_EQUILIBRIUM_TEMP_C: f32 = 20.0;

/// Base conductive-loss factor when precipitation is active (dimensionless).
pub const WET_LOSS_BASE_FACTOR: f32 = 0.3;

/// Relative-humidity contribution to the conductive-loss factor.
///
/// Applied as `WET_LOSS_HUMIDITY_FACTOR * RH / 100`, so the combined factor
/// spans 0.3 (bone dry air) to 0.7 (saturated air).
pub const WET_LOSS_HUMIDITY_FACTOR: f32 = 0.4;

/// Precipitation rate above which clothing is considered soaked (mm/h).
///
/// At or below this rate the wet-loss term is exactly zero: drizzle at
/// riding speed sheds off before it penetrates.
pub const EFFECTIVE_RAIN_THRESHOLD_MM_H: f32 = 0.5;

// ===== SOLAR GAIN =====

/// Solar absorption coefficient (°C per W/m²).
///
/// Converts incident irradiance into an equivalent-temperature gain,
/// modulated by the sine of the solar elevation angle. Calibrated for a
/// clothed rider; zero whenever the sun is at or below the horizon.
pub const SOLAR_ABSORPTION_ALPHA: f32 = 0.007;
