//! Core exposure model for Routecast
//!
//! Estimates rider-perceived cold/heat exposure and precipitation phase
//! (rain/snow/mixed) at fixed mountain-route waypoints from hourly
//! weather-model fields.
//!
//! Key constraints:
//! - Pure computation: no I/O, no shared mutable state
//! - Deterministic for a given input sample and timestamp
//! - Safe to evaluate waypoints concurrently without synchronization
//!
//! Data retrieval, card/map rendering, and upload are external
//! collaborators. They feed [`WeatherSample`] values in and consume
//! [`WaypointEvaluation`] records out.
//!
//! ```no_run
//! use routecast_core::{Evaluator, WaypointProfile, TerrainCategory, HorizonSamples};
//!
//! let evaluator = Evaluator::default();
//! let waypoint = WaypointProfile {
//!     id: 3,
//!     name: "SERRA DO MARAO",
//!     latitude: 41.2484,
//!     longitude: -7.8862,
//!     altitude_m: 1415.0,
//!     terrain: TerrainCategory::Descend,
//! };
//! # let samples: HorizonSamples = todo!();
//!
//! match evaluator.evaluate(&waypoint, &samples) {
//!     Ok(eval) => {} // hand to the renderer
//!     Err(e) => {}   // malformed upstream sample
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod evaluation;
pub mod exposure;
pub mod phase;
pub mod sample;
pub mod solar;
pub mod time;
pub mod traits;
pub mod validators;
pub mod weathercode;

// Public API
pub use errors::{ModelError, ModelResult};
pub use evaluation::{Evaluator, Headline, HorizonReport, RouteSummary, Trend, WaypointEvaluation};
pub use exposure::{ExposureModel, ExposureResult, Severity, SeverityBands};
pub use phase::{Intensity, Phase, PhaseVerdict, PhysicsPhasePolicy};
pub use sample::{
    AltitudeAdjustment, HorizonSamples, TerrainCategory, WaypointProfile, WeatherSample,
};
pub use solar::solar_elevation;
pub use traits::PhasePolicy;
pub use validators::{CorrectedFreezingLevel, FreezingLevelValidator};
pub use weathercode::ConditionLabel;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model revision identifier, reported in route summaries so downstream
/// feeds can tell which calibration produced them.
pub const MODEL_VERSION: &str = "eei-3.1";
