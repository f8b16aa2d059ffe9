//! Waypoint evaluation: composing the model for one route point
//!
//! The [`Evaluator`] is the externally-facing entry point of the core.
//! For one waypoint and three forecast horizons (now, +3 h, +6 h) it:
//!
//! 1. checks each sample's caller contract,
//! 2. derives one altitude-adjusted copy per sample - exactly once, so
//!    the exposure model and the phase classifier consume identical
//!    values,
//! 3. runs solar position, the exposure model, the freezing-level
//!    validator, and the phase policy per horizon,
//! 4. compares exposure across horizons into trend indicators.
//!
//! Evaluations share no state: calling `evaluate` for N waypoints from N
//! threads needs no synchronization and yields the same records as a
//! sequential loop. Completion order carries no meaning - consumers sort
//! by waypoint id before rendering.

use crate::constants::thresholds::TREND_DEAD_BAND_EEI;
use crate::errors::ModelResult;
use crate::exposure::{ExposureModel, ExposureResult, Severity};
use crate::phase::{Intensity, PhaseVerdict, PhysicsPhasePolicy};
use crate::sample::{AltitudeAdjustment, HorizonSamples, WaypointProfile, WeatherSample};
use crate::solar::solar_elevation;
use crate::traits::PhasePolicy;
use crate::validators::FreezingLevelValidator;
use crate::MODEL_VERSION;

/// Direction of exposure change between two horizons.
///
/// Dead-banded at ±2 °C-equivalent so sub-noise fluctuations read as
/// stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    /// Exposure worsening (index falling).
    Decreasing,
    /// Within the dead band.
    Stable,
    /// Exposure easing (index rising).
    Increasing,
}

impl Trend {
    /// Compare a current and a future index with the given dead band.
    pub fn between(current: f32, future: f32, dead_band: f32) -> Self {
        let diff = future - current;
        if diff < -dead_band {
            Self::Decreasing
        } else if diff > dead_band {
            Self::Increasing
        } else {
            Self::Stable
        }
    }

    /// Card symbol for the trend arrow.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Decreasing => "(-)",
            Self::Stable => "(=)",
            Self::Increasing => "(+)",
        }
    }
}

/// Model outputs for one forecast horizon.
///
/// `sample` is the altitude-adjusted copy the model actually consumed,
/// kept so renderers display the same temperature/wind the verdicts were
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizonReport {
    /// Adjusted sample fed to the model.
    pub sample: WeatherSample,
    /// Exposure index and components.
    pub exposure: ExposureResult,
    /// Precipitation-phase verdict.
    pub phase: PhaseVerdict,
}

/// Headline status for a waypoint card.
///
/// Snow risk overrides the exposure severity on the card, tiered by
/// intensity, mirroring how alerts escalate on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Headline {
    /// No snow risk: show the exposure severity.
    Exposure(Severity),
    /// Wintry precipitation expected, tiered by intensity.
    Snow(Intensity),
}

impl Headline {
    /// Uppercase card label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exposure(severity) => severity.label(),
            Self::Snow(Intensity::Light) => "SNOW ALERT",
            Self::Snow(Intensity::Moderate) => "SNOW WARNING",
            Self::Snow(Intensity::Heavy) => "BLIZZARD",
        }
    }

    /// Alert precedence: snow tiers above exposure severities, worse
    /// above milder. Used to pick the worst waypoint for the route
    /// summary.
    const fn rank(&self) -> u8 {
        match self {
            Self::Exposure(Severity::Safe) => 0,
            Self::Exposure(Severity::Caution) => 1,
            Self::Exposure(Severity::Warning) => 2,
            Self::Exposure(Severity::Danger) => 3,
            Self::Exposure(Severity::Critical) => 4,
            Self::Snow(Intensity::Light) => 5,
            Self::Snow(Intensity::Moderate) => 6,
            Self::Snow(Intensity::Heavy) => 7,
        }
    }

    /// True when the headline warrants calling out the waypoint on the
    /// route banner.
    pub const fn is_alert(&self) -> bool {
        self.rank() >= Self::Exposure(Severity::Warning).rank()
    }
}

/// One waypoint's full evaluation: three horizons plus trends.
///
/// Created fresh on every evaluation cycle, never persisted or merged
/// with prior cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaypointEvaluation {
    /// The waypoint this record describes.
    pub profile: WaypointProfile,
    /// Current hour.
    pub now: HorizonReport,
    /// Three hours ahead.
    pub in_3h: HorizonReport,
    /// Six hours ahead.
    pub in_6h: HorizonReport,
    /// Trend now → +3 h.
    pub trend_3h: Trend,
    /// Trend now → +6 h.
    pub trend_6h: Trend,
}

impl WaypointEvaluation {
    /// Headline status for this waypoint's card: snow risk on the now
    /// horizon escalates over plain exposure severity.
    pub const fn headline(&self) -> Headline {
        if self.now.phase.phase.is_wintry() {
            Headline::Snow(self.now.phase.intensity)
        } else {
            Headline::Exposure(self.now.exposure.severity)
        }
    }
}

/// Composes the model components into one evaluation entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator<P: PhasePolicy = PhysicsPhasePolicy> {
    adjustment: AltitudeAdjustment,
    exposure: ExposureModel,
    freezing: FreezingLevelValidator,
    policy: P,
    trend_dead_band: f32,
}

impl Default for Evaluator<PhysicsPhasePolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator<PhysicsPhasePolicy> {
    /// Evaluator with the shipped calibration and the physics-only phase
    /// policy.
    pub fn new() -> Self {
        Self {
            adjustment: AltitudeAdjustment::default(),
            exposure: ExposureModel::default(),
            freezing: FreezingLevelValidator::default(),
            policy: PhysicsPhasePolicy::default(),
            trend_dead_band: TREND_DEAD_BAND_EEI,
        }
    }

    /// Default calibration with a custom altitude adjustment.
    pub fn with_adjustment(adjustment: AltitudeAdjustment) -> Self {
        Self {
            adjustment,
            ..Self::new()
        }
    }
}

impl<P: PhasePolicy> Evaluator<P> {
    /// Evaluator from explicit parts, for alternate calibrations or a
    /// different phase policy.
    pub fn from_parts(
        adjustment: AltitudeAdjustment,
        exposure: ExposureModel,
        freezing: FreezingLevelValidator,
        policy: P,
    ) -> Self {
        Self {
            adjustment,
            exposure,
            freezing,
            policy,
            trend_dead_band: TREND_DEAD_BAND_EEI,
        }
    }

    /// Evaluate one waypoint across the three forecast horizons.
    ///
    /// # Errors
    ///
    /// Returns an error only when a sample violates the caller contract
    /// (non-finite field, out-of-domain humidity or negative
    /// wind/precipitation/irradiance). Physical edge cases never fail.
    pub fn evaluate(
        &self,
        profile: &WaypointProfile,
        samples: &HorizonSamples,
    ) -> ModelResult<WaypointEvaluation> {
        let now = self.evaluate_horizon(profile, &samples.now)?;
        let in_3h = self.evaluate_horizon(profile, &samples.in_3h)?;
        let in_6h = self.evaluate_horizon(profile, &samples.in_6h)?;

        let trend_3h = Trend::between(now.exposure.index, in_3h.exposure.index, self.trend_dead_band);
        let trend_6h = Trend::between(now.exposure.index, in_6h.exposure.index, self.trend_dead_band);

        Ok(WaypointEvaluation {
            profile: *profile,
            now,
            in_3h,
            in_6h,
            trend_3h,
            trend_6h,
        })
    }

    fn evaluate_horizon(
        &self,
        profile: &WaypointProfile,
        sample: &WeatherSample,
    ) -> ModelResult<HorizonReport> {
        sample.check()?;

        // Adjustment happens exactly once, here, so exposure and phase
        // see the same values.
        let adjusted = self.adjustment.apply(sample, profile.altitude_m);

        let elevation = solar_elevation(profile.latitude, profile.longitude, adjusted.timestamp);
        let exposure = self.exposure.compute(
            adjusted.temp_c,
            adjusted.wind_kmh,
            adjusted.humidity_pct,
            adjusted.precip_mm_h,
            adjusted.irradiance_w_m2,
            elevation,
        );

        let freezing =
            self.freezing
                .validate(adjusted.freezing_level_m, profile.altitude_m, adjusted.temp_c);
        let phase = self.policy.classify(
            adjusted.temp_c,
            adjusted.precip_mm_h,
            profile.altitude_m,
            freezing,
        );

        Ok(HorizonReport {
            sample: adjusted,
            exposure,
            phase,
        })
    }
}

/// Route-level aggregation over a cycle's waypoint evaluations, for the
/// dashboard banner and the status feed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteSummary {
    /// Lowest display exposure index across waypoints (now horizon).
    pub min_display_index: i32,
    /// Strongest adjusted wind across waypoints (now horizon, km/h).
    pub max_wind_kmh: f32,
    /// Name of the worst waypoint, when any headline is alert-worthy.
    pub worst_waypoint: Option<&'static str>,
    /// True when any waypoint's now horizon is wintry.
    pub snow_detected: bool,
    /// Calibration identifier for the feed.
    pub model_version: &'static str,
}

impl RouteSummary {
    /// Aggregate a cycle's evaluations. Returns `None` for an empty
    /// cycle. Independent of input order: the worst waypoint is picked
    /// by alert precedence with ties broken by lowest waypoint id.
    pub fn from_evaluations(evaluations: &[WaypointEvaluation]) -> Option<Self> {
        let first = evaluations.first()?;

        let mut min_display_index = first.now.exposure.display_index();
        let mut max_wind_kmh = first.now.sample.wind_kmh;
        let mut snow_detected = false;
        let mut worst: Option<&WaypointEvaluation> = None;

        for eval in evaluations {
            min_display_index = min_display_index.min(eval.now.exposure.display_index());
            max_wind_kmh = max_wind_kmh.max(eval.now.sample.wind_kmh);
            if eval.now.phase.phase.is_wintry() {
                snow_detected = true;
            }

            if eval.headline().is_alert() {
                let replace = match worst {
                    None => true,
                    Some(current) => {
                        let (r, id) = (eval.headline().rank(), eval.profile.id);
                        let (cr, cid) = (current.headline().rank(), current.profile.id);
                        r > cr || (r == cr && id < cid)
                    }
                };
                if replace {
                    worst = Some(eval);
                }
            }
        }

        Some(Self {
            min_display_index,
            max_wind_kmh,
            worst_waypoint: worst.map(|w| w.profile.name),
            snow_detected,
            model_version: MODEL_VERSION,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::physics::FREEZING_LEVEL_SENTINEL_M;
    use crate::errors::ModelError;
    use crate::phase::Phase;
    use crate::sample::TerrainCategory;
    use crate::time::hours_ahead;

    // 2024-12-21 03:00 UTC: deep night over northern Portugal, so the
    // solar term is deterministically zero.
    const NIGHT: u64 = 1_734_750_000;

    fn marao() -> WaypointProfile {
        WaypointProfile {
            id: 3,
            name: "SERRA DO MARAO",
            latitude: 41.2484,
            longitude: -7.8862,
            altitude_m: 1415.0,
            terrain: TerrainCategory::Descend,
        }
    }

    fn amarante() -> WaypointProfile {
        WaypointProfile {
            id: 1,
            name: "AMARANTE",
            latitude: 41.2709,
            longitude: -8.0797,
            altitude_m: 65.0,
            terrain: TerrainCategory::Flat,
        }
    }

    fn sample(temp_c: f32, wind_kmh: f32, precip_mm_h: f32, ts: u64) -> WeatherSample {
        WeatherSample {
            temp_c,
            wind_kmh,
            humidity_pct: 80.0,
            precip_mm_h,
            snowfall_cm_h: 0.0,
            irradiance_w_m2: 0.0,
            freezing_level_m: FREEZING_LEVEL_SENTINEL_M,
            weather_code: 3,
            timestamp: ts,
        }
    }

    fn horizons(now: WeatherSample) -> HorizonSamples {
        HorizonSamples {
            in_3h: WeatherSample {
                timestamp: hours_ahead(now.timestamp, 3),
                ..now
            },
            in_6h: WeatherSample {
                timestamp: hours_ahead(now.timestamp, 6),
                ..now
            },
            now,
        }
    }

    #[test]
    fn trend_dead_band() {
        assert_eq!(Trend::between(10.0, 13.0, 2.0), Trend::Increasing);
        assert_eq!(Trend::between(10.0, 7.9, 2.0), Trend::Decreasing);
        assert_eq!(Trend::between(10.0, 11.0, 2.0), Trend::Stable);
        // Exactly at the band edge stays stable
        assert_eq!(Trend::between(10.0, 12.0, 2.0), Trend::Stable);
        assert_eq!(Trend::between(10.0, 8.0, 2.0), Trend::Stable);
    }

    #[test]
    fn trend_symbols() {
        assert_eq!(Trend::Decreasing.symbol(), "(-)");
        assert_eq!(Trend::Stable.symbol(), "(=)");
        assert_eq!(Trend::Increasing.symbol(), "(+)");
    }

    #[test]
    fn high_waypoint_gets_adjusted_once() {
        let evaluator = Evaluator::new();
        let eval = evaluator
            .evaluate(&marao(), &horizons(sample(4.0, 20.0, 0.0, NIGHT)))
            .unwrap();

        // The stored sample is the adjusted copy the model consumed
        assert_eq!(eval.now.sample.wind_kmh, 27.0);
        assert_eq!(eval.now.sample.temp_c, 2.0);
        // And the exposure result was computed from it: 27 * 0.6 + 16
        assert_eq!(eval.now.exposure.effective_wind_kmh, 32.2);
        // All horizons adjust, not just now
        assert_eq!(eval.in_3h.sample.wind_kmh, 27.0);
        assert_eq!(eval.in_6h.sample.wind_kmh, 27.0);
    }

    #[test]
    fn low_waypoint_is_untouched() {
        let evaluator = Evaluator::new();
        let eval = evaluator
            .evaluate(&amarante(), &horizons(sample(4.0, 20.0, 0.0, NIGHT)))
            .unwrap();
        assert_eq!(eval.now.sample.wind_kmh, 20.0);
        assert_eq!(eval.now.sample.temp_c, 4.0);
    }

    #[test]
    fn malformed_sample_fails_evaluation() {
        let evaluator = Evaluator::new();
        let mut s = sample(4.0, 20.0, 0.0, NIGHT);
        s.humidity_pct = 140.0;
        let err = evaluator.evaluate(&marao(), &horizons(s)).unwrap_err();
        assert!(matches!(err, ModelError::OutOfRange { .. }));
    }

    #[test]
    fn adjustment_can_push_into_gray_zone() {
        // 2.5 °C forecast at a 1415 m waypoint becomes 0.5 °C after the
        // altitude offset: probable snow instead of mixed.
        let evaluator = Evaluator::new();
        let eval = evaluator
            .evaluate(&marao(), &horizons(sample(2.5, 10.0, 1.0, NIGHT)))
            .unwrap();
        assert_eq!(eval.now.phase.phase, Phase::Snow);
        assert!(eval.now.phase.probable);
    }

    #[test]
    fn headline_escalates_on_snow() {
        let evaluator = Evaluator::new();
        let eval = evaluator
            .evaluate(&marao(), &horizons(sample(0.0, 10.0, 12.0, NIGHT)))
            .unwrap();
        assert!(eval.now.phase.phase.is_wintry());
        assert_eq!(eval.headline().label(), "BLIZZARD");
    }

    #[test]
    fn headline_falls_back_to_severity() {
        let evaluator = Evaluator::new();
        let eval = evaluator
            .evaluate(&amarante(), &horizons(sample(18.0, 5.0, 0.0, NIGHT)))
            .unwrap();
        assert!(matches!(eval.headline(), Headline::Exposure(_)));
    }

    #[test]
    fn route_summary_aggregates() {
        let evaluator = Evaluator::new();
        let cold_high = evaluator
            .evaluate(&marao(), &horizons(sample(0.0, 30.0, 2.0, NIGHT)))
            .unwrap();
        let mild_low = evaluator
            .evaluate(&amarante(), &horizons(sample(12.0, 10.0, 0.0, NIGHT)))
            .unwrap();

        let summary = RouteSummary::from_evaluations(&[mild_low, cold_high]).unwrap();
        assert!(summary.snow_detected);
        assert_eq!(summary.worst_waypoint, Some("SERRA DO MARAO"));
        assert_eq!(summary.max_wind_kmh, 30.0 * 1.35);
        assert!(summary.min_display_index < 0);
        assert_eq!(summary.model_version, MODEL_VERSION);

        // Input order must not matter
        let flipped = RouteSummary::from_evaluations(&[cold_high, mild_low]).unwrap();
        assert_eq!(summary, flipped);
    }

    #[test]
    fn route_summary_without_alerts() {
        let evaluator = Evaluator::new();
        let mild = evaluator
            .evaluate(&amarante(), &horizons(sample(18.0, 5.0, 0.0, NIGHT)))
            .unwrap();
        let summary = RouteSummary::from_evaluations(&[mild]).unwrap();
        assert!(!summary.snow_detected);
        assert_eq!(summary.worst_waypoint, None);
    }

    #[test]
    fn empty_cycle_has_no_summary() {
        assert!(RouteSummary::from_evaluations(&[]).is_none());
    }
}
