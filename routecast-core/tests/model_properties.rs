//! Property-based checks on model invariants
//!
//! Each property pins down a guarantee the unit tests only spot-check:
//! gates that must be hard zeroes, classifications that must be monotone,
//! and corrections that must converge in one step.

use proptest::prelude::*;

use routecast_core::{
    AltitudeAdjustment, ExposureModel, FreezingLevelValidator, Phase, PhasePolicy,
    PhysicsPhasePolicy, SeverityBands, Trend, WeatherSample,
};

fn arb_temp() -> impl Strategy<Value = f32> {
    -30.0f32..40.0
}

/// Temperatures away from the exact-zero lapse passthrough.
fn arb_nonzero_temp() -> impl Strategy<Value = f32> {
    prop_oneof![-30.0f32..=-0.5, 0.5f32..=30.0]
}

fn sample_with(precip_mm_h: f32) -> WeatherSample {
    WeatherSample {
        temp_c: 5.0,
        wind_kmh: 15.0,
        humidity_pct: 70.0,
        precip_mm_h,
        snowfall_cm_h: 0.0,
        irradiance_w_m2: 100.0,
        freezing_level_m: 2000.0,
        weather_code: 61,
        timestamp: 1_734_750_000,
    }
}

proptest! {
    /// Below the laminar floor the convective term is the air temperature,
    /// never an enhancement. Rider speed zero models a stopped rider so
    /// the floor is reachable.
    #[test]
    fn laminar_floor_is_a_hard_gate(temp in arb_temp(), wind in 0.0f32..8.0) {
        let model = ExposureModel::with_rider_speed(0.0);
        let r = model.compute(temp, wind, 50.0, 0.0, 0.0, -10.0);
        // Only rounding separates the stored term from the input
        prop_assert!((r.convective_c - temp).abs() <= 0.05);
    }

    /// At or below 0.5 mm/h the wet term is exactly zero, not merely small.
    #[test]
    fn drizzle_never_wets(temp in arb_temp(), humidity in 0.0f32..=100.0, precip in 0.0f32..=0.5) {
        let model = ExposureModel::default();
        let r = model.compute(temp, 10.0, humidity, precip, 0.0, -10.0);
        prop_assert_eq!(r.wet_loss_c, 0.0);
    }

    /// With the sun at or below the horizon the gain is exactly zero no
    /// matter what the irradiance field reports.
    #[test]
    fn no_gain_below_horizon(irradiance in 0.0f32..1200.0, elevation in -90.0f32..=0.0) {
        let model = ExposureModel::default();
        let r = model.compute(5.0, 10.0, 50.0, 0.0, irradiance, elevation);
        prop_assert_eq!(r.solar_gain_c, 0.0);
    }

    /// A lower index never classifies as a milder band.
    #[test]
    fn severity_is_monotone(a in -40.0f32..40.0, b in -40.0f32..40.0) {
        let bands = SeverityBands::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bands.classify(lo) >= bands.classify(hi));
    }

    /// At or below 1 °C with measurable precipitation the verdict is SNOW
    /// regardless of altitude or what the freezing level claims.
    #[test]
    fn cold_precipitation_is_always_snow(
        temp in -30.0f32..=1.0,
        precip in 0.2f32..50.0,
        altitude in 0.0f32..3000.0,
        reported_fl in 0.0f32..=9999.0,
    ) {
        let policy = PhysicsPhasePolicy::default();
        let fl = FreezingLevelValidator::default().validate(reported_fl, altitude, temp);
        let v = policy.classify(temp, precip, altitude, fl);
        prop_assert_eq!(v.phase, Phase::Snow);
    }

    /// One correction pass is always enough: re-validating a corrected
    /// height under the same conditions changes nothing.
    #[test]
    fn freezing_level_correction_converges(
        reported in 0.0f32..=9999.0,
        altitude in 0.0f32..3000.0,
        temp in arb_nonzero_temp(),
    ) {
        let v = FreezingLevelValidator::default();
        let once = v.validate(reported, altitude, temp);
        let twice = v.validate(once.height_m, altitude, temp);
        prop_assert_eq!(twice.height_m, once.height_m);
        prop_assert!(!twice.corrected);
    }

    /// At or below the threshold altitude the adjustment is the identity.
    #[test]
    fn low_altitude_adjustment_is_identity(precip in 0.0f32..20.0, altitude in 0.0f32..=1000.0) {
        let adj = AltitudeAdjustment::default();
        let raw = sample_with(precip);
        prop_assert_eq!(adj.apply(&raw, altitude), raw);
    }

    /// Above the threshold only wind and temperature change.
    #[test]
    fn adjustment_touches_only_wind_and_temp(precip in 0.0f32..20.0, altitude in 1001.0f32..3000.0) {
        let adj = AltitudeAdjustment::default();
        let raw = sample_with(precip);
        let high = adj.apply(&raw, altitude);
        prop_assert_eq!(high.wind_kmh, raw.wind_kmh * 1.35);
        prop_assert_eq!(high.temp_c, raw.temp_c - 2.0);
        prop_assert_eq!(high.humidity_pct, raw.humidity_pct);
        prop_assert_eq!(high.precip_mm_h, raw.precip_mm_h);
        prop_assert_eq!(high.freezing_level_m, raw.freezing_level_m);
        prop_assert_eq!(high.timestamp, raw.timestamp);
    }

    /// Swapping the horizons mirrors the trend.
    #[test]
    fn trend_is_antisymmetric(current in -40.0f32..40.0, future in -40.0f32..40.0) {
        let forward = Trend::between(current, future, 2.0);
        let backward = Trend::between(future, current, 2.0);
        match forward {
            Trend::Increasing => prop_assert_eq!(backward, Trend::Decreasing),
            Trend::Decreasing => prop_assert_eq!(backward, Trend::Increasing),
            Trend::Stable => prop_assert_eq!(backward, Trend::Stable),
        }
    }
}
