//! Core traits for the model
//!
//! Small seams only: a finite-number check shared by input validation, and
//! the strategy trait that pins down which phase-classification policy is
//! in force.

use crate::phase::PhaseVerdict;
use crate::validators::CorrectedFreezingLevel;

/// Trait for values that can be checked for numeric validity.
pub trait Validatable {
    /// Check if the value is usable in the model (not NaN, not infinite).
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Precipitation-phase classification policy.
///
/// Phase classification changed across model revisions: an early revision
/// trusted the upstream categorical weather code and snowfall fields, the
/// current one derives phase purely from temperature/altitude physics.
/// The policies are mutually exclusive design choices, so the classifier
/// is a swappable strategy rather than an accumulation of conditional
/// patches. [`crate::PhysicsPhasePolicy`] is the authoritative
/// implementation; the weather-code policy was retired deliberately and
/// must not be reintroduced as a controlling input.
pub trait PhasePolicy {
    /// Classify precipitation phase for one adjusted sample.
    ///
    /// `freezing_level` must come from the freezing-level validator; raw
    /// reported heights are never consumed here.
    fn classify(
        &self,
        temp_c: f32,
        precip_mm_h: f32,
        altitude_m: f32,
        freezing_level: CorrectedFreezingLevel,
    ) -> PhaseVerdict;
}
