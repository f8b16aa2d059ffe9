//! Physics-Based Cross-Validation of Upstream Fields
//!
//! Upstream forecast fields are not taken at face value when a local
//! physical estimate can contradict them. The freezing-level height in
//! particular comes from coarse grid interpolation and can disagree badly
//! with the temperature actually forecast at the waypoint; feeding such a
//! value into the snow rules would flip verdicts on exactly the days that
//! matter.
//!
//! Validators here follow one pattern: derive the physically expected
//! value from co-reported fields, tolerate a calibrated disagreement, and
//! substitute the derived estimate beyond it while flagging that a
//! correction occurred (observability only, never control flow).

mod freezing_level;

pub use freezing_level::{CorrectedFreezingLevel, FreezingLevelValidator};
