//! Cosmetic condition labels from upstream categorical codes
//!
//! The hourly feed carries a WMO-style categorical weather code. It is
//! kept for one purpose only: a short display label on cards and
//! dashboards for non-precipitating conditions. Phase decisions never
//! consult it - see [`crate::traits::PhasePolicy`].

/// Display label for an upstream categorical weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionLabel {
    /// Clear sky.
    Clear,
    /// Partly to mostly cloudy.
    Cloudy,
    /// Fog or depositing rime fog.
    Fog,
    /// Drizzle or rain.
    Rain,
    /// Snowfall or snow grains.
    Snow,
    /// Rain showers.
    Storm,
    /// Thunderstorm.
    Thunder,
    /// Anything else: overcast.
    Overcast,
}

impl ConditionLabel {
    /// Map an upstream categorical code to its display label.
    pub const fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51..=67 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            80..=82 => Self::Storm,
            95..=99 => Self::Thunder,
            _ => Self::Overcast,
        }
    }

    /// Uppercase card label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::Cloudy => "CLOUDY",
            Self::Fog => "FOG",
            Self::Rain => "RAIN",
            Self::Snow => "SNOW",
            Self::Storm => "STORM",
            Self::Thunder => "THUNDER",
            Self::Overcast => "OVCAST",
        }
    }
}
