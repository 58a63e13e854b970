//! Portfolio Recommendation
//!
//! Maps the risk level a user picked to a fixed bonds/equities split.
//!
//! ```text
//! None       AGG ████████████████████ 100%   SPY                       0%
//! Very Low   AGG ████████████████      80%   SPY ████                 20%
//! Low        AGG ████████████          60%   SPY ████████             40%
//! Medium     AGG ████████              40%   SPY ████████████         60%
//! High       AGG ████                  20%   SPY ████████████████     80%
//! Very High  AGG                        0%   SPY ████████████████████ 100%
//! ```

use serde::{Deserialize, Serialize};

/// Risk levels offered by the bot's `riskLevel` slot type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "None")]
    NoRisk,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [Self; 6] = [
        Self::NoRisk,
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    /// Exact slot value for this level
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoRisk => "None",
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// Bond share of the portfolio, in percent
    pub const fn bonds_percent(self) -> u8 {
        match self {
            Self::NoRisk => 100,
            Self::VeryLow => 80,
            Self::Low => 60,
            Self::Medium => 40,
            Self::High => 20,
            Self::VeryHigh => 0,
        }
    }

    pub const fn equities_percent(self) -> u8 {
        100 - self.bonds_percent()
    }

    pub const fn allocation(self) -> &'static str {
        match self {
            Self::NoRisk => "100% bonds (AGG), 0% equities (SPY)",
            Self::VeryLow => "80% bonds (AGG), 20% equities (SPY)",
            Self::Low => "60% bonds (AGG), 40% equities (SPY)",
            Self::Medium => "40% bonds (AGG), 60% equities (SPY)",
            Self::High => "20% bonds (AGG), 80% equities (SPY)",
            Self::VeryHigh => "0% bonds (AGG), 100% equities (SPY)",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Allocation for a risk-level label.
///
/// Labels outside the known set get the all-equities allocation, same as
/// "Very High". That default is probably unintended, so it is logged.
pub fn recommend(risk_level: &str) -> &'static str {
    RiskLevel::from_label(risk_level)
        .unwrap_or_else(|| {
            tracing::warn!(
                risk_level,
                "Unrecognized risk level, falling back to the most aggressive allocation"
            );
            RiskLevel::VeryHigh
        })
        .allocation()
}
