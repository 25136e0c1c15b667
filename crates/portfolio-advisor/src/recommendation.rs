//! Recommendation Table
//!
//! Static bond (AGG) / equity (SPY) split per risk level.

use crate::model::RiskLevel;

impl RiskLevel {
    /// Human-readable split for this risk level
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::None => "100% bonds (AGG), 0% equities (SPY)",
            Self::VeryLow => "80% bonds (AGG), 20% equities (SPY)",
            Self::Low => "60% bonds (AGG), 40% equities (SPY)",
            Self::Medium => "40% bonds (AGG), 60% equities (SPY)",
            Self::High => "20% bonds (AGG), 80% equities (SPY)",
            Self::VeryHigh => "0% bonds (AGG), 100% equities (SPY)",
        }
    }
}

/// Recommendation for a risk label. Unknown labels get the all-equity split.
pub fn recommend(risk_label: &str) -> &'static str {
    RiskLevel::from_label(risk_label).recommendation()
}
