//! Domain Models
//!
//! Slot names of the `RecommendPortfolio` intent and the risk levels users
//! can pick from.

use serde::{Deserialize, Serialize};

use dialog_core::CurrentIntent;

/// Slot names as configured on the bot
pub mod slot_names {
    pub const FIRST_NAME: &str = "firstName";
    pub const AGE: &str = "age";
    pub const INVESTMENT_AMOUNT: &str = "investmentAmount";
    pub const RISK_LEVEL: &str = "riskLevel";
}

/// Slot values of one `RecommendPortfolio` turn
#[derive(Clone, Copy, Debug, Default)]
pub struct PortfolioSlots<'a> {
    pub first_name: Option<&'a str>,
    pub age: Option<&'a str>,
    pub investment_amount: Option<&'a str>,
    pub risk_level: Option<&'a str>,
}

impl<'a> PortfolioSlots<'a> {
    pub fn from_intent(intent: &'a CurrentIntent) -> Self {
        Self {
            first_name: intent.slot(slot_names::FIRST_NAME),
            age: intent.slot(slot_names::AGE),
            investment_amount: intent.slot(slot_names::INVESTMENT_AMOUNT),
            risk_level: intent.slot(slot_names::RISK_LEVEL),
        }
    }
}

/// Risk tolerance chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    VeryLow,
    Low,
    Medium,
    High,
    /// Any label not matched above
    VeryHigh,
}

impl RiskLevel {
    /// Map a slot label to a risk level (case-sensitive, total)
    pub fn from_label(label: &str) -> Self {
        match label {
            "None" => Self::None,
            "Very Low" => Self::VeryLow,
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::VeryHigh,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Target split for this risk level
    pub const fn allocation(self) -> Allocation {
        let bonds_percent = match self {
            Self::None => 100,
            Self::VeryLow => 80,
            Self::Low => 60,
            Self::Medium => 40,
            Self::High => 20,
            Self::VeryHigh => 0,
        };
        Allocation {
            bonds_percent,
            equities_percent: 100 - bonds_percent,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Bond/equity split in whole percent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Share in AGG
    pub bonds_percent: u8,

    /// Share in SPY
    pub equities_percent: u8,
}
