use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Cost/quality band used to bracket a renovation estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Middle,
    High,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Self::Low, Self::Middle, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Middle => "Middle",
            Self::High => "High",
        }
    }

    /// Share of the initial budget set aside for overruns.
    pub fn contingency_rate(&self) -> Decimal {
        match self {
            Self::Low => dec!(0.10),
            Self::Middle => dec!(0.15),
            Self::High => dec!(0.25),
        }
    }

    /// Share of monthly income put toward the project.
    pub fn savings_rate(&self) -> Decimal {
        match self {
            Self::Low => dec!(0.20),
            Self::Middle => dec!(0.25),
            Self::High => dec!(0.30),
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Tier {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
