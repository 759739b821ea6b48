use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// User-selected risk tolerance category.
/// Governs which scenario rate set and portfolio template apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    /// Capital preservation first — bonds, dividend ETFs, deposits
    Stable,
    /// Long-run equity growth with some ballast
    Aggressive,
    /// Concentrated thematic bets, full drawdowns accepted
    Speculative,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Stable,
        RiskProfile::Aggressive,
        RiskProfile::Speculative,
    ];

    /// Lowercase label used in wire formats and user-facing selection.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Stable => "stable",
            RiskProfile::Aggressive => "aggressive",
            RiskProfile::Speculative => "speculative",
        }
    }

    /// Parse a label, treating anything unrecognized as `Stable`.
    ///
    /// The projection engine must stay total: an unknown profile is
    /// projected conservatively rather than failing. Callers that can
    /// surface the problem should use `FromStr` instead.
    #[must_use]
    pub fn parse_or_conservative(label: &str) -> Self {
        Self::from_str(label).unwrap_or(RiskProfile::Stable)
    }
}

impl FromStr for RiskProfile {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stable" => Ok(RiskProfile::Stable),
            "aggressive" => Ok(RiskProfile::Aggressive),
            "speculative" => Ok(RiskProfile::Speculative),
            other => Err(CoreError::UnknownRiskProfile(other.to_string())),
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the three fixed return regimes projected per risk profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Pessimistic,
    Normal,
    Optimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Pessimistic,
        Scenario::Normal,
        Scenario::Optimistic,
    ];

    /// Implicit probability weight used in advisory framing only —
    /// the projection itself never weights scenarios.
    #[must_use]
    pub fn advisory_probability(&self) -> f64 {
        match self {
            Scenario::Pessimistic => 0.20,
            Scenario::Normal => 0.60,
            Scenario::Optimistic => 0.20,
        }
    }
}

/// Annual return rates assumed for each scenario of a risk profile.
///
/// Invariant: `pessimistic < normal < optimistic`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRateSet {
    pub pessimistic: f64,
    pub normal: f64,
    pub optimistic: f64,
}

impl ScenarioRateSet {
    /// Rate for a single scenario.
    #[must_use]
    pub fn rate(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Pessimistic => self.pessimistic,
            Scenario::Normal => self.normal,
            Scenario::Optimistic => self.optimistic,
        }
    }
}
