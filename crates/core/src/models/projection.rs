use serde::{Deserialize, Serialize};

use super::profile::Scenario;

/// Extra multiplier the presentation layer may apply to the optimistic
/// scenario's net assets. Deliberately NOT baked into the projection —
/// stored results hold the unadjusted arithmetic.
pub const OPTIMISTIC_DISPLAY_BOOST: f64 = 0.15;

/// Projected value of each asset category at the end of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetBreakdown {
    pub real_estate: f64,
    pub existing_investments: f64,
    pub monthly_contributions: f64,
    pub cash: f64,
}

/// Terminal result of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Sum of all projected asset categories
    pub total_assets: f64,

    /// total_assets - remaining_loan_balance; may be negative
    pub net_assets: f64,

    /// Loan balance left after linear paydown, never negative
    pub remaining_loan_balance: f64,

    /// net_assets - current net assets; negative when the scenario loses money
    pub asset_growth: f64,

    /// Future value of the accumulated monthly contributions
    pub contribution_accumulated: f64,

    /// Per-category terminal values
    pub breakdown: AssetBreakdown,
}

impl ScenarioOutcome {
    /// Net assets with a display-time boost applied (render-layer concern).
    /// Pass [`OPTIMISTIC_DISPLAY_BOOST`] to reproduce the advisor's
    /// optimistic framing.
    #[must_use]
    pub fn boosted_net_assets(&self, boost: f64) -> f64 {
        (self.net_assets * (1.0 + boost)).floor()
    }
}

/// One row of the year-by-year series used for charting.
/// Loans are carried as a negative value so stacked charts subtract them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyPoint {
    /// Years from now; 0 is the current snapshot
    pub year: u32,
    pub real_estate: f64,
    pub existing_investments: f64,
    pub monthly_contributions: f64,
    pub cash: f64,
    /// Remaining loan balance, negated
    pub loans: f64,
    pub net_assets: f64,
}

/// Full projection over a horizon, one outcome per scenario.
///
/// Immutable once computed; recomputed in full whenever the horizon,
/// risk profile, or real-estate growth assumption changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Net assets today, before any growth
    pub current_net_assets: i64,

    /// Projection horizon in years
    pub years: u32,

    /// Assumed monthly contribution, in 10,000-won units
    pub investable_amount: f64,

    /// investable_amount × 12 × years — principal paid in, ignoring growth
    pub total_contributed: f64,

    pub pessimistic: ScenarioOutcome,
    pub normal: ScenarioOutcome,
    pub optimistic: ScenarioOutcome,

    /// Year-by-year series for the normal scenario only
    /// (year = 0..=years inclusive).
    pub yearly: Vec<YearlyPoint>,
}

impl ProjectionResult {
    /// Outcome for a single scenario.
    #[must_use]
    pub fn scenario(&self, scenario: Scenario) -> &ScenarioOutcome {
        match scenario {
            Scenario::Pessimistic => &self.pessimistic,
            Scenario::Normal => &self.normal,
            Scenario::Optimistic => &self.optimistic,
        }
    }
}
