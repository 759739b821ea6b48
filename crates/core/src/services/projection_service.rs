use crate::models::inputs::FinancialInputs;
use crate::models::profile::{RiskProfile, Scenario};
use crate::models::projection::{
    AssetBreakdown, ProjectionResult, ScenarioOutcome, YearlyPoint,
};
use crate::services::classifier::classify;

/// Annual rate applied to cash/deposit holdings, independent of scenario.
pub const DEPOSIT_RATE: f64 = 0.03;

/// Deterministic compound-growth projection of net worth.
///
/// Pure, synchronous, side-effect-free — safe to call repeatedly and
/// concurrently; identical inputs give identical results. Total for
/// any real-valued rates, non-negative years, and non-negative money:
/// negative scenario rates shrink holdings without clamping, and the
/// degenerate contribution branch below keeps the annuity formula away
/// from division by zero.
pub struct ProjectionService;

/// Future value of an ordinary annuity: `amount` contributed monthly at
/// annual rate `rate`, reinvested at the monthly-equivalent rate.
///
/// For non-positive rates the monthly-compounding formula degenerates,
/// so contributions accumulate as straight principal instead. That
/// branch is a deliberate policy, not an approximation shortcut.
fn contribution_future_value(amount: f64, rate: f64, years: u32) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }
    let months = f64::from(years) * 12.0;
    if rate > 0.0 {
        let monthly_rate = rate / 12.0;
        amount * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
    } else {
        amount * months
    }
}

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Project the snapshot `years` ahead under all three scenarios of
    /// `profile`'s rate set.
    ///
    /// - Real estate grows at `real_estate_growth_rate`, scenario-independent.
    /// - Existing stock/fund holdings grow at the scenario rate.
    /// - Deposits grow at the fixed [`DEPOSIT_RATE`].
    /// - Loans pay down linearly at the monthly payment; no interest modeled.
    ///
    /// `years = 0` is the identity projection: every scenario's net
    /// assets equal the current snapshot's.
    #[must_use]
    pub fn project(
        &self,
        inputs: &FinancialInputs,
        profile: RiskProfile,
        real_estate_growth_rate: f64,
        investable_amount: f64,
        years: u32,
    ) -> ProjectionResult {
        let rates = classify(profile);
        let current_net_assets = inputs.total_assets() as i64 - inputs.total_loans() as i64;

        let project_scenario = |rate: f64, horizon: u32| -> ScenarioOutcome {
            let h = f64::from(horizon);
            let real_estate =
                inputs.real_estate as f64 * (1.0 + real_estate_growth_rate).powf(h);
            let existing_investments = inputs.stocks as f64 * (1.0 + rate).powf(h);
            let cash = inputs.deposits as f64 * (1.0 + DEPOSIT_RATE).powf(h);
            let contribution_accumulated =
                contribution_future_value(investable_amount, rate, horizon);

            let total_loans = inputs.total_loans() as f64;
            let paid = (inputs.monthly_loan_payment as f64 * 12.0 * h).min(total_loans);
            let remaining_loan_balance = (total_loans - paid).max(0.0);

            let total_assets =
                real_estate + existing_investments + cash + contribution_accumulated;
            let net_assets = total_assets - remaining_loan_balance;

            ScenarioOutcome {
                total_assets,
                net_assets,
                remaining_loan_balance,
                asset_growth: net_assets - current_net_assets as f64,
                contribution_accumulated,
                breakdown: AssetBreakdown {
                    real_estate,
                    existing_investments,
                    monthly_contributions: contribution_accumulated,
                    cash,
                },
            }
        };

        let pessimistic = project_scenario(rates.rate(Scenario::Pessimistic), years);
        let normal = project_scenario(rates.rate(Scenario::Normal), years);
        let optimistic = project_scenario(rates.rate(Scenario::Optimistic), years);

        // Year-by-year series for the normal scenario only — the chart
        // tracks the middle path, not all three.
        let yearly = (0..=years)
            .map(|year| {
                let outcome = project_scenario(rates.rate(Scenario::Normal), year);
                YearlyPoint {
                    year,
                    real_estate: outcome.breakdown.real_estate,
                    existing_investments: outcome.breakdown.existing_investments,
                    monthly_contributions: outcome.breakdown.monthly_contributions,
                    cash: outcome.breakdown.cash,
                    loans: -outcome.remaining_loan_balance,
                    net_assets: outcome.net_assets,
                }
            })
            .collect();

        ProjectionResult {
            current_net_assets,
            years,
            investable_amount,
            total_contributed: investable_amount * 12.0 * f64::from(years),
            pessimistic,
            normal,
            optimistic,
            yearly,
        }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
