use crate::models::inputs::FinancialInputs;
use crate::models::snapshot::Snapshot;

/// Derives the point-in-time financial snapshot from normalized inputs.
///
/// Pure business logic — no I/O, no failure modes. Easy to test.
pub struct SnapshotService;

/// Integer percent share of `part` over `total`, round half-up.
/// Zero when `total` is zero, so composition is always defined.
fn percent_of(part: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

impl SnapshotService {
    pub fn new() -> Self {
        Self
    }

    /// Analyze normalized inputs into a snapshot.
    ///
    /// - `net_assets` and `monthly_free_cash` may legitimately be negative.
    /// - `investable_amount` is half of free cash, floored at zero.
    #[must_use]
    pub fn analyze(&self, inputs: &FinancialInputs) -> Snapshot {
        let total_assets = inputs.total_assets();
        let total_loans = inputs.total_loans();

        let monthly_free_cash = inputs.monthly_income as i64
            - inputs.monthly_expenses as i64
            - inputs.monthly_loan_payment as i64;

        Snapshot {
            total_assets,
            total_loans,
            net_assets: total_assets as i64 - total_loans as i64,
            real_estate_assets: inputs.real_estate,
            investment_assets: inputs.stocks,
            cash_assets: inputs.deposits,
            real_estate_percent: percent_of(inputs.real_estate, total_assets),
            investment_percent: percent_of(inputs.stocks, total_assets),
            cash_percent: percent_of(inputs.deposits, total_assets),
            monthly_free_cash,
            investable_amount: (monthly_free_cash as f64 * 0.5).max(0.0),
        }
    }
}

impl Default for SnapshotService {
    fn default() -> Self {
        Self::new()
    }
}
