use serde::{Deserialize, Serialize};

/// Point-in-time view of the user's finances, derived from
/// [`FinancialInputs`](super::inputs::FinancialInputs).
///
/// Never mutated after creation — recomputed fresh whenever inputs change.
/// All values are in 10,000-won units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// real_estate + stocks + deposits
    pub total_assets: u64,

    /// mortgage + credit_loan
    pub total_loans: u64,

    /// total_assets - total_loans; negative when loans exceed assets
    pub net_assets: i64,

    /// Per-category composition, mirrored from the inputs
    pub real_estate_assets: u64,
    pub investment_assets: u64,
    pub cash_assets: u64,

    /// Integer percent of total_assets per category (round half-up).
    /// All zero when total_assets is zero.
    pub real_estate_percent: u8,
    pub investment_percent: u8,
    pub cash_percent: u8,

    /// monthly_income - monthly_expenses - monthly_loan_payment; may be negative
    pub monthly_free_cash: i64,

    /// Half of free cash, floored at zero — the assumed new monthly
    /// contribution going forward.
    pub investable_amount: f64,
}

/// Advisory classification of the snapshot's cash-flow and balance-sheet
/// shape. Tagged variants so the presentation layer pattern-matches
/// instead of re-deriving thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashFlowHealth {
    /// Expenses plus loan payments exceed income
    SpendingExceedsIncome,
    /// Free cash below 10% of income — investing should start small
    TightBudget,
    /// Comfortable free cash
    Healthy,
}

/// Balance-sheet observations worth surfacing alongside the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSheetNote {
    /// Loans exceed half of total assets
    HighLeverage,
    /// Cash holdings above 60% of assets
    CashHeavy,
    /// Investment holdings below 10% despite positive free cash
    UnderInvested,
}

impl Snapshot {
    /// Classify the monthly cash flow.
    #[must_use]
    pub fn cash_flow_health(&self, monthly_income: u64) -> CashFlowHealth {
        if self.monthly_free_cash < 0 {
            CashFlowHealth::SpendingExceedsIncome
        } else if (self.monthly_free_cash as f64) < monthly_income as f64 * 0.1 {
            CashFlowHealth::TightBudget
        } else {
            CashFlowHealth::Healthy
        }
    }

    /// Collect balance-sheet observations, in a stable order.
    #[must_use]
    pub fn balance_sheet_notes(&self) -> Vec<BalanceSheetNote> {
        let mut notes = Vec::new();
        if self.total_assets > 0 && self.total_loans as f64 > self.total_assets as f64 * 0.5 {
            notes.push(BalanceSheetNote::HighLeverage);
        }
        if self.total_assets > 0 && self.cash_percent > 60 {
            notes.push(BalanceSheetNote::CashHeavy);
        }
        if self.total_assets > 0 && self.investment_percent < 10 && self.monthly_free_cash > 0 {
            notes.push(BalanceSheetNote::UnderInvested);
        }
        notes
    }
}
