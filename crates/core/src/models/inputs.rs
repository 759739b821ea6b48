use serde::{Deserialize, Serialize};

/// Raw user-entered asset form fields, exactly as typed.
///
/// All fields are free text because they come straight from input boxes.
/// Normalization into [`FinancialInputs`] substitutes 0 for anything
/// missing or unparseable — bad input is never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFinancialInputs {
    pub real_estate: String,
    pub stocks: String,
    pub deposits: String,
    pub mortgage: String,
    pub credit_loan: String,
    pub monthly_loan_payment: String,
    pub monthly_income: String,
    pub monthly_expenses: String,
}

/// Normalized financial inputs. Unit: 10,000-won units throughout.
///
/// Immutable once submitted to analysis — a session replaces the whole
/// record on edit rather than mutating individual fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// Real estate holdings (housing, commercial property)
    pub real_estate: u64,

    /// Stock / fund / ETF holdings
    pub stocks: u64,

    /// Cash-like holdings (deposits, savings accounts, CMA)
    pub deposits: u64,

    /// Outstanding mortgage balance
    pub mortgage: u64,

    /// Outstanding unsecured credit loan balance
    pub credit_loan: u64,

    /// Monthly loan repayment
    pub monthly_loan_payment: u64,

    /// Monthly income
    pub monthly_income: u64,

    /// Monthly living expenses (excluding loan repayment)
    pub monthly_expenses: u64,
}

/// Parse one raw field: trimmed integer text, anything else becomes 0.
/// Negative numbers fail the unsigned parse and also normalize to 0.
fn parse_field(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

impl FinancialInputs {
    /// Normalize raw form entry into non-negative integer fields.
    #[must_use]
    pub fn from_raw(raw: &RawFinancialInputs) -> Self {
        Self {
            real_estate: parse_field(&raw.real_estate),
            stocks: parse_field(&raw.stocks),
            deposits: parse_field(&raw.deposits),
            mortgage: parse_field(&raw.mortgage),
            credit_loan: parse_field(&raw.credit_loan),
            monthly_loan_payment: parse_field(&raw.monthly_loan_payment),
            monthly_income: parse_field(&raw.monthly_income),
            monthly_expenses: parse_field(&raw.monthly_expenses),
        }
    }

    /// Sum of all asset categories.
    #[must_use]
    pub fn total_assets(&self) -> u64 {
        self.real_estate + self.stocks + self.deposits
    }

    /// Sum of all loan balances.
    #[must_use]
    pub fn total_loans(&self) -> u64 {
        self.mortgage + self.credit_loan
    }

    /// True when the user entered nothing useful at all — no assets and
    /// no income. Analysis of such a record is legal but meaningless,
    /// so the presentation layer typically asks again.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_assets() == 0 && self.monthly_income == 0
    }
}
