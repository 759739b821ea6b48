use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::profile::RiskProfile;

/// One named instrument in a model portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    /// Instrument name (e.g., "KODEX 200", "TIGER Nasdaq 100")
    pub name: String,

    /// Percent weight within the portfolio (lines sum to 100)
    pub allocation_percent: u8,

    /// Advertised/recent yield of the instrument, in percent
    pub advertised_yield_percent: f64,

    /// One-line rationale for including this instrument
    pub description: String,

    /// floor(investable_amount × allocation_percent / 100),
    /// in 10,000-won units per month
    pub monthly_amount: u64,
}

/// An allocation template as delivered by a market data provider or the
/// static fallback table — lines without monthly amounts attached yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTemplate {
    pub allocations: Vec<TemplateLine>,
    pub risk_level_label: String,
    pub expected_return_label: String,
}

/// A template entry before the monthly contribution is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLine {
    pub name: String,
    pub allocation_percent: u8,
    pub yield_percent: f64,
    pub description: String,
}

impl TemplateLine {
    /// Attach the computed monthly contribution for a given investable amount.
    #[must_use]
    pub fn with_monthly_amount(&self, investable_amount: f64) -> AllocationLine {
        AllocationLine {
            name: self.name.clone(),
            allocation_percent: self.allocation_percent,
            advertised_yield_percent: self.yield_percent,
            description: self.description.clone(),
            monthly_amount: (investable_amount * f64::from(self.allocation_percent) / 100.0)
                .floor() as u64,
        }
    }
}

/// A resolved model portfolio for one risk profile.
///
/// Constructed fresh on each profile selection; never mutated; superseded
/// by the next selection or a session reset. Always non-empty — the
/// resolver degrades to the static fallback rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResult {
    /// Which profile this portfolio was built for
    pub profile: RiskProfile,

    /// Ordered allocation lines with monthly contributions attached
    pub core: Vec<AllocationLine>,

    /// Human-readable risk level (e.g., "conservative", "balanced")
    pub risk_level: String,

    /// Expected annual return range label (e.g., "3-7%")
    pub expected_return: String,

    /// Free-text market-conditions narrative. Advisory only — never
    /// used in any numeric computation.
    pub market_narrative: String,

    /// Tax-advantaged investment guidance, fetched only when the
    /// investable amount clears the threshold. Absence is not an error.
    pub tax_guidance: Option<String>,

    /// True when the allocations came from a live provider,
    /// false when the static fallback table was used.
    pub is_live_data: bool,

    /// Date the portfolio was resolved
    pub as_of: NaiveDate,
}
