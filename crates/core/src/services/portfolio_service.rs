use chrono::Utc;

use crate::models::portfolio::{AllocationTemplate, PortfolioResult};
use crate::models::profile::RiskProfile;
use crate::providers::fallback::{fallback_template, NARRATIVE_UNAVAILABLE};
use crate::providers::registry::MarketDataRegistry;

/// Tax-advantage guidance is only worth fetching when there is real
/// monthly headroom to invest (10,000-won units).
const TAX_GUIDANCE_THRESHOLD: f64 = 100.0;

/// Resolves a model portfolio for a risk profile and investable amount.
///
/// The resilience contract: **resolution always succeeds**. Every
/// provider failure is absorbed here — the result degrades to the
/// bundled fallback table and records the degradation only in the
/// `is_live_data` provenance flag. That is why `resolve` returns a
/// plain `PortfolioResult` and not a `Result`.
pub struct PortfolioService {
    registry: MarketDataRegistry,
}

impl PortfolioService {
    pub fn new(registry: MarketDataRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a portfolio for `profile`, attaching per-line monthly
    /// contributions computed from `investable_amount`.
    ///
    /// Sequential provider calls, no internal concurrency. Overlapping
    /// invocations are the caller's concern (see the facade's
    /// resolution tickets for last-submitted-wins sequencing).
    pub async fn resolve(&self, profile: RiskProfile, investable_amount: f64) -> PortfolioResult {
        // 1. Live allocation templates, degrading to the static table.
        //    A provider response that lacks this profile (or carries an
        //    empty template for it) counts as unavailable too.
        let (template, is_live_data): (AllocationTemplate, bool) = match self
            .registry
            .fetch_allocation_templates()
            .await
        {
            Ok(mut templates) => match templates.remove(&profile) {
                Some(t) if !t.allocations.is_empty() => (t, true),
                _ => (fallback_template(profile), false),
            },
            Err(_) => (fallback_template(profile), false),
        };

        // 2. Monthly contribution per allocation line
        let core = template
            .allocations
            .iter()
            .map(|line| line.with_monthly_amount(investable_amount))
            .collect();

        // 3. Tax-advantage guidance, only above the threshold; absence is fine
        let tax_guidance = if investable_amount >= TAX_GUIDANCE_THRESHOLD {
            self.registry.fetch_tax_advantage_guidance().await.ok()
        } else {
            None
        };

        // 4. Market narrative, with a fixed substitute on failure
        let market_narrative = self
            .registry
            .fetch_market_narrative()
            .await
            .unwrap_or_else(|_| NARRATIVE_UNAVAILABLE.to_string());

        PortfolioResult {
            profile,
            core,
            risk_level: template.risk_level_label,
            expected_return: template.expected_return_label,
            market_narrative,
            tax_guidance,
            is_live_data,
            as_of: Utc::now().date_naive(),
        }
    }
}
