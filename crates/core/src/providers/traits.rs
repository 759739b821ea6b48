use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::portfolio::AllocationTemplate;
use crate::models::profile::RiskProfile;

/// Trait abstraction for external market data sources.
///
/// Each backing (live HTTP feed, cache, static stub) implements this
/// trait. The Portfolio Resolver only ever sees the capability — if a
/// feed goes away, only that one implementation is replaced.
///
/// Every operation is allowed to fail; the resolver treats any error as
/// "unavailable" and degrades to the static fallback table. Failures
/// never propagate past the resolver.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Current allocation templates, one per risk profile.
    /// A provider may cover only some profiles; missing entries are
    /// treated as unavailable for that profile.
    async fn fetch_allocation_templates(
        &self,
    ) -> Result<HashMap<RiskProfile, AllocationTemplate>, CoreError>;

    /// Free-text current-market-conditions narrative.
    async fn fetch_market_narrative(&self) -> Result<String, CoreError>;

    /// Tax-advantaged investment guidance text (ISA, pension accounts, …).
    async fn fetch_tax_advantage_guidance(&self) -> Result<String, CoreError>;
}
