use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::portfolio::AllocationTemplate;
use crate::models::profile::RiskProfile;

use super::http::HttpMarketDataProvider;
use super::traits::MarketDataProvider;

/// Registry of all available market data providers.
///
/// Operations are tried against providers in registration order; the
/// first success wins. New providers can be added without modifying
/// existing code.
pub struct MarketDataRegistry {
    providers: Vec<Box<dyn MarketDataProvider>>,
}

impl MarketDataRegistry {
    /// Create an empty registry. With no providers registered, every
    /// fetch reports unavailability and the resolver runs entirely on
    /// the static fallback table.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the default live feed pre-configured,
    /// when a feed endpoint is known.
    pub fn new_with_defaults(feed_url: Option<&str>) -> Self {
        let mut registry = Self::new();

        if let Some(url) = feed_url {
            registry.register(Box::new(HttpMarketDataProvider::new(url)));
        }

        registry
    }

    /// Register a new market data provider.
    pub fn register(&mut self, provider: Box<dyn MarketDataProvider>) {
        self.providers.push(provider);
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Names of registered providers, in priority order.
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Fetch allocation templates from the first provider that responds.
    pub async fn fetch_allocation_templates(
        &self,
    ) -> Result<HashMap<RiskProfile, AllocationTemplate>, CoreError> {
        let mut last_error = None;
        for provider in &self.providers {
            match provider.fetch_allocation_templates().await {
                Ok(templates) => return Ok(templates),
                Err(e) => {
                    last_error = Some(e);
                    // Try next provider
                }
            }
        }
        Err(last_error.unwrap_or(CoreError::NoProvider))
    }

    /// Fetch the market narrative from the first provider that responds.
    pub async fn fetch_market_narrative(&self) -> Result<String, CoreError> {
        let mut last_error = None;
        for provider in &self.providers {
            match provider.fetch_market_narrative().await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(CoreError::NoProvider))
    }

    /// Fetch tax-advantage guidance from the first provider that responds.
    pub async fn fetch_tax_advantage_guidance(&self) -> Result<String, CoreError> {
        let mut last_error = None;
        for provider in &self.providers {
            match provider.fetch_tax_advantage_guidance().await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(CoreError::NoProvider))
    }
}

impl Default for MarketDataRegistry {
    fn default() -> Self {
        Self::new()
    }
}
