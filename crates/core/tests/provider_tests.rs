// ═══════════════════════════════════════════════════════════════════
// Provider Tests — MarketDataRegistry ordering/fallback, static table
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use std::collections::HashMap;

use wealth_advisor_core::errors::CoreError;
use wealth_advisor_core::models::portfolio::{AllocationTemplate, TemplateLine};
use wealth_advisor_core::models::profile::RiskProfile;
use wealth_advisor_core::providers::fallback::{
    fallback_template, FALLBACK_TABLE_VERSION, NARRATIVE_UNAVAILABLE,
};
use wealth_advisor_core::providers::registry::MarketDataRegistry;
use wealth_advisor_core::providers::traits::MarketDataProvider;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Providers
// ═══════════════════════════════════════════════════════════════════

/// A provider that either answers everything (tagged with its name)
/// or fails everything.
struct MockProvider {
    name: String,
    healthy: bool,
}

impl MockProvider {
    fn up(name: &str) -> Self {
        Self {
            name: name.to_string(),
            healthy: true,
        }
    }

    fn down(name: &str) -> Self {
        Self {
            name: name.to_string(),
            healthy: false,
        }
    }

    fn outage(&self) -> CoreError {
        CoreError::Api {
            provider: self.name.clone(),
            message: "simulated outage".into(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_allocation_templates(
        &self,
    ) -> Result<HashMap<RiskProfile, AllocationTemplate>, CoreError> {
        if !self.healthy {
            return Err(self.outage());
        }
        let template = AllocationTemplate {
            allocations: vec![TemplateLine {
                name: format!("{}-etf", self.name),
                allocation_percent: 100,
                yield_percent: 5.0,
                description: String::new(),
            }],
            risk_level_label: "balanced".into(),
            expected_return_label: "4-8%".into(),
        };
        Ok(RiskProfile::ALL
            .iter()
            .map(|p| (*p, template.clone()))
            .collect())
    }

    async fn fetch_market_narrative(&self) -> Result<String, CoreError> {
        if self.healthy {
            Ok(format!("narrative from {}", self.name))
        } else {
            Err(self.outage())
        }
    }

    async fn fetch_tax_advantage_guidance(&self) -> Result<String, CoreError> {
        if self.healthy {
            Ok(format!("guidance from {}", self.name))
        } else {
            Err(self.outage())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Registry
// ═══════════════════════════════════════════════════════════════════

mod registry {
    use super::*;

    #[test]
    fn starts_empty() {
        let registry = MarketDataRegistry::new();
        assert_eq!(registry.provider_count(), 0);
        assert!(registry.provider_names().is_empty());
    }

    #[test]
    fn defaults_without_feed_url_register_nothing() {
        let registry = MarketDataRegistry::new_with_defaults(None);
        assert_eq!(registry.provider_count(), 0);
    }

    #[test]
    fn defaults_with_feed_url_register_http_provider() {
        let registry = MarketDataRegistry::new_with_defaults(Some("https://feed.example.com"));
        assert_eq!(registry.provider_count(), 1);
        assert_eq!(registry.provider_names(), vec!["HttpFeed".to_string()]);
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = MarketDataRegistry::new();
        registry.register(Box::new(MockProvider::up("primary")));
        registry.register(Box::new(MockProvider::up("secondary")));
        assert_eq!(
            registry.provider_names(),
            vec!["primary".to_string(), "secondary".to_string()]
        );
    }

    #[tokio::test]
    async fn first_healthy_provider_wins() {
        let mut registry = MarketDataRegistry::new();
        registry.register(Box::new(MockProvider::up("primary")));
        registry.register(Box::new(MockProvider::up("secondary")));

        let narrative = registry.fetch_market_narrative().await.unwrap();
        assert_eq!(narrative, "narrative from primary");
    }

    #[tokio::test]
    async fn failure_falls_through_to_next_provider() {
        let mut registry = MarketDataRegistry::new();
        registry.register(Box::new(MockProvider::down("primary")));
        registry.register(Box::new(MockProvider::up("secondary")));

        let narrative = registry.fetch_market_narrative().await.unwrap();
        assert_eq!(narrative, "narrative from secondary");

        let templates = registry.fetch_allocation_templates().await.unwrap();
        assert_eq!(
            templates[&RiskProfile::Stable].allocations[0].name,
            "secondary-etf"
        );
    }

    #[tokio::test]
    async fn all_providers_down_returns_last_error() {
        let mut registry = MarketDataRegistry::new();
        registry.register(Box::new(MockProvider::down("primary")));
        registry.register(Box::new(MockProvider::down("secondary")));

        let err = registry.fetch_allocation_templates().await.unwrap_err();
        assert!(matches!(err, CoreError::Api { ref provider, .. } if provider == "secondary"));
    }

    #[tokio::test]
    async fn empty_registry_reports_no_provider() {
        let registry = MarketDataRegistry::new();
        assert!(matches!(
            registry.fetch_allocation_templates().await.unwrap_err(),
            CoreError::NoProvider
        ));
        assert!(matches!(
            registry.fetch_market_narrative().await.unwrap_err(),
            CoreError::NoProvider
        ));
        assert!(matches!(
            registry.fetch_tax_advantage_guidance().await.unwrap_err(),
            CoreError::NoProvider
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Static fallback table
// ═══════════════════════════════════════════════════════════════════

mod fallback_table {
    use super::*;

    #[test]
    fn covers_all_three_profiles() {
        for profile in RiskProfile::ALL {
            let template = fallback_template(profile);
            assert!(!template.allocations.is_empty());
            assert!(!template.risk_level_label.is_empty());
            assert!(!template.expected_return_label.is_empty());
        }
    }

    #[test]
    fn percentages_sum_to_100_per_profile() {
        for profile in RiskProfile::ALL {
            let total: u32 = fallback_template(profile)
                .allocations
                .iter()
                .map(|l| u32::from(l.allocation_percent))
                .sum();
            assert_eq!(total, 100, "{profile}");
        }
    }

    #[test]
    fn table_is_versioned() {
        assert!(!FALLBACK_TABLE_VERSION.is_empty());
    }

    #[test]
    fn unavailable_narrative_is_fixed_text() {
        assert!(NARRATIVE_UNAVAILABLE.contains("baseline analysis"));
    }

    #[test]
    fn stable_template_leans_on_bonds_and_deposits() {
        let template = fallback_template(RiskProfile::Stable);
        assert!(template
            .allocations
            .iter()
            .any(|l| l.name.contains("Treasury Bond")));
    }

    #[test]
    fn speculative_template_has_most_lines() {
        let stable = fallback_template(RiskProfile::Stable).allocations.len();
        let speculative = fallback_template(RiskProfile::Speculative)
            .allocations
            .len();
        assert!(speculative > stable);
    }
}
