use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::portfolio::{AllocationTemplate, TemplateLine};
use crate::models::profile::RiskProfile;

use super::traits::MarketDataProvider;

/// Provider call timeout. An unbounded hang would block the resolver,
/// so every request is capped (native targets only — browsers enforce
/// their own limits).
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Live market data over HTTP/JSON.
///
/// Endpoints (relative to the configured base URL):
/// - `GET /v1/allocations`      — allocation templates keyed by profile label
/// - `GET /v1/market-narrative` — current-market-conditions text
/// - `GET /v1/tax-guidance`     — tax-advantaged investment guidance text
///
/// Any transport, parse, or shape problem surfaces as a `CoreError`;
/// the resolver treats all of them as "feed unavailable".
pub struct HttpMarketDataProvider {
    client: Client,
    base_url: String,
}

impl HttpMarketDataProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

// ── Feed response types ─────────────────────────────────────────────

#[derive(Deserialize)]
struct TemplateResponse {
    allocations: Vec<LineResponse>,
    risk_level: String,
    expected_return: String,
}

#[derive(Deserialize)]
struct LineResponse {
    name: String,
    allocation_percent: u8,
    yield_percent: f64,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct NarrativeResponse {
    narrative: String,
}

#[derive(Deserialize)]
struct GuidanceResponse {
    guidance: String,
}

impl From<TemplateResponse> for AllocationTemplate {
    fn from(resp: TemplateResponse) -> Self {
        AllocationTemplate {
            allocations: resp
                .allocations
                .into_iter()
                .map(|line| TemplateLine {
                    name: line.name,
                    allocation_percent: line.allocation_percent,
                    yield_percent: line.yield_percent,
                    description: line.description,
                })
                .collect(),
            risk_level_label: resp.risk_level,
            expected_return_label: resp.expected_return,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for HttpMarketDataProvider {
    fn name(&self) -> &str {
        "HttpFeed"
    }

    async fn fetch_allocation_templates(
        &self,
    ) -> Result<HashMap<RiskProfile, AllocationTemplate>, CoreError> {
        let url = format!("{}/v1/allocations", self.base_url);

        let resp: HashMap<String, TemplateResponse> = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "HttpFeed".into(),
                message: format!("Failed to parse allocation templates: {e}"),
            })?;

        // Unknown profile keys and empty templates are dropped — a
        // missing entry means "unavailable for that profile", not an error.
        let templates: HashMap<RiskProfile, AllocationTemplate> = resp
            .into_iter()
            .filter_map(|(label, template)| {
                let profile = RiskProfile::from_str(&label).ok()?;
                if template.allocations.is_empty() {
                    return None;
                }
                Some((profile, template.into()))
            })
            .collect();

        if templates.is_empty() {
            return Err(CoreError::Api {
                provider: "HttpFeed".into(),
                message: "Allocation feed contained no usable templates".into(),
            });
        }

        Ok(templates)
    }

    async fn fetch_market_narrative(&self) -> Result<String, CoreError> {
        let url = format!("{}/v1/market-narrative", self.base_url);

        let resp: NarrativeResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "HttpFeed".into(),
                message: format!("Failed to parse market narrative: {e}"),
            })?;

        Ok(resp.narrative)
    }

    async fn fetch_tax_advantage_guidance(&self) -> Result<String, CoreError> {
        let url = format!("{}/v1/tax-guidance", self.base_url);

        let resp: GuidanceResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "HttpFeed".into(),
                message: format!("Failed to parse tax guidance: {e}"),
            })?;

        Ok(resp.guidance)
    }
}
