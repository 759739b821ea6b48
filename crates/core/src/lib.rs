pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    inputs::{FinancialInputs, RawFinancialInputs},
    portfolio::PortfolioResult,
    profile::{RiskProfile, ScenarioRateSet},
    projection::ProjectionResult,
    snapshot::Snapshot,
};
use providers::registry::MarketDataRegistry;
use services::{
    classifier, portfolio_service::PortfolioService, projection_service::ProjectionService,
    snapshot_service::SnapshotService,
};

use errors::CoreError;

/// Maximum projection horizon in years.
const MAX_HORIZON_YEARS: u32 = 50;

/// Real-estate growth assumptions outside this band are almost
/// certainly input mistakes.
const REAL_ESTATE_GROWTH_BAND: std::ops::RangeInclusive<f64> = -0.5..=0.5;

/// Default projection horizon.
const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Default annual real-estate growth assumption.
const DEFAULT_REAL_ESTATE_GROWTH: f64 = 0.03;

/// Handle to one in-flight portfolio resolution.
///
/// Tickets order overlapping resolutions by **arrival**: only the most
/// recently issued ticket may install its result, so a slow provider
/// response can never overwrite a newer profile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTicket {
    seq: u64,
    profile: RiskProfile,
}

impl ResolutionTicket {
    /// The profile this resolution was requested for.
    #[must_use]
    pub fn profile(&self) -> RiskProfile {
        self.profile
    }
}

/// Main entry point for the Wealth Advisor core library.
/// Holds one user session and all services needed to operate on it.
#[must_use]
pub struct WealthAdvisor {
    inputs: Option<FinancialInputs>,
    snapshot: Option<Snapshot>,
    profile: Option<RiskProfile>,
    horizon_years: u32,
    real_estate_growth_rate: f64,
    portfolio: Option<PortfolioResult>,
    /// Sequence number of the most recently issued resolution ticket.
    resolution_seq: u64,
    snapshot_service: SnapshotService,
    portfolio_service: PortfolioService,
    projection_service: ProjectionService,
}

impl std::fmt::Debug for WealthAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WealthAdvisor")
            .field("has_inputs", &self.inputs.is_some())
            .field("profile", &self.profile)
            .field("horizon_years", &self.horizon_years)
            .field("real_estate_growth_rate", &self.real_estate_growth_rate)
            .field("has_portfolio", &self.portfolio.is_some())
            .finish()
    }
}

impl WealthAdvisor {
    /// Create a fresh session with no live feed configured.
    /// Portfolio resolution then runs entirely on the bundled fallback table.
    pub fn new() -> Self {
        Self::with_registry(MarketDataRegistry::new())
    }

    /// Create a session against a specific set of market data providers.
    pub fn with_registry(registry: MarketDataRegistry) -> Self {
        Self {
            inputs: None,
            snapshot: None,
            profile: None,
            horizon_years: DEFAULT_HORIZON_YEARS,
            real_estate_growth_rate: DEFAULT_REAL_ESTATE_GROWTH,
            portfolio: None,
            resolution_seq: 0,
            snapshot_service: SnapshotService::new(),
            portfolio_service: PortfolioService::new(registry),
            projection_service: ProjectionService::new(),
        }
    }

    // ── Inputs & Snapshot ───────────────────────────────────────────

    /// Normalize raw form entry and analyze it into a fresh snapshot.
    ///
    /// Unparseable fields become zero; submission itself cannot fail.
    /// Any previously resolved portfolio is discarded since its monthly
    /// amounts were computed from the old investable amount; outstanding
    /// resolution tickets are invalidated for the same reason.
    pub fn submit_inputs(&mut self, raw: &RawFinancialInputs) -> &Snapshot {
        let inputs = FinancialInputs::from_raw(raw);
        let snapshot = self.snapshot_service.analyze(&inputs);
        self.inputs = Some(inputs);
        self.portfolio = None;
        self.resolution_seq += 1;
        self.snapshot.insert(snapshot)
    }

    /// The current snapshot, if inputs have been submitted.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The normalized inputs, if submitted.
    #[must_use]
    pub fn inputs(&self) -> Option<&FinancialInputs> {
        self.inputs.as_ref()
    }

    // ── Assumptions ─────────────────────────────────────────────────

    /// Set the projection horizon in years (0 ≤ years ≤ 50).
    pub fn set_horizon(&mut self, years: u32) -> Result<(), CoreError> {
        if years > MAX_HORIZON_YEARS {
            return Err(CoreError::ValidationError(format!(
                "Horizon of {years} years exceeds maximum of {MAX_HORIZON_YEARS}"
            )));
        }
        self.horizon_years = years;
        Ok(())
    }

    /// Set the annual real-estate growth assumption (within ±50%).
    pub fn set_real_estate_growth_rate(&mut self, rate: f64) -> Result<(), CoreError> {
        if !rate.is_finite() || !REAL_ESTATE_GROWTH_BAND.contains(&rate) {
            return Err(CoreError::ValidationError(format!(
                "Real-estate growth rate {rate} is outside the accepted band (-0.5..=0.5)"
            )));
        }
        self.real_estate_growth_rate = rate;
        Ok(())
    }

    #[must_use]
    pub fn horizon(&self) -> u32 {
        self.horizon_years
    }

    #[must_use]
    pub fn real_estate_growth_rate(&self) -> f64 {
        self.real_estate_growth_rate
    }

    // ── Profile & Classification ────────────────────────────────────

    /// Scenario rates for a profile. Static lookup, never fails.
    #[must_use]
    pub fn scenario_rates(profile: RiskProfile) -> ScenarioRateSet {
        classifier::classify(profile)
    }

    /// The currently selected profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<RiskProfile> {
        self.profile
    }

    // ── Portfolio Resolution ────────────────────────────────────────

    /// Begin a portfolio resolution for `profile`.
    ///
    /// Records the selection immediately and returns a ticket. The
    /// caller resolves with [`resolve_portfolio`](Self::resolve_portfolio)
    /// and installs with [`install_portfolio`](Self::install_portfolio);
    /// only the newest ticket's result is accepted, which gives
    /// last-submitted-wins semantics when the user re-selects while a
    /// slow resolution is still in flight.
    pub fn begin_resolution(
        &mut self,
        profile: RiskProfile,
    ) -> Result<ResolutionTicket, CoreError> {
        if self.snapshot.is_none() {
            return Err(CoreError::MissingInputs);
        }
        self.profile = Some(profile);
        self.resolution_seq += 1;
        Ok(ResolutionTicket {
            seq: self.resolution_seq,
            profile,
        })
    }

    /// Run the (possibly slow) resolution for a ticket.
    ///
    /// Infallible by contract: provider failures degrade to the static
    /// fallback and are recorded only in the result's provenance flag.
    pub async fn resolve_portfolio(&self, ticket: ResolutionTicket) -> PortfolioResult {
        let investable = self
            .snapshot
            .map(|s| s.investable_amount)
            .unwrap_or(0.0);
        self.portfolio_service
            .resolve(ticket.profile, investable)
            .await
    }

    /// Install a resolved portfolio. Returns `false` (and discards the
    /// result) when the ticket has been superseded by a newer one.
    pub fn install_portfolio(&mut self, ticket: ResolutionTicket, result: PortfolioResult) -> bool {
        if ticket.seq != self.resolution_seq {
            return false;
        }
        self.portfolio = Some(result);
        true
    }

    /// Select a profile and resolve its portfolio in one step.
    /// Convenience wrapper over the ticketed API for callers that do
    /// not overlap resolutions.
    pub async fn select_profile(
        &mut self,
        profile: RiskProfile,
    ) -> Result<&PortfolioResult, CoreError> {
        let ticket = self.begin_resolution(profile)?;
        let result = self.resolve_portfolio(ticket).await;
        // &mut self prevents any interleaved selection, so this ticket
        // is still the newest and installation cannot be refused.
        debug_assert_eq!(ticket.seq, self.resolution_seq);
        Ok(self.portfolio.insert(result))
    }

    /// The current portfolio, if one has been resolved and installed.
    #[must_use]
    pub fn portfolio(&self) -> Option<&PortfolioResult> {
        self.portfolio.as_ref()
    }

    // ── Projection ──────────────────────────────────────────────────

    /// Project net worth over the configured horizon under the selected
    /// profile's three scenarios.
    ///
    /// Fails only when no inputs or no profile have been submitted —
    /// the engine itself is total for any well-formed numbers.
    pub fn project(&self) -> Result<ProjectionResult, CoreError> {
        let inputs = self.inputs.as_ref().ok_or(CoreError::MissingInputs)?;
        let snapshot = self.snapshot.as_ref().ok_or(CoreError::MissingInputs)?;
        let profile = self.profile.ok_or(CoreError::MissingProfile)?;

        Ok(self.projection_service.project(
            inputs,
            profile,
            self.real_estate_growth_rate,
            snapshot.investable_amount,
            self.horizon_years,
        ))
    }

    /// Project for a profile label coming from an untyped source.
    /// Unknown labels are projected conservatively as `stable` — the
    /// projection never fails for a bad selection.
    pub fn project_for_label(&self, label: &str) -> Result<ProjectionResult, CoreError> {
        let inputs = self.inputs.as_ref().ok_or(CoreError::MissingInputs)?;
        let snapshot = self.snapshot.as_ref().ok_or(CoreError::MissingInputs)?;
        let profile = RiskProfile::parse_or_conservative(label);

        Ok(self.projection_service.project(
            inputs,
            profile,
            self.real_estate_growth_rate,
            snapshot.investable_amount,
            self.horizon_years,
        ))
    }

    // ── Reset ───────────────────────────────────────────────────────

    /// Full reset back to an empty session. Assumptions return to their
    /// defaults; issued resolution tickets are invalidated.
    pub fn reset(&mut self) {
        self.inputs = None;
        self.snapshot = None;
        self.profile = None;
        self.portfolio = None;
        self.horizon_years = DEFAULT_HORIZON_YEARS;
        self.real_estate_growth_rate = DEFAULT_REAL_ESTATE_GROWTH;
        self.resolution_seq += 1;
    }
}

impl Default for WealthAdvisor {
    fn default() -> Self {
        Self::new()
    }
}
