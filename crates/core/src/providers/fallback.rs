use crate::models::portfolio::{AllocationTemplate, TemplateLine};
use crate::models::profile::RiskProfile;

/// Version tag of the bundled baseline table, bumped whenever the
/// template contents are recalibrated.
pub const FALLBACK_TABLE_VERSION: &str = "2025-08";

/// Narrative substituted when no provider can deliver market conditions.
pub const NARRATIVE_UNAVAILABLE: &str =
    "Current market information could not be retrieved; proceeding with baseline analysis.";

fn line(name: &str, allocation_percent: u8, yield_percent: f64, description: &str) -> TemplateLine {
    TemplateLine {
        name: name.to_string(),
        allocation_percent,
        yield_percent,
        description: description.to_string(),
    }
}

/// Static allocation template for a risk profile.
///
/// This table is the correctness baseline of the whole system: it covers
/// every profile, each template's percentages sum to 100, and the
/// resolver falls back to it whenever the live feed is unavailable — so
/// portfolio resolution can never come back empty.
#[must_use]
pub fn fallback_template(profile: RiskProfile) -> AllocationTemplate {
    match profile {
        RiskProfile::Stable => AllocationTemplate {
            allocations: vec![
                line("KODEX Korea Treasury Bond 3Y", 30, 3.8, "Government bonds, benefits from elevated base rates"),
                line("KODEX 200", 25, 5.2, "Large-cap Korean equity benchmark"),
                line("KODEX High Dividend", 20, 6.8, "Dividend income with stability"),
                line("Time Deposit (high rate)", 15, 3.4, "Principal protection at elevated rates"),
                line("KODEX USD MMF", 10, 4.2, "Dollar exposure plus FX cushion"),
            ],
            risk_level_label: "conservative".to_string(),
            expected_return_label: "3-7%".to_string(),
        },
        RiskProfile::Aggressive => AllocationTemplate {
            allocations: vec![
                line("KODEX 200", 25, 5.2, "Stable large-cap base"),
                line("TIGER KOSDAQ 150", 20, 8.1, "Growth and technology tilt"),
                line("TIGER S&P 500", 20, 7.8, "US large-cap quality"),
                line("KODEX Semiconductor", 15, 6.5, "Rising AI-driven demand"),
                line("TIGER Corporate Bond", 10, 4.1, "High-rate credit opportunity"),
                line("KODEX Gold", 10, 3.8, "Safe-haven hedge"),
            ],
            risk_level_label: "moderate".to_string(),
            expected_return_label: "6-12%".to_string(),
        },
        RiskProfile::Speculative => AllocationTemplate {
            allocations: vec![
                line("TIGER Nasdaq 100", 25, 9.2, "Concentrated US big tech"),
                line("KODEX Semiconductor", 20, 6.5, "AI and semiconductor theme"),
                line("TIGER KOSDAQ 150", 15, 8.1, "High-growth technology names"),
                line("KODEX 200", 15, 5.2, "Stable base"),
                line("KODEX Secondary Battery", 10, 4.3, "EV adoption theme"),
                line("KODEX Gold", 10, 3.8, "Safe-haven hedge"),
                line("Cash / USD", 5, 3.5, "Dry powder for opportunities"),
            ],
            risk_level_label: "aggressive".to_string(),
            expected_return_label: "8-20%".to_string(),
        },
    }
}
