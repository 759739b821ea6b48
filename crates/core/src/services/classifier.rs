use crate::models::profile::{RiskProfile, ScenarioRateSet};

/// Maps a risk profile to its fixed scenario rate set.
///
/// A static lookup, total over the three-member enum. String entry
/// points must parse into [`RiskProfile`] first (and surface
/// `UnknownRiskProfile` there) — with one exception: the projection
/// path treats unrecognized labels as `Stable` so the engine never
/// fails for a bad selection (see `RiskProfile::parse_or_conservative`).
#[must_use]
pub fn classify(profile: RiskProfile) -> ScenarioRateSet {
    match profile {
        // Rough calibration: deposits-plus-bonds band
        RiskProfile::Stable => ScenarioRateSet {
            pessimistic: -0.02,
            normal: 0.035,
            optimistic: 0.065,
        },
        // Long-run equity band
        RiskProfile::Aggressive => ScenarioRateSet {
            pessimistic: -0.05,
            normal: 0.07,
            optimistic: 0.12,
        },
        // Thematic growth band, drawdowns included
        RiskProfile::Speculative => ScenarioRateSet {
            pessimistic: -0.15,
            normal: 0.08,
            optimistic: 0.18,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_strictly_ordered_per_profile() {
        for profile in RiskProfile::ALL {
            let rates = classify(profile);
            assert!(rates.pessimistic < rates.normal, "{profile}");
            assert!(rates.normal < rates.optimistic, "{profile}");
        }
    }
}
