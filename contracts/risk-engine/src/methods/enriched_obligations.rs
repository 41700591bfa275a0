use lending_interface::types::risk_result::RiskResult;
use tracing::debug;

use crate::types::price_provider::PriceProvider;

use super::obligation_risk::calc_obligation_risk;

/// Evaluates every obligation of the snapshot. Results are sorted by health
/// ascending, the most at risk position comes first.
pub fn enriched_obligations(price_provider: &mut PriceProvider) -> Vec<RiskResult> {
    let snapshot = price_provider.snapshot();

    let mut results: Vec<RiskResult> = snapshot
        .obligations()
        .filter_map(|obligation| calc_obligation_risk(price_provider, obligation))
        .collect();

    results.sort_by(|a, b| a.health.cmp(&b.health));

    debug!(obligations = results.len(), "obligations evaluated");

    results
}

/// Health sorted obligations which can be liquidated
pub fn liquidatable_obligations(price_provider: &mut PriceProvider) -> Vec<RiskResult> {
    enriched_obligations(price_provider)
        .into_iter()
        .filter(RiskResult::is_liquidatable)
        .collect()
}
