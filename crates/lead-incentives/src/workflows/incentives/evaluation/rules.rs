use super::super::classifier::{CategoryCounts, IncentiveCategory};
use super::tiers::{IncentiveTiers, Tier};
use super::TierAward;

/// Every tier the counts satisfy, in category then threshold order.
pub(crate) fn tier_awards(counts: &CategoryCounts, tiers: &IncentiveTiers) -> Vec<TierAward> {
    let mut awards = Vec::new();
    for category in IncentiveCategory::ordered() {
        let count = counts.get(category);
        let mut reached: Vec<&Tier> = tiers
            .ladder(category)
            .iter()
            .filter(|tier| count >= tier.threshold)
            .collect();
        reached.sort_by_key(|tier| tier.threshold);
        awards.extend(reached.into_iter().map(|tier| TierAward {
            category,
            threshold: tier.threshold,
            amount: tier.amount,
        }));
    }
    awards
}

/// Highest amount among satisfied tiers; 0 when none is reached.
pub fn incentive_for_counts(counts: &CategoryCounts, tiers: &IncentiveTiers) -> u32 {
    tier_awards(counts, tiers)
        .iter()
        .map(|award| award.amount)
        .max()
        .unwrap_or(0)
}

/// Nearest tier above `count` in the category's ladder.
pub fn next_tier(tiers: &IncentiveTiers, category: IncentiveCategory, count: u32) -> Option<Tier> {
    tiers
        .ladder(category)
        .iter()
        .filter(|tier| tier.threshold > count)
        .min_by_key(|tier| tier.threshold)
        .copied()
}

/// Nearest tier above `count` whose amount beats `current_incentive`.
pub fn next_raising_tier(
    tiers: &IncentiveTiers,
    category: IncentiveCategory,
    count: u32,
    current_incentive: u32,
) -> Option<Tier> {
    tiers
        .ladder(category)
        .iter()
        .filter(|tier| tier.threshold > count && tier.amount > current_incentive)
        .min_by_key(|tier| tier.threshold)
        .copied()
}
