mod rules;
mod tiers;

pub use rules::{incentive_for_counts, next_raising_tier, next_tier};
pub use tiers::{IncentiveTiers, Tier};

use super::classifier::{CategoryCounts, IncentiveCategory};
use super::period::TargetZone;
use crate::workflows::leads::{EmployeeTarget, LeadRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator applying the tier table to a lead snapshot.
#[derive(Debug, Clone)]
pub struct IncentiveEngine {
    tiers: IncentiveTiers,
    zone: TargetZone,
}

impl IncentiveEngine {
    pub fn new(tiers: IncentiveTiers, zone: TargetZone) -> Self {
        Self { tiers, zone }
    }

    pub fn tiers(&self) -> &IncentiveTiers {
        &self.tiers
    }

    pub fn zone(&self) -> TargetZone {
        self.zone
    }

    pub fn evaluate(
        &self,
        leads: &[LeadRecord],
        target: EmployeeTarget,
        now: DateTime<Utc>,
    ) -> IncentiveResult {
        let counts = CategoryCounts::tally(leads, now, self.zone, &self.tiers);
        let result = self.evaluate_counts(counts, target);
        debug!(
            us_attendees = counts.us_attendees,
            mixed_leads = counts.mixed_leads,
            us_association = counts.us_association,
            incentive = result.incentive,
            "evaluated same-day incentive"
        );
        result
    }

    pub fn evaluate_counts(&self, counts: CategoryCounts, target: EmployeeTarget) -> IncentiveResult {
        let awards = rules::tier_awards(&counts, &self.tiers);
        let incentive = awards.iter().map(|award| award.amount).max().unwrap_or(0);
        let double_target_achieved_today = target.is_set()
            && counts.total_today >= target.daily_by_calendar().saturating_mul(2);

        IncentiveResult {
            incentive,
            breakdown: IncentiveBreakdown {
                us_attendees: counts.us_attendees,
                mixed_leads: counts.mixed_leads,
                us_association: counts.us_association,
                total_today: counts.total_today,
                double_target_achieved_today,
            },
            awards,
        }
    }
}

/// A satisfied tier, kept for audit trails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAward {
    pub category: IncentiveCategory,
    pub threshold: u32,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveBreakdown {
    pub us_attendees: u32,
    pub mixed_leads: u32,
    pub us_association: u32,
    pub total_today: u32,
    pub double_target_achieved_today: bool,
}

impl IncentiveBreakdown {
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            us_attendees: self.us_attendees,
            mixed_leads: self.mixed_leads,
            us_association: self.us_association,
            total_today: self.total_today,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveResult {
    pub incentive: u32,
    pub breakdown: IncentiveBreakdown,
    pub awards: Vec<TierAward>,
}
