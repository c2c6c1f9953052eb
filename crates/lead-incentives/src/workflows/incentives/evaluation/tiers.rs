use super::super::classifier::IncentiveCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub threshold: u32,
    pub amount: u32,
}

/// Bonus ladders per category. Categories never add up; the best tier wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveTiers {
    pub us_attendees: Vec<Tier>,
    pub mixed_leads: Vec<Tier>,
    pub us_association: Vec<Tier>,
    /// Smallest attendee count for an attendee lead to earn credit.
    pub attendee_minimum: u32,
}

impl IncentiveTiers {
    pub fn standard() -> Self {
        Self {
            us_attendees: vec![tier(7, 500), tier(10, 1000), tier(15, 1500)],
            mixed_leads: vec![tier(10, 500), tier(15, 1000)],
            us_association: vec![tier(12, 500), tier(18, 1000)],
            attendee_minimum: 1500,
        }
    }

    pub fn ladder(&self, category: IncentiveCategory) -> &[Tier] {
        match category {
            IncentiveCategory::UsAttendees => &self.us_attendees,
            IncentiveCategory::MixedLeads => &self.mixed_leads,
            IncentiveCategory::UsAssociation => &self.us_association,
        }
    }

    /// Lowest US attendee threshold; past it, mixed credit excludes US leads.
    pub fn us_attendee_gate(&self) -> u32 {
        self.us_attendees
            .iter()
            .map(|tier| tier.threshold)
            .min()
            .unwrap_or(u32::MAX)
    }
}

impl Default for IncentiveTiers {
    fn default() -> Self {
        Self::standard()
    }
}

const fn tier(threshold: u32, amount: u32) -> Tier {
    Tier { threshold, amount }
}
