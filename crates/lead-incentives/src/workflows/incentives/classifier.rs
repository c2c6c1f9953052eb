use super::evaluation::IncentiveTiers;
use super::period::TargetZone;
use crate::workflows::leads::LeadRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const US_MARKERS: [&str; 5] = ["usa", "us", "u.s", "united state", "america"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CountryGroup {
    Usa,
    Other,
}

/// Substring match on the lowercased, trimmed country text.
pub fn normalize_country(country: &str) -> CountryGroup {
    let lowered = country.trim().to_lowercase();
    if US_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        CountryGroup::Usa
    } else {
        CountryGroup::Other
    }
}

pub fn is_attendee_lead(lead: &LeadRecord) -> bool {
    lead.lead_type.to_lowercase().contains("attend")
}

pub fn is_association_lead(lead: &LeadRecord) -> bool {
    lead.lead_type.to_lowercase().contains("association")
}

/// Qualified and submitted today in `zone`.
pub fn is_eligible(lead: &LeadRecord, now: DateTime<Utc>, zone: TargetZone) -> bool {
    lead.qualified.is_qualified() && zone.is_same_day(lead.date, now)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveCategory {
    UsAttendees,
    MixedLeads,
    UsAssociation,
}

impl IncentiveCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::UsAttendees, Self::MixedLeads, Self::UsAssociation]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UsAttendees => "US Attendees",
            Self::MixedLeads => "Mixed Leads",
            Self::UsAssociation => "US Association",
        }
    }
}

/// Primary incentive category of a single lead, if it earns credit today.
///
/// Attendee categories win over association when a lead type names both.
pub fn classify(
    lead: &LeadRecord,
    now: DateTime<Utc>,
    zone: TargetZone,
    tiers: &IncentiveTiers,
) -> Option<IncentiveCategory> {
    if !is_eligible(lead, now, zone) {
        return None;
    }

    let country = normalize_country(&lead.country);
    if is_attendee_lead(lead) && lead.attendees() >= tiers.attendee_minimum {
        return Some(match country {
            CountryGroup::Usa => IncentiveCategory::UsAttendees,
            CountryGroup::Other => IncentiveCategory::MixedLeads,
        });
    }

    if is_association_lead(lead) && country == CountryGroup::Usa {
        return Some(IncentiveCategory::UsAssociation);
    }

    None
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub us_attendees: u32,
    pub mixed_leads: u32,
    pub us_association: u32,
    pub total_today: u32,
}

impl CategoryCounts {
    /// Counts today's leads. Each counter applies its own rule, so one lead
    /// may feed more than one counter.
    pub fn tally(
        leads: &[LeadRecord],
        now: DateTime<Utc>,
        zone: TargetZone,
        tiers: &IncentiveTiers,
    ) -> Self {
        let todays: Vec<&LeadRecord> = leads
            .iter()
            .filter(|lead| zone.is_same_day(lead.date, now))
            .collect();
        let eligible: Vec<&LeadRecord> = todays
            .iter()
            .copied()
            .filter(|lead| lead.qualified.is_qualified())
            .collect();

        let us_attendees = count(&eligible, |lead| {
            big_attendee_lead(lead, tiers) && normalize_country(&lead.country) == CountryGroup::Usa
        });
        let mixed_leads = count_mixed(&eligible, us_attendees, tiers);
        let us_association = count(&eligible, |lead| {
            is_association_lead(lead) && normalize_country(&lead.country) == CountryGroup::Usa
        });

        Self {
            us_attendees,
            mixed_leads,
            us_association,
            total_today: todays.len() as u32,
        }
    }

    pub const fn get(&self, category: IncentiveCategory) -> u32 {
        match category {
            IncentiveCategory::UsAttendees => self.us_attendees,
            IncentiveCategory::MixedLeads => self.mixed_leads,
            IncentiveCategory::UsAssociation => self.us_association,
        }
    }
}

/// Mixed-lead credit: every large attendee lead counts until the US attendee
/// tier opens, after which only non-US ones do.
pub fn count_mixed(eligible: &[&LeadRecord], us_attendees: u32, tiers: &IncentiveTiers) -> u32 {
    let all_countries = us_attendees < tiers.us_attendee_gate();
    count(eligible, |lead| {
        big_attendee_lead(lead, tiers)
            && (all_countries || normalize_country(&lead.country) == CountryGroup::Other)
    })
}

fn big_attendee_lead(lead: &LeadRecord, tiers: &IncentiveTiers) -> bool {
    is_attendee_lead(lead) && lead.attendees() >= tiers.attendee_minimum
}

fn count(leads: &[&LeadRecord], predicate: impl Fn(&LeadRecord) -> bool) -> u32 {
    leads.iter().filter(|lead| predicate(**lead)).count() as u32
}
