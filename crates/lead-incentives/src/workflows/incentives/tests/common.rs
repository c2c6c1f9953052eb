use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::incentives::evaluation::{IncentiveEngine, IncentiveTiers};
use crate::workflows::incentives::period::TargetZone;
use crate::workflows::leads::{LeadRecord, Qualification, SessionContext};

/// Wall-clock time in US Central converted to UTC.
pub(super) fn central(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    chrono_tz::America::Chicago
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("unambiguous central time")
        .with_timezone(&Utc)
}

/// Monday 2025-03-10, 14:00 Central.
pub(super) fn reference_now() -> DateTime<Utc> {
    central(2025, 3, 10, 14, 0)
}

pub(super) fn lead(
    date: DateTime<Utc>,
    country: &str,
    lead_type: &str,
    attendees: Option<u32>,
    qualified: Qualification,
) -> LeadRecord {
    LeadRecord {
        id: None,
        date,
        country: country.to_string(),
        lead_type: lead_type.to_string(),
        attendees_count: attendees,
        qualified,
    }
}

pub(super) fn us_attendee(date: DateTime<Utc>) -> LeadRecord {
    lead(date, "USA", "Attendees", Some(1500), Qualification::Qualified)
}

pub(super) fn other_attendee(date: DateTime<Utc>) -> LeadRecord {
    lead(date, "Germany", "Attendees", Some(1500), Qualification::Qualified)
}

pub(super) fn us_association(date: DateTime<Utc>) -> LeadRecord {
    lead(date, "United States", "Association", None, Qualification::Qualified)
}

pub(super) fn repeat(count: usize, make: impl Fn() -> LeadRecord) -> Vec<LeadRecord> {
    (0..count).map(|_| make()).collect()
}

pub(super) fn engine() -> IncentiveEngine {
    IncentiveEngine::new(IncentiveTiers::standard(), TargetZone::Central)
}

pub(super) fn session() -> SessionContext {
    SessionContext::employee("emp-17", "Jordan Reyes")
}
