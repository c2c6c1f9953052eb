use crate::workflows::leads::LeadRecord;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Timezone in which "today", "this week" and "this month" are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetZone {
    #[default]
    Central,
    Eastern,
}

impl TargetZone {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "central" | "us/central" | "america/chicago" | "cst" | "cdt" => Some(Self::Central),
            "eastern" | "us/eastern" | "america/new_york" | "est" | "edt" => Some(Self::Eastern),
            _ => None,
        }
    }

    pub const fn tz(self) -> Tz {
        match self {
            Self::Central => chrono_tz::America::Chicago,
            Self::Eastern => chrono_tz::America::New_York,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Central => "America/Chicago",
            Self::Eastern => "America/New_York",
        }
    }

    pub fn local_date(self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz()).date_naive()
    }

    pub fn local_hour(self, instant: DateTime<Utc>) -> u32 {
        instant.with_timezone(&self.tz()).hour()
    }

    /// `YYYY-MM-DD` of the instant in this zone.
    pub fn day_key(self, instant: DateTime<Utc>) -> String {
        self.local_date(instant).format("%Y-%m-%d").to_string()
    }

    pub fn is_same_day(self, instant: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
        self.day_key(instant) == self.day_key(reference)
    }

    pub fn is_same_month(self, instant: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
        let (a, b) = (self.local_date(instant), self.local_date(reference));
        a.year() == b.year() && a.month() == b.month()
    }

    /// Monday 00:00 local through the following Monday 00:00 local, as UTC.
    pub fn week_window(self, reference: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let today = self.local_date(reference);
        let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        let start = self.start_of_day(monday);
        let end = self.start_of_day(monday + Duration::days(7));
        (start, end)
    }

    pub fn is_in_week(self, instant: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
        let (start, end) = self.week_window(reference);
        instant >= start && instant < end
    }

    fn start_of_day(self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        let tz = self.tz();
        tz.from_local_datetime(&midnight)
            .earliest()
            // Midnight skipped by a DST jump; the day starts an hour later.
            .or_else(|| {
                tz.from_local_datetime(&(midnight + Duration::hours(1)))
                    .earliest()
            })
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| midnight.and_utc())
    }
}

/// Value for the lead edit form's date input. This path is pinned to US
/// Eastern while every other calculation uses the configured zone.
pub fn format_date_for_input(instant: DateTime<Utc>) -> String {
    TargetZone::Eastern.day_key(instant)
}

/// Leads partitioned by reporting period, borrowed from the caller's snapshot.
#[derive(Debug, Default)]
pub struct PeriodBuckets<'a> {
    pub today: Vec<&'a LeadRecord>,
    pub this_week: Vec<&'a LeadRecord>,
    pub this_month: Vec<&'a LeadRecord>,
}

impl<'a> PeriodBuckets<'a> {
    pub fn collect(leads: &'a [LeadRecord], now: DateTime<Utc>, zone: TargetZone) -> Self {
        let mut buckets = PeriodBuckets::default();
        for lead in leads {
            if zone.is_same_day(lead.date, now) {
                buckets.today.push(lead);
            }
            if zone.is_in_week(lead.date, now) {
                buckets.this_week.push(lead);
            }
            if zone.is_same_month(lead.date, now) {
                buckets.this_month.push(lead);
            }
        }
        buckets
    }

    pub fn counts(&self) -> PeriodCounts {
        let qualified = |leads: &[&LeadRecord]| {
            leads
                .iter()
                .filter(|lead| lead.qualified.is_qualified())
                .count()
        };
        PeriodCounts {
            today: self.today.len(),
            this_week: self.this_week.len(),
            this_month: self.this_month.len(),
            qualified_today: qualified(&self.today),
            qualified_this_week: qualified(&self.this_week),
            qualified_this_month: qualified(&self.this_month),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodCounts {
    pub today: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub qualified_today: usize,
    pub qualified_this_week: usize,
    pub qualified_this_month: usize,
}

/// `day_of_month * 10 + hour` in the zone: stable within an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageSeed(pub u32);

impl MessageSeed {
    pub fn at(now: DateTime<Utc>, zone: TargetZone) -> Self {
        let local = now.with_timezone(&zone.tz());
        Self(local.day() * 10 + local.hour())
    }

    pub fn pick<T>(self, variants: &[T]) -> Option<&T> {
        if variants.is_empty() {
            return None;
        }
        variants.get(self.0 as usize % variants.len())
    }
}
