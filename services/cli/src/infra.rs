use chrono::{DateTime, NaiveDate, Utc};
use lead_incentives::workflows::incentives::TargetZone;
use lead_incentives::workflows::leads::parse_timestamp;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// `YYYY-MM`, resolved to the first day of that month.
pub(crate) fn parse_month(raw: &str) -> Result<NaiveDate, String> {
    parse_date(&format!("{}-01", raw.trim()))
        .map_err(|_| format!("failed to parse '{raw}' as YYYY-MM"))
}

pub(crate) fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw).ok_or_else(|| {
        format!("failed to parse '{raw}' as an RFC 3339 timestamp or YYYY-MM-DD date")
    })
}

pub(crate) fn parse_zone(raw: &str) -> Result<TargetZone, String> {
    TargetZone::parse(raw).ok_or_else(|| format!("unknown zone '{raw}' (use central or eastern)"))
}
