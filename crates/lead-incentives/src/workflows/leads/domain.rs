use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Admin review state of a lead. Only `Qualified` leads earn incentive credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    Qualified,
    Disqualified,
    #[default]
    Pending,
}

impl Qualification {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Qualified,
            Some(false) => Self::Disqualified,
            None => Self::Pending,
        }
    }

    pub const fn is_qualified(self) -> bool {
        matches!(self, Self::Qualified)
    }
}

/// A validated lead as submitted by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: DateTime<Utc>,
    pub country: String,
    pub lead_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees_count: Option<u32>,
    pub qualified: Qualification,
}

impl LeadRecord {
    pub fn attendees(&self) -> u32 {
        self.attendees_count.unwrap_or(0)
    }
}

/// Loosely typed lead payload as returned by the leads REST endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLead {
    #[serde(default, deserialize_with = "loose_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub lead_type: Option<String>,
    #[serde(default, deserialize_with = "loose_count")]
    pub attendees_count: Option<u32>,
    #[serde(default, deserialize_with = "loose_flag")]
    pub qualified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadValidationError {
    #[error("lead is missing a submission date")]
    MissingDate,
    #[error("lead date '{0}' is not a recognised timestamp")]
    InvalidDate(String),
    #[error("lead row has {found} fields but the header has {expected}")]
    FieldCount { expected: usize, found: usize },
}

impl TryFrom<RawLead> for LeadRecord {
    type Error = LeadValidationError;

    fn try_from(raw: RawLead) -> Result<Self, Self::Error> {
        let date_text = raw
            .date
            .filter(|value| !value.trim().is_empty())
            .ok_or(LeadValidationError::MissingDate)?;
        let date = parse_timestamp(&date_text)
            .ok_or_else(|| LeadValidationError::InvalidDate(date_text.trim().to_string()))?;

        Ok(LeadRecord {
            id: raw.id.filter(|value| !value.trim().is_empty()),
            date,
            country: raw.country.unwrap_or_default(),
            lead_type: raw.lead_type.unwrap_or_default(),
            attendees_count: raw.attendees_count,
            qualified: Qualification::from_flag(raw.qualified),
        })
    }
}

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (UTC) and bare dates (UTC midnight).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Flag(bool),
    Other(IgnoredAny),
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        LooseValue::Integer(number) => Some(number.to_string()),
        LooseValue::Float(number) => Some(number.to_string()),
        LooseValue::Text(text) => Some(text),
        LooseValue::Flag(flag) => Some(flag.to_string()),
        LooseValue::Other(_) => None,
    }))
}

fn loose_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        LooseValue::Integer(number) => u32::try_from(number).ok(),
        LooseValue::Float(number) => float_count(number),
        LooseValue::Text(text) => parse_count(&text),
        LooseValue::Flag(_) | LooseValue::Other(_) => None,
    }))
}

/// Booleans, `0`/`1` and the CSV qualification words; anything else is pending.
fn loose_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        LooseValue::Flag(flag) => Some(flag),
        LooseValue::Integer(1) => Some(true),
        LooseValue::Integer(0) => Some(false),
        LooseValue::Text(text) => qualification_flag(&text),
        LooseValue::Integer(_) | LooseValue::Float(_) | LooseValue::Other(_) => None,
    }))
}

pub(crate) fn qualification_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "qualified" => Some(true),
        "false" | "no" | "n" | "0" | "disqualified" | "rejected" => Some(false),
        _ => None,
    }
}

/// Blank, negative or non-numeric counts read as absent.
pub(crate) fn parse_count(text: &str) -> Option<u32> {
    let trimmed = text.trim().replace(',', "");
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<u32>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(float_count))
}

fn float_count(number: f64) -> Option<u32> {
    if number.is_finite() && number >= 0.0 && number <= u32::MAX as f64 {
        Some(number.trunc() as u32)
    } else {
        None
    }
}

/// Monthly lead quota assigned to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeTarget(pub u32);

impl EmployeeTarget {
    pub const fn monthly(self) -> u32 {
        self.0
    }

    pub const fn is_set(self) -> bool {
        self.0 > 0
    }

    /// `ceil(target / 30)`; drives the double-target-today check.
    pub fn daily_by_calendar(self) -> u32 {
        self.0.div_ceil(30)
    }

    /// `round(target / working_days)`; drives the daily progress chip.
    pub fn daily_by_working_days(self, working_days: u32) -> u32 {
        if working_days == 0 {
            return 0;
        }
        (self.0 as f64 / working_days as f64).round() as u32
    }

    pub const fn double_target(self) -> u32 {
        self.0.saturating_mul(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Admin,
    Employee,
}

/// Identity of whoever the dashboard is being computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub employee_id: String,
    pub employee_name: String,
    pub role: SessionRole,
}

impl SessionContext {
    pub fn employee(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            employee_id: id.into(),
            employee_name: name.into(),
            role: SessionRole::Employee,
        }
    }

    /// First word of the display name, used in motivation copy.
    pub fn first_name(&self) -> &str {
        self.employee_name
            .split_whitespace()
            .next()
            .unwrap_or("Champion")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn raw_lead_converts_loose_json() {
        let raw: RawLead = serde_json::from_str(
            r#"{"id": 42, "date": "2025-03-10T15:30:00.000Z", "country": "USA",
                "leadType": "Attendees", "attendeesCount": "1,500", "qualified": true}"#,
        )
        .expect("payload parses");

        let lead = LeadRecord::try_from(raw).expect("lead validates");
        assert_eq!(lead.id.as_deref(), Some("42"));
        assert_eq!(
            lead.date,
            Utc.with_ymd_and_hms(2025, 3, 10, 15, 30, 0).unwrap()
        );
        assert_eq!(lead.attendees_count, Some(1500));
        assert_eq!(lead.qualified, Qualification::Qualified);
    }

    #[test]
    fn missing_or_bad_dates_are_rejected() {
        let missing = RawLead::default();
        assert_eq!(
            LeadRecord::try_from(missing),
            Err(LeadValidationError::MissingDate)
        );

        let bad = RawLead {
            date: Some("yesterday".to_string()),
            ..RawLead::default()
        };
        assert_eq!(
            LeadRecord::try_from(bad),
            Err(LeadValidationError::InvalidDate("yesterday".to_string()))
        );
    }

    #[test]
    fn null_qualified_is_pending() {
        let raw: RawLead =
            serde_json::from_str(r#"{"date": "2025-03-10", "qualified": null}"#).expect("parses");
        let lead = LeadRecord::try_from(raw).expect("valid");
        assert_eq!(lead.qualified, Qualification::Pending);
        assert_eq!(lead.attendees(), 0);
    }

    #[test]
    fn qualified_flag_accepts_loose_types() {
        let raws: Vec<RawLead> = serde_json::from_str(
            r#"[
                {"date": "2025-03-10", "qualified": "true"},
                {"date": "2025-03-10", "qualified": 0},
                {"date": "2025-03-10", "qualified": "Rejected"},
                {"date": "2025-03-10", "qualified": "maybe"},
                {"date": "2025-03-10", "qualified": 7},
                {"date": "2025-03-10", "qualified": {"state": "odd"}}
            ]"#,
        )
        .expect("every row parses");

        let states: Vec<Qualification> = raws
            .into_iter()
            .map(|raw| LeadRecord::try_from(raw).expect("valid").qualified)
            .collect();
        assert_eq!(
            states,
            vec![
                Qualification::Qualified,
                Qualification::Disqualified,
                Qualification::Disqualified,
                Qualification::Pending,
                Qualification::Pending,
                Qualification::Pending,
            ]
        );
    }

    #[test]
    fn qualification_words_map_to_flags() {
        assert_eq!(qualification_flag("Yes"), Some(true));
        assert_eq!(qualification_flag(" Rejected "), Some(false));
        assert_eq!(qualification_flag(""), None);
        assert_eq!(qualification_flag("maybe"), None);
    }

    #[test]
    fn counts_ignore_garbage() {
        assert_eq!(parse_count(" 2000 "), Some(2000));
        assert_eq!(parse_count("1500.7"), Some(1500));
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("lots"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn daily_targets_follow_both_formulas() {
        let target = EmployeeTarget(60);
        assert_eq!(target.daily_by_calendar(), 2);
        assert_eq!(target.daily_by_working_days(24), 3);
        assert_eq!(EmployeeTarget(61).daily_by_calendar(), 3);
        assert_eq!(target.daily_by_working_days(0), 0);
        assert_eq!(target.double_target(), 120);
        assert!(!EmployeeTarget(0).is_set());
    }

    #[test]
    fn first_name_falls_back() {
        assert_eq!(SessionContext::employee("e1", "Priya Shah").first_name(), "Priya");
        assert_eq!(SessionContext::employee("e2", "  ").first_name(), "Champion");
    }
}
