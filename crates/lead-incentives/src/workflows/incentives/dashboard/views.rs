use super::super::evaluation::IncentiveResult;
use super::super::motivation::{DailyProgress, IncentiveProgress, MotivationBanner};
use super::super::period::PeriodCounts;
use crate::workflows::leads::SessionContext;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// The two daily-target formulas side by side; each consumer reads its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTargets {
    /// `ceil(target / 30)`, used for the double-target-today check.
    pub by_calendar: u32,
    /// `round(target / working days in month)`, used for the daily chip.
    pub by_working_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingCalendarView {
    pub local_date: NaiveDate,
    pub is_working_day: bool,
    pub working_days_in_month: u32,
    pub remaining_working_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub session: SessionContext,
    pub generated_at: DateTime<Utc>,
    pub zone: &'static str,
    pub monthly_target: u32,
    pub periods: PeriodCounts,
    pub calendar: WorkingCalendarView,
    pub daily_targets: DailyTargets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_percent: Option<u32>,
    pub monthly_double_target_reached: bool,
    pub incentive: IncentiveResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<MotivationBanner>,
    pub incentive_progress: IncentiveProgress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_progress: Option<DailyProgress>,
    /// Today's date as the lead edit form pre-fills it (always US Eastern).
    pub edit_form_date: String,
}
