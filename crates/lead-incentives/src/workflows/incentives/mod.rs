//! Incentive and target-progress rules evaluated over a lead snapshot.
//!
//! The pipeline is one-way: working calendar and period bucketing feed the
//! qualification classifier, whose category counts drive both the tiered
//! incentive amount and the motivation copy.

pub mod calendar;
pub mod classifier;
mod dashboard;
pub mod evaluation;
pub mod motivation;
pub mod period;

#[cfg(test)]
mod tests;

pub use calendar::{
    holiday_on, is_working_day, remaining_working_days, us_holidays, working_days_in_month,
    Holiday,
};
pub use classifier::{
    classify, normalize_country, CategoryCounts, CountryGroup, IncentiveCategory,
};
pub use dashboard::{DailyTargets, DashboardSnapshot, EmployeeDashboard, WorkingCalendarView};
pub use evaluation::{
    incentive_for_counts, IncentiveBreakdown, IncentiveEngine, IncentiveResult, IncentiveTiers,
    Tier, TierAward,
};
pub use motivation::{DaySlot, MotivationBanner};
pub use period::{format_date_for_input, MessageSeed, PeriodBuckets, PeriodCounts, TargetZone};
