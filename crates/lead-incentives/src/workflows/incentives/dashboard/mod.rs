mod views;

pub use views::{DailyTargets, DashboardSnapshot, WorkingCalendarView};

use super::calendar;
use super::evaluation::{IncentiveEngine, IncentiveTiers};
use super::motivation::{daily_progress, incentive_progress, monthly_percent, MotivationBanner};
use super::period::{format_date_for_input, MessageSeed, PeriodBuckets, TargetZone};
use crate::workflows::leads::{EmployeeTarget, LeadRecord, SessionContext};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Builds the per-employee dashboard from an already-fetched lead snapshot.
#[derive(Debug, Clone)]
pub struct EmployeeDashboard {
    engine: IncentiveEngine,
}

impl EmployeeDashboard {
    pub fn new(tiers: IncentiveTiers, zone: TargetZone) -> Self {
        Self {
            engine: IncentiveEngine::new(tiers, zone),
        }
    }

    pub fn build(
        &self,
        session: &SessionContext,
        leads: &[LeadRecord],
        target: EmployeeTarget,
        now: DateTime<Utc>,
    ) -> DashboardSnapshot {
        let zone = self.engine.zone();
        let local_date = zone.local_date(now);
        let seed = MessageSeed::at(now, zone);
        let name = session.first_name();

        let periods = PeriodBuckets::collect(leads, now, zone).counts();
        let working_days_in_month = calendar::working_days_in_month(local_date);
        let remaining_working_days = calendar::remaining_working_days(local_date);
        let daily_targets = DailyTargets {
            by_calendar: target.daily_by_calendar(),
            by_working_days: target.daily_by_working_days(working_days_in_month),
        };

        let incentive = self.engine.evaluate(leads, target, now);
        let double_today = incentive.breakdown.double_target_achieved_today;
        let banner = MotivationBanner::for_month(
            periods.qualified_this_month,
            target,
            remaining_working_days,
            double_today,
            name,
            seed,
        );
        let progress = incentive_progress(
            &incentive.breakdown.counts(),
            self.engine.tiers(),
            incentive.incentive,
            name,
            seed,
        );
        let daily = daily_progress(
            periods.today as u32,
            daily_targets.by_working_days,
            zone.local_hour(now),
            name,
            seed,
        );
        let monthly_double_target_reached =
            target.is_set() && periods.qualified_this_month as u64 >= target.double_target() as u64;

        debug!(
            employee_id = %session.employee_id,
            qualified_this_month = periods.qualified_this_month,
            incentive = incentive.incentive,
            "built employee dashboard"
        );

        DashboardSnapshot {
            session: session.clone(),
            generated_at: now,
            zone: zone.label(),
            monthly_target: target.monthly(),
            periods,
            calendar: WorkingCalendarView {
                local_date,
                is_working_day: calendar::is_working_day(local_date),
                working_days_in_month,
                remaining_working_days,
                holiday: calendar::holiday_on(local_date).map(|holiday| holiday.name),
            },
            daily_targets,
            monthly_percent: monthly_percent(periods.qualified_this_month, target),
            monthly_double_target_reached,
            incentive,
            banner,
            incentive_progress: progress,
            daily_progress: daily,
            edit_form_date: format_date_for_input(now),
        }
    }
}
