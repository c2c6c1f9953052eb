use chrono::{DateTime, Datelike, NaiveDate, Utc};
use lead_incentives::workflows::incentives::calendar::{
    days_in_month, first_of_month, holiday_on, is_working_day, nth_saturday, us_holidays,
    working_days_in_month,
};
use lead_incentives::workflows::incentives::evaluation::next_raising_tier;
use lead_incentives::workflows::incentives::{
    DashboardSnapshot, IncentiveCategory, IncentiveResult, IncentiveTiers, TargetZone,
};

pub(crate) fn render_dashboard(view: &DashboardSnapshot, rejected_rows: usize) {
    println!(
        "Lead dashboard for {} ({})",
        display_name(&view.session.employee_name),
        view.session.employee_id
    );
    println!(
        "Evaluated {} | zone {} | edit form date {}",
        view.generated_at.to_rfc3339(),
        view.zone,
        view.edit_form_date
    );
    if rejected_rows > 0 {
        println!("Skipped {rejected_rows} lead row(s) without a usable date");
    }

    let periods = &view.periods;
    println!("\nLeads");
    println!(
        "- Today: {} ({} qualified)",
        periods.today, periods.qualified_today
    );
    println!(
        "- This week: {} ({} qualified)",
        periods.this_week, periods.qualified_this_week
    );
    println!(
        "- This month: {} ({} qualified)",
        periods.this_month, periods.qualified_this_month
    );

    let calendar = &view.calendar;
    println!("\nCalendar");
    match calendar.holiday {
        Some(holiday) => println!("- {}: {}", calendar.local_date, holiday),
        None if calendar.is_working_day => println!("- {}: working day", calendar.local_date),
        None => println!("- {}: day off", calendar.local_date),
    }
    println!(
        "- {} working days this month, {} remaining",
        calendar.working_days_in_month, calendar.remaining_working_days
    );

    println!("\nTarget");
    if view.monthly_target == 0 {
        println!("- No monthly target set");
    } else {
        println!(
            "- Monthly {} | daily {} (calendar) / {} (working days)",
            view.monthly_target, view.daily_targets.by_calendar, view.daily_targets.by_working_days
        );
        if let Some(percent) = view.monthly_percent {
            println!("- Month progress: {percent}%");
        }
        if view.monthly_double_target_reached {
            println!("- Double monthly target reached");
        }
    }
    if let Some(banner) = &view.banner {
        println!("\n[{}] {}", banner.status, banner.message);
    }
    if let Some(daily) = &view.daily_progress {
        println!(
            "[{}] {} ({}/{} today)",
            daily.slot_label, daily.message, daily.leads_today, daily.daily_target
        );
    }

    println!("\nIncentive");
    render_breakdown(&view.incentive);
    let progress = &view.incentive_progress;
    println!("[{}] {}", progress.stage_label, progress.message);
}

pub(crate) fn render_incentive(
    result: &IncentiveResult,
    tiers: &IncentiveTiers,
    zone: TargetZone,
    now: DateTime<Utc>,
) {
    println!(
        "Same-day incentive for {} ({})",
        zone.day_key(now),
        zone.label()
    );
    render_breakdown(result);

    let counts = result.breakdown.counts();
    println!("\nTiers that would raise the bonus");
    for category in IncentiveCategory::ordered() {
        let count = counts.get(category);
        match next_raising_tier(tiers, category, count, result.incentive) {
            Some(tier) => println!(
                "- {}: {} more for ${}",
                category.label(),
                tier.threshold.saturating_sub(count),
                tier.amount
            ),
            None => println!("- {}: no tier raises the bonus", category.label()),
        }
    }
}

fn render_breakdown(result: &IncentiveResult) {
    let breakdown = &result.breakdown;
    println!("- US attendees: {}", breakdown.us_attendees);
    println!("- Mixed leads: {}", breakdown.mixed_leads);
    println!("- US association: {}", breakdown.us_association);
    println!("- Leads submitted today: {}", breakdown.total_today);
    if breakdown.double_target_achieved_today {
        println!("- Double daily target achieved");
    }
    if result.incentive == 0 {
        println!("Incentive: none yet");
    } else {
        println!("Incentive: ${}", result.incentive);
    }
    for award in &result.awards {
        println!(
            "  - {} >= {}: ${}",
            award.category.label(),
            award.threshold,
            award.amount
        );
    }
}

pub(crate) fn render_calendar(month: NaiveDate, zone: TargetZone, list_days: bool) {
    let first = first_of_month(month);
    println!(
        "Working calendar for {} ({})",
        first.format("%B %Y"),
        zone.label()
    );
    println!("- Working days: {}", working_days_in_month(first));

    let holidays: Vec<_> = us_holidays(first.year())
        .into_iter()
        .filter(|holiday| holiday.date.month() == first.month())
        .collect();
    if holidays.is_empty() {
        println!("- Holidays: none");
    } else {
        println!("- Holidays:");
        for holiday in holidays {
            println!("  - {} {}", holiday.date, holiday.name);
        }
    }

    if !list_days {
        return;
    }
    println!();
    for day in first.iter_days().take(days_in_month(first) as usize) {
        let status = if let Some(holiday) = holiday_on(day) {
            format!("off ({})", holiday.name)
        } else if is_working_day(day) {
            "working".to_string()
        } else if day.weekday() == chrono::Weekday::Sat {
            format!("off (Saturday #{})", nth_saturday(day))
        } else {
            "off".to_string()
        };
        println!("{} {} {}", day, day.format("%a"), status);
    }
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "unnamed employee"
    } else {
        name
    }
}
