use super::common::*;
use crate::workflows::incentives::classifier::{CategoryCounts, IncentiveCategory};
use crate::workflows::incentives::evaluation::{
    incentive_for_counts, next_tier, IncentiveEngine, IncentiveTiers, Tier, TierAward,
};
use crate::workflows::incentives::period::TargetZone;
use crate::workflows::leads::{EmployeeTarget, Qualification};

fn counts(us_attendees: u32, mixed_leads: u32, us_association: u32) -> CategoryCounts {
    CategoryCounts {
        us_attendees,
        mixed_leads,
        us_association,
        total_today: 0,
    }
}

#[test]
fn seven_us_attendee_leads_earn_first_tier() {
    let leads = repeat(7, || us_attendee(reference_now()));
    let result = engine().evaluate(&leads, EmployeeTarget(60), reference_now());

    assert_eq!(result.breakdown.us_attendees, 7);
    assert_eq!(result.breakdown.mixed_leads, 0);
    assert_eq!(result.incentive, 500);
    assert_eq!(
        result.awards,
        vec![TierAward {
            category: IncentiveCategory::UsAttendees,
            threshold: 7,
            amount: 500,
        }]
    );
}

#[test]
fn categories_do_not_stack() {
    let tiers = IncentiveTiers::standard();
    assert_eq!(incentive_for_counts(&counts(10, 0, 12), &tiers), 1000);
    assert_eq!(incentive_for_counts(&counts(7, 10, 12), &tiers), 500);
    assert_eq!(incentive_for_counts(&counts(6, 9, 11), &tiers), 0);
    assert_eq!(incentive_for_counts(&counts(15, 15, 18), &tiers), 1500);
}

#[test]
fn raising_one_count_never_lowers_incentive() {
    let tiers = IncentiveTiers::standard();
    for us in 0..=20 {
        for mixed in 0..=20 {
            for association in 0..=20 {
                let base = incentive_for_counts(&counts(us, mixed, association), &tiers);
                for bumped in [
                    counts(us + 1, mixed, association),
                    counts(us, mixed + 1, association),
                    counts(us, mixed, association + 1),
                ] {
                    assert!(
                        incentive_for_counts(&bumped, &tiers) >= base,
                        "{bumped:?} dropped below {base}"
                    );
                }
            }
        }
    }
}

#[test]
fn evaluating_twice_gives_same_result() {
    let now = reference_now();
    let mut leads = repeat(8, || us_attendee(now));
    leads.extend(repeat(3, || other_attendee(now)));
    leads.extend(repeat(12, || us_association(now)));
    let snapshot = leads.clone();

    let engine = engine();
    let first = engine.evaluate(&leads, EmployeeTarget(90), now);
    let second = engine.evaluate(&leads, EmployeeTarget(90), now);

    assert_eq!(first, second);
    assert_eq!(leads, snapshot);
}

#[test]
fn double_target_counts_every_lead_today() {
    let now = reference_now();
    // ceil(60 / 30) = 2, so four leads today doubles it.
    let mut leads = vec![
        us_attendee(now),
        lead(now, "Peru", "Cold call", None, Qualification::Pending),
        lead(now, "Chile", "Cold call", None, Qualification::Disqualified),
    ];
    let engine = engine();
    let short = engine.evaluate(&leads, EmployeeTarget(60), now);
    assert_eq!(short.breakdown.total_today, 3);
    assert!(!short.breakdown.double_target_achieved_today);

    leads.push(other_attendee(now));
    let doubled = engine.evaluate(&leads, EmployeeTarget(60), now);
    assert!(doubled.breakdown.double_target_achieved_today);

    let no_target = engine.evaluate(&leads, EmployeeTarget(0), now);
    assert!(!no_target.breakdown.double_target_achieved_today);
}

#[test]
fn next_tier_is_nearest_unmet_threshold() {
    let tiers = IncentiveTiers::standard();
    assert_eq!(
        next_tier(&tiers, IncentiveCategory::UsAttendees, 7),
        Some(Tier {
            threshold: 10,
            amount: 1000
        })
    );
    assert_eq!(
        next_tier(&tiers, IncentiveCategory::UsAssociation, 0),
        Some(Tier {
            threshold: 12,
            amount: 500
        })
    );
    assert_eq!(next_tier(&tiers, IncentiveCategory::MixedLeads, 15), None);
}

#[test]
fn custom_tiers_move_the_mixed_gate() {
    let tiers = IncentiveTiers {
        us_attendees: vec![Tier {
            threshold: 3,
            amount: 250,
        }],
        ..IncentiveTiers::standard()
    };
    let engine = IncentiveEngine::new(tiers, TargetZone::Central);
    let now = reference_now();
    let mut leads = repeat(3, || us_attendee(now));
    leads.push(other_attendee(now));

    let result = engine.evaluate(&leads, EmployeeTarget(0), now);
    assert_eq!(result.incentive, 250);
    assert_eq!(result.breakdown.mixed_leads, 1);
}
