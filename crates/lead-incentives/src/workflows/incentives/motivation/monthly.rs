use super::render;
use crate::workflows::incentives::period::MessageSeed;
use crate::workflows::leads::EmployeeTarget;
use serde::Serialize;

pub const PERCENT_CAP: u32 = 250;

pub(crate) struct MonthlyBucket {
    pub(crate) floor: u32,
    pub(crate) ceiling: u32,
    pub(crate) status: &'static str,
    pub(crate) templates: &'static [&'static str],
}

const fn bucket(
    floor: u32,
    ceiling: u32,
    status: &'static str,
    templates: &'static [&'static str],
) -> MonthlyBucket {
    MonthlyBucket {
        floor,
        ceiling,
        status,
        templates,
    }
}

pub(crate) const MONTHLY_LADDER: &[MonthlyBucket] = &[
    bucket(0, 0, "Fresh Start", &[
        "A brand-new month is wide open, {name}. Your first qualified lead sets the tone and there are {days} working days to make it count.",
        "Clean slate, {name}. {days} working days ahead and every one of them is an opening.",
    ]),
    bucket(1, 5, "Warming Up", &[
        "The engine is running, {name}: {percent}% of target with {days} working days left.",
        "{percent}% on the board. Keep the calls flowing, {name}.",
    ]),
    bucket(6, 10, "First Steps", &[
        "{name}, {percent}% done. Small steps turn into big months.",
    ]),
    bucket(11, 15, "Gaining Traction", &[
        "Traction is building, {name}: {percent}% with {days} working days to go.",
        "{percent}% and climbing. Stay on the phones, {name}.",
    ]),
    bucket(16, 20, "Building Momentum", &[
        "Momentum looks good on you, {name}. {percent}% complete.",
    ]),
    bucket(21, 25, "Quarter Mark", &[
        "A quarter of the way there, {name}. {days} working days to finish the job.",
        "{percent}% reached. The first quarter is in the bag, {name}.",
    ]),
    bucket(26, 30, "On The Move", &[
        "On the move, {name}: {percent}% with {days} working days left.",
    ]),
    bucket(31, 35, "Steady Climber", &[
        "Steady and strong, {name}. {percent}% of target qualified.",
        "Climbing one lead at a time: {percent}% done, {days} working days ahead.",
    ]),
    bucket(36, 40, "Picking Up Pace", &[
        "The pace is picking up, {name}. {percent}% and counting.",
    ]),
    bucket(41, 45, "Closing In On Halfway", &[
        "Halfway is in sight, {name}: {percent}% complete.",
        "{percent}% done. A few more qualified leads and you cross the midpoint, {name}.",
    ]),
    bucket(46, 50, "Halfway Warrior", &[
        "Halfway warrior! {percent}% of target with {days} working days to conquer the rest, {name}.",
        "{name}, you have reached the midpoint at {percent}%. The second half is yours.",
    ]),
    bucket(51, 55, "Over The Hump", &[
        "Over the hump, {name}: {percent}% and the finish line is getting closer.",
    ]),
    bucket(56, 60, "Strong Stride", &[
        "Strong stride, {name}. {percent}% done with {days} working days left.",
        "{percent}% qualified. Keep that rhythm going, {name}.",
    ]),
    bucket(61, 65, "Power Player", &[
        "Power play, {name}: {percent}% of the monthly target.",
    ]),
    bucket(66, 70, "Two-Thirds Titan", &[
        "Two thirds down, {name}. {percent}% with {days} working days to close it out.",
        "{percent}% complete. The target is within reach, {name}.",
    ]),
    bucket(71, 75, "Three-Quarter Mark", &[
        "Three quarters done, {name}: {percent}%.",
    ]),
    bucket(76, 80, "Home Stretch", &[
        "Home stretch, {name}. {percent}% with {days} working days remaining.",
        "{percent}% qualified. Finish strong, {name}.",
    ]),
    bucket(81, 85, "Almost There", &[
        "Almost there, {name}: {percent}% of target.",
    ]),
    bucket(86, 90, "Final Push", &[
        "Final push, {name}. {percent}% done and the rest is a sprint.",
        "{percent}% done with {days} working days left. Bring it home, {name}.",
    ]),
    bucket(91, 95, "Knocking On The Door", &[
        "{name}, the target is right there: {percent}%.",
    ]),
    bucket(96, 99, "One Step Away", &[
        "One more push, {name}. {percent}% and the target falls.",
        "So close, {name}: {percent}% with {days} working days to spare.",
    ]),
    bucket(100, 109, "Target Smasher", &[
        "Target smashed, {name}! {percent}% and still going.",
        "{name} hit the monthly target: {percent}%. Everything from here is bonus territory.",
    ]),
    bucket(110, 124, "Overachiever", &[
        "Overachiever alert: {name} is at {percent}% of target.",
    ]),
    bucket(125, 149, "Elite Performer", &[
        "Elite territory, {name}. {percent}% with {days} working days still to play.",
        "{percent}% of target. The team is watching, {name}.",
    ]),
    bucket(150, 174, "Record Breaker", &[
        "Record pace, {name}: {percent}% of the monthly target.",
    ]),
    bucket(175, 199, "Unstoppable", &[
        "Unstoppable, {name}. {percent}% and the double target is in sight.",
        "{percent}% qualified. Double target is only a few leads away, {name}.",
    ]),
    bucket(200, u32::MAX, "Legend", &[
        "Legend status, {name}: {percent}% of target.",
        "{name} has doubled the target at {percent}%. Take a bow.",
    ]),
];

const DOUBLE_TARGET_STATUS: &str = "Double Target Day";

const DOUBLE_TARGET_TEMPLATES: &[&str] = &[
    "Double target today, {name}! {percent}% of the month qualified and the bonus is unlocked.",
    "{name} doubled the daily target today. Month progress: {percent}%.",
];

/// Month-to-date qualified leads as a share of target, rounded and capped.
/// Any qualified lead reads as at least 1%, so it never lands in the
/// zero bucket. `None` when no target is set.
pub fn monthly_percent(qualified: usize, target: EmployeeTarget) -> Option<u32> {
    if !target.is_set() {
        return None;
    }
    let percent = (qualified as f64 * 100.0 / target.monthly() as f64).round() as u32;
    let floor = u32::from(qualified > 0);
    Some(percent.max(floor).min(PERCENT_CAP))
}

pub(crate) fn monthly_bucket(percent: u32) -> &'static MonthlyBucket {
    let last = MONTHLY_LADDER.len() - 1;
    MONTHLY_LADDER
        .iter()
        .find(|bucket| percent >= bucket.floor && percent <= bucket.ceiling)
        .unwrap_or(&MONTHLY_LADDER[last])
}

/// Status label for a monthly percentage.
pub fn status_label(percent: u32) -> &'static str {
    monthly_bucket(percent).status
}

/// Picks the monthly banner text for `percent`.
pub fn select_message(
    percent: u32,
    working_days_left: u32,
    double_target: bool,
    name: &str,
    seed: MessageSeed,
) -> String {
    let templates = if double_target {
        DOUBLE_TARGET_TEMPLATES
    } else {
        monthly_bucket(percent).templates
    };
    let template = seed.pick(templates).copied().unwrap_or_default();
    render(
        template,
        &[
            ("name", name.to_string()),
            ("percent", percent.to_string()),
            ("days", working_days_left.to_string()),
        ],
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotivationBanner {
    pub status: &'static str,
    pub percent: u32,
    pub message: String,
}

impl MotivationBanner {
    /// `None` when the employee has no target, leaving the banner empty.
    pub fn for_month(
        qualified_this_month: usize,
        target: EmployeeTarget,
        working_days_left: u32,
        double_target: bool,
        name: &str,
        seed: MessageSeed,
    ) -> Option<Self> {
        let percent = monthly_percent(qualified_this_month, target)?;
        let status = if double_target {
            DOUBLE_TARGET_STATUS
        } else {
            status_label(percent)
        };
        Some(Self {
            status,
            percent,
            message: select_message(percent, working_days_left, double_target, name, seed),
        })
    }
}
