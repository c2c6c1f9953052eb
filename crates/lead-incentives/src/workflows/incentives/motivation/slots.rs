use super::render;
use crate::workflows::incentives::period::MessageSeed;
use serde::Serialize;

/// Four-hour block of the local day, `hour / 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySlot {
    NightOwl,
    EarlyBird,
    MorningPush,
    MiddayDrive,
    AfternoonSprint,
    EveningCloser,
}

impl DaySlot {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::NightOwl,
            Self::EarlyBird,
            Self::MorningPush,
            Self::MiddayDrive,
            Self::AfternoonSprint,
            Self::EveningCloser,
        ]
    }

    pub fn from_hour(hour: u32) -> Self {
        let index = (hour / 4) as usize;
        Self::ordered()[index.min(5)]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NightOwl => "Night Owl",
            Self::EarlyBird => "Early Bird",
            Self::MorningPush => "Morning Push",
            Self::MiddayDrive => "Midday Drive",
            Self::AfternoonSprint => "Afternoon Sprint",
            Self::EveningCloser => "Evening Closer",
        }
    }

    pub const fn mood(self) -> &'static str {
        match self {
            Self::NightOwl => "quiet focus",
            Self::EarlyBird => "fresh energy",
            Self::MorningPush => "full throttle",
            Self::MiddayDrive => "steady drive",
            Self::AfternoonSprint => "last big push",
            Self::EveningCloser => "wrap-up mode",
        }
    }
}

const NOTHING_YET: &[&str] = &[
    "{slot} check-in, {name}: no leads yet today. Your daily target is {target}.",
    "{slot}: the board is empty so far. {target} leads make today count, {name}.",
];
const UNDER_HALF: &[&str] = &[
    "{slot} update: {done} of {target} leads today. Keep the {mood} going, {name}.",
];
const PAST_HALF: &[&str] = &[
    "{slot}: {done} of {target} done, {name}. Just {left} more for the day.",
    "Past halfway at {percent}% of today's target. {left} to go, {name}.",
];
const TARGET_MET: &[&str] = &[
    "{slot}: daily target met with {done} leads, {name}. Everything else is extra.",
    "{done} leads today against a target of {target}. Great {mood}, {name}.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyProgress {
    pub slot: DaySlot,
    pub slot_label: &'static str,
    pub mood: &'static str,
    pub leads_today: u32,
    pub daily_target: u32,
    pub percent: u32,
    pub message: String,
}

/// `None` when no daily target can be derived.
pub fn daily_progress(
    leads_today: u32,
    daily_target: u32,
    hour: u32,
    name: &str,
    seed: MessageSeed,
) -> Option<DailyProgress> {
    if daily_target == 0 {
        return None;
    }

    let slot = DaySlot::from_hour(hour);
    let percent = leads_today.saturating_mul(100) / daily_target;
    let templates = match percent {
        0 => NOTHING_YET,
        1..=49 => UNDER_HALF,
        50..=99 => PAST_HALF,
        _ => TARGET_MET,
    };
    let template = seed.pick(templates).copied().unwrap_or_default();
    let message = render(
        template,
        &[
            ("slot", slot.label().to_string()),
            ("mood", slot.mood().to_string()),
            ("name", name.to_string()),
            ("done", leads_today.to_string()),
            ("target", daily_target.to_string()),
            ("left", daily_target.saturating_sub(leads_today).to_string()),
            ("percent", percent.to_string()),
        ],
    );

    Some(DailyProgress {
        slot,
        slot_label: slot.label(),
        mood: slot.mood(),
        leads_today,
        daily_target,
        percent,
        message,
    })
}
