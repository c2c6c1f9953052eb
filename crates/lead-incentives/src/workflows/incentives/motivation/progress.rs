use super::render;
use crate::workflows::incentives::classifier::{CategoryCounts, IncentiveCategory};
use crate::workflows::incentives::evaluation::{next_raising_tier, IncentiveTiers, Tier};
use crate::workflows::incentives::period::MessageSeed;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    NotStarted,
    Building,
    Halfway,
    Close,
    Unlocked,
    Maxed,
}

impl ProgressStage {
    fn from_percent(percent: u32) -> Self {
        match percent {
            0 => Self::NotStarted,
            1..=49 => Self::Building,
            50..=79 => Self::Halfway,
            _ => Self::Close,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Ready To Earn",
            Self::Building => "Building Up",
            Self::Halfway => "Halfway To Bonus",
            Self::Close => "Bonus Within Reach",
            Self::Unlocked => "Bonus Unlocked",
            Self::Maxed => "Top Bonus Reached",
        }
    }

    const fn templates(self) -> &'static [&'static str] {
        match self {
            Self::NotStarted => &[
                "No incentive leads yet today, {name}. {remaining} in {category} unlock {next_amount}.",
                "Today's bonus is up for grabs, {name}: {remaining} in {category} earn {next_amount}.",
            ],
            Self::Building => &[
                "{percent}% of the way to a {next_amount} bonus, {name}. {remaining} more in {category} to go.",
            ],
            Self::Halfway => &[
                "Halfway to {next_amount}, {name}: {remaining} left in {category}.",
                "{percent}% toward today's bonus. {remaining} more in {category}, {name}.",
            ],
            Self::Close => &[
                "So close, {name}! {remaining} more in {category} for {next_amount}.",
            ],
            Self::Unlocked => &[
                "{amount} bonus locked in, {name}. {remaining} more in {category} lift it to {next_amount}.",
                "Bonus secured at {amount}. Keep going, {name}: {next_amount} is {remaining} more in {category} away.",
            ],
            Self::Maxed => &[
                "Nothing left to raise today, {name}. The top bonus of {amount} is secured.",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncentiveProgress {
    pub stage: ProgressStage,
    pub stage_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_category: Option<IncentiveCategory>,
    pub percent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<Tier>,
    pub remaining: u32,
    pub message: String,
}

/// Same-day progress toward the nearest tier that would raise today's bonus.
///
/// Categories never stack, so a tier paying no more than `current_incentive`
/// is skipped. The focus category is the one closest (by percentage) to its
/// next raising tier; with none left the stage is `Maxed`.
pub fn incentive_progress(
    counts: &CategoryCounts,
    tiers: &IncentiveTiers,
    current_incentive: u32,
    name: &str,
    seed: MessageSeed,
) -> IncentiveProgress {
    let mut best: Option<(IncentiveCategory, Tier, u32)> = None;
    for category in IncentiveCategory::ordered() {
        let count = counts.get(category);
        let Some(tier) = next_raising_tier(tiers, category, count, current_incentive) else {
            continue;
        };
        let percent = (count.saturating_mul(100) / tier.threshold.max(1)).min(99);
        if best.map_or(true, |(_, _, current)| percent > current) {
            best = Some((category, tier, percent));
        }
    }

    let (stage, focus, percent) = match best {
        None => (ProgressStage::Maxed, None, 100),
        Some((category, tier, percent)) => {
            let stage = if current_incentive > 0 {
                ProgressStage::Unlocked
            } else {
                ProgressStage::from_percent(percent)
            };
            (stage, Some((category, tier)), percent)
        }
    };

    let remaining = focus
        .map(|(category, tier)| tier.threshold.saturating_sub(counts.get(category)))
        .unwrap_or(0);
    let template = seed.pick(stage.templates()).copied().unwrap_or_default();
    let message = render(
        template,
        &[
            ("name", name.to_string()),
            ("percent", percent.to_string()),
            ("remaining", remaining.to_string()),
            (
                "category",
                focus
                    .map(|(category, _)| category.label().to_string())
                    .unwrap_or_default(),
            ),
            ("amount", format_amount(current_incentive)),
            (
                "next_amount",
                focus
                    .map(|(_, tier)| format_amount(tier.amount))
                    .unwrap_or_default(),
            ),
        ],
    );

    IncentiveProgress {
        stage,
        stage_label: stage.label(),
        focus_category: focus.map(|(category, _)| category),
        percent,
        next_tier: focus.map(|(_, tier)| tier),
        remaining,
        message,
    }
}

fn format_amount(amount: u32) -> String {
    format!("${amount}")
}
