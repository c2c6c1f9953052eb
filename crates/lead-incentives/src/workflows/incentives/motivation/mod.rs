//! Motivation copy: the monthly banner ladder, the same-day incentive
//! progress ladder and the four-hour daily progress slots. Variant choice is
//! driven by [`MessageSeed`](super::period::MessageSeed), never by randomness.

mod monthly;
mod progress;
mod slots;

pub use monthly::{monthly_percent, select_message, status_label, MotivationBanner, PERCENT_CAP};
pub use progress::{incentive_progress, IncentiveProgress, ProgressStage};
pub use slots::{daily_progress, DailyProgress, DaySlot};

#[cfg(test)]
pub(crate) use monthly::MONTHLY_LADDER;

/// Replaces `{key}` placeholders.
fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in values {
        rendered = rendered.replace(&format!("{{{key}}}"), value);
    }
    rendered
}
