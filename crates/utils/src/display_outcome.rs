use buildbump_core::BumpOutcome;
use colored::Colorize;

const PREFIX: &str = "[buildbump]";

/// Console line for a finished run.
#[must_use]
pub fn display_outcome(outcome: &BumpOutcome) -> String {
    match outcome {
        BumpOutcome::Bumped { old, new, path } => format!(
            "{} {} {} {}",
            PREFIX.bright_black(),
            "updated BUILD:".bright_white().bold(),
            format!("{old} -> {new}").bright_green().bold(),
            format!("({})", path.display()).bright_black()
        ),
        BumpOutcome::Skipped(reason) => format!(
            "{} {} {}",
            PREFIX.bright_black(),
            "warning:".yellow().bold(),
            reason
        ),
    }
}

/// Extra warning when the written value is out of range for `uint16_t`, `None` otherwise.
#[must_use]
pub fn display_field_width_warning(outcome: &BumpOutcome) -> Option<String> {
    match outcome {
        BumpOutcome::Bumped { new, path, .. } if outcome.exceeds_field_width() => Some(format!(
            "{} {} BUILD {} in {} no longer fits uint16_t",
            PREFIX.bright_black(),
            "warning:".yellow().bold(),
            new,
            path.display()
        )),
        _ => None,
    }
}
