use std::time::Duration;

use super::model::Progress;

/// Whole seconds elapsed at `progress` percent of `total`, rounded down.
pub fn elapsed_secs(progress: Progress, total: Duration) -> u64 {
    u64::from(progress.value()) * total.as_secs() / u64::from(Progress::MAX)
}

/// Format seconds as `m:ss`.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// The `elapsed / total` label shown next to the progress bar.
pub fn time_label(progress: Progress, total: Duration) -> String {
    format!(
        "{} / {}",
        format_clock(elapsed_secs(progress, total)),
        format_clock(total.as_secs())
    )
}
