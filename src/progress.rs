//! Progress bar display for unit rewriting

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress display while rewriting emitted units
pub struct ProgressDisplay {
    unit_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total unit count.
    ///
    /// Hidden when there is nothing to track or when debug logging is on, so
    /// the bar does not interleave with log lines.
    pub fn new(total_units: u64) -> Self {
        let unit_pb = ProgressBar::new(total_units);

        if total_units == 0 || log::log_enabled!(log::Level::Debug) {
            unit_pb.set_draw_target(ProgressDrawTarget::hidden());
        } else if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            unit_pb.set_style(style.progress_chars("#>-"));
        }

        Self { unit_pb }
    }

    /// Update to show current unit being rewritten
    pub fn update_unit(&self, unit_name: &str) {
        self.unit_pb.set_message(unit_name.to_string());
    }

    /// Increment unit progress
    pub fn inc_unit(&self) {
        self.unit_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.unit_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.unit_pb.abandon();
    }
}
