//! Progress reporting for long association runs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner shown while the associator scans the click sequence.
///
/// The scan is O(N·M) in clicks and open tracks, so large inputs can take
/// a while with no output of their own.
pub fn create_tracking_spinner(total_clicks: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_clicks == 0 {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("associating {total_clicks} click(s)"));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_none() {
        assert!(create_tracking_spinner(100, false).is_none());
    }

    #[test]
    fn test_empty_input_returns_none() {
        assert!(create_tracking_spinner(0, true).is_none());
    }

    #[test]
    fn test_finish_handles_none() {
        finish_progress(None, "done");
    }
}
