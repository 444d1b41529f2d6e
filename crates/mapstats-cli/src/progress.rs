use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output::OutputWriter;

/// Create a spinner for indeterminate progress
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        pb.set_style(
            spinner_style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Spinner shown while waiting on the network.
///
/// Hidden in JSON mode so that stdout stays machine-readable.
pub fn fetch_spinner(output: &OutputWriter, message: &str) -> ProgressBar {
    if output.is_json() {
        ProgressBar::hidden()
    } else {
        create_spinner(message)
    }
}
