use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Creates a spinner on stderr. It stays invisible when stderr is not a terminal.
pub fn new_spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
