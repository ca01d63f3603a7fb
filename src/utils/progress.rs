//! Progress helpers using indicatif

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for indeterminate work (dataset loading)
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("    {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("◐◓◑◒✓"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb
}

/// Replace a running spinner with a success line
pub fn finish_with_success(pb: &ProgressBar, message: &str) {
    pb.finish_and_clear();
    super::print_success(message);
}
