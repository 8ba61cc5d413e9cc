//! Spinner shown while a dashboard snapshot is being fetched.

use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::time::Duration;

/// Starts a steady-ticking spinner. Caller finishes it with `finish_and_clear`.
pub fn fetch_spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒", "●"]));
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(90));
    pb
}
