//! Progress display for multi-pass smoothing

use indicatif::{ProgressBar, ProgressStyle};

/// Width of progress bars in characters
const PROGRESS_BAR_WIDTH: usize = 50;

/// Optional progress bar over smoothing passes
///
/// Quiet runs construct the no-op variant, so call sites stay free of
/// conditionals.
pub struct PassProgress {
    bar: Option<ProgressBar>,
}

impl PassProgress {
    /// Create a visible progress bar spanning `passes` smoothing passes
    pub fn new(passes: usize) -> Self {
        let bar = ProgressBar::new(passes as u64);
        let template = format!(
            "smoothing [{{bar:{PROGRESS_BAR_WIDTH}}}] pass {{pos}}/{{len}}"
        );
        if let Ok(style) = ProgressStyle::with_template(&template) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar: Some(bar) }
    }

    /// Create a progress display that renders nothing
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Record one completed smoothing pass
    pub fn pass_done(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Clear the bar once smoothing finishes
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
