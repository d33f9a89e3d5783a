//! Terminal progress display.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use verbatim_stream::Progress;

/// Spinner on stderr counting processed regions.
///
/// `indicatif` hides it when stderr is not a terminal.
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new(action: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg} {pos} regions ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(action);
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }
}

impl Progress for SpinnerProgress {
    fn region(&self, regions: usize) {
        self.bar.set_position(regions as u64);
    }

    fn finish(&self, _regions: usize) {
        self.bar.finish_and_clear();
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        // Fatal errors skip `finish`; never leave a spinner line behind.
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
