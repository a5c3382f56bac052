use crate::core::ProgressSink;
use crate::core::progress::COMPLETE;
use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{bar:30.cyan/blue} {pos:>3}% {msg}";

/// Shows the simulated load progress as a 0-100 bar on stderr.
///
/// indicatif stops drawing on its own when stderr is not a terminal.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self::hidden();
        }

        let bar = ProgressBar::new(COMPLETE as u64);
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProgressSink for TerminalProgress {
    fn update(&self, percent: f64, caption: &str) {
        tracing::debug!("Progress {:.1}% ({})", percent, caption);

        let position = percent.clamp(0.0, COMPLETE).round() as u64;
        self.bar.set_position(position);
        self.bar.set_message(caption.to_string());
        if percent >= COMPLETE {
            self.bar.finish_with_message(caption.to_string());
        }
    }
}
