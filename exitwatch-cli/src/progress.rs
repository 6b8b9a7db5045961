//! Extraction progress bar
//!
//! Uses `indicatif` to show how many of the matched lines have been turned
//! into addresses.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use exitwatch_core::ExtractProgress;

/// Progress bar created lazily once the match count is known
pub struct BarProgress {
    template: String,
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
            bar: None,
        }
    }

    fn style(&self) -> ProgressStyle {
        ProgressStyle::with_template(&self.template).unwrap_or_else(|e| {
            tracing::warn!("Invalid progress template, using default: {}", e);
            ProgressStyle::default_bar()
        })
    }
}

impl ExtractProgress for BarProgress {
    fn start(&mut self, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(self.style());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    fn advance(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exitwatch_core::{extract, extract_with_progress, BAR_TEMPLATE};

    #[test]
    fn test_default_template_parses() {
        assert!(ProgressStyle::with_template(BAR_TEMPLATE).is_ok());
    }

    #[test]
    fn test_progress_does_not_change_results() {
        let body = "ExitAddress 10.0.0.1 a\nExitAddress 10.0.0.2 b\n";
        let mut progress = BarProgress::new(BAR_TEMPLATE);

        let with_bar = extract_with_progress(body, &mut progress);

        assert_eq!(with_bar, extract(body));
        assert!(progress.bar.is_none());
    }
}
