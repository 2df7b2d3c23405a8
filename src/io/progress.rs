//! Batch progress display with a per-image stage readout

use crate::algorithm::executor::Stage;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display for a batch of images
///
/// Shows one bar counting finished images and one status line with the most recent
/// pipeline stage of any image. All methods take `&self`, so a single manager can be
/// shared by parallel workers.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: ProgressBar,
    status_bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with empty bars
    pub fn new() -> Self {
        let multi_progress = MultiProgress::new();
        let batch_bar = multi_progress.add(ProgressBar::new(0));
        batch_bar.set_style(BATCH_STYLE.clone());
        let status_bar = multi_progress.add(ProgressBar::new_spinner());
        status_bar.set_style(STATUS_STYLE.clone());

        Self {
            multi_progress,
            batch_bar,
            status_bar,
        }
    }

    /// Set the number of images in the batch
    pub fn initialize(&self, image_count: usize) {
        self.batch_bar.set_length(image_count as u64);
        self.batch_bar.set_position(0);
    }

    /// Report the stage an image has just completed
    pub fn report_stage(&self, index: usize, stage: Stage) {
        self.status_bar.set_prefix(format!("#{}", index + 1));
        self.status_bar.set_message(stage.to_string());
        self.status_bar.tick();
    }

    /// Mark an image as written to `path`
    pub fn complete_image(&self, path: &Path) {
        self.batch_bar.inc(1);
        let _ = self
            .multi_progress
            .println(format!("Generated {}", path.display()));
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.status_bar.finish_and_clear();
        self.batch_bar.finish_with_message("All images generated");
        let _ = self.multi_progress.clear();
    }
}
