//! Per-category progress display while scrolling through pages

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>16} [{bar:30.cyan/blue}] {pos}/{len} pages {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per category being loaded
pub struct ProgressManager {
    multi_progress: MultiProgress,
    category_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            category_bars: Vec::new(),
        }
    }

    /// Create one bar per category
    pub fn initialize(&mut self, category_count: usize) {
        for _ in 0..category_count {
            let bar = ProgressBar::new(0);
            bar.set_style(PAGE_STYLE.clone());
            self.category_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Configure the bar for a category about to be loaded
    pub fn start_category(&self, index: usize, name: &str, max_pages: usize) {
        if let Some(bar) = self.category_bars.get(index) {
            bar.set_prefix(name.to_string());
            bar.set_length(max_pages as u64);
            bar.set_position(0);
            bar.set_message(String::new());
        }
    }

    /// Report a settled page and the number of images on the wall
    pub fn page_loaded(&self, index: usize, images: usize) {
        if let Some(bar) = self.category_bars.get(index) {
            bar.inc(1);
            bar.set_message(format!("{images} images"));
        }
    }

    /// Mark a category as finished with a closing note
    pub fn complete_category(&self, index: usize, note: &str) {
        if let Some(bar) = self.category_bars.get(index) {
            bar.finish_with_message(note.to_string());
        }
    }

    /// Number of bars created
    pub const fn bar_count(&self) -> usize {
        self.category_bars.len()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
