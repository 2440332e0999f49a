//! Render collaborator interface and an in-memory implementation

use crate::wall::category::CategoryState;
use crate::wall::fragment::RenderFragment;
use crate::wall::loader::LoadStatus;
use crate::wall::viewport::TileHeights;

/// Everything the wall core asks of the page it draws into
pub trait RenderTarget {
    /// Append a completed tile and trigger lazy-loading of its images
    fn append(&mut self, fragment: RenderFragment);

    /// Remove every rendered tile
    fn clear_all(&mut self);

    /// Resize rendered tiles
    fn apply_tile_heights(&mut self, heights: TileHeights);

    /// Update the inline loading status
    fn set_status(&mut self, status: LoadStatus);

    /// Update the page title
    fn set_title(&mut self, title: &str);

    /// Redraw the category list
    fn show_categories(&mut self, _categories: &CategoryState) {}
}

/// Render target that records every call
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    /// Tiles currently on the wall
    pub fragments: Vec<RenderFragment>,
    /// Number of `clear_all` calls
    pub clears: usize,
    /// Most recent tile heights
    pub heights: Option<TileHeights>,
    /// Every status in the order it was set
    pub statuses: Vec<LoadStatus>,
    /// Current title
    pub title: String,
    /// Most recently shown category list
    pub categories: Option<CategoryState>,
}

impl RecordingTarget {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent status
    pub fn status(&self) -> Option<LoadStatus> {
        self.statuses.last().copied()
    }

    /// Number of images currently visible on the wall
    pub fn image_count(&self) -> usize {
        self.fragments.iter().map(RenderFragment::image_count).sum()
    }
}

impl RenderTarget for RecordingTarget {
    fn append(&mut self, fragment: RenderFragment) {
        self.fragments.push(fragment);
    }

    fn clear_all(&mut self) {
        self.fragments.clear();
        self.clears += 1;
    }

    fn apply_tile_heights(&mut self, heights: TileHeights) {
        self.heights = Some(heights);
    }

    fn set_status(&mut self, status: LoadStatus) {
        self.statuses.push(status);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_categories(&mut self, categories: &CategoryState) {
        self.categories = Some(categories.clone());
    }
}
