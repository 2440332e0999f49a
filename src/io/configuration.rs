//! Wall constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use std::time::Duration;

// Paging
/// Number of images requested per page
pub const DEFAULT_PAGE_SIZE: usize = 30;
/// Pages the command-line runner scrolls through per category
pub const DEFAULT_MAX_PAGES: usize = 10;

// Tile sizing
/// Height-to-width ratio applied to every tile
pub const DEFAULT_RATIO: f64 = 0.618;
/// Viewport width tile sizes are derived from (not the rendered container)
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1920;
/// Viewport height used when simulating scrolling
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1080;

// Scroll trigger
/// Distance from the document bottom at which the next page is requested
pub const SCROLL_BOTTOM_THRESHOLD: u32 = 20;
/// Scroll position that must be exceeded before the trigger fires
pub const MIN_SCROLL_TOP: u32 = 20;

// Shape sequencing
/// A large tile is drawn with probability 1 in this many
pub const BIG_TILE_ODDS: u32 = 3;
/// Window over the image counter guaranteeing one large tile
pub const GROUP_SIZE: usize = 5;
/// Fixed seed for reproducible walls
pub const DEFAULT_SEED: u64 = 42;

// Categories and labels
/// Category id meaning "every image"
pub const ALL_CATEGORY_ID: &str = "all";
/// Display name of the "every image" category
pub const ALL_CATEGORY_NAME: &str = "All images";
/// Placeholder category offered when the category list cannot be fetched
pub const FALLBACK_CATEGORY_ID: &str = "test";
/// Display name of the placeholder category
pub const FALLBACK_CATEGORY_NAME: &str = "Test category";
/// Label given to images that arrive without a tag
pub const DEFAULT_LABEL: &str = "uncategorized";
/// Appended to the selected category name to form the page title
pub const TITLE_SUFFIX: &str = " - Wallpapers";

/// Query parameter names understood by the image API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryKeys {
    /// Name of the category parameter
    pub category: &'static str,
    /// Name of the offset parameter
    pub offset: &'static str,
    /// Name of the page size parameter
    pub count: &'static str,
}

impl QueryKeys {
    /// `category` / `offset` / `count`
    pub const fn standard() -> Self {
        Self {
            category: "category",
            offset: "offset",
            count: "count",
        }
    }

    /// `cid` / `start` / `count`, as spoken by older backends
    pub const fn legacy() -> Self {
        Self {
            category: "cid",
            offset: "start",
            count: "count",
        }
    }
}

impl Default for QueryKeys {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parameters shared by the sequencer, the page loader and the feeds
#[derive(Clone, Debug, PartialEq)]
pub struct WallConfig {
    /// Images requested per page
    pub page_size: usize,
    /// Tile height-to-width ratio
    pub ratio: f64,
    /// Width tile sizes are derived from
    pub viewport_width: u32,
    /// Bottom distance that triggers loading
    pub scroll_threshold: u32,
    /// Minimum scroll position before loading is triggered
    pub min_scroll_top: u32,
    /// Query parameter names for the image API
    pub query_keys: QueryKeys,
    /// Optional upper bound on a single fetch
    pub fetch_timeout: Option<Duration>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            ratio: DEFAULT_RATIO,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            scroll_threshold: SCROLL_BOTTOM_THRESHOLD,
            min_scroll_top: MIN_SCROLL_TOP,
            query_keys: QueryKeys::standard(),
            fetch_timeout: None,
        }
    }
}

impl WallConfig {
    /// Reject values that would produce empty pages or degenerate tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the page size or viewport width is zero,
    /// or the ratio is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(invalid_parameter(
                "page_size",
                &self.page_size,
                &"must be at least 1",
            ));
        }
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(invalid_parameter(
                "ratio",
                &self.ratio,
                &"must be a positive finite number",
            ));
        }
        if self.viewport_width == 0 {
            return Err(invalid_parameter(
                "viewport_width",
                &self.viewport_width,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}
