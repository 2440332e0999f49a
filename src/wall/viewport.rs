//! Scroll geometry and the near-bottom load trigger

use crate::io::configuration::{MIN_SCROLL_TOP, SCROLL_BOTTOM_THRESHOLD};

/// Snapshot of the viewport at a scroll event
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top of the document
    pub scroll_top: f64,
    /// Visible height
    pub viewport_height: f64,
    /// Total document height
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Metrics for a viewport scrolled all the way down
    pub fn at_bottom(viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top: (document_height - viewport_height).max(0.0),
            viewport_height,
            document_height,
        }
    }

    /// Distance between the bottom of the viewport and the end of the document
    pub fn remaining(&self) -> f64 {
        self.document_height - (self.scroll_top + self.viewport_height)
    }
}

/// Decides whether a scroll event should request the next page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    /// Bottom distance within which loading starts
    pub threshold: f64,
    /// Scroll offset that must be exceeded first
    pub min_scroll_top: f64,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(SCROLL_BOTTOM_THRESHOLD, MIN_SCROLL_TOP)
    }
}

impl ScrollTrigger {
    /// Create a trigger from pixel thresholds
    pub fn new(threshold: u32, min_scroll_top: u32) -> Self {
        Self {
            threshold: f64::from(threshold),
            min_scroll_top: f64::from(min_scroll_top),
        }
    }

    /// Near the bottom and scrolled past the minimum offset
    pub fn should_load(&self, metrics: &ScrollMetrics) -> bool {
        metrics.scroll_top + metrics.viewport_height + self.threshold >= metrics.document_height
            && metrics.scroll_top > self.min_scroll_top
    }
}

/// Heights applied to rendered tiles after each page or resize
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileHeights {
    /// Height of a full tile row
    pub item: f64,
    /// Height of one stacked half cell
    pub half: f64,
}

impl TileHeights {
    /// Heights for a container of the given width
    pub fn for_container(container_width: f64, ratio: f64) -> Self {
        let item = container_width * (ratio / 2.0);
        Self {
            item,
            half: item / 2.0,
        }
    }
}
