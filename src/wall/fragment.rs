//! Tile shapes, sizes and the markup fragments appended to the wall

use crate::io::configuration::DEFAULT_LABEL;

/// One image as delivered by a feed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Reference to the thumbnail shown in the tile
    pub thumbnail: String,
    /// Reference to the full-size image opened by the lightbox
    pub full: String,
    /// Human-readable tag
    pub label: String,
}

impl ImageDescriptor {
    /// Build a descriptor, substituting the default label for a missing tag
    pub fn new(
        thumbnail: impl Into<String>,
        full: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            thumbnail: thumbnail.into(),
            full: full.into(),
            label: label
                .filter(|tag| !tag.is_empty())
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        }
    }
}

/// Shape variant carried by every tile cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileShape {
    /// Large tile spanning half the viewport width
    FullHalf,
    /// Upper cell of a stacked quarter pair; never rendered alone
    QuarterPairFirst,
    /// Lower cell of a stacked quarter pair
    QuarterPairSecond,
    /// Plain single-cell tile
    DefaultItem,
}

/// Pixel dimensions of a tile cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Derives tile sizes from a fixed viewport width and aspect ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSizing {
    /// Width all tile widths are fractions of
    pub viewport_width: u32,
    /// Height-to-width ratio
    pub ratio: f64,
}

impl TileSizing {
    /// Create a sizing policy
    pub const fn new(viewport_width: u32, ratio: f64) -> Self {
        Self {
            viewport_width,
            ratio,
        }
    }

    /// Size of a `FullHalf` tile: half the viewport width
    pub fn half(&self) -> TileSize {
        self.fraction(2)
    }

    /// Size of a quarter-pair cell or default tile: a quarter of the viewport width
    pub fn quarter(&self) -> TileSize {
        self.fraction(4)
    }

    /// Size of a given shape
    pub fn for_shape(&self, shape: TileShape) -> TileSize {
        match shape {
            TileShape::FullHalf => self.half(),
            TileShape::QuarterPairFirst | TileShape::QuarterPairSecond | TileShape::DefaultItem => {
                self.quarter()
            }
        }
    }

    // Integer width first, then truncated height
    fn fraction(&self, divisor: u32) -> TileSize {
        let width = self.viewport_width / divisor;
        let height = (f64::from(width) * self.ratio) as u32;
        TileSize { width, height }
    }
}

/// A single image placed in a specific shape
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCell {
    /// Shape of this cell
    pub shape: TileShape,
    /// Image shown in the cell
    pub image: ImageDescriptor,
    /// Nominal pixel size
    pub size: TileSize,
}

impl TileCell {
    /// Place an image in a shape sized by the given policy
    pub fn new(shape: TileShape, image: ImageDescriptor, sizing: &TileSizing) -> Self {
        Self {
            shape,
            image,
            size: sizing.for_shape(shape),
        }
    }

    fn anchor_markup(&self) -> String {
        format!(
            "<a href=\"{full}\" data-fancybox=\"images\"><img src=\"{thumb}\" alt=\"{label}\" title=\"Tag: {label}\" width=\"{width}\" height=\"{height}\" class=\"pimg\"></a>",
            full = escape_attribute(&self.image.full),
            thumb = escape_attribute(&self.image.thumbnail),
            label = escape_attribute(&self.image.label),
            width = self.size.width,
            height = self.size.height,
        )
    }
}

/// A renderable tile ready to append to the wall
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderFragment {
    /// One cell occupying its own tile (`FullHalf` or `DefaultItem`)
    Single(TileCell),
    /// A quarter pair merged into one two-cell tile
    Merged {
        /// The `QuarterPairFirst` cell held back until its pair arrived
        first: TileCell,
        /// The `QuarterPairSecond` cell that completed the pair
        second: TileCell,
    },
}

impl RenderFragment {
    /// Shape of the leading cell
    pub const fn shape(&self) -> TileShape {
        match self {
            Self::Single(cell) => cell.shape,
            Self::Merged { first, .. } => first.shape,
        }
    }

    /// Whether this fragment carries a merged quarter pair
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }

    /// Cells in render order
    pub fn cells(&self) -> Vec<&TileCell> {
        match self {
            Self::Single(cell) => vec![cell],
            Self::Merged { first, second } => vec![first, second],
        }
    }

    /// Number of images consumed by this fragment
    pub const fn image_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Merged { .. } => 2,
        }
    }

    /// HTML markup for the tile, with lightbox and lazy-load hooks
    pub fn to_markup(&self) -> String {
        match self {
            Self::Single(cell) => {
                let class = match cell.shape {
                    TileShape::FullHalf => "item half oneImg",
                    _ => "item oneImg",
                };
                format!("<div class=\"{class}\">{}</div>", cell.anchor_markup())
            }
            Self::Merged { first, second } => format!(
                "<div class=\"item quater\"><div class=\"Hhalf oneImg\">{}</div><div class=\"Hhalf oneImg\">{}</div></div>",
                first.anchor_markup(),
                second.anchor_markup()
            ),
        }
    }
}

/// Escape text for use inside a double-quoted HTML attribute
pub fn escape_attribute(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
