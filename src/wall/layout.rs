//! Flow layout of rendered tiles
//!
//! Tiles fill rows left to right. A large tile takes half the container width,
//! a quarter pair or plain tile a quarter; every row has the item height from
//! [`TileHeights`], and quarter pairs split it between their two cells.

use crate::wall::fragment::{RenderFragment, TileShape};
use crate::wall::viewport::TileHeights;

// Absorbs rounding when four quarters fill a row
const ROW_EPSILON: f64 = 1e-6;

/// Axis-aligned rectangle in wall coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// The same rectangle with every coordinate multiplied by `factor`
    pub const fn scaled(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// A cell after layout
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedCell {
    /// Shape of the cell
    pub shape: TileShape,
    /// Position on the wall
    pub rect: Rect,
}

/// Incremental layout of the wall's tiles
#[derive(Clone, Debug)]
pub struct WallLayout {
    container_width: f64,
    ratio: f64,
    heights: TileHeights,
    cells: Vec<PlacedCell>,
    cursor_x: f64,
    rows: usize,
}

impl WallLayout {
    /// Empty layout for a container width
    pub fn new(container_width: f64, ratio: f64) -> Self {
        Self {
            container_width,
            ratio,
            heights: TileHeights::for_container(container_width, ratio),
            cells: Vec::new(),
            cursor_x: 0.0,
            rows: 0,
        }
    }

    /// Place a fragment after the previous ones
    pub fn push(&mut self, fragment: &RenderFragment) {
        let width = match fragment.shape() {
            TileShape::FullHalf => self.container_width / 2.0,
            _ => self.container_width / 4.0,
        };

        if self.rows == 0 || self.cursor_x + width > self.container_width + ROW_EPSILON {
            self.rows += 1;
            self.cursor_x = 0.0;
        }
        let x = self.cursor_x;
        let y = (self.rows - 1) as f64 * self.heights.item;

        match fragment {
            RenderFragment::Single(cell) => self.cells.push(PlacedCell {
                shape: cell.shape,
                rect: Rect {
                    x,
                    y,
                    width,
                    height: self.heights.item,
                },
            }),
            RenderFragment::Merged { first, second } => {
                self.cells.push(PlacedCell {
                    shape: first.shape,
                    rect: Rect {
                        x,
                        y,
                        width,
                        height: self.heights.half,
                    },
                });
                self.cells.push(PlacedCell {
                    shape: second.shape,
                    rect: Rect {
                        x,
                        y: y + self.heights.half,
                        width,
                        height: self.heights.half,
                    },
                });
            }
        }
        self.cursor_x += width;
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.cells.clear();
        self.cursor_x = 0.0;
        self.rows = 0;
    }

    /// Change the container width and lay existing tiles out again
    pub fn resize(&mut self, container_width: f64) {
        self.container_width = container_width;
        self.heights = TileHeights::for_container(container_width, self.ratio);

        let mut rows = 0;
        let mut cursor_x = 0.0;
        let mut top = 0.0;
        for cell in &mut self.cells {
            let width = match cell.shape {
                TileShape::FullHalf => container_width / 2.0,
                _ => container_width / 4.0,
            };
            // The lower half of a pair shares its column with the upper half
            if cell.shape == TileShape::QuarterPairSecond {
                cell.rect.x = cursor_x - width;
            } else {
                if rows == 0 || cursor_x + width > container_width + ROW_EPSILON {
                    rows += 1;
                    cursor_x = 0.0;
                }
                top = (rows - 1) as f64 * self.heights.item;
                cell.rect.x = cursor_x;
                cursor_x += width;
            }
            cell.rect.width = width;
            match cell.shape {
                TileShape::QuarterPairFirst => {
                    cell.rect.y = top;
                    cell.rect.height = self.heights.half;
                }
                TileShape::QuarterPairSecond => {
                    cell.rect.y = top + self.heights.half;
                    cell.rect.height = self.heights.half;
                }
                TileShape::FullHalf | TileShape::DefaultItem => {
                    cell.rect.y = top;
                    cell.rect.height = self.heights.item;
                }
            }
        }
        self.rows = rows;
        self.cursor_x = cursor_x;
    }

    /// Laid-out cells in render order
    pub fn cells(&self) -> &[PlacedCell] {
        &self.cells
    }

    /// Current tile heights
    pub const fn heights(&self) -> TileHeights {
        self.heights
    }

    /// Container width
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Total height of all rows
    pub fn document_height(&self) -> f64 {
        self.rows as f64 * self.heights.item
    }
}
