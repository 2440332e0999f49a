//! PNG export of the wall layout with one colour per tile shape

use crate::io::error::{Result, WallError};
use crate::wall::fragment::TileShape;
use crate::wall::layout::{Rect, WallLayout};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Pixels left blank around every cell
const GUTTER: u32 = 2;

/// Tallest preview written; longer walls are scaled down to fit
pub const MAX_PNG_HEIGHT: u32 = 4096;

/// Fill colour for a tile shape
pub const fn shape_color(shape: TileShape) -> Rgba<u8> {
    match shape {
        TileShape::FullHalf => Rgba([214, 96, 77, 255]),
        TileShape::QuarterPairFirst => Rgba([67, 147, 195, 255]),
        TileShape::QuarterPairSecond => Rgba([146, 197, 222, 255]),
        TileShape::DefaultItem => Rgba([166, 166, 166, 255]),
    }
}

/// Export the layout as a PNG image with transparent gutters
///
/// # Errors
///
/// Returns an error if:
/// - The layout holds no tiles
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(layout: &WallLayout, output_path: &Path) -> Result<()> {
    if layout.cells().is_empty() {
        return Err(WallError::InvalidParameter {
            parameter: "layout",
            value: String::new(),
            reason: "no tiles have been placed on the wall".to_string(),
        });
    }

    let max_height = f64::from(MAX_PNG_HEIGHT);
    let scale = (max_height / layout.document_height()).min(1.0);
    let width = (layout.container_width() * scale).ceil().max(1.0) as u32;
    let scaled_height = layout.document_height() * scale;
    let height = scaled_height.ceil().clamp(1.0, max_height) as u32;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for cell in layout.cells() {
        fill_rect(&mut img, &cell.rect.scaled(scale), shape_color(cell.shape));
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WallError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| WallError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

// Clipped to the image bounds; the gutter is taken from every edge
fn fill_rect(img: &mut ImageBuffer<Rgba<u8>, Vec<u8>>, rect: &Rect, color: Rgba<u8>) {
    let x0 = rect.x.max(0.0) as u32 + GUTTER;
    let y0 = rect.y.max(0.0) as u32 + GUTTER;
    let x1 = ((rect.x + rect.width).max(0.0) as u32)
        .saturating_sub(GUTTER)
        .min(img.width());
    let y1 = ((rect.y + rect.height).max(0.0) as u32)
        .saturating_sub(GUTTER)
        .min(img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, color);
        }
    }
}
