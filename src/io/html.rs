//! Render target producing a standalone HTML page of the wall

use crate::io::error::{Result, WallError};
use crate::wall::category::CategoryState;
use crate::wall::fragment::{RenderFragment, escape_attribute};
use crate::wall::loader::LoadStatus;
use crate::wall::render::RenderTarget;
use crate::wall::viewport::TileHeights;
use std::fmt::Write as _;
use std::path::Path;

/// Collects tile markup and page chrome
#[derive(Clone, Debug, Default)]
pub struct HtmlTarget {
    tiles: Vec<String>,
    title: String,
    status: Option<LoadStatus>,
    heights: Option<TileHeights>,
    categories: Option<CategoryState>,
}

impl HtmlTarget {
    /// Empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of every appended tile
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Page title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Assemble the complete document
    pub fn to_document(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_attribute(&self.title));
        if let Some(heights) = self.heights {
            let _ = writeln!(
                html,
                "<style>.jigsaw .item {{ height: {:.2}px; }} .jigsaw .Hhalf {{ height: {:.2}px; }}</style>",
                heights.item, heights.half
            );
        }
        html.push_str("</head>\n<body>\n");

        if let Some(categories) = &self.categories {
            html.push_str("<ul id=\"categories-list\">\n");
            for category in categories.categories() {
                let active = if category.id == categories.selected() {
                    " class=\"active\""
                } else {
                    ""
                };
                let _ = writeln!(
                    html,
                    "<li data-id=\"{}\"{active}>{}</li>",
                    escape_attribute(&category.id),
                    escape_attribute(&category.name)
                );
            }
            html.push_str("</ul>\n");
        }

        html.push_str("<div class=\"jigsaw\" id=\"walBox\">\n");
        for tile in &self.tiles {
            html.push_str(tile);
            html.push('\n');
        }
        html.push_str("</div>\n");

        if let Some(message) = self.status.and_then(LoadStatus::message) {
            let _ = writeln!(html, "<div id=\"loadmore\">{}</div>", escape_attribute(message));
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the document to `path`
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the parent directory cannot be created or the
    /// file cannot be written
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WallError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
        std::fs::write(path, self.to_document()).map_err(|e| WallError::FileSystem {
            path: path.to_path_buf(),
            operation: "write html",
            source: e,
        })
    }
}

impl RenderTarget for HtmlTarget {
    fn append(&mut self, fragment: RenderFragment) {
        self.tiles.push(fragment.to_markup());
    }

    fn clear_all(&mut self) {
        self.tiles.clear();
    }

    fn apply_tile_heights(&mut self, heights: TileHeights) {
        self.heights = Some(heights);
    }

    fn set_status(&mut self, status: LoadStatus) {
        self.status = Some(status);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_categories(&mut self, categories: &CategoryState) {
        self.categories = Some(categories.clone());
    }
}
