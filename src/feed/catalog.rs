//! Offline feed serving images from a JSON catalog file
//!
//! The catalog is `{"images": [{"thumbnail", "url", "tag"}...], "categories": [...]}`
//! with `categories` optional. Pages are filtered and sliced the same way the
//! image API does it, so a catalog can stand in for a live backend.

use crate::feed::source::{CategorySource, PageRequest, PageSource};
use crate::feed::wire::{WireCategory, WireImage};
use crate::io::configuration::ALL_CATEGORY_ID;
use crate::io::error::{Result, WallError};
use crate::wall::category::Category;
use crate::wall::fragment::ImageDescriptor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// On-disk catalog layout
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Every image, in wall order
    pub images: Vec<WireImage>,
    /// Explicit category list; derived from tags when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<WireCategory>>,
}

/// In-memory feed over a fixed list of images
#[derive(Clone, Debug, Default)]
pub struct CatalogFeed {
    images: Vec<ImageDescriptor>,
    categories: Option<Vec<Category>>,
}

impl CatalogFeed {
    /// Feed over `images`, deriving categories from their labels
    pub const fn from_images(images: Vec<ImageDescriptor>) -> Self {
        Self {
            images,
            categories: None,
        }
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `CatalogParse` if
    /// it is not a valid catalog
    pub fn open(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| WallError::FileSystem {
            path: path.to_path_buf(),
            operation: "read catalog",
            source: e,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&contents).map_err(|e| WallError::CatalogParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self::from(file))
    }

    /// Images matching a category id
    ///
    /// `all` matches everything; otherwise the label must contain the id.
    pub fn matching(&self, category: &str) -> Vec<&ImageDescriptor> {
        self.images
            .iter()
            .filter(|image| category == ALL_CATEGORY_ID || label_matches(&image.label, category))
            .collect()
    }

    /// Number of catalogued images
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the catalog holds no images
    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Categories derived from labels
    ///
    /// A label `a_b_c` contributes its leading folder `a`; a label without
    /// separators contributes itself. Results are sorted by id.
    pub fn derived_categories(&self) -> Vec<Category> {
        let tags: BTreeSet<&str> = self
            .images
            .iter()
            .map(|image| image.label.as_str())
            .filter(|tag| !tag.is_empty())
            .collect();

        let mut seen = BTreeSet::new();
        let mut categories = Vec::new();
        for tag in tags {
            let id = tag.split('_').next().unwrap_or(tag);
            if seen.insert(id) {
                let count = self.matching(id).len() as u64;
                categories.push(Category {
                    id: id.to_string(),
                    name: id.to_string(),
                    count: Some(count),
                });
            }
        }
        categories
    }
}

impl From<CatalogFile> for CatalogFeed {
    fn from(file: CatalogFile) -> Self {
        Self {
            images: file.images.into_iter().map(ImageDescriptor::from).collect(),
            categories: file
                .categories
                .map(|list| list.into_iter().map(Category::from).collect()),
        }
    }
}

fn label_matches(label: &str, category: &str) -> bool {
    label.contains(category) || label.starts_with(category)
}

#[async_trait]
impl PageSource for CatalogFeed {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ImageDescriptor>> {
        Ok(self
            .matching(&request.category)
            .into_iter()
            .skip(request.offset)
            .take(request.count)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategorySource for CatalogFeed {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .clone()
            .unwrap_or_else(|| self.derived_categories()))
    }
}
