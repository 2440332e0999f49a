//! JSON shapes exchanged with the image API

use crate::io::error::{Result, format_error};
use crate::wall::category::Category;
use crate::wall::fragment::ImageDescriptor;
use serde::{Deserialize, Serialize};

/// Response code signalling success
pub const SUCCESS_CODE: i64 = 200;

/// One image entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireImage {
    /// Thumbnail reference
    pub thumbnail: String,
    /// Full-size image reference
    pub url: String,
    /// Optional tag, used as the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl From<WireImage> for ImageDescriptor {
    fn from(image: WireImage) -> Self {
        Self::new(image.thumbnail, image.url, image.tag)
    }
}

/// Response to a page request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Status code; anything but 200 is a failure
    pub code: i64,
    /// Images of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<WireImage>>,
    /// Total images in the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Whether images remain past this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    /// Server-side explanation of a failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PageResponse {
    /// Successful response carrying `images`
    pub const fn success(images: Vec<WireImage>, total: u64, has_more: bool) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(images),
            total: Some(total),
            has_more: Some(has_more),
            message: None,
        }
    }

    /// Validate and convert into descriptors in response order
    ///
    /// # Errors
    ///
    /// Returns `Format` when the code is not 200 or `data` is missing
    pub fn into_images(self) -> Result<Vec<ImageDescriptor>> {
        if self.code != SUCCESS_CODE {
            return Err(format_error(&failure_reason(
                self.code,
                self.message.as_deref(),
            )));
        }
        let data = self
            .data
            .ok_or_else(|| format_error(&"response has no 'data' field"))?;
        Ok(data.into_iter().map(ImageDescriptor::from).collect())
    }
}

/// One category entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCategory {
    /// Identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// `folder` or `file`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Number of images in the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl From<WireCategory> for Category {
    fn from(category: WireCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            count: category.count,
        }
    }
}

/// Response to a category list request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Status code; anything but 200 is a failure
    pub code: i64,
    /// Category list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<WireCategory>>,
    /// Server-side explanation of a failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CategoryResponse {
    /// Validate and convert into categories
    ///
    /// # Errors
    ///
    /// Returns `Format` when the code is not 200 or `categories` is missing
    pub fn into_categories(self) -> Result<Vec<Category>> {
        if self.code != SUCCESS_CODE {
            return Err(format_error(&failure_reason(
                self.code,
                self.message.as_deref(),
            )));
        }
        let categories = self
            .categories
            .ok_or_else(|| format_error(&"response has no 'categories' field"))?;
        Ok(categories.into_iter().map(Category::from).collect())
    }
}

fn failure_reason(code: i64, message: Option<&str>) -> String {
    message.map_or_else(
        || format!("response code {code}"),
        |message| format!("response code {code}: {message}"),
    )
}
