//! Asynchronous fetch collaborators for images and categories

use crate::io::error::Result;
use crate::wall::category::{Category, CategoryState};
use crate::wall::fragment::ImageDescriptor;
use async_trait::async_trait;
use log::warn;

/// One page of a category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Category id
    pub category: String,
    /// Index of the first image
    pub offset: usize,
    /// Maximum number of images
    pub count: usize,
}

/// Supplies pages of image descriptors
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page; an empty page means end of data
    ///
    /// # Errors
    ///
    /// Returns `Network`/`Timeout` on transport failure and `Format` when the
    /// response is malformed or carries a non-200 code
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ImageDescriptor>>;
}

/// Supplies the category list
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch every category the backend knows about
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`PageSource::fetch_page`]
    async fn fetch_categories(&self) -> Result<Vec<Category>>;
}

/// Fetch the category list, falling back to the built-in list on any failure
pub async fn load_categories<S: CategorySource + ?Sized>(source: &S) -> CategoryState {
    match source.fetch_categories().await {
        Ok(categories) => CategoryState::from_remote(categories),
        Err(error) => {
            warn!("failed to load categories, using built-in list: {error}");
            CategoryState::fallback()
        }
    }
}
