//! Fetch collaborators supplying images and categories

/// JSON catalog file feed
pub mod catalog;
/// HTTP feed for the image API
pub mod http;
/// Feed traits and page requests
pub mod source;
/// Wire format of the image API
pub mod wire;

pub use source::{CategorySource, PageRequest, PageSource};
