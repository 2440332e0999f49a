//! Infinite-scroll photo wall with a jigsaw rhythm
//!
//! Images arrive page by page from a feed. Each one is placed as a large
//! half-width tile or as half of a stacked quarter pair, so the wall never
//! settles into a uniform grid, while an in-flight guard keeps scroll-driven
//! loading from overlapping fetches.

#![forbid(unsafe_code)]

/// Feeds supplying images and categories
pub mod feed;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile sequencing, paging and the session event loop
pub mod wall;

pub use io::error::{Result, WallError};
