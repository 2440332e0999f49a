//! The photo wall core
//!
//! This module contains:
//! - The tile sequencer deciding each image's shape
//! - The page loader and its in-flight guard
//! - Category, viewport and layout state
//! - The session event loop and the render collaborator interface

/// Category list and selection
pub mod category;
/// Injectable random draw for large tiles
pub mod dice;
/// Tile shapes, sizes and markup fragments
pub mod fragment;
/// Flow layout of rendered tiles
pub mod layout;
/// Pagination and the in-flight guard
pub mod loader;
/// Render collaborator interface
pub mod render;
/// Event loop binding the wall together
pub mod session;
/// Tile placement state machine
pub mod sequencer;
/// Scroll geometry and tile heights
pub mod viewport;

pub use fragment::{ImageDescriptor, RenderFragment, TileShape};
pub use loader::{LoadSignal, PageLoader, RequestOutcome};
pub use sequencer::{SequencerState, TileSequencer};
pub use session::{WallEvent, WallSession};
