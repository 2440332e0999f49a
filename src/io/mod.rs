/// Command-line interface and simulated scrolling runner
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Standalone HTML page output
pub mod html;
/// PNG export of the wall layout
pub mod image;
/// Logger initialisation
pub mod logging;
/// Page loading progress display
pub mod progress;
