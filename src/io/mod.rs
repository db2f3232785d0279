//! Input/output: CLI, exports, configuration, and error types

/// Command-line interface and generation orchestration
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// PNG export of generated maps
pub mod image;
/// Progress display for multi-pass smoothing
pub mod progress;
/// Plain-text export of generated maps
pub mod text;
