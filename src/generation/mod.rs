//! Map generation pipeline
//!
//! Generation runs in two stages: noise seeding fills a fresh grid with
//! independent floor/wall samples, then the automaton smooths it over a
//! caller-chosen number of passes. Both stages are pure given their random
//! source, so a fixed seed reproduces the same map exactly.

/// Multi-pass cellular automaton smoothing
pub mod automaton;
/// Random noise seeding of a fresh map
pub mod noise;

pub use automaton::Automaton;
pub use noise::seed_noise_map;
