//! Hypermorph - morphing tesseract viewer
//!
//! Library half of the application: configuration loading, input mapping
//! and the systems `main` wires together.

pub mod config;
pub mod input;
pub mod systems;
