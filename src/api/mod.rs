//! HTS label WASM API
//!
//! This module provides the JavaScript-facing API: load a label (from text,
//! lines or a song tree), export it, validate it and inspect its song tree.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, settings, error handling and logging
//! - `core`: The label store and the exported functions

pub mod helpers;
pub mod core;

// Re-export all public functions to keep the API flat
pub use core::*;
