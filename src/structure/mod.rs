//! Hierarchy reconstruction
//!
//! Turns parsed label lines into a song tree and derives, from the tree, the
//! neighbor links every line needs for rendering.
//!
//! ## Modules
//!
//! - `builder`: one pass over parsed lines, opening phrases/notes/syllables
//!   from position markers
//! - `neighbors`: sliding windows over the flattened tree, one link set per line

pub mod builder;
pub mod neighbors;

// Re-exports for convenience
pub use builder::build_song;
pub use neighbors::fill_links;
