#![deny(missing_docs)]
//! Admonify core: class attribute marker sets and relabel rules.

/// Class attribute token set parsing and mutation.
pub mod markers;
/// Marker relabel rule types.
pub mod rules;

pub use markers::MarkerSet;
pub use rules::MarkerRewrite;
