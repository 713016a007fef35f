#![deny(missing_docs)]
//! Admonify Bootstrap engine: relabels admonition markers to alert classes.

/// lol_html element handlers for marker relabeling.
pub mod alerts;
/// Default alert relabel rules.
pub mod defaults;
/// Rewrite error types.
pub mod error;
/// Document rewrite entry points.
pub mod rewrite;

pub use alerts::alert_handlers;
pub use defaults::{default_alert_rules, note_to_alert, rewritten_markers, warning_to_alert};
pub use error::RewriteError;
pub use rewrite::{AlertRewriter, rewrite_alerts, rewrite_alerts_from_reader};
