//! Default relabel rules for Bootstrap alert conventions.
//!
//! This module provides the fixed rule table the rewriter runs with: the two
//! admonition markers emitted by documentation generators (`note`, `warning`)
//! and the Bootstrap alert classes they relabel to.

use admonify_core::MarkerRewrite;

/// Creates the relabel rule for `note` admonitions.
///
/// Elements carrying the `note` marker gain `alert` and `alert-info` and
/// lose `note`.
///
/// # Example
///
/// ```
/// use admonify_bootstrap::defaults::note_to_alert;
/// use admonify_core::markers::MarkerSet;
///
/// let mut markers = MarkerSet::parse("note");
/// assert!(note_to_alert().apply(&mut markers));
/// assert_eq!(markers.to_attr(), "alert alert-info");
/// ```
pub fn note_to_alert() -> MarkerRewrite {
    MarkerRewrite {
        marker: "note".to_string(),
        add: vec!["alert".to_string(), "alert-info".to_string()],
    }
}

/// Creates the relabel rule for `warning` admonitions.
///
/// Elements carrying the `warning` marker gain `alert` and `alert-warning`
/// and lose `warning`.
pub fn warning_to_alert() -> MarkerRewrite {
    MarkerRewrite {
        marker: "warning".to_string(),
        add: vec!["alert".to_string(), "alert-warning".to_string()],
    }
}

/// Returns the full default rule table.
///
/// The rules are independent: each one triggers on its own marker and no rule
/// adds another rule's marker, so the order they run in is not observable.
pub fn default_alert_rules() -> Vec<MarkerRewrite> {
    vec![note_to_alert(), warning_to_alert()]
}

/// Returns the marker names consumed by the default rule table.
pub fn rewritten_markers() -> &'static [&'static str] {
    &["note", "warning"]
}
