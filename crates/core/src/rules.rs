use crate::markers::MarkerSet;

/// A relabel rule keyed on a marker token.
///
/// When a marker set contains `marker`, applying the rule adds every token in
/// `add` (in order) and then removes the marker. A set without the marker is
/// left untouched, so applying the same rule twice is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRewrite {
    /// Marker token that triggers the rewrite (e.g. "note").
    pub marker: String,
    /// Tokens added when the marker is present (e.g. "alert", "alert-info").
    pub add: Vec<String>,
}

impl MarkerRewrite {
    /// Returns true if the set carries this rule's marker.
    pub fn matches(&self, markers: &MarkerSet) -> bool {
        markers.contains(&self.marker)
    }

    /// Applies the rule to the marker set.
    ///
    /// Returns true when the marker was present and the set was relabeled.
    ///
    /// # Examples
    ///
    /// ```
    /// use admonify_core::markers::MarkerSet;
    /// use admonify_core::rules::MarkerRewrite;
    ///
    /// let rule = MarkerRewrite {
    ///     marker: "note".to_string(),
    ///     add: vec!["alert".to_string(), "alert-info".to_string()],
    /// };
    ///
    /// let mut markers = MarkerSet::parse("note");
    /// assert!(rule.apply(&mut markers));
    /// assert_eq!(markers.to_attr(), "alert alert-info");
    ///
    /// // Already relabeled; nothing left to do.
    /// assert!(!rule.apply(&mut markers));
    /// ```
    pub fn apply(&self, markers: &mut MarkerSet) -> bool {
        if !self.matches(markers) {
            return false;
        }
        for token in &self.add {
            markers.add(token);
        }
        markers.remove(&self.marker);
        true
    }
}
