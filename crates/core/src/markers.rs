/// An element's `class` attribute parsed as an ordered set of marker tokens.
///
/// Parsing follows the HTML ordered-set rules for `class`: the value is split
/// on ASCII whitespace (space, tab, line feed, form feed, carriage return),
/// duplicate tokens are dropped, and the first-occurrence order of the
/// remaining tokens is preserved. Token comparison is exact and
/// case-sensitive, so `note` never matches `notes` or `Note`.
///
/// # Examples
///
/// ```
/// use admonify_core::markers::MarkerSet;
///
/// let mut markers = MarkerSet::parse(" note \t highlight  note ");
/// assert_eq!(markers.to_attr(), "note highlight");
/// assert!(markers.contains("note"));
/// assert!(!markers.contains("notes"));
///
/// markers.add("alert");
/// markers.remove("note");
/// assert_eq!(markers.to_attr(), "highlight alert");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    tokens: Vec<String>,
}

impl MarkerSet {
    /// Creates an empty marker set.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parses a `class` attribute value into a marker set.
    pub fn parse(attr: &str) -> Self {
        let mut markers = Self::new();
        for token in attr.split_ascii_whitespace() {
            markers.add(token);
        }
        markers
    }

    /// Returns true if the set contains the token.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Appends a token to the end of the set.
    ///
    /// Adding a token that is already present is a no-op. Returns true when
    /// the token was newly inserted.
    pub fn add(&mut self, token: &str) -> bool {
        if self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Removes a token from the set.
    ///
    /// Removing a token that is absent is a no-op. Returns true when the
    /// token was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Serializes the set back into a `class` attribute value.
    ///
    /// Tokens are joined with a single space regardless of the whitespace in
    /// the attribute the set was parsed from.
    pub fn to_attr(&self) -> String {
        self.tokens.join(" ")
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens in the set.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the set has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
