use botapi_docs_core::QUERY_PREFIX;

/// A normalized inline query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Nothing left to search for after normalization.
    Empty,
    /// The effective query text.
    Text(String),
}

impl Query {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Returns the effective query for `raw`.
///
/// Leading and trailing whitespace is trimmed. A leading `botapi` token
/// (ASCII case-insensitive) is dropped and the remaining tokens are joined
/// with single spaces. Without the prefix the trimmed text is kept as is.
///
/// Repeated prefix tokens are all dropped so that normalizing twice yields
/// the same text.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut tokens = trimmed.split_whitespace().peekable();
    if !tokens.peek().is_some_and(|first| first.eq_ignore_ascii_case(QUERY_PREFIX)) {
        return trimmed.to_owned();
    }
    tokens
        .skip_while(|token| token.eq_ignore_ascii_case(QUERY_PREFIX))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes `raw` and classifies the result.
#[must_use]
pub fn parse_query(raw: &str) -> Query {
    let effective = normalize(raw);
    if effective.is_empty() { Query::Empty } else { Query::Text(effective) }
}
