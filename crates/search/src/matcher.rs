use botapi_docs_core::{MAX_INLINE_RESULTS, Method, Snapshot, Type};

/// A search hit borrowed from the snapshot it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Method(&'a Method),
    Type(&'a Type),
}

impl<'a> Entry<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Method(method) => &method.name,
            Self::Type(ty) => &ty.name,
        }
    }

    #[must_use]
    pub fn href(&self) -> &'a str {
        match *self {
            Self::Method(method) => &method.href,
            Self::Type(ty) => &ty.href,
        }
    }
}

/// Matches `query` against every identifier, capped at [`MAX_INLINE_RESULTS`].
///
/// See [`search_with_limit`].
#[must_use]
pub fn search<'a>(query: &str, snapshot: &'a Snapshot) -> Vec<Entry<'a>> {
    search_with_limit(query, snapshot, MAX_INLINE_RESULTS)
}

/// Reports every method, then every type, whose ASCII-lowercased name
/// contains the ASCII-lowercased `query`, keeping the first `limit` hits.
///
/// Order within each section follows map iteration and is not stable across
/// snapshots.
#[must_use]
pub fn search_with_limit<'a>(query: &str, snapshot: &'a Snapshot, limit: usize) -> Vec<Entry<'a>> {
    let needle = query.to_ascii_lowercase();
    let is_hit = |name: &str| name.to_ascii_lowercase().contains(&needle);

    let methods = snapshot
        .methods
        .iter()
        .filter(|(name, _)| is_hit(name.as_str()))
        .map(|(_, method)| Entry::Method(method));
    let types = snapshot
        .types
        .iter()
        .filter(|(name, _)| is_hit(name.as_str()))
        .map(|(_, ty)| Entry::Type(ty));

    let hits: Vec<Entry<'a>> = methods.chain(types).take(limit).collect();
    tracing::trace!(query, hits = hits.len(), "identifier search");
    hits
}
