use serde::Serialize;

/// Case-insensitive substring match; an empty query matches every name.
/// Whitespace in the query is significant.
pub fn matches_name(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&query.to_lowercase())
}

/// A venue or artist with its number of upcoming shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListingEntry {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListingEntry>,
}

impl SearchResults {
    /// Keeps the candidates whose name matches `query`; `upcoming` is only
    /// asked for the ids that matched
    pub fn collect<I, F>(candidates: I, query: &str, mut upcoming: F) -> Self
    where
        I: IntoIterator<Item = (i32, String)>,
        F: FnMut(i32) -> usize,
    {
        let data: Vec<ListingEntry> = candidates
            .into_iter()
            .filter(|(_, name)| matches_name(name, query))
            .map(|(id, name)| ListingEntry {
                id,
                num_upcoming_shows: upcoming(id),
                name,
            })
            .collect();

        Self {
            count: data.len(),
            data,
        }
    }
}
