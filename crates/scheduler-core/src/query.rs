use crate::date::parse_search_date;

/// Default number of rows returned by listing and searching.
pub const DEFAULT_TASKS_LIMIT: u32 = 50;

/// What a free-form search string is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Exact date in `YYYYMMDD` form, parsed from `DD.MM.YYYY` input.
    Date(String),
    /// Substring of the title or the comment.
    Text(String),
}

impl SearchQuery {
    pub fn parse(input: &str) -> Self {
        match parse_search_date(input) {
            Some(date) => SearchQuery::Date(date),
            None => SearchQuery::Text(input.to_string()),
        }
    }
}
