use super::models::{CategoryFilter, Record};

/// Search and category filter state.
///
/// The two predicates are ANDed. The search term is matched
/// case-insensitively as a substring of the title or the description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    search_term: String,
    needle: String,
    category: CategoryFilter,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.needle = term.to_lowercase();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category
    }

    /// True when either predicate narrows the result.
    pub fn is_filtering(&self) -> bool {
        !self.needle.is_empty() || self.category != CategoryFilter::All
    }

    pub fn matches(&self, record: &Record) -> bool {
        if !self.category.matches(&record.category) {
            return false;
        }

        self.needle.is_empty()
            || record.title.to_lowercase().contains(&self.needle)
            || record.description.to_lowercase().contains(&self.needle)
    }

    /// Matching records in catalog order.
    pub fn apply<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        records.iter().filter(move |record| self.matches(record))
    }
}
