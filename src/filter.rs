//! Scan filters.
//!
//! A [`Filter`] is a conjunction of field-equality predicates applied
//! store-side during a scan. Pagination and indexing are extension points
//! of the store driver, not part of this filter.

use serde_json::Value;

use crate::document::Document;

/// Equality filter over document fields. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    /// Whether the document satisfies every clause.
    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::all().is_empty());
        assert!(Filter::all().matches(&Document::new()));
        assert!(Filter::all().matches(&Document::with_id("u1")));
        assert!(!Filter::all().eq("name", "Ann").is_empty());
    }

    #[test]
    fn clauses_are_conjunctive() {
        let mut doc = Document::with_id("u1");
        doc.set("name", "Ann").set("active", true);

        assert!(Filter::all().eq("name", "Ann").matches(&doc));
        assert!(!Filter::all().eq("name", "Ann").eq("active", false).matches(&doc));
        assert!(!Filter::all().eq("missing", "x").matches(&doc));
    }
}
