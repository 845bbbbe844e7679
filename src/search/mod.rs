//! Filtering and free-text search over the register.
//!
//! Predicates combine with AND; the free-text term matches when it is a
//! case-insensitive substring of the id, subject or sender. Results keep the
//! order of the source collection.

use serde::Deserialize;

use crate::models::{Category, Entry};

/// Raw filter values as they arrive from the view form or query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

/// Normalized set of predicates. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub kind: Option<Category>,
    pub status: Option<Category>,
    /// Trimmed, lower-cased search term.
    pub text: Option<String>,
}

impl EntryFilter {
    /// A filter that matches every entry.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<Category>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<Category>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = normalize_term(text);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.status.is_none() && self.text.is_none()
    }

    /// Check whether a single entry satisfies every supplied predicate.
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(kind) = &self.kind {
            if &entry.kind != kind {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if &entry.status != status {
                return false;
            }
        }

        if let Some(term) = &self.text {
            let hit = [&entry.id, &entry.subject, &entry.sender]
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str()));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Derive the matching subsequence without touching the source.
    pub fn apply(&self, entries: &[Entry]) -> Vec<Entry> {
        entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}

impl From<FilterParams> for EntryFilter {
    fn from(params: FilterParams) -> Self {
        let mut filter = EntryFilter::all();

        // Empty select values mean "any".
        if let Some(kind) = params.kind.filter(|v| !v.is_empty()) {
            filter = filter.with_kind(kind);
        }
        if let Some(status) = params.status.filter(|v| !v.is_empty()) {
            filter = filter.with_status(status);
        }
        if let Some(q) = params.q {
            filter = filter.with_text(&q);
        }

        filter
    }
}

fn normalize_term(raw: &str) -> Option<String> {
    let term = raw.trim().to_lowercase();
    (!term.is_empty()).then_some(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn entry(id: &str, subject: &str, sender: &str, kind: Category, status: Category) -> Entry {
        Entry {
            id: id.to_string(),
            date: "2024-01-01".to_string(),
            subject: subject.to_string(),
            sender: sender.to_string(),
            receiver: "Registry".to_string(),
            kind,
            status,
            priority: Priority::Medium,
            description: String::new(),
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("D1", "Invoice", "Alice", Category::Incoming, Category::Pending),
            entry("D2", "Report", "Carol", Category::Outgoing, Category::Resolved),
            entry("D3", "Invoice copy", "Dave", Category::Outgoing, Category::Pending),
            entry("X4", "Circular", "Alice", Category::Incoming, Category::Forwarded),
        ]
    }

    fn ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_no_predicates_returns_everything_in_order() {
        let entries = sample();
        let filter = EntryFilter::all();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&entries), entries);
    }

    #[test]
    fn test_type_filter() {
        let result = EntryFilter::all().with_kind("incoming").apply(&sample());
        assert_eq!(ids(&result), vec!["D1", "X4"]);
    }

    #[test]
    fn test_status_filter() {
        let result = EntryFilter::all()
            .with_status(Category::Pending)
            .apply(&sample());
        assert_eq!(ids(&result), vec!["D1", "D3"]);
    }

    #[test]
    fn test_text_matches_any_of_id_subject_sender() {
        let entries = sample();
        assert_eq!(
            ids(&EntryFilter::all().with_text("x4").apply(&entries)),
            vec!["X4"]
        );
        assert_eq!(
            ids(&EntryFilter::all().with_text("INVOICE").apply(&entries)),
            vec!["D1", "D3"]
        );
        assert_eq!(
            ids(&EntryFilter::all().with_text("alice").apply(&entries)),
            vec!["D1", "X4"]
        );
    }

    #[test]
    fn test_text_does_not_search_receiver() {
        let result = EntryFilter::all().with_text("registry").apply(&sample());
        assert!(result.is_empty());
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let result = EntryFilter::all()
            .with_kind(Category::Outgoing)
            .with_text("invoice")
            .apply(&sample());
        assert_eq!(ids(&result), vec!["D3"]);

        let result = EntryFilter::all()
            .with_kind(Category::Incoming)
            .with_status(Category::Resolved)
            .apply(&sample());
        assert!(result.is_empty());
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let filter = EntryFilter::all().with_text("  Report ");
        assert_eq!(filter.text.as_deref(), Some("report"));
        assert_eq!(ids(&filter.apply(&sample())), vec!["D2"]);

        assert!(EntryFilter::all().with_text("   ").is_empty());
    }

    #[test]
    fn test_params_treat_empty_values_as_absent() {
        let params = FilterParams {
            kind: Some(String::new()),
            status: Some(String::new()),
            q: Some("  ".to_string()),
        };
        assert!(EntryFilter::from(params).is_empty());
    }

    #[test]
    fn test_params_with_legacy_value_match_exact_text() {
        let mut entries = sample();
        entries.push(entry(
            "L5",
            "Old",
            "Zed",
            Category::from("archived"),
            Category::Pending,
        ));

        let filter = EntryFilter::from(FilterParams {
            kind: Some("archived".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&filter.apply(&entries)), vec!["L5"]);
    }

    #[test]
    fn test_type_filter_is_case_sensitive() {
        let result = EntryFilter::all().with_kind("Incoming").apply(&sample());
        assert!(result.is_empty());
    }
}
