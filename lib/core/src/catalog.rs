use ahash::AHashMap;

/// Outcome of resolving free-text input against the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// Best fuzzy match at or above the acceptance threshold, canonical casing
    Found(String),
    /// Nothing close enough; carries leading catalog titles as a fallback aid
    NotFound { suggestions: Vec<String> },
}

/// The ordered set of canonical titles with dense 0-based positions
///
/// Positions are assigned in load order and shared with the similarity
/// matrix as a common coordinate space.
#[derive(Debug)]
pub struct CatalogIndex {
    titles: Vec<String>,
    normalized: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl CatalogIndex {
    #[must_use]
    pub fn new(titles: Vec<String>) -> Self {
        let normalized = titles
            .iter()
            .map(|title| title.trim().to_lowercase())
            .collect();

        let mut positions = AHashMap::with_capacity(titles.len());
        for (position, title) in titles.iter().enumerate() {
            positions.entry(title.clone()).or_insert(position);
        }

        Self {
            titles,
            normalized,
            positions,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Canonical title at a position, if in range
    #[inline]
    pub fn title_at(&self, position: usize) -> Option<&str> {
        self.titles.get(position).map(String::as_str)
    }

    /// Position of an exact canonical title
    #[inline]
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.positions.get(title).copied()
    }

    #[inline]
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Resolve raw user text to a canonical title.
    ///
    /// Comparison is done on trimmed, lowercased strings; the returned title
    /// keeps its original casing. The best similarity ratio wins, with ties
    /// going to the earlier catalog position. Below `threshold` the result
    /// is `NotFound` with the first `suggestion_limit` titles in catalog
    /// order.
    pub fn resolve(&self, query: &str, threshold: f64, suggestion_limit: usize) -> MatchResult {
        let needle = query.trim().to_lowercase();

        let mut best: Option<(usize, f64)> = None;
        for (position, candidate) in self.normalized.iter().enumerate() {
            let ratio = strsim::normalized_levenshtein(&needle, candidate);
            if best.map_or(true, |(_, top)| ratio > top) {
                best = Some((position, ratio));
            }
        }

        match best {
            Some((position, ratio)) if ratio >= threshold => {
                MatchResult::Found(self.titles[position].clone())
            }
            _ => MatchResult::NotFound {
                suggestions: self
                    .titles
                    .iter()
                    .take(suggestion_limit)
                    .cloned()
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogIndex {
        CatalogIndex::new(vec![
            "Harry Potter".to_string(),
            "Hobbit".to_string(),
            "Dune".to_string(),
        ])
    }

    #[test]
    fn test_positions_are_dense() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position_of("Harry Potter"), Some(0));
        assert_eq!(catalog.position_of("Dune"), Some(2));
        assert_eq!(catalog.title_at(1), Some("Hobbit"));
        assert_eq!(catalog.title_at(3), None);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve("harry potter", 0.7, 10),
            MatchResult::Found("Harry Potter".to_string())
        );
        assert_eq!(
            catalog.resolve("  DUNE  ", 0.7, 10),
            MatchResult::Found("Dune".to_string())
        );
    }

    #[test]
    fn test_typo_resolves_to_closest_title() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve("harry poter", 0.7, 10),
            MatchResult::Found("Harry Potter".to_string())
        );
    }

    #[test]
    fn test_miss_returns_suggestions_in_catalog_order() {
        let catalog = catalog();
        match catalog.resolve("Xyzzy Nonexistent Book", 0.7, 10) {
            MatchResult::NotFound { suggestions } => {
                assert_eq!(suggestions, vec!["Harry Potter", "Hobbit", "Dune"]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_suggestion_limit_caps_the_fallback_list() {
        let catalog = CatalogIndex::new((0..20).map(|i| format!("Book {}", i)).collect());
        match catalog.resolve("qqqqqqqqqqqqqqqq", 0.7, 10) {
            MatchResult::NotFound { suggestions } => {
                assert_eq!(suggestions.len(), 10);
                assert_eq!(suggestions[0], "Book 0");
                assert_eq!(suggestions[9], "Book 9");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_ties_keep_the_first_catalog_occurrence() {
        let catalog = CatalogIndex::new(vec!["abcd".to_string(), "abce".to_string()]);
        // "abcf" is one edit away from both candidates
        assert_eq!(
            catalog.resolve("abcf", 0.7, 10),
            MatchResult::Found("abcd".to_string())
        );
    }

    #[test]
    fn test_threshold_boundary() {
        let catalog = CatalogIndex::new(vec!["abcdefghij".to_string()]);
        // three substitutions over ten characters: ratio 0.7, accepted
        assert_eq!(
            catalog.resolve("abcdefgxyz", 0.7, 10),
            MatchResult::Found("abcdefghij".to_string())
        );
        // four substitutions: ratio 0.6, rejected
        assert!(matches!(
            catalog.resolve("abcdefwxyz", 0.7, 10),
            MatchResult::NotFound { .. }
        ));
    }

    #[test]
    fn test_empty_catalog_has_no_matches() {
        let catalog = CatalogIndex::new(Vec::new());
        assert!(catalog.is_empty());
        match catalog.resolve("anything", 0.7, 10) {
            MatchResult::NotFound { suggestions } => assert!(suggestions.is_empty()),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
