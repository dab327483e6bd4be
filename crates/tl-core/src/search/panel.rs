//! Comment search panel state

use super::debounce::SearchDebouncer;
use crate::config::SearchConfig;
use crate::reply::{Reply, ReplyTree};
use std::time::{Duration, Instant};
use tracing::debug;

/// State behind the "search comments" box of a thread view.
///
/// While a non-blank query is set the view shows `results()` as a flat list
/// in place of the nested thread.
#[derive(Debug, Clone)]
pub struct CommentSearch {
    visible: bool,
    query: String,
    results: Vec<Reply>,
    min_query_chars: usize,
    debouncer: SearchDebouncer,
}

impl CommentSearch {
    /// Create a hidden search panel
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            visible: false,
            query: String::new(),
            results: Vec::new(),
            min_query_chars: config.min_query_chars,
            debouncer: SearchDebouncer::new(config.debounce_delay()),
        }
    }

    /// Create a hidden search panel with a custom debounce delay
    pub fn with_delay(delay: Duration) -> Self {
        let config = SearchConfig {
            debounce_ms: delay.as_millis() as u64,
            ..SearchConfig::default()
        };
        Self::new(&config)
    }

    /// Check if the search box is open
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open or close the search box; closing clears the query and results
    pub fn toggle(&mut self) {
        if self.visible {
            self.query.clear();
            self.results.clear();
            self.debouncer.cancel();
        }
        self.visible = !self.visible;
    }

    /// Current text of the search box
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Record a keystroke; the search itself runs on a later `tick`
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        if self.query.trim().is_empty() {
            self.debouncer.cancel();
            self.results.clear();
        } else {
            self.debouncer.submit(self.query.clone(), now);
        }
    }

    /// Run the pending query if it is due. Returns true when results changed.
    pub fn tick(&mut self, now: Instant, tree: &ReplyTree) -> bool {
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };

        self.results = if query.trim().chars().count() < self.min_query_chars {
            Vec::new()
        } else {
            tree.search(&query).into_iter().cloned().collect()
        };
        debug!("Search '{}' produced {} results", query, self.results.len());
        true
    }

    /// Check if a search query is in effect
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Check if a typed query has not run yet
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Matching replies of the last search
    pub fn results(&self) -> &[Reply] {
        &self.results
    }

    /// Heading for the reply list
    pub fn heading(&self) -> String {
        if self.is_searching() {
            format!("Search Results ({})", self.results.len())
        } else {
            "Replies".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::fixtures::{sample_forest, sample_post};

    fn tree() -> ReplyTree {
        ReplyTree::new(sample_post(), sample_forest()).unwrap()
    }

    fn result_ids(search: &CommentSearch) -> Vec<&str> {
        search.results().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_typing_runs_last_query_only() {
        let tree = tree();
        let start = Instant::now();
        let mut search = CommentSearch::with_delay(Duration::from_millis(300));
        search.toggle();

        search.set_query("c", start);
        search.set_query("co", start + Duration::from_millis(50));
        search.set_query("Coding", start + Duration::from_millis(100));

        assert!(!search.tick(start + Duration::from_millis(200), &tree));
        assert!(search.results().is_empty());
        assert!(search.is_pending());

        assert!(search.tick(start + Duration::from_millis(400), &tree));
        assert_eq!(result_ids(&search), vec!["1a", "1a1a"]);
        assert_eq!(search.heading(), "Search Results (2)");
    }

    #[test]
    fn test_clearing_query_clears_results() {
        let tree = tree();
        let start = Instant::now();
        let mut search = CommentSearch::with_delay(Duration::ZERO);
        search.toggle();

        search.set_query("python", start);
        search.tick(start, &tree);
        assert_eq!(result_ids(&search), vec!["1a1a"]);

        search.set_query("  ", start);
        assert!(!search.is_searching());
        assert!(search.results().is_empty());
        assert!(!search.tick(start, &tree));
        assert_eq!(search.heading(), "Replies");
    }

    #[test]
    fn test_closing_resets() {
        let tree = tree();
        let start = Instant::now();
        let mut search = CommentSearch::with_delay(Duration::ZERO);

        search.toggle();
        assert!(search.is_visible());
        search.set_query("excel", start);
        search.tick(start, &tree);
        assert_eq!(search.results().len(), 1);

        search.toggle();
        assert!(!search.is_visible());
        assert_eq!(search.query(), "");
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_min_query_chars() {
        let tree = tree();
        let start = Instant::now();
        let config = SearchConfig {
            debounce_ms: 0,
            min_query_chars: 3,
        };
        let mut search = CommentSearch::new(&config);

        search.set_query("py", start);
        assert!(search.tick(start, &tree));
        assert!(search.results().is_empty());

        search.set_query("pyt", start);
        search.tick(start, &tree);
        assert_eq!(result_ids(&search), vec!["1a1a"]);
    }
}
