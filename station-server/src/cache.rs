//! Caching layer for autocomplete results.
//!
//! Matching is a pure function of (query, limit) over an immutable catalog,
//! so results can be memoized without invalidation. The TTL and capacity
//! only bound memory; a stale entry is never wrong.
//!
//! Queries that cannot match anything (below the threshold, or longer than
//! every label and code) are answered without touching the cache, so a key
//! is never larger than the longest station label.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::StationRecord;
use crate::matcher::{MatchConfig, match_records};
use crate::stations::StationCatalog;

/// Cache key for suggestions: (raw query, limit).
type SuggestionKey = (String, usize);

/// Cached suggestion list.
pub type SuggestionEntry = Arc<Vec<StationRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Station matcher with memoized results.
///
/// Wraps the catalog and matcher config and caches suggestion lists.
pub struct CachedMatcher {
    catalog: Arc<StationCatalog>,
    config: MatchConfig,
    /// Longest lowercased label or code in the catalog, in chars.
    max_match_chars: usize,
    empty: SuggestionEntry,
    suggestions: MokaCache<SuggestionKey, SuggestionEntry>,
}

impl CachedMatcher {
    /// Create a new cached matcher.
    pub fn new(
        catalog: Arc<StationCatalog>,
        config: MatchConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        let suggestions = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        let max_match_chars = catalog
            .records()
            .iter()
            .map(|r| {
                // Lowercasing never shortens text, so this bounds any match
                r.display_label()
                    .to_lowercase()
                    .chars()
                    .count()
                    .max(r.code().as_str().len())
            })
            .max()
            .unwrap_or(0);

        Self {
            catalog,
            config,
            max_match_chars,
            empty: Arc::new(Vec::new()),
            suggestions,
        }
    }

    /// Suggestions for `query`, capped at `limit`, using the cache if
    /// available.
    pub async fn suggest(&self, query: &str, limit: usize) -> SuggestionEntry {
        let query_chars = query.chars().count();
        if query_chars < self.config.effective_min_len() || query_chars > self.max_match_chars {
            return self.empty.clone();
        }

        let key = (query.to_string(), limit);

        if let Some(cached) = self.suggestions.get(&key).await {
            debug!(query, limit, "suggestion cache hit");
            return cached;
        }

        let config = self.config.with_limit(limit);
        let entry: SuggestionEntry = Arc::new(
            match_records(query, self.catalog.records(), &config)
                .into_iter()
                .cloned()
                .collect(),
        );

        self.suggestions.insert(key, entry.clone()).await;

        entry
    }

    /// The catalog being matched against.
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// Matcher configuration (threshold and default limit).
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.suggestions.entry_count()
    }
}
