//! Matcher configuration.

/// Suggestions shown in a dropdown unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 8;

/// Shortest query (in characters) that produces suggestions.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Configuration parameters for station matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Queries shorter than this many characters match nothing.
    /// An empty query never matches, whatever this is set to.
    pub min_query_len: usize,

    /// Maximum number of suggestions returned.
    pub limit: usize,
}

impl MatchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_query_len: usize, limit: usize) -> Self {
        Self {
            min_query_len,
            limit,
        }
    }

    /// Same thresholds, different cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The threshold actually applied: at least one character.
    pub fn effective_min_len(&self) -> usize {
        self.min_query_len.max(1)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            limit: DEFAULT_LIMIT,
        }
    }
}
