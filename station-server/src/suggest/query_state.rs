//! Per-input suggestion state.

use crate::matcher::{MatchConfig, match_stations};
use crate::stations::StationCatalog;

/// The text typed into one station input and the suggestions shown for it.
///
/// Owned by the input's controller. Suggestions are recomputed on every
/// text change; committing a suggestion or dismissing the dropdown clears
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    text: String,
    suggestions: Vec<String>,
}

impl QueryState {
    /// Create an empty state (nothing typed, no dropdown).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Store new input and recompute suggestions.
    pub fn set_text(
        &mut self,
        text: impl Into<String>,
        catalog: &StationCatalog,
        config: &MatchConfig,
    ) {
        self.text = text.into();
        self.suggestions = match_stations(&self.text, catalog.records(), config)
            .into_iter()
            .map(str::to_owned)
            .collect();
    }

    /// Commit the suggestion at `index`.
    ///
    /// Returns the chosen label, or `None` (leaving the state untouched)
    /// when there is no such suggestion.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.suggestions.len() {
            return None;
        }
        let chosen = self.suggestions.swap_remove(index);
        self.commit(chosen);
        Some(&self.text)
    }

    /// Commit a suggestion by its label.
    pub fn select_label(&mut self, label: &str) -> Option<&str> {
        let index = self.suggestions.iter().position(|s| s == label)?;
        self.select(index)
    }

    /// Close the dropdown without touching the text (click-away, Escape).
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
    }

    /// Overwrite the text without offering suggestions.
    pub(crate) fn replace_text(&mut self, text: String) {
        self.commit(text);
    }

    fn commit(&mut self, text: String) {
        self.text = text;
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StationCatalog {
        StationCatalog::from_json_str(
            r#"{"stations": [
                {"code": "NDLS", "name": "New Delhi", "label": "New Delhi Railway Station (NDLS)"},
                {"code": "BCT", "name": "Mumbai Central"},
                {"code": "MAS", "name": "Chennai Central"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn typing_recomputes_suggestions() {
        let catalog = catalog();
        let config = MatchConfig::default();
        let mut state = QueryState::new();

        state.set_text("cen", &catalog, &config);
        assert_eq!(
            state.suggestions(),
            ["Mumbai Central (BCT)", "Chennai Central (MAS)"]
        );

        state.set_text("cent mum", &catalog, &config);
        assert!(state.suggestions().is_empty());
        assert_eq!(state.text(), "cent mum");
    }

    #[test]
    fn short_text_clears_suggestions() {
        let catalog = catalog();
        let config = MatchConfig::default();
        let mut state = QueryState::new();

        state.set_text("ne", &catalog, &config);
        assert_eq!(state.suggestions().len(), 1);

        state.set_text("n", &catalog, &config);
        assert!(state.suggestions().is_empty());
    }

    #[test]
    fn select_commits_label() {
        let catalog = catalog();
        let mut state = QueryState::new();
        state.set_text("central", &catalog, &MatchConfig::default());

        assert_eq!(state.select(1), Some("Chennai Central (MAS)"));
        assert_eq!(state.text(), "Chennai Central (MAS)");
        assert!(state.suggestions().is_empty());
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let catalog = catalog();
        let mut state = QueryState::new();
        state.set_text("central", &catalog, &MatchConfig::default());

        assert_eq!(state.select(5), None);
        assert_eq!(state.text(), "central");
        assert_eq!(state.suggestions().len(), 2);
    }

    #[test]
    fn select_by_label() {
        let catalog = catalog();
        let mut state = QueryState::new();
        state.set_text("del", &catalog, &MatchConfig::default());

        assert_eq!(state.select_label("Mumbai Central (BCT)"), None);
        assert_eq!(
            state.select_label("New Delhi Railway Station (NDLS)"),
            Some("New Delhi Railway Station (NDLS)")
        );
    }

    #[test]
    fn dismiss_keeps_text() {
        let catalog = catalog();
        let mut state = QueryState::new();
        state.set_text("mum", &catalog, &MatchConfig::default());

        state.dismiss();
        assert_eq!(state.text(), "mum");
        assert!(state.suggestions().is_empty());
    }
}
