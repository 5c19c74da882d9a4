//! Case-insensitive substring matching over station records.

use crate::domain::StationRecord;

use super::config::MatchConfig;

/// Find the stations matching a partial query.
///
/// A record matches when its display label or its code contains the query,
/// ignoring case. Queries shorter than the configured minimum match nothing.
/// Matches keep the order of `stations` (no scoring) and are cut off after
/// `config.limit` entries.
pub fn match_records<'a>(
    query: &str,
    stations: &'a [StationRecord],
    config: &MatchConfig,
) -> Vec<&'a StationRecord> {
    if query.chars().count() < config.effective_min_len() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    stations
        .iter()
        .filter(|r| {
            r.display_label().to_lowercase().contains(&needle)
                || r.code().as_str().to_lowercase().contains(&needle)
        })
        .take(config.limit)
        .collect()
}

/// Like [`match_records`], returning the display labels shown in a
/// suggestion dropdown.
///
/// # Examples
///
/// ```
/// use station_server::domain::{StationCode, StationRecord};
/// use station_server::matcher::{MatchConfig, match_stations};
///
/// let stations = vec![
///     StationRecord::new(
///         StationCode::parse("NDLS").unwrap(),
///         "New Delhi",
///         "New Delhi Railway Station (NDLS)",
///     ),
///     StationRecord::with_derived_label(StationCode::parse("BCT").unwrap(), "Mumbai Central"),
/// ];
/// let config = MatchConfig::default();
///
/// assert_eq!(
///     match_stations("del", &stations, &config),
///     vec!["New Delhi Railway Station (NDLS)"]
/// );
/// assert!(match_stations("z", &stations, &config).is_empty());
/// ```
pub fn match_stations<'a>(
    query: &str,
    stations: &'a [StationRecord],
    config: &MatchConfig,
) -> Vec<&'a str> {
    match_records(query, stations, config)
        .into_iter()
        .map(StationRecord::display_label)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationCode;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Strategy for a reference list with unique codes.
    fn stations_strategy() -> impl Strategy<Value = Vec<StationRecord>> {
        prop::collection::vec(("[A-Z]{1,5}", "[A-Za-z ]{1,16}"), 0..30).prop_map(|entries| {
            let mut seen = HashSet::new();
            entries
                .into_iter()
                .filter(|(code, _)| seen.insert(code.clone()))
                .map(|(code, name)| {
                    StationRecord::with_derived_label(StationCode::parse(&code).unwrap(), name)
                })
                .collect()
        })
    }

    /// Queries drawn from a small alphabet so that matches are common.
    fn query_strategy() -> impl Strategy<Value = String> {
        "[aeinrAEINR ()]{0,4}"
    }

    fn is_match(record: &StationRecord, query: &str) -> bool {
        let q = query.to_lowercase();
        record.display_label().to_lowercase().contains(&q)
            || record.code().as_str().to_lowercase().contains(&q)
    }

    proptest! {
        /// Result length never exceeds the limit
        #[test]
        fn bounded_by_limit(
            stations in stations_strategy(),
            query in query_strategy(),
            limit in 0usize..10,
        ) {
            let config = MatchConfig::new(1, limit);
            prop_assert!(match_stations(&query, &stations, &config).len() <= limit);
        }

        /// Short queries never produce suggestions
        #[test]
        fn below_threshold_is_empty(
            stations in stations_strategy(),
            query in "[a-z]{0,1}",
        ) {
            let config = MatchConfig::new(2, 8);
            prop_assert!(match_stations(&query, &stations, &config).is_empty());
        }

        /// Without truncation, exactly the matching records come back, in order
        #[test]
        fn complete_and_ordered(
            stations in stations_strategy(),
            query in query_strategy(),
        ) {
            prop_assume!(!query.is_empty());
            let config = MatchConfig::new(1, usize::MAX);

            let expected: Vec<&str> = stations
                .iter()
                .filter(|r| is_match(r, &query))
                .map(|r| r.display_label())
                .collect();

            prop_assert_eq!(match_stations(&query, &stations, &config), expected);
        }

        /// A truncated result is a prefix of the untruncated one
        #[test]
        fn truncation_is_prefix(
            stations in stations_strategy(),
            query in query_strategy(),
            limit in 0usize..10,
        ) {
            let full = match_stations(&query, &stations, &MatchConfig::new(1, usize::MAX));
            let capped = match_stations(&query, &stations, &MatchConfig::new(1, limit));

            prop_assert_eq!(capped.as_slice(), &full[..capped.len()]);
            prop_assert_eq!(capped.len(), full.len().min(limit));
        }

        /// Same inputs, same output
        #[test]
        fn idempotent(
            stations in stations_strategy(),
            query in query_strategy(),
        ) {
            let config = MatchConfig::default();
            let first = match_stations(&query, &stations, &config);
            let second = match_stations(&query, &stations, &config);
            prop_assert_eq!(first, second);
        }

        /// Query case never changes the result
        #[test]
        fn case_insensitive(
            stations in stations_strategy(),
            query in query_strategy(),
        ) {
            let config = MatchConfig::new(1, 8);
            prop_assert_eq!(
                match_stations(&query.to_uppercase(), &stations, &config),
                match_stations(&query.to_lowercase(), &stations, &config)
            );
        }
    }
}
