//! Parser for the `"name xN, name xN"` quantity encoding.
//!
//! The host hands every per-user counter (owned species, inventory telemetry, bag contents,
//! friendship points) to us in this shape. Parsing is deliberately forgiving: a malformed token
//! is dropped on its own and never spoils its neighbours.

use serde::Serialize;
use std::collections::BTreeMap;

const COUNT_SEPARATOR: &str = " x";

/// A parsed counted-list: trimmed name -> count, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountedList {
    entries: BTreeMap<String, i64>,
}

/// Parse a comma-separated counted-list.
///
/// Each token is split on its *last* `" x"` so names that contain the letter x survive intact.
/// Tokens without the separator, with an empty name, or with a non-integer count are skipped.
/// When a name repeats, the last occurrence wins.
pub fn parse_counted_list(raw: &str) -> CountedList {
    let mut entries = BTreeMap::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let Some(split_at) = token.rfind(COUNT_SEPARATOR) else {
            log::debug!("dropping counted-list token without separator: {token:?}");
            continue;
        };

        let name = token[..split_at].trim();
        let count_part = token[split_at + COUNT_SEPARATOR.len()..].trim();

        if name.is_empty() {
            log::debug!("dropping counted-list token without a name: {token:?}");
            continue;
        }

        match count_part.parse::<i64>() {
            Ok(count) => {
                entries.insert(name.to_string(), count);
            }
            Err(_) => log::debug!("dropping counted-list token with bad count: {token:?}"),
        }
    }

    CountedList { entries }
}

impl CountedList {
    /// Count for `name`, or 0 when absent.
    pub fn get(&self, name: &str) -> i64 {
        self.entries.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every count in the list.
    pub fn total(&self) -> i64 {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn as_map(&self) -> &BTreeMap<String, i64> {
        &self.entries
    }
}

/// Parse a counted-list keying every name in lowercase.
///
/// Lowercasing happens per token before insertion, so `"Bulbasaur x3, bulbasaur x5"` keeps the
/// later count just like an exact repeat would.
pub fn parse_counted_list_lowercased(raw: &str) -> CountedList {
    let mut entries = BTreeMap::new();
    for token in raw.split(',') {
        let single = parse_counted_list(token);
        for (name, count) in single.entries {
            entries.insert(name.to_lowercase(), count);
        }
    }
    CountedList { entries }
}
