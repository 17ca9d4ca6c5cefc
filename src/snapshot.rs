use crate::counted_list::{parse_counted_list, parse_counted_list_lowercased, CountedList};
use crate::errors::{SnapshotError, SnapshotResult};
use crate::numbers::{parse_int, text_or};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const UNKNOWN_FOLLOW_AGE: &str = "Unknown";
pub const NOT_SUBSCRIBED: &str = "Not Subscribed";

/// Everything the host knows about one user at the moment of the run, as raw text.
///
/// Counted-list fields use the `"name xN, name xN"` encoding. Numeric fields are parsed
/// leniently on access, so a garbled value reads as 0 instead of failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerSnapshot {
    pub username: String,
    pub avatar: String,
    /// Owned species counts.
    pub pokedex: String,
    /// Inventory telemetry: ball throws/successes, evolutions, trades, eggs hatched.
    pub inventory: String,
    /// Items currently held.
    pub bag: String,
    /// Friendship points per evolution line id.
    pub friendship: String,
    pub watch_hours: String,
    pub follow_age: String,
    pub sub_age: String,
    pub commands_run: String,
    pub companion_pets: String,
    pub companion_feeds: String,
}

impl TrainerSnapshot {
    /// Load a snapshot from RON, or from JSON when the file ends in `.json`.
    pub fn load(path: &Path) -> SnapshotResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let snapshot: TrainerSnapshot = if is_json {
            serde_json::from_str(&content)?
        } else {
            ron::from_str(&content)?
        };
        Ok(snapshot)
    }

    pub fn username(&self) -> String {
        self.username.trim().to_string()
    }

    pub fn avatar(&self) -> String {
        self.avatar.trim().to_string()
    }

    /// Owned counts keyed by lowercased species name.
    pub fn owned_counts(&self) -> CountedList {
        parse_counted_list_lowercased(&self.pokedex)
    }

    /// Inventory telemetry, names as written.
    pub fn inventory(&self) -> CountedList {
        parse_counted_list(&self.inventory)
    }

    pub fn bag(&self) -> CountedList {
        parse_counted_list(&self.bag)
    }

    /// Friendship points keyed by lowercased line id.
    pub fn friendship(&self) -> CountedList {
        parse_counted_list_lowercased(&self.friendship)
    }

    pub fn watch_hours(&self) -> i64 {
        parse_int(&self.watch_hours)
    }

    pub fn follow_age(&self) -> String {
        text_or(&self.follow_age, UNKNOWN_FOLLOW_AGE)
    }

    pub fn sub_age(&self) -> String {
        text_or(&self.sub_age, NOT_SUBSCRIBED)
    }

    pub fn commands_run(&self) -> i64 {
        parse_int(&self.commands_run)
    }

    pub fn companion_pets(&self) -> i64 {
        parse_int(&self.companion_pets)
    }

    pub fn companion_feeds(&self) -> i64 {
        parse_int(&self.companion_feeds)
    }
}
