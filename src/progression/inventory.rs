use crate::counted_list::CountedList;
use crate::numbers::percent;
use serde::Serialize;
use std::collections::BTreeMap;

const THROWN_SUFFIX: &str = " thrown";
const SUCCESS_SUFFIX: &str = " success";
const EVOLUTION_KEY: &str = "evolution";
const TRADE_KEY: &str = "trade";
const EGGS_HATCHED_KEY: &str = "eggs hatched";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BallProgress {
    pub thrown: i64,
    pub success: i64,
    pub accuracy_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PokeballProgress {
    pub thrown: i64,
    pub success: i64,
    pub accuracy_percent: f64,
    /// Keyed by lowercased ball name, e.g. `"great ball"`.
    pub by_ball: BTreeMap<String, BallProgress>,
    /// Every inventory entry exactly as supplied.
    pub details: BTreeMap<String, i64>,
}

impl PokeballProgress {
    /// Throw and catch totals from `"<ball> thrown"` / `"<ball> success"` entries.
    ///
    /// Only the trailing word counts, so a name like `"Thrown Ball success"` is a success entry
    /// and names merely containing "thrown" elsewhere are left to `details`.
    pub fn from_inventory(inventory: &CountedList) -> Self {
        let mut by_ball: BTreeMap<String, BallProgress> = BTreeMap::new();
        let mut thrown = 0;
        let mut success = 0;

        for (name, count) in inventory.iter() {
            let name = name.to_lowercase();
            if let Some(ball) = name.strip_suffix(THROWN_SUFFIX) {
                by_ball.entry(ball.trim().to_string()).or_default().thrown += count;
                thrown += count;
            } else if let Some(ball) = name.strip_suffix(SUCCESS_SUFFIX) {
                by_ball.entry(ball.trim().to_string()).or_default().success += count;
                success += count;
            }
        }

        for ball in by_ball.values_mut() {
            ball.accuracy_percent = percent(ball.success, ball.thrown);
        }

        PokeballProgress {
            thrown,
            success,
            accuracy_percent: percent(success, thrown),
            by_ball,
            details: inventory.as_map().clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityProgress {
    pub evolutions: i64,
    pub trades: i64,
    pub eggs_hatched: i64,
}

impl ActivityProgress {
    /// Reads the `evolution`, `trade` and `eggs hatched` entries, ignoring case.
    pub fn from_inventory(inventory: &CountedList) -> Self {
        let mut activity = ActivityProgress::default();
        for (name, count) in inventory.iter() {
            match name.to_lowercase().as_str() {
                EVOLUTION_KEY => activity.evolutions = count,
                TRADE_KEY => activity.trades = count,
                EGGS_HATCHED_KEY => activity.eggs_hatched = count,
                _ => {}
            }
        }
        activity
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BagSummary {
    pub distinct_items: u32,
    pub total_items: i64,
    pub items: BTreeMap<String, i64>,
}

impl BagSummary {
    pub fn from_bag(bag: &CountedList) -> Self {
        BagSummary {
            distinct_items: bag.len() as u32,
            total_items: bag.total(),
            items: bag.as_map().clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FriendshipSummary {
    pub total_points: i64,
    pub lines_tracked: u32,
    /// Points keyed by lowercased line id.
    pub by_line: BTreeMap<String, i64>,
}

impl FriendshipSummary {
    pub fn from_points(points: &CountedList) -> Self {
        FriendshipSummary {
            total_points: points.total(),
            lines_tracked: points.len() as u32,
            by_line: points.as_map().clone(),
        }
    }
}
