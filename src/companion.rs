//! Resolving the user's active buddy from the external assignment records.
//!
//! Each usable record line has at least four whitespace-separated tokens:
//! `<username> <reserved> <evolution line id> <reserved>`. The first line naming the user wins.

use crate::enrichment::PokedexEntry;
use crate::species::StageLabel;
use serde::Serialize;
use std::fs;
use std::path::Path;

const MIN_TOKENS: usize = 4;
const USERNAME_TOKEN: usize = 0;
const LINE_ID_TOKEN: usize = 2;

/// Interaction counters supplied alongside the assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanionInteractions {
    pub pets: i64,
    pub feeds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Companion {
    pub name: String,
    pub pokedex_number: u32,
    pub image: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub evolution_stage: StageLabel,
    pub evolution_line_id: String,
    pub count: i64,
    pub friendship_points: i64,
    pub friendship_requirement: Option<String>,
    pub friendship_required: Option<i64>,
    pub friendship_progress_percent: Option<f64>,
    pub pets: i64,
    pub feeds: i64,
}

/// Read the assignment source. Any failure means "no companion", so it is logged, not raised.
pub fn load_companion_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            log::warn!(
                "companion source {} unavailable, continuing without one: {}",
                path.display(),
                err
            );
            None
        }
    }
}

fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Line id assigned to `username` by the first matching usable record.
pub fn assigned_line_id<'a>(source: &'a str, username: &str) -> Option<&'a str> {
    source.lines().find_map(|line| {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            return None;
        }
        same_ignoring_case(tokens[USERNAME_TOKEN], username).then_some(tokens[LINE_ID_TOKEN])
    })
}

/// Resolve the companion against the enriched list, which must already be in dex order.
pub fn resolve_companion(
    source: Option<&str>,
    username: &str,
    pokemon: &[PokedexEntry],
    interactions: CompanionInteractions,
) -> Option<Companion> {
    let username = username.trim();
    if username.is_empty() {
        return None;
    }

    let line_id = assigned_line_id(source?, username)?;
    let Some(entry) = pokemon
        .iter()
        .find(|entry| same_ignoring_case(&entry.evolution_line_id, line_id))
    else {
        log::info!("companion line {line_id:?} for {username:?} has no catalog species");
        return None;
    };

    let friendship_requirement = entry
        .friendship_required
        .map(|_| entry.requirement.clone());

    Some(Companion {
        name: entry.name.clone(),
        pokedex_number: entry.pokedex_number,
        image: entry.image.clone(),
        primary_type: entry.primary_type.clone(),
        secondary_type: entry.secondary_type.clone(),
        evolution_stage: entry.evolution_stage,
        evolution_line_id: entry.evolution_line_id.clone(),
        count: entry.count,
        friendship_points: entry.friendship_points,
        friendship_requirement,
        friendship_required: entry.friendship_required,
        friendship_progress_percent: entry.friendship_progress_percent,
        pets: interactions.pets,
        feeds: interactions.feeds,
    })
}
