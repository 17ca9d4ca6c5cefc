//! Per-species cross-referencing: the step that turns bare catalog records into report entries.

use crate::counted_list::CountedList;
use crate::evolution::TransitionIndex;
use crate::lines::{EvolutionLines, LineMember};
use crate::numbers::round2;
use crate::species::{Species, StageLabel};
use crate::type_matchups::{calculate_matchups, TypeMatchups};
use schema::{BaseStats, Physical};
use serde::Serialize;

/// Points at which a friendship requirement counts as fully met.
pub const FRIENDSHIP_THRESHOLD: i64 = 220;

/// A species as it appears in the report's `pokemon` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokedexEntry {
    pub name: String,
    pub count: i64,
    pub owned: bool,
    pub pokedex_number: u32,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub generation: i32,
    pub region: String,
    pub rarity: String,
    pub is_legendary: bool,
    pub is_mythic: bool,
    pub is_hatchable: bool,
    pub evolution_stage: StageLabel,
    pub evolution_line_id: String,
    pub line_complete: bool,
    pub evolves_from: Option<String>,
    pub evolves_to: Vec<String>,
    pub requirement: String,
    pub item_required: bool,
    pub requires_stone: bool,
    pub requires_trade: bool,
    pub quantity_required: i64,
    pub evolvable_now: bool,
    pub friendship_points: i64,
    pub friendship_required: Option<i64>,
    pub friendship_progress_percent: Option<f64>,
    pub stats: BaseStats,
    pub physical: Physical,
    pub pokedex_entry: String,
    pub form: Option<String>,
    pub image: String,
    pub type_matchups: TypeMatchups,
    pub evolution_line: Vec<LineMember>,
}

/// Registries the enrichment pass reads from. Built once, shared by every species.
pub struct EnrichmentContext<'a> {
    pub transitions: &'a TransitionIndex,
    pub lines: &'a EvolutionLines,
    /// Friendship points keyed by lowercased line id.
    pub friendship: &'a CountedList,
}

fn mentions(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

/// Progress toward the friendship threshold, capped at 100.
pub fn friendship_progress_percent(points: i64) -> f64 {
    let ratio = points.max(0) as f64 / FRIENDSHIP_THRESHOLD as f64;
    round2(ratio.min(1.0) * 100.0)
}

impl EnrichmentContext<'_> {
    pub fn enrich(&self, species: &Species) -> PokedexEntry {
        // How this species is obtained.
        let incoming = self.transitions.for_child(&species.key);
        let requirement = incoming
            .map(|transition| transition.requirement.clone())
            .unwrap_or_default();
        let item_required = incoming.is_some_and(|transition| transition.item_required);

        // What it can become.
        let evolves_to = self
            .transitions
            .children_of(&species.key)
            .map(|transition| transition.child.clone())
            .collect();
        let quantity_required = self.transitions.resolved_quantity(species);
        let evolvable_now = self.transitions.is_evolvable_now(species);

        let friendship_points = self
            .friendship
            .get(&species.evolution_line_id.to_lowercase());
        let (friendship_required, friendship_progress_percent) =
            if mentions(&requirement, "friendship") {
                (
                    Some(FRIENDSHIP_THRESHOLD),
                    Some(friendship_progress_percent(friendship_points)),
                )
            } else {
                (None, None)
            };

        PokedexEntry {
            name: species.name.clone(),
            count: species.count,
            owned: species.owned,
            pokedex_number: species.pokedex_number,
            primary_type: species.primary_type.clone(),
            secondary_type: species.secondary_type.clone(),
            generation: species.generation,
            region: species.region.clone(),
            rarity: species.rarity.clone(),
            is_legendary: species.is_legendary,
            is_mythic: species.is_mythic,
            is_hatchable: species.is_hatchable,
            evolution_stage: species.stage_label(),
            evolution_line_id: species.evolution_line_id.clone(),
            line_complete: self.lines.is_complete(&species.evolution_line_id),
            evolves_from: incoming.map(|transition| transition.parent.clone()),
            evolves_to,
            requires_stone: mentions(&requirement, "stone"),
            requires_trade: mentions(&requirement, "trade"),
            requirement,
            item_required,
            quantity_required,
            evolvable_now,
            friendship_points,
            friendship_required,
            friendship_progress_percent,
            stats: species.stats,
            physical: species.physical,
            pokedex_entry: species.pokedex_entry.clone(),
            form: species.form.clone(),
            image: species.image.clone(),
            type_matchups: calculate_matchups(
                &species.primary_type,
                species.secondary_type.as_deref(),
            ),
            evolution_line: self.lines.members(&species.evolution_line_id).to_vec(),
        }
    }

    /// Enrich every species and order the result by dex number (name breaks ties).
    pub fn enrich_all(&self, species: &[Species]) -> Vec<PokedexEntry> {
        let mut entries: Vec<PokedexEntry> = species.iter().map(|s| self.enrich(s)).collect();
        entries.sort_by(|a, b| {
            a.pokedex_number
                .cmp(&b.pokedex_number)
                .then_with(|| a.name.cmp(&b.name))
        });
        entries
    }
}
