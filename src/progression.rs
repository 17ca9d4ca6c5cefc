//! Collection progress metrics.
//!
//! `ProgressAggregator` owns the species-driven dimensions (its `impl` blocks are spread over
//! the submodules); inventory-driven sections are plain functions over parsed counted-lists.

pub mod collection;
pub mod evolution;
pub mod inventory;

use crate::evolution::TransitionIndex;
use crate::lines::EvolutionLines;
use crate::snapshot::TrainerSnapshot;
use crate::species::Species;
use serde::Serialize;
use std::collections::BTreeMap;

pub use collection::{CompletionProgress, GenerationProgress, OwnedTotal, PokedexProgress};
pub use evolution::EvolutionProgress;
pub use inventory::{
    ActivityProgress, BagSummary, BallProgress, FriendshipSummary, PokeballProgress,
};

/// Derives progress metrics from the owned-count-annotated species list.
pub struct ProgressAggregator<'a> {
    species: &'a [Species],
    lines: &'a EvolutionLines,
    transitions: &'a TransitionIndex,
}

impl<'a> ProgressAggregator<'a> {
    pub fn new(
        species: &'a [Species],
        lines: &'a EvolutionLines,
        transitions: &'a TransitionIndex,
    ) -> Self {
        Self {
            species,
            lines,
            transitions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyProgress {
    pub watch_hours: i64,
    pub follow_age: String,
    pub sub_age: String,
    pub commands_run: i64,
}

impl JourneyProgress {
    pub fn from_snapshot(snapshot: &TrainerSnapshot) -> Self {
        Self {
            watch_hours: snapshot.watch_hours(),
            follow_age: snapshot.follow_age(),
            sub_age: snapshot.sub_age(),
            commands_run: snapshot.commands_run(),
        }
    }
}

/// The full trainer-stats aggregate embedded in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerStats {
    pub pokedex: PokedexProgress,
    pub generation_progress: BTreeMap<i32, GenerationProgress>,
    pub evolution: EvolutionProgress,
    pub types: BTreeMap<String, CompletionProgress>,
    pub rarity: BTreeMap<String, OwnedTotal>,
    pub legendary: CompletionProgress,
    pub hatchable: CompletionProgress,
    pub pokeballs: PokeballProgress,
    pub activity: ActivityProgress,
    pub bag: BagSummary,
    pub friendship: FriendshipSummary,
    pub journey: JourneyProgress,
}

impl TrainerStats {
    pub fn compute(aggregator: &ProgressAggregator<'_>, snapshot: &TrainerSnapshot) -> Self {
        let inventory = snapshot.inventory();

        TrainerStats {
            pokedex: aggregator.pokedex_progress(),
            generation_progress: aggregator.generation_progress(),
            evolution: aggregator.evolution_progress(),
            types: aggregator.type_progress(),
            rarity: aggregator.rarity_progress(),
            legendary: aggregator.legendary_progress(),
            hatchable: aggregator.hatchable_progress(),
            pokeballs: PokeballProgress::from_inventory(&inventory),
            activity: ActivityProgress::from_inventory(&inventory),
            bag: BagSummary::from_bag(&snapshot.bag()),
            friendship: FriendshipSummary::from_points(&snapshot.friendship()),
            journey: JourneyProgress::from_snapshot(snapshot),
        }
    }
}
