// In: src/lib.rs

//! Pokedex Progress Engine
//!
//! Turns a species catalog plus one user's textual snapshot counters (owned species, inventory
//! telemetry, bag contents, friendship points) into a single structured progress report.

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod companion;
pub mod config;
pub mod counted_list;
pub mod enrichment;
pub mod errors;
pub mod evolution;
pub mod lines;
pub mod numbers;
pub mod progression;
pub mod report;
pub mod snapshot;
pub mod species;
pub mod type_matchups;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, CatalogRow, DefenseProfile, Physical, PokemonType};

// --- From this crate's modules (`src/`) ---

// Pipeline entry points.
pub use report::{assemble_report, build_report, Report, ReportInputs, UserIdentity};

// Stage building blocks.
pub use catalog::{load_catalog, CatalogRegistry};
pub use companion::{resolve_companion, Companion, CompanionInteractions};
pub use counted_list::{parse_counted_list, parse_counted_list_lowercased, CountedList};
pub use enrichment::{EnrichmentContext, PokedexEntry, FRIENDSHIP_THRESHOLD};
pub use evolution::{Transition, TransitionIndex};
pub use lines::{EvolutionLine, EvolutionLines, LineMember};
pub use progression::{ProgressAggregator, TrainerStats};
pub use species::{Species, StageLabel};
pub use type_matchups::{calculate_matchups, TypeMatchup, TypeMatchups};

// Inputs and configuration.
pub use config::ReportConfig;
pub use snapshot::TrainerSnapshot;

// Crate-specific error and result types.
pub use errors::{
    CatalogError, CatalogResult, ConfigError, ConfigResult, ReportError, ReportResult,
    SnapshotError, SnapshotResult,
};
