//! Report assembly and the end-to-end pipeline.
//!
//! Stages run strictly in order: registry, ownership, lines, aggregation, enrichment,
//! companion, assembly. Nothing outlives a single call.

use crate::catalog::{load_catalog, CatalogRegistry};
use crate::companion::{load_companion_source, resolve_companion, Companion, CompanionInteractions};
use crate::config::ReportConfig;
use crate::enrichment::{EnrichmentContext, PokedexEntry};
use crate::errors::ReportResult;
use crate::lines::EvolutionLines;
use crate::progression::{ProgressAggregator, TrainerStats};
use crate::snapshot::TrainerSnapshot;
use chrono::{DateTime, Utc};
use schema::CatalogRow;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    pub username: String,
    pub avatar: String,
}

/// The finished progress document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub user: UserIdentity,
    pub updated_at: DateTime<Utc>,
    pub trainer_stats: TrainerStats,
    pub pokemon: Vec<PokedexEntry>,
    pub companion: Option<Companion>,
}

/// Compose the document from already-computed parts.
pub fn assemble_report(
    user: UserIdentity,
    updated_at: DateTime<Utc>,
    trainer_stats: TrainerStats,
    pokemon: Vec<PokedexEntry>,
    companion: Option<Companion>,
) -> Report {
    Report {
        user,
        updated_at,
        trainer_stats,
        pokemon,
        companion,
    }
}

/// Run the whole pipeline over one user's snapshot.
pub fn build_report(
    rows: &[CatalogRow],
    snapshot: &TrainerSnapshot,
    companion_source: Option<&str>,
    config: &ReportConfig,
    now: DateTime<Utc>,
) -> Report {
    let mut registry = CatalogRegistry::build(rows, config);
    registry.apply_ownership(&snapshot.owned_counts());

    let species = registry.species();
    let transitions = registry.transitions();
    let lines = EvolutionLines::build(species);

    let aggregator = ProgressAggregator::new(species, &lines, transitions);
    let trainer_stats = TrainerStats::compute(&aggregator, snapshot);

    let friendship = snapshot.friendship();
    let context = EnrichmentContext {
        transitions,
        lines: &lines,
        friendship: &friendship,
    };
    let pokemon = context.enrich_all(species);

    let username = snapshot.username();
    let interactions = CompanionInteractions {
        pets: snapshot.companion_pets(),
        feeds: snapshot.companion_feeds(),
    };
    let companion = resolve_companion(companion_source, &username, &pokemon, interactions);

    log::info!(
        "report for {:?}: {}/{} species owned, companion {}",
        username,
        trainer_stats.pokedex.unique_owned,
        trainer_stats.pokedex.total_available,
        companion
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("none")
    );

    let user = UserIdentity {
        username,
        avatar: snapshot.avatar(),
    };
    assemble_report(user, now, trainer_stats, pokemon, companion)
}

/// Everything read from disk for one run.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub rows: Vec<CatalogRow>,
    pub snapshot: TrainerSnapshot,
    pub companion_source: Option<String>,
    pub config: ReportConfig,
}

impl ReportInputs {
    /// Read all inputs. The catalog, snapshot and (if given) config must be readable; the
    /// companion source is optional in every sense.
    pub fn load(
        catalog: &Path,
        snapshot: &Path,
        companions: Option<&Path>,
        config: Option<&Path>,
    ) -> ReportResult<Self> {
        let config = match config {
            Some(path) => ReportConfig::load(path)?,
            None => ReportConfig::default(),
        };
        let rows = load_catalog(catalog)?;
        let snapshot = TrainerSnapshot::load(snapshot)?;
        let companion_source = companions.and_then(load_companion_source);

        Ok(ReportInputs {
            rows,
            snapshot,
            companion_source,
            config,
        })
    }

    pub fn build(&self, now: DateTime<Utc>) -> Report {
        build_report(
            &self.rows,
            &self.snapshot,
            self.companion_source.as_deref(),
            &self.config,
            now,
        )
    }
}
