use super::ProgressAggregator;
use crate::numbers::percent;
use crate::species::Species;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokedexProgress {
    pub total_available: u32,
    pub unique_owned: u32,
    /// Sum of counts across every owned species.
    pub total_owned: i64,
    pub completion_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationProgress {
    pub generation: i32,
    pub region: String,
    pub owned: u32,
    pub total: u32,
    pub completion_percent: f64,
    /// Evolution lines whose first member belongs to `region`.
    pub total_lines: u32,
    pub lines_completed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OwnedTotal {
    pub owned: u32,
    pub total: u32,
}

impl OwnedTotal {
    fn record(&mut self, owned: bool) {
        self.total += 1;
        if owned {
            self.owned += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CompletionProgress {
    pub owned: u32,
    pub total: u32,
    pub completion_percent: f64,
}

impl From<OwnedTotal> for CompletionProgress {
    fn from(counts: OwnedTotal) -> Self {
        CompletionProgress {
            owned: counts.owned,
            total: counts.total,
            completion_percent: percent(i64::from(counts.owned), i64::from(counts.total)),
        }
    }
}

impl ProgressAggregator<'_> {
    pub fn pokedex_progress(&self) -> PokedexProgress {
        let owned: Vec<&Species> = self.species.iter().filter(|s| s.owned).collect();
        let total_available = self.species.len() as u32;
        let unique_owned = owned.len() as u32;

        PokedexProgress {
            total_available,
            unique_owned,
            total_owned: owned.iter().map(|s| s.count).sum(),
            completion_percent: percent(i64::from(unique_owned), i64::from(total_available)),
        }
    }

    /// Per-generation completion. Generations of zero or below are skipped; the region comes
    /// from the first species seen for the generation.
    pub fn generation_progress(&self) -> BTreeMap<i32, GenerationProgress> {
        let mut counts: BTreeMap<i32, (String, OwnedTotal)> = BTreeMap::new();
        for species in self.species.iter().filter(|s| s.generation > 0) {
            let (_, tally) = counts
                .entry(species.generation)
                .or_insert_with(|| (species.region.clone(), OwnedTotal::default()));
            tally.record(species.owned);
        }

        let region_lines = self.lines.region_counts();

        counts
            .into_iter()
            .map(|(generation, (region, tally))| {
                let lines = region_lines.get(&region).copied().unwrap_or_default();
                let progress = GenerationProgress {
                    generation,
                    owned: tally.owned,
                    total: tally.total,
                    completion_percent: percent(i64::from(tally.owned), i64::from(tally.total)),
                    total_lines: lines.total_lines,
                    lines_completed: lines.lines_completed,
                    region,
                };
                (generation, progress)
            })
            .collect()
    }

    /// Completion keyed by lowercased primary type.
    pub fn type_progress(&self) -> BTreeMap<String, CompletionProgress> {
        self.tally_by(|species| species.primary_type.to_lowercase())
            .into_iter()
            .map(|(key, tally)| (key, CompletionProgress::from(tally)))
            .collect()
    }

    /// Owned/total keyed by lowercased rarity tag.
    pub fn rarity_progress(&self) -> BTreeMap<String, OwnedTotal> {
        self.tally_by(|species| species.rarity.to_lowercase())
    }

    /// Legendary and mythic species together, each counted once.
    pub fn legendary_progress(&self) -> CompletionProgress {
        self.tally_where(Species::is_legendary_or_mythic).into()
    }

    pub fn hatchable_progress(&self) -> CompletionProgress {
        self.tally_where(|species| species.is_hatchable).into()
    }

    fn tally_by<F>(&self, key: F) -> BTreeMap<String, OwnedTotal>
    where
        F: Fn(&Species) -> String,
    {
        let mut counts: BTreeMap<String, OwnedTotal> = BTreeMap::new();
        for species in self.species {
            counts.entry(key(species)).or_default().record(species.owned);
        }
        counts
    }

    fn tally_where<F>(&self, predicate: F) -> OwnedTotal
    where
        F: Fn(&Species) -> bool,
    {
        let mut tally = OwnedTotal::default();
        for species in self.species.iter().filter(|species| predicate(*species)) {
            tally.record(species.owned);
        }
        tally
    }
}
