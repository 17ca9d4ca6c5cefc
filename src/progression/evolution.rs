use super::{OwnedTotal, ProgressAggregator};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionProgress {
    pub total_lines: u32,
    pub lines_completed: u32,
    /// Owned species holding enough copies to evolve right now.
    pub evolvable_owned: u32,
    /// Species with a stage above zero.
    pub evolved_available: u32,
    pub evolved_owned: u32,
    /// Owned/total per stage label ("1", "2", "3", "mega").
    pub by_stage: BTreeMap<String, OwnedTotal>,
}

impl ProgressAggregator<'_> {
    pub fn evolution_progress(&self) -> EvolutionProgress {
        let mut by_stage: BTreeMap<String, OwnedTotal> = BTreeMap::new();
        let mut evolved = OwnedTotal::default();

        for species in self.species.iter().filter(|s| s.stage > 0) {
            let stage = by_stage.entry(species.stage_label().to_string()).or_default();
            stage.total += 1;
            evolved.total += 1;
            if species.owned {
                stage.owned += 1;
                evolved.owned += 1;
            }
        }

        let evolvable_owned = self
            .species
            .iter()
            .filter(|species| self.transitions.is_evolvable_now(species))
            .count() as u32;

        EvolutionProgress {
            total_lines: self.lines.len() as u32,
            lines_completed: self.lines.completed_count() as u32,
            evolvable_owned,
            evolved_available: evolved.total,
            evolved_owned: evolved.owned,
            by_stage,
        }
    }
}
