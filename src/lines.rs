use crate::species::{Species, StageLabel};
use serde::Serialize;
use std::collections::BTreeMap;

/// Compact view of one line member, as embedded in every species of the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMember {
    pub name: String,
    pub pokedex_number: u32,
    pub image: String,
    pub evolution_stage: StageLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionLine {
    pub id: String,
    /// Region of the lowest-stage member.
    pub region: String,
    /// Members ordered by (stage, dex number, name).
    pub members: Vec<LineMember>,
    /// Every member is held at least once.
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegionLineCounts {
    pub total_lines: u32,
    pub lines_completed: u32,
}

/// Evolution lines reconstructed from the flat species list, keyed by line id.
#[derive(Debug, Clone, Default)]
pub struct EvolutionLines {
    lines: BTreeMap<String, EvolutionLine>,
}

impl EvolutionLines {
    pub fn build(species: &[Species]) -> Self {
        let mut grouped: BTreeMap<&str, Vec<&Species>> = BTreeMap::new();
        for entry in species {
            grouped
                .entry(entry.evolution_line_id.as_str())
                .or_default()
                .push(entry);
        }

        let lines = grouped
            .into_iter()
            .map(|(id, mut members)| {
                members.sort_by(|a, b| {
                    (a.stage, a.pokedex_number, &a.name).cmp(&(b.stage, b.pokedex_number, &b.name))
                });

                let complete = members.iter().all(|member| member.count > 0);
                let region = members
                    .first()
                    .map(|first| first.region.clone())
                    .unwrap_or_default();
                let members = members
                    .into_iter()
                    .map(|member| LineMember {
                        name: member.name.clone(),
                        pokedex_number: member.pokedex_number,
                        image: member.image.clone(),
                        evolution_stage: member.stage_label(),
                    })
                    .collect();

                let line = EvolutionLine {
                    id: id.to_string(),
                    region,
                    members,
                    complete,
                };
                (id.to_string(), line)
            })
            .collect();

        EvolutionLines { lines }
    }

    /// Unknown lines are never complete.
    pub fn is_complete(&self, id: &str) -> bool {
        self.lines.get(id).is_some_and(|line| line.complete)
    }

    pub fn members(&self, id: &str) -> &[LineMember] {
        self.lines
            .get(id)
            .map(|line| line.members.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.lines.values().filter(|line| line.complete).count()
    }

    /// Lines per region (by each line's first member) and how many of them are complete.
    pub fn region_counts(&self) -> BTreeMap<String, RegionLineCounts> {
        let mut counts: BTreeMap<String, RegionLineCounts> = BTreeMap::new();
        for line in self.lines.values() {
            let entry = counts.entry(line.region.clone()).or_default();
            entry.total_lines += 1;
            if line.complete {
                entry.lines_completed += 1;
            }
        }
        counts
    }
}
