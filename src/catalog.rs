//! Species catalog loading and the registry built from it.
//!
//! The catalog is the one input the report cannot do without, so this is the only place where
//! reading failures turn into errors.

use crate::config::ReportConfig;
use crate::counted_list::CountedList;
use crate::errors::{CatalogError, CatalogResult};
use crate::evolution::{Transition, TransitionIndex};
use crate::numbers::is_integral;
use crate::species::Species;
use schema::CatalogRow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load catalog rows from a CSV (header row required) or RON file, picked by extension.
///
/// Unreadable individual CSV records are skipped with a warning; a missing or unreadable file
/// is an error.
pub fn load_catalog(path: &Path) -> CatalogResult<Vec<CatalogRow>> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let rows = match extension.as_deref() {
        Some("csv") => parse_csv_catalog(&content)?,
        Some("ron") => ron::from_str::<Vec<CatalogRow>>(&content)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };

    log::info!("loaded {} catalog rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse CSV catalog text. Columns are matched by header name; unknown columns are ignored and
/// missing ones read as empty.
pub fn parse_csv_catalog(content: &str) -> CatalogResult<Vec<CatalogRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    // A header row that cannot be read means there is no catalog to speak of.
    reader.headers()?;

    let mut rows = Vec::new();
    for (line, record) in reader.deserialize::<CatalogRow>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(err) => log::warn!("skipping catalog record {}: {}", line + 1, err),
        }
    }
    Ok(rows)
}

/// Species records and transition edges split out of the raw catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    species: Vec<Species>,
    positions: HashMap<String, usize>,
    transitions: TransitionIndex,
}

impl CatalogRegistry {
    /// Walk the rows once, in catalog order.
    ///
    /// A row becomes a species iff its `number` cell is integral and it has a name. A repeated
    /// name replaces the earlier record in place. Independently, any row naming an evolution
    /// target registers a transition.
    pub fn build<'a, I>(rows: I, config: &ReportConfig) -> Self
    where
        I: IntoIterator<Item = &'a CatalogRow>,
    {
        let mut registry = CatalogRegistry::default();

        for row in rows {
            if let Some(transition) = Transition::from_row(row) {
                registry.transitions.insert(transition);
            }

            if row.name.trim().is_empty() || !is_integral(&row.number) {
                continue;
            }

            let species = Species::from_row(row, config);
            match registry.positions.get(&species.key) {
                Some(&position) => {
                    log::debug!("catalog row for {:?} replaces an earlier row", species.name);
                    registry.species[position] = species;
                }
                None => {
                    registry
                        .positions
                        .insert(species.key.clone(), registry.species.len());
                    registry.species.push(species);
                }
            }
        }

        log::debug!(
            "catalog registry: {} species, {} transitions",
            registry.species.len(),
            registry.transitions.len()
        );
        registry
    }

    /// Apply owned counts (keyed by lowercased name) to every species.
    pub fn apply_ownership(&mut self, owned: &CountedList) {
        for species in &mut self.species {
            species.set_count(owned.get(&species.key));
        }
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn transitions(&self) -> &TransitionIndex {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
