use serde::{Deserialize, Serialize};

/// One raw record from the species catalog.
///
/// Every field is kept as the text the catalog holds; interpretation (numeric parsing, flag
/// detection, defaults) happens when the registry is built, so a malformed cell never rejects
/// the whole row. Missing columns deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRow {
    pub name: String,
    pub number: String,
    pub pokedex_number: String,
    pub primary_type: String,
    pub secondary_type: String,
    pub generation: String,
    pub region: String,
    pub rarity: String,
    pub is_legendary: String,
    pub is_mythic: String,
    pub is_hatchable: String,
    pub evolution: String,
    pub evolution_stage: String,
    pub evolution_line_id: String,
    pub quantity_required: String,
    pub item_required: String,
    pub requirement: String,
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub sp_attack: String,
    pub sp_defense: String,
    pub speed: String,
    pub height: String,
    pub weight: String,
    pub pokedex_entry: String,
    pub form: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Physical {
    pub height: f64,
    pub weight: f64,
}
