use crate::config::ReportConfig;
use crate::numbers::{is_truthy, parse_float, parse_int, text_or};
use phf::phf_set;
use schema::{BaseStats, CatalogRow, Physical};
use serde::{Serialize, Serializer};
use std::fmt;

/// Raw stage value that marks a final mega form.
pub const MEGA_STAGE: u32 = 4;
pub const MEGA_LABEL: &str = "mega";

/// Secondary-type cells that mean "no secondary type".
static NULL_TYPES: phf::Set<&'static str> = phf_set! {
    "",
    "null",
    "none",
};

/// True when a type cell holds nothing or one of the null sentinels.
pub fn is_null_type(raw: &str) -> bool {
    NULL_TYPES.contains(raw.trim().to_lowercase().as_str())
}

/// Evolution stage as it appears in the report.
///
/// Numeric stages render as integers; the mega sentinel renders as the `"mega"` label and is
/// never exposed as the number 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StageLabel {
    Stage(u32),
    Mega,
}

impl From<u32> for StageLabel {
    fn from(stage: u32) -> Self {
        if stage == MEGA_STAGE {
            StageLabel::Mega
        } else {
            StageLabel::Stage(stage)
        }
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageLabel::Stage(stage) => write!(f, "{}", stage),
            StageLabel::Mega => write!(f, "{}", MEGA_LABEL),
        }
    }
}

impl Serialize for StageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StageLabel::Stage(stage) => serializer.serialize_u32(*stage),
            StageLabel::Mega => serializer.serialize_str(MEGA_LABEL),
        }
    }
}

/// One authoritative species record built from an integral-numbered catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    /// Lowercased name; the registry's identity for this species.
    pub key: String,
    pub name: String,
    pub pokedex_number: u32,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub generation: i32,
    pub region: String,
    pub rarity: String,
    pub is_legendary: bool,
    pub is_mythic: bool,
    pub is_hatchable: bool,
    /// Normalized numeric stage; non-numeric catalog values read as 0.
    pub stage: u32,
    pub evolution_line_id: String,
    /// Quantity from this row's own `quantity_required` cell.
    pub quantity_required: i64,
    pub stats: BaseStats,
    pub physical: Physical,
    pub pokedex_entry: String,
    pub form: Option<String>,
    pub image: String,
    pub count: i64,
    pub owned: bool,
}

impl Species {
    /// Build a species from a catalog row. Ownership starts at zero.
    pub fn from_row(row: &CatalogRow, config: &ReportConfig) -> Self {
        let name = row.name.trim().to_string();
        let key = name.to_lowercase();
        let pokedex_number = parse_int::<u32>(&row.pokedex_number);
        let form = Some(row.form.trim())
            .filter(|form| !form.is_empty())
            .map(str::to_string);
        let image = config.image_url(pokedex_number, form.as_deref());

        Species {
            evolution_line_id: text_or(&row.evolution_line_id, &key),
            key,
            name,
            pokedex_number,
            primary_type: text_or(&row.primary_type, "Unknown"),
            secondary_type: Some(row.secondary_type.trim())
                .filter(|raw| !is_null_type(raw))
                .map(str::to_string),
            generation: parse_int::<i32>(&row.generation),
            region: text_or(&row.region, "Unknown"),
            rarity: text_or(&row.rarity, "common"),
            is_legendary: is_truthy(&row.is_legendary),
            is_mythic: is_truthy(&row.is_mythic),
            is_hatchable: is_truthy(&row.is_hatchable),
            stage: parse_int::<u32>(&row.evolution_stage),
            quantity_required: parse_int::<i64>(&row.quantity_required),
            stats: BaseStats {
                hp: parse_int(&row.hp),
                attack: parse_int(&row.attack),
                defense: parse_int(&row.defense),
                sp_attack: parse_int(&row.sp_attack),
                sp_defense: parse_int(&row.sp_defense),
                speed: parse_int(&row.speed),
            },
            physical: Physical {
                height: parse_float(&row.height),
                weight: parse_float(&row.weight),
            },
            pokedex_entry: row.pokedex_entry.trim().to_string(),
            form,
            image,
            count: 0,
            owned: false,
        }
    }

    /// Record how many of this species the user holds.
    pub fn set_count(&mut self, count: i64) {
        self.count = count;
        self.owned = count > 0;
    }

    pub fn stage_label(&self) -> StageLabel {
        StageLabel::from(self.stage)
    }

    /// Legendary and mythic species share one progress bucket.
    pub fn is_legendary_or_mythic(&self) -> bool {
        self.is_legendary || self.is_mythic
    }
}
