use crate::species::is_null_type;
use schema::PokemonType;
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// One attacking type whose damage against the defender is not neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeMatchup {
    #[serde(rename = "type")]
    pub attacking_type: PokemonType,
    pub multiplier: f32,
}

/// Non-neutral matchups for a defender, both lists in chart order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeMatchups {
    /// Attacking types that deal reduced damage (multiplier below 1, including immunities).
    pub strengths: Vec<TypeMatchup>,
    /// Attacking types that deal increased damage.
    pub weaknesses: Vec<TypeMatchup>,
}

/// Parse a defender type cell. Null sentinels and unrecognised names yield `None`.
fn defending_type(raw: &str) -> Option<PokemonType> {
    if is_null_type(raw) {
        return None;
    }
    let parsed = PokemonType::from_str(raw.trim()).ok();
    if parsed.is_none() {
        log::debug!("ignoring unrecognised type {raw:?}");
    }
    parsed
}

/// Combined multiplier of `attacking` against every given defender type.
pub fn combined_multiplier(attacking: PokemonType, defenders: &[PokemonType]) -> f32 {
    defenders
        .iter()
        .map(|&defending| PokemonType::type_effectiveness(attacking, defending))
        .product()
}

/// Strengths and weaknesses of a (primary, optional secondary) type pair.
pub fn calculate_matchups(primary: &str, secondary: Option<&str>) -> TypeMatchups {
    let defenders: Vec<PokemonType> = std::iter::once(primary)
        .chain(secondary)
        .filter_map(defending_type)
        .collect();

    let mut matchups = TypeMatchups::default();
    if defenders.is_empty() {
        return matchups;
    }

    for attacking_type in PokemonType::iter() {
        let multiplier = combined_multiplier(attacking_type, &defenders);
        let matchup = TypeMatchup {
            attacking_type,
            multiplier,
        };
        if multiplier < 1.0 {
            matchups.strengths.push(matchup);
        } else if multiplier > 1.0 {
            matchups.weaknesses.push(matchup);
        }
    }

    matchups
}
