use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The eighteen elemental types.
///
/// Declaration order is the chart order: `PokemonType::iter()` walks the types in exactly this
/// sequence, and every matchup list built from the chart inherits it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// How a single defending type reacts to incoming attack types.
///
/// The three lists are mutually exclusive for any one defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefenseProfile {
    pub weak: &'static [PokemonType],
    pub resist: &'static [PokemonType],
    pub immune: &'static [PokemonType],
}

impl PokemonType {
    /// Chart row for this type when it is on the receiving end of an attack.
    pub const fn defense_profile(self) -> DefenseProfile {
        use PokemonType::*;

        match self {
            Normal => DefenseProfile {
                weak: &[Fighting],
                resist: &[],
                immune: &[Ghost],
            },
            Fire => DefenseProfile {
                weak: &[Water, Ground, Rock],
                resist: &[Fire, Grass, Ice, Bug, Steel, Fairy],
                immune: &[],
            },
            Water => DefenseProfile {
                weak: &[Electric, Grass],
                resist: &[Fire, Water, Ice, Steel],
                immune: &[],
            },
            Electric => DefenseProfile {
                weak: &[Ground],
                resist: &[Electric, Flying, Steel],
                immune: &[],
            },
            Grass => DefenseProfile {
                weak: &[Fire, Ice, Poison, Flying, Bug],
                resist: &[Water, Electric, Grass, Ground],
                immune: &[],
            },
            Ice => DefenseProfile {
                weak: &[Fire, Fighting, Rock, Steel],
                resist: &[Ice],
                immune: &[],
            },
            Fighting => DefenseProfile {
                weak: &[Flying, Psychic, Fairy],
                resist: &[Bug, Rock, Dark],
                immune: &[],
            },
            Poison => DefenseProfile {
                weak: &[Ground, Psychic],
                resist: &[Grass, Fighting, Poison, Bug, Fairy],
                immune: &[],
            },
            Ground => DefenseProfile {
                weak: &[Water, Grass, Ice],
                resist: &[Poison, Rock],
                immune: &[Electric],
            },
            Flying => DefenseProfile {
                weak: &[Electric, Ice, Rock],
                resist: &[Grass, Fighting, Bug],
                immune: &[Ground],
            },
            Psychic => DefenseProfile {
                weak: &[Bug, Ghost, Dark],
                resist: &[Fighting, Psychic],
                immune: &[],
            },
            Bug => DefenseProfile {
                weak: &[Fire, Flying, Rock],
                resist: &[Grass, Fighting, Ground],
                immune: &[],
            },
            Rock => DefenseProfile {
                weak: &[Water, Grass, Fighting, Ground, Steel],
                resist: &[Normal, Fire, Poison, Flying],
                immune: &[],
            },
            Ghost => DefenseProfile {
                weak: &[Ghost, Dark],
                resist: &[Poison, Bug],
                immune: &[Normal, Fighting],
            },
            Dragon => DefenseProfile {
                weak: &[Ice, Dragon, Fairy],
                resist: &[Fire, Water, Electric, Grass],
                immune: &[],
            },
            Dark => DefenseProfile {
                weak: &[Fighting, Bug, Fairy],
                resist: &[Ghost, Dark],
                immune: &[Psychic],
            },
            Steel => DefenseProfile {
                weak: &[Fire, Fighting, Ground],
                resist: &[
                    Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy,
                ],
                immune: &[Poison],
            },
            Fairy => DefenseProfile {
                weak: &[Poison, Steel],
                resist: &[Fighting, Bug, Dark],
                immune: &[Dragon],
            },
        }
    }

    /// Calculate type effectiveness multiplier for attacking type vs defending type
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f32 {
        let profile = defending.defense_profile();

        if profile.weak.contains(&attacking) {
            2.0
        } else if profile.resist.contains(&attacking) {
            0.5
        } else if profile.immune.contains(&attacking) {
            0.0
        } else {
            1.0
        }
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) == 0.0
    }
}
