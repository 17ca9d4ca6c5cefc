// Pokedex Progress Schema - Shared type definitions
// This crate holds the raw catalog record and the static type chart shared between the
// report engine and anything that produces or consumes catalog data.

// Re-export the main types
pub use pokemon_types::*;
pub use species_data::*;

pub mod pokemon_types;
pub mod species_data;
