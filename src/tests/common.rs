use crate::config::ReportConfig;
use crate::species::Species;
use schema::{BaseStats, CatalogRow, Physical};

/// A builder for creating test species with common defaults.
///
/// Defaults: line id is the lowercased name, stage 0, generation 1, type Normal, rarity common,
/// nothing owned.
///
/// # Example
/// ```ignore
/// let pikachu = SpeciesBuilder::new("Pikachu", 25)
///     .line("pichu")
///     .stage(2)
///     .count(3)
///     .build();
/// ```
pub struct SpeciesBuilder {
    species: Species,
}

impl SpeciesBuilder {
    /// Creates a new builder for a given name and dex number.
    pub fn new(name: &str, pokedex_number: u32) -> Self {
        let key = name.to_lowercase();
        Self {
            species: Species {
                evolution_line_id: key.clone(),
                key,
                name: name.to_string(),
                pokedex_number,
                primary_type: "Normal".to_string(),
                secondary_type: None,
                generation: 1,
                region: "Unknown".to_string(),
                rarity: "common".to_string(),
                is_legendary: false,
                is_mythic: false,
                is_hatchable: false,
                stage: 0,
                quantity_required: 0,
                stats: BaseStats::default(),
                physical: Physical::default(),
                pokedex_entry: String::new(),
                form: None,
                image: ReportConfig::default().image_url(pokedex_number, None),
                count: 0,
                owned: false,
            },
        }
    }

    pub fn line(mut self, line_id: &str) -> Self {
        self.species.evolution_line_id = line_id.to_string();
        self
    }

    pub fn stage(mut self, stage: u32) -> Self {
        self.species.stage = stage;
        self
    }

    pub fn count(mut self, count: i64) -> Self {
        self.species.set_count(count);
        self
    }

    pub fn generation(mut self, generation: i32) -> Self {
        self.species.generation = generation;
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.species.region = region.to_string();
        self
    }

    pub fn types(mut self, primary: &str, secondary: Option<&str>) -> Self {
        self.species.primary_type = primary.to_string();
        self.species.secondary_type = secondary.map(str::to_string);
        self
    }

    pub fn rarity(mut self, rarity: &str) -> Self {
        self.species.rarity = rarity.to_string();
        self
    }

    pub fn legendary(mut self) -> Self {
        self.species.is_legendary = true;
        self
    }

    pub fn mythic(mut self) -> Self {
        self.species.is_mythic = true;
        self
    }

    /// Builds the `Species`.
    pub fn build(self) -> Species {
        self.species
    }
}

/// A catalog row with only the identifying cells filled in.
pub fn catalog_row(name: &str, number: &str, line: &str, stage: &str) -> CatalogRow {
    CatalogRow {
        name: name.to_string(),
        number: number.to_string(),
        pokedex_number: number
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string(),
        evolution_line_id: line.to_string(),
        evolution_stage: stage.to_string(),
        generation: "1".to_string(),
        region: "Kanto".to_string(),
        ..CatalogRow::default()
    }
}

/// A small Kanto catalog: the Bulbasaur line with a mega form, Eevee with two branches, the
/// Zubat line ending in a friendship evolution, Gastly's trade evolution, Onix's steel form
/// from another region, and Mewtwo.
pub fn kanto_catalog() -> Vec<CatalogRow> {
    let mut bulbasaur = catalog_row("Bulbasaur", "1", "bulbasaur", "1");
    bulbasaur.primary_type = "Grass".to_string();
    bulbasaur.secondary_type = "Poison".to_string();
    bulbasaur.evolution = "Ivysaur".to_string();
    bulbasaur.quantity_required = "25".to_string();
    bulbasaur.requirement = "25 Bulbasaur candies".to_string();
    bulbasaur.is_hatchable = "yes".to_string();

    let mut ivysaur = catalog_row("Ivysaur", "2", "bulbasaur", "2");
    ivysaur.primary_type = "Grass".to_string();
    ivysaur.secondary_type = "Poison".to_string();
    ivysaur.evolution = "Venusaur".to_string();
    ivysaur.quantity_required = "100".to_string();
    ivysaur.requirement = "100 Bulbasaur candies".to_string();

    let mut venusaur = catalog_row("Venusaur", "3", "bulbasaur", "3");
    venusaur.primary_type = "Grass".to_string();
    venusaur.secondary_type = "Poison".to_string();
    venusaur.evolution = "Mega Venusaur".to_string();
    venusaur.quantity_required = "0".to_string();
    venusaur.requirement = "Venusaurite mega stone".to_string();
    venusaur.item_required = "Yes".to_string();

    let mut mega_venusaur = catalog_row("Mega Venusaur", "3", "bulbasaur", "4");
    mega_venusaur.primary_type = "Grass".to_string();
    mega_venusaur.secondary_type = "Poison".to_string();
    mega_venusaur.form = "Mega".to_string();

    let mut eevee = catalog_row("Eevee", "133", "eevee", "1");
    eevee.evolution = "Vaporeon".to_string();
    eevee.quantity_required = "25".to_string();
    eevee.requirement = "Water Stone".to_string();
    eevee.item_required = "yes".to_string();

    // Branch rows: not species themselves, but they add Eevee's other paths.
    let mut eevee_to_espeon = catalog_row("Eevee", "133.1", "eevee", "1");
    eevee_to_espeon.evolution = "Espeon".to_string();
    eevee_to_espeon.quantity_required = "10".to_string();
    eevee_to_espeon.requirement = "High friendship during the day".to_string();

    let mut vaporeon = catalog_row("Vaporeon", "134", "eevee", "2");
    vaporeon.primary_type = "Water".to_string();

    let mut espeon = catalog_row("Espeon", "196", "eevee", "2");
    espeon.primary_type = "Psychic".to_string();
    espeon.generation = "2".to_string();
    espeon.region = "Johto".to_string();

    let mut zubat = catalog_row("Zubat", "41", "zubat", "1");
    zubat.primary_type = "Poison".to_string();
    zubat.secondary_type = "Flying".to_string();
    zubat.evolution = "Golbat".to_string();
    zubat.quantity_required = "50".to_string();
    zubat.requirement = "50 Zubat candies".to_string();

    let mut golbat = catalog_row("Golbat", "42", "zubat", "2");
    golbat.primary_type = "Poison".to_string();
    golbat.secondary_type = "Flying".to_string();
    golbat.evolution = "Crobat".to_string();
    golbat.requirement = "Max Friendship".to_string();

    let mut crobat = catalog_row("Crobat", "169", "zubat", "3");
    crobat.primary_type = "Poison".to_string();
    crobat.secondary_type = "Flying".to_string();
    crobat.generation = "2".to_string();
    crobat.region = "Johto".to_string();

    let mut gastly = catalog_row("Gastly", "92", "gastly", "1");
    gastly.primary_type = "Ghost".to_string();
    gastly.secondary_type = "Poison".to_string();
    gastly.evolution = "Haunter".to_string();
    gastly.quantity_required = "25".to_string();

    let mut haunter = catalog_row("Haunter", "93", "gastly", "2");
    haunter.primary_type = "Ghost".to_string();
    haunter.secondary_type = "Poison".to_string();
    haunter.evolution = "Gengar".to_string();
    haunter.requirement = "Trade".to_string();

    let mut gengar = catalog_row("Gengar", "94", "gastly", "3");
    gengar.primary_type = "Ghost".to_string();
    gengar.secondary_type = "Poison".to_string();

    let mut onix = catalog_row("Onix", "95", "onix", "1");
    onix.primary_type = "Rock".to_string();
    onix.secondary_type = "Ground".to_string();
    onix.evolution = "Steelix".to_string();
    onix.quantity_required = "50".to_string();
    onix.requirement = "Metal Coat and 50 candies".to_string();
    onix.item_required = "YES".to_string();

    let mut steelix = catalog_row("Steelix", "208", "onix", "2");
    steelix.primary_type = "Steel".to_string();
    steelix.secondary_type = "Ground".to_string();
    steelix.generation = "2".to_string();
    steelix.region = "Johto".to_string();

    let mut mewtwo = catalog_row("Mewtwo", "150", "mewtwo", "");
    mewtwo.primary_type = "Psychic".to_string();
    mewtwo.secondary_type = "null".to_string();
    mewtwo.rarity = "Legendary".to_string();
    mewtwo.is_legendary = "TRUE".to_string();
    mewtwo.hp = "106".to_string();
    mewtwo.attack = "110".to_string();
    mewtwo.height = "2.0".to_string();
    mewtwo.weight = "122.0".to_string();
    mewtwo.pokedex_entry = "It was created by a scientist.".to_string();

    vec![
        bulbasaur,
        ivysaur,
        venusaur,
        mega_venusaur,
        eevee,
        eevee_to_espeon,
        vaporeon,
        espeon,
        zubat,
        golbat,
        crobat,
        gastly,
        haunter,
        gengar,
        onix,
        steelix,
        mewtwo,
    ]
}
