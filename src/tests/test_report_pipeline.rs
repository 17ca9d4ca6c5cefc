use crate::config::ReportConfig;
use crate::enrichment::PokedexEntry;
use crate::report::{build_report, Report};
use crate::snapshot::TrainerSnapshot;
use crate::species::StageLabel;
use crate::tests::common::kanto_catalog;
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn ash() -> TrainerSnapshot {
    TrainerSnapshot {
        username: " Ash ".to_string(),
        avatar: "https://img.example/ash.png".to_string(),
        pokedex: "Bulbasaur x30, Ivysaur x1, Venusaur x2, Mega Venusaur x1, Eevee x12, \
                  Gastly x24, Zubat x3, mewtwo x1, Crobat x1, Golbat x1"
            .to_string(),
        inventory: "Poke Ball thrown x10, Poke Ball success x6, Ultra Ball thrown x2, \
                    Ultra Ball success x2, Evolution x4, Trade x1, Eggs Hatched x2"
            .to_string(),
        bag: "Water Stone x2, Potion x5".to_string(),
        friendship: "ZUBAT x330, eevee x55".to_string(),
        watch_hours: "120".to_string(),
        follow_age: "2 years".to_string(),
        sub_age: String::new(),
        commands_run: "87".to_string(),
        companion_pets: "7".to_string(),
        companion_feeds: "3".to_string(),
    }
}

fn run(snapshot: &TrainerSnapshot, companions: Option<&str>) -> Report {
    build_report(
        &kanto_catalog(),
        snapshot,
        companions,
        &ReportConfig::default(),
        fixed_time(),
    )
}

fn entry<'a>(report: &'a Report, name: &str) -> &'a PokedexEntry {
    report
        .pokemon
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or_else(|| panic!("{name} missing from report"))
}

#[test]
fn test_only_integral_rows_become_species() {
    let report = run(&ash(), None);

    assert_eq!(report.pokemon.len(), 16);
    assert_eq!(
        report.pokemon.iter().filter(|e| e.name == "Eevee").count(),
        1
    );
    // The branch row still contributes Eevee's second evolution path.
    assert_eq!(entry(&report, "Eevee").evolves_to, vec!["Vaporeon", "Espeon"]);
}

#[test]
fn test_pokemon_are_sorted_by_dex_number() {
    let report = run(&ash(), None);
    let order: Vec<(u32, &str)> = report
        .pokemon
        .iter()
        .take(5)
        .map(|e| (e.pokedex_number, e.name.as_str()))
        .collect();

    assert_eq!(
        order,
        vec![
            (1, "Bulbasaur"),
            (2, "Ivysaur"),
            (3, "Mega Venusaur"),
            (3, "Venusaur"),
            (41, "Zubat"),
        ]
    );
    assert!(report
        .pokemon
        .windows(2)
        .all(|pair| pair[0].pokedex_number <= pair[1].pokedex_number));
}

#[test]
fn test_evolvable_counts_agree_with_entries() {
    let report = run(&ash(), None);

    assert!(entry(&report, "Bulbasaur").evolvable_now);
    assert_eq!(entry(&report, "Bulbasaur").quantity_required, 25);
    // Cheapest of Eevee's two paths is the friendship one at 10.
    assert!(entry(&report, "Eevee").evolvable_now);
    assert_eq!(entry(&report, "Eevee").quantity_required, 10);
    assert!(!entry(&report, "Gastly").evolvable_now);
    assert!(!entry(&report, "Venusaur").evolvable_now);
    assert!(!entry(&report, "Golbat").evolvable_now);

    let flagged = report.pokemon.iter().filter(|e| e.evolvable_now).count() as u32;
    assert_eq!(report.trainer_stats.evolution.evolvable_owned, flagged);
    assert_eq!(flagged, 2);
}

#[test]
fn test_line_completion() {
    let report = run(&ash(), None);
    let evolution = &report.trainer_stats.evolution;

    assert_eq!(evolution.total_lines, 6);
    assert_eq!(evolution.lines_completed, 3);
    assert!(entry(&report, "Ivysaur").line_complete);
    assert!(entry(&report, "Crobat").line_complete);
    assert!(entry(&report, "Mewtwo").line_complete);
    assert!(!entry(&report, "Eevee").line_complete);
    assert!(!entry(&report, "Steelix").line_complete);

    let kanto = &report.trainer_stats.generation_progress[&1];
    assert_eq!(kanto.total_lines, 6);
    assert_eq!(kanto.lines_completed, 3);
}

#[test]
fn test_stage_breakdown_includes_mega() {
    let report = run(&ash(), None);
    let evolution = &report.trainer_stats.evolution;

    assert_eq!(evolution.evolved_available, 15);
    assert_eq!(evolution.evolved_owned, 9);
    assert_eq!(evolution.by_stage["1"].owned, 4);
    assert_eq!(evolution.by_stage["1"].total, 5);
    assert_eq!(evolution.by_stage["2"].owned, 2);
    assert_eq!(evolution.by_stage["2"].total, 6);
    assert_eq!(evolution.by_stage["3"].total, 3);
    assert_eq!(evolution.by_stage["mega"].owned, 1);
    assert!(!evolution.by_stage.contains_key("4"));

    let mega = entry(&report, "Mega Venusaur");
    assert_eq!(mega.evolution_stage, StageLabel::Mega);
    assert_eq!(mega.evolves_from.as_deref(), Some("Venusaur"));
    assert!(mega.item_required);
    assert_eq!(mega.form.as_deref(), Some("Mega"));
}

#[test]
fn test_collection_progress() {
    let report = run(&ash(), None);
    let stats = &report.trainer_stats;

    assert_eq!(stats.pokedex.total_available, 16);
    assert_eq!(stats.pokedex.unique_owned, 10);
    assert_eq!(stats.pokedex.total_owned, 76);
    assert_eq!(stats.pokedex.completion_percent, 62.5);

    let johto = &stats.generation_progress[&2];
    assert_eq!(johto.region, "Johto");
    assert_eq!((johto.owned, johto.total), (1, 3));
    assert_eq!(johto.completion_percent, 33.33);
    assert_eq!(stats.generation_progress[&1].completion_percent, 69.23);

    assert_eq!(stats.legendary.owned, 1);
    assert_eq!(stats.legendary.completion_percent, 100.0);
    assert_eq!(stats.hatchable.total, 1);
    assert_eq!(stats.rarity["legendary"].total, 1);
    assert_eq!(stats.rarity["common"].total, 15);
    assert_eq!(stats.types["grass"].owned, 4);
}

#[test]
fn test_requirement_flags_come_from_incoming_transition() {
    let report = run(&ash(), None);

    let vaporeon = entry(&report, "Vaporeon");
    assert!(vaporeon.requires_stone);
    assert!(vaporeon.item_required);
    assert_eq!(vaporeon.evolves_from.as_deref(), Some("Eevee"));

    let gengar = entry(&report, "Gengar");
    assert!(gengar.requires_trade);
    assert!(!gengar.requires_stone);

    let steelix = entry(&report, "Steelix");
    assert!(steelix.item_required);
    assert!(!steelix.requires_stone);
}

#[test]
fn test_friendship_progress_per_line() {
    let report = run(&ash(), None);

    let crobat = entry(&report, "Crobat");
    assert_eq!(crobat.friendship_points, 330);
    assert_eq!(crobat.friendship_required, Some(220));
    assert_eq!(crobat.friendship_progress_percent, Some(100.0));

    let espeon = entry(&report, "Espeon");
    assert_eq!(espeon.friendship_points, 55);
    assert_eq!(espeon.friendship_progress_percent, Some(25.0));

    assert_eq!(entry(&report, "Zubat").friendship_required, None);
    assert_eq!(report.trainer_stats.friendship.total_points, 385);
}

#[test]
fn test_inventory_sections() {
    let report = run(&ash(), None);
    let stats = &report.trainer_stats;

    assert_eq!(stats.pokeballs.thrown, 12);
    assert_eq!(stats.pokeballs.success, 8);
    assert_eq!(stats.pokeballs.accuracy_percent, 66.67);
    assert_eq!(stats.pokeballs.by_ball["ultra ball"].accuracy_percent, 100.0);
    assert_eq!(stats.activity.evolutions, 4);
    assert_eq!(stats.activity.trades, 1);
    assert_eq!(stats.activity.eggs_hatched, 2);
    assert_eq!(stats.bag.total_items, 7);
    assert_eq!(stats.journey.watch_hours, 120);
    assert_eq!(stats.journey.sub_age, "Not Subscribed");
}

#[test]
fn test_companion_is_first_dex_member_of_assigned_line() {
    let report = run(&ash(), Some("misty 0 onix 0\nash 0 zubat 0\n"));
    let companion = report.companion.expect("ash has a companion");

    assert_eq!(companion.name, "Zubat");
    assert_eq!(companion.count, 3);
    assert_eq!(companion.friendship_points, 330);
    assert_eq!(companion.friendship_requirement, None);
    assert_eq!(companion.pets, 7);
    assert_eq!(companion.feeds, 3);
    assert_eq!(report.user.username, "Ash");
}

#[test]
fn test_no_companion_without_assignment() {
    assert_eq!(run(&ash(), Some("misty 0 onix 0")).companion, None);
    assert_eq!(run(&ash(), None).companion, None);
}

#[test]
fn test_empty_catalog_still_reports() {
    let report = build_report(
        &[],
        &ash(),
        None,
        &ReportConfig::default(),
        fixed_time(),
    );

    assert!(report.pokemon.is_empty());
    assert_eq!(report.trainer_stats.pokedex.total_available, 0);
    assert_eq!(report.trainer_stats.pokedex.completion_percent, 0.0);
    assert!(report.trainer_stats.generation_progress.is_empty());
    assert_eq!(report.trainer_stats.pokeballs.thrown, 12);
    assert_eq!(report.updated_at, fixed_time());
}

#[test]
fn test_empty_snapshot_owns_nothing() {
    let report = run(&TrainerSnapshot::default(), Some("ash 0 zubat 0"));

    assert!(report.pokemon.iter().all(|entry| !entry.owned && entry.count == 0));
    assert!(report.pokemon.iter().all(|entry| !entry.evolvable_now));
    assert_eq!(report.trainer_stats.evolution.lines_completed, 0);
    assert_eq!(report.trainer_stats.journey.follow_age, "Unknown");
    assert_eq!(report.companion, None);
}
