//! End-to-end checks against the bundled dataset.

use factdb_core::quiz::{self, Difficulty};
use factdb_core::{DefaultFactDb, NumericField, RecentlyViewed};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bundled() -> DefaultFactDb {
    DefaultFactDb::load().expect("bundled dataset should load")
}

#[test]
fn bundled_dataset_loads_and_counts() {
    let db = bundled();
    let stats = db.stats();
    assert_eq!(stats.countries, 16);
    assert_eq!(stats.states, 30);
    assert!(stats.total_population > 0.0);
}

#[test]
fn lookups_are_fold_insensitive() {
    let db = bundled();
    assert!(db.find_country("germany").is_some());
    assert!(db.find_country("BRASIL").is_none());
    assert_eq!(db.find_countries_by_substring("united").len(), 2);

    let brazil = db.find_country("Brazil").unwrap();
    assert!(brazil.states().iter().any(|s| s.name() == "São Paulo"));
}

#[test]
fn area_extremes_come_from_extracted_magnitudes() {
    let db = bundled();
    let stats = db.stats();
    assert_eq!(stats.largest_by_area.as_deref(), Some("Canada"));
    assert_eq!(stats.smallest_by_area.as_deref(), Some("Vatican City"));

    let top = db.top_by(NumericField::Area, 3);
    let names: Vec<&str> = top.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Canada", "United States", "Brazil"]);
}

#[test]
fn blank_regions_stay_out_of_the_grouping() {
    let db = bundled();
    let groups = db.group_by_region();
    assert_eq!(groups.len(), 5);
    let counted: usize = groups.values().map(|v| v.len()).sum();
    // Western Sahara has no region and is not counted.
    assert_eq!(counted, 15);
}

#[test]
fn malformed_languages_cell_degrades_to_empty() {
    let db = bundled();
    // "Arabic, Spanish" is not a serialized list.
    let ws = db.find_country("Western Sahara").unwrap();
    assert!(ws.languages().is_empty());

    let india = db.find_country("India").unwrap();
    assert_eq!(india.languages(), ["Hindi", "English"]);
}

#[test]
fn quiz_over_bundled_dataset_fills_the_batch() {
    let db = bundled();
    let mut rng = StdRng::seed_from_u64(2024);
    let questions = quiz::generate_quiz(&db, Difficulty::Easy, &mut rng);
    assert_eq!(questions.len(), 10);
    for q in &questions {
        assert_eq!(q.options.len(), 4);
        assert!(q.options.contains(&q.answer));
    }
}

#[test]
fn popular_view_follows_the_session_list() {
    let db = bundled();
    let mut recent = RecentlyViewed::new();
    recent.record("Japan");
    recent.record("Atlantis");
    recent.record("Switzerland");

    let popular = db.popular(&recent);
    let names: Vec<&str> = popular.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Switzerland", "Japan"]);
}
