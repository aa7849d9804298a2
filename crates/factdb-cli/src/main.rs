//! factdb-cli — Command-line interface for factdb-core
//!
//! This binary provides a simple way to browse the bundled country-facts
//! database from your terminal. It supports printing aggregate statistics,
//! listing and searching countries, looking up a specific country, listing
//! its states, comparing two countries, ranking by population or area, and
//! generating multiple-choice geography quizzes.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ factdb-cli stats
//!
//! - List all countries (optionally filtered by a substring)
//!   $ factdb-cli countries
//!   $ factdb-cli countries united
//!
//! - Show details for a country by name (case- and accent-insensitive)
//!   $ factdb-cli country germany
//!   $ factdb-cli country "côte d'ivoire" --json
//!
//! - Compare two countries side by side
//!   $ factdb-cli compare Japan France
//!
//! - Rank by a numeric field
//!   $ factdb-cli top area -n 5
//!
//! - Take a quiz (seedable for reproducibility)
//!   $ factdb-cli quiz --difficulty hard --seed 7
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the JSON dataset bundled with the
//! `factdb-core` crate. Use `--input <path>` to point at a custom dataset
//! (`.json`, `.json.gz`, or a `.bin` cache written by `factdb-cli cache`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use factdb_core::api::CountryView;
use factdb_core::quiz::{self, Difficulty};
use factdb_core::{Country, FactDb, NumericField, RecentlyViewed, StandardBackend};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let args = CliArgs::parse();

    let db = match &args.input {
        Some(path) => FactDb::<StandardBackend>::load_from_path(path)?,
        None => FactDb::<StandardBackend>::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  States/Provinces: {}", stats.states);
            println!(
                "  Total population: {}",
                factdb_core::numeric::format_count(stats.total_population)
            );
            let population = db.field_stats(NumericField::Population);
            println!(
                "  Average population: {}",
                factdb_core::numeric::format_count(population.mean)
            );
            if let Some(name) = &stats.largest_by_area {
                println!("  Largest by area: {name}");
            }
            if let Some(name) = &stats.smallest_by_area {
                println!("  Smallest by area: {name}");
            }
            println!("  Regions: {}", stats.region_counts.len());
        }

        Commands::Countries { query } => {
            let listed: Vec<&Country<StandardBackend>> = match &query {
                Some(q) => db.find_countries_by_substring(q),
                None => db.countries().iter().collect(),
            };
            if listed.is_empty() {
                println!("No countries found matching: {}", query.unwrap_or_default());
            } else {
                for c in listed {
                    println!("{} {}", c.flag(), c.name());
                }
            }
        }

        Commands::Country { name, json } => match db.find_country(&name) {
            Some(c) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&CountryView::from(c))?);
                } else {
                    print_country(c);
                }
                let path = session_path();
                let mut recent = load_session(&path);
                recent.record(c.name());
                save_session(&path, &recent);
            }
            None => eprintln!("No country found for: {name}"),
        },

        Commands::States { name } => match db.find_country(&name) {
            Some(c) => {
                if c.states().is_empty() {
                    println!("No states recorded for {}", c.name());
                } else {
                    println!("States in {}:", c.name());
                    for s in c.states() {
                        println!("- {}", s.name());
                    }
                }
            }
            None => eprintln!("No country found for: {name}"),
        },

        Commands::Compare { first, second } => {
            let Some(a) = db.find_country(&first) else {
                eprintln!("No country found for: {first}");
                return Ok(());
            };
            let Some(b) = db.find_country(&second) else {
                eprintln!("No country found for: {second}");
                return Ok(());
            };
            print_comparison(a, b);
        }

        Commands::Top { field, limit } => {
            let field = parse_field(&field)?;
            for (i, c) in db.top_by(field, limit).iter().enumerate() {
                let value = match field {
                    NumericField::Population => c.population().display_count(),
                    NumericField::Area => c.area().display_area(),
                };
                println!("{:>2}. {} — {}", i + 1, c.name(), value);
            }
        }

        Commands::Regions => {
            for (region, members) in db.group_by_region() {
                println!("{region}: {}", members.len());
            }
        }

        Commands::Quiz { difficulty, seed } => {
            let difficulty = parse_difficulty(&difficulty)?;
            let questions = match seed {
                Some(s) => quiz::generate_quiz(&db, difficulty, &mut StdRng::seed_from_u64(s)),
                None => quiz::generate_quiz(&db, difficulty, &mut rand::rng()),
            };
            if questions.is_empty() {
                println!("Not enough data to generate a quiz");
                return Ok(());
            }
            for (i, q) in questions.iter().enumerate() {
                println!("{}. {}", i + 1, q.prompt);
                for (j, option) in q.options.iter().enumerate() {
                    println!("   {}) {}", option_letter(j), option);
                }
            }
            println!();
            let key: Vec<String> = questions
                .iter()
                .enumerate()
                .map(|(i, q)| format!("{}{}", i + 1, option_letter(q.answer_position())))
                .collect();
            println!("Answers: {}", key.join(" "));
        }

        Commands::Popular => {
            let recent = load_session(&session_path());
            if recent.is_empty() {
                println!("No countries viewed yet");
            } else {
                println!("Recently viewed:");
                for c in db.popular(&recent) {
                    println!("{} {}", c.flag(), c.name());
                }
            }
        }

        Commands::Cache { output } => {
            let path = output.map(PathBuf::from).unwrap_or_else(|| {
                FactDb::<StandardBackend>::default_data_dir().join("countries.bin")
            });
            fs::write(&path, db.to_bytes()?)?;
            println!("Wrote binary cache to {}", path.display());
        }
    }

    Ok(())
}

fn print_country(c: &Country<StandardBackend>) {
    println!("Country: {} {}", c.name(), c.flag());
    println!("Capital: {}", c.capital().unwrap_or("-"));
    println!("Region: {}", c.region());
    println!("Currency: {}", c.currency());
    println!("Government: {}", c.government());
    println!("Languages: {}", c.languages().join(", "));
    println!("Population: {}", c.population().display_count());
    println!("Area: {}", c.area().display_area());
    println!("States: {}", c.states().len());
}

fn print_comparison(a: &Country<StandardBackend>, b: &Country<StandardBackend>) {
    let row = |label: &str, left: String, right: String| {
        println!("{label:<12} {left:<32} {right}");
    };
    row("", a.name().to_string(), b.name().to_string());
    row("Region", a.region().to_string(), b.region().to_string());
    row(
        "Capital",
        a.capital().unwrap_or("-").to_string(),
        b.capital().unwrap_or("-").to_string(),
    );
    row("Currency", a.currency().to_string(), b.currency().to_string());
    row("Languages", a.languages().join(", "), b.languages().join(", "));
    row(
        "Population",
        a.population().display_count(),
        b.population().display_count(),
    );
    row("Area", a.area().display_area(), b.area().display_area());
    row(
        "States",
        a.states().len().to_string(),
        b.states().len().to_string(),
    );
}

fn parse_field(field: &str) -> anyhow::Result<NumericField> {
    match field.to_ascii_lowercase().as_str() {
        "population" | "pop" => Ok(NumericField::Population),
        "area" => Ok(NumericField::Area),
        other => bail!("unknown field '{other}' (expected 'population' or 'area')"),
    }
}

fn parse_difficulty(difficulty: &str) -> anyhow::Result<Difficulty> {
    match difficulty.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => bail!("unknown difficulty '{other}' (expected easy, medium or hard)"),
    }
}

fn option_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

// -----------------------------------------------------------------------
// Session file: the CLI analog of the visitor's "recently viewed" list.
// Unreadable or missing files degrade to an empty list; failures to
// persist are logged, never fatal.
// -----------------------------------------------------------------------

fn session_path() -> PathBuf {
    FactDb::<StandardBackend>::default_data_dir().join("recent.json")
}

fn load_session(path: &Path) -> RecentlyViewed {
    match fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable session file {}: {e}", path.display());
            RecentlyViewed::new()
        }),
        Err(_) => RecentlyViewed::new(),
    }
}

fn save_session(path: &Path, recent: &RecentlyViewed) {
    let rendered = match serde_json::to_string_pretty(recent) {
        Ok(rendered) => rendered,
        Err(e) => {
            log::warn!("could not serialize session: {e}");
            return;
        }
    };
    if let Err(e) = fs::write(path, rendered) {
        log::warn!("could not persist session file {}: {e}", path.display());
    }
}
