use clap::{Parser, Subcommand};

/// CLI arguments for factdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "factdb",
    version,
    about = "CLI for browsing, comparing and quizzing the factdb-core country database"
)]
pub struct CliArgs {
    /// Path to the input dataset (default: the bundled countries.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List countries, optionally filtered by a name substring
    Countries {
        /// Substring to filter on (case- and accent-insensitive)
        query: Option<String>,
    },

    /// Show the details for a single country
    Country {
        /// Country name (case- and accent-insensitive)
        name: String,

        /// Emit the record as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the states/provinces of a country
    States {
        /// Country name
        name: String,
    },

    /// Compare two countries side by side
    Compare {
        first: String,
        second: String,
    },

    /// Rank countries by a numeric field
    Top {
        /// "population" or "area"
        field: String,

        /// How many entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Count countries per region
    Regions,

    /// Generate a multiple-choice geography quiz
    Quiz {
        /// "easy" (10 questions), "medium" (15) or "hard" (20)
        #[arg(short, long, default_value = "easy")]
        difficulty: String,

        /// Seed for a reproducible quiz
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show recently viewed countries
    Popular,

    /// Write a binary cache of the dataset for faster loads
    Cache {
        /// Output path (default: countries.bin next to the dataset)
        output: Option<String>,
    },
}
