// crates/factdb-core/src/quiz.rs

//! Multiple-choice quiz generation over the record set.
//!
//! Generation is stateless: each call produces one batch of independent
//! questions and nothing is persisted. The random source is an explicit
//! parameter so callers (and tests) control determinism; the CLI passes
//! `rand::rng()` or a seeded `StdRng`.

use crate::model::{Country, FactDb};
use crate::numeric::{format_area, format_count};
use crate::traits::FactBackend;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;

/// Fixed ratios used to synthesize decoys for numeric categories.
const DECOY_RATIOS: [f64; 3] = [0.5, 2.0, 0.8];

/// Difficulty tier; controls how many questions a batch asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn question_count(self) -> usize {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 20,
        }
    }
}

/// Question category. Eligibility of a record depends on the category:
/// the required fields must be non-empty, and numeric categories require
/// a positive extracted magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Capital,
    Region,
    Currency,
    Flag,
    Population,
    Area,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Capital,
        Category::Region,
        Category::Currency,
        Category::Flag,
        Category::Population,
        Category::Area,
    ];

    fn is_numeric(self) -> bool {
        matches!(self, Self::Population | Self::Area)
    }

    fn eligible<B: FactBackend>(self, country: &Country<B>) -> bool {
        match self {
            Self::Capital => country.capital().is_some_and(|c| !c.is_empty()),
            Self::Region => !country.region().is_empty(),
            Self::Currency => !country.currency().is_empty(),
            Self::Flag => !country.flag().is_empty(),
            Self::Population => country.population().magnitude() > 0.0,
            Self::Area => country.area().magnitude() > 0.0,
        }
    }

    fn prompt<B: FactBackend>(self, country: &Country<B>) -> String {
        match self {
            Self::Capital => format!("What is the capital of {}?", country.name()),
            Self::Region => format!("Which region is {} in?", country.name()),
            Self::Currency => format!("What is the currency of {}?", country.name()),
            Self::Flag => format!("Which country does the flag {} belong to?", country.flag()),
            Self::Population => format!("What is the population of {}?", country.name()),
            Self::Area => format!("What is the area of {}?", country.name()),
        }
    }

    /// The option text this record contributes, as both correct answer and
    /// decoy value.
    fn value<B: FactBackend>(self, country: &Country<B>) -> String {
        match self {
            Self::Capital => country.capital().unwrap_or_default().to_string(),
            Self::Region => country.region().to_string(),
            Self::Currency => country.currency().to_string(),
            Self::Flag => country.name().to_string(),
            Self::Population => format_count(country.population().magnitude()),
            Self::Area => format_area(country.area().magnitude()),
        }
    }

    fn format_magnitude(self, magnitude: f64) -> String {
        match self {
            Self::Area => format_area(magnitude),
            _ => format_count(magnitude),
        }
    }
}

/// One generated question: a prompt, the correct answer, and the four
/// display options (the answer plus three decoys) in shuffled order.
#[derive(Clone, Debug, Serialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub answer: String,
    pub options: Vec<String>,
}

impl QuizQuestion {
    /// Index of the correct answer within the shuffled options.
    pub fn answer_position(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.answer)
            .unwrap_or(0)
    }
}

/// Generate one batch of questions for the given difficulty tier.
///
/// Each slot picks a category and a subject at random; slots whose
/// subject cannot be given three distinct decoys are skipped rather than
/// padded, so a sparse record set may yield fewer questions than the
/// tier asks for.
pub fn generate_quiz<B: FactBackend, R: Rng + ?Sized>(
    db: &FactDb<B>,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let mut questions = Vec::with_capacity(difficulty.question_count());
    for _ in 0..difficulty.question_count() {
        let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
        if let Some(question) = generate_question(db, category, rng) {
            questions.push(question);
        }
    }
    questions
}

/// Generate a single question of the given category, or `None` when the
/// record set cannot support one.
pub fn generate_question<B: FactBackend, R: Rng + ?Sized>(
    db: &FactDb<B>,
    category: Category,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let eligible: Vec<&Country<B>> = db
        .countries()
        .iter()
        .filter(|c| category.eligible(c))
        .collect();

    let subject = *eligible.choose(rng)?;
    let answer = category.value(subject);

    let decoys = if category.is_numeric() {
        numeric_decoys(category, subject, &answer)
    } else {
        sampled_decoys(category, &eligible, subject, &answer, rng)
    };
    if decoys.len() < 3 {
        log::debug!(
            "skipping {category:?} question for {}: {} usable decoys",
            subject.name(),
            decoys.len()
        );
        return None;
    }

    let mut options = Vec::with_capacity(4);
    options.push(answer.clone());
    options.extend(decoys.into_iter().take(3));
    options.shuffle(rng);

    Some(QuizQuestion {
        prompt: category.prompt(subject),
        answer,
        options,
    })
}

/// Decoys drawn without replacement from other eligible records' values,
/// deduplicated and distinct from the correct answer.
fn sampled_decoys<B: FactBackend, R: Rng + ?Sized>(
    category: Category,
    eligible: &[&Country<B>],
    subject: &Country<B>,
    answer: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for country in eligible {
        if country.name() == subject.name() {
            continue;
        }
        let value = category.value(country);
        if value == answer || value.is_empty() || candidates.contains(&value) {
            continue;
        }
        candidates.push(value);
    }
    candidates.shuffle(rng);
    candidates.truncate(3);
    candidates
}

/// Decoys synthesized by scaling the correct magnitude by fixed ratios.
fn numeric_decoys<B: FactBackend>(
    category: Category,
    subject: &Country<B>,
    answer: &str,
) -> Vec<String> {
    let magnitude = match category {
        Category::Population => subject.population().magnitude(),
        Category::Area => subject.area().magnitude(),
        _ => return Vec::new(),
    };

    let mut decoys = Vec::with_capacity(DECOY_RATIOS.len());
    for ratio in DECOY_RATIOS {
        let value = category.format_magnitude(magnitude * ratio);
        if value != answer && !decoys.contains(&value) {
            decoys.push(value);
        }
    }
    decoys
}
