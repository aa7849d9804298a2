// crates/factdb-core/src/model.rs

use crate::numeric::LooseNumber;
use crate::raw::{CountriesRaw, RawNumber};
use crate::text::fold_key;
use crate::traits::{FactBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// Default backend: plain `String` + `f64`.
///
/// This backend is used by the convenient aliases [`StandardBackend`] and
/// [`DefaultFactDb`]. It provides the best ergonomics and is suitable for
/// most applications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

/// A state/province entry.
///
/// States are owned data nodes inside a [`Country`]; they have no
/// independent lifecycle and disappear with their country.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct State<B: FactBackend> {
    pub name: B::Str,
}

/// A country entry in the normalized database.
///
/// `name` is unique and is the external key used by all lookups. The two
/// numeric columns are loosely typed upstream and stay that way here, as
/// explicit [`LooseNumber`] cells.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country<B: FactBackend> {
    pub name: B::Str,
    pub flag: Option<B::Str>,
    pub capital: Option<B::Str>,
    pub region: Option<B::Str>,
    pub currency: Option<B::Str>,
    pub government: Option<B::Str>,

    /// Decoded from the dataset's serialized-list form at build time.
    pub languages: Vec<String>,

    pub population: LooseNumber<B>,
    pub area: LooseNumber<B>,

    pub states: Vec<State<B>>,
}

/// Top-level database structure.
///
/// Holds the list of countries and provides lookup helpers. Constructed by
/// the loader module from the bundled JSON dataset or a binary cache.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FactDb<B: FactBackend> {
    pub countries: Vec<Country<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultFactDb = FactDb<DefaultBackend>;
/// Convenient alias used in the CLI.
pub type StandardBackend = DefaultBackend;

impl<B: FactBackend> FactDb<B> {
    /// All countries in the database.
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    /// Total number of countries in the database.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Find a country by its unique name.
    ///
    /// The comparison is case-insensitive and accent-insensitive via
    /// [`fold_key`], so "curacao" finds "Curaçao".
    pub fn find_country(&self, name: &str) -> Option<&Country<B>> {
        self.countries.iter().find(|c| c.is_named(name))
    }

    /// Find all countries whose name *loosely matches* the given substring.
    ///
    /// This is the list-page search filter: case-insensitive,
    /// accent-insensitive, substring-based. An empty query matches nothing.
    pub fn find_countries_by_substring(&self, substr: &str) -> Vec<&Country<B>> {
        let q = fold_key(substr);
        if q.is_empty() {
            return Vec::new();
        }
        self.countries
            .iter()
            .filter(|c| fold_key(c.name()).contains(&q))
            .collect()
    }
}

impl<B: FactBackend> Country<B> {
    /// Country display name. Always non-empty, unique within the dataset.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Flag glyph, or an empty string when the dataset has none.
    pub fn flag(&self) -> &str {
        self.flag.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Capital city name, if provided by the dataset.
    pub fn capital(&self) -> Option<&str> {
        self.capital.as_ref().map(|s| s.as_ref())
    }

    /// Region/continent label (e.g. "Europe") or empty string if unknown.
    pub fn region(&self) -> &str {
        self.region.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Currency label, or empty string when not available.
    pub fn currency(&self) -> &str {
        self.currency.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Government type, or empty string when not available.
    pub fn government(&self) -> &str {
        self.government.as_ref().map(|s| s.as_ref()).unwrap_or("")
    }

    /// Ordered list of languages, already decoded from the stored form.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// The loosely-typed population cell.
    pub fn population(&self) -> &LooseNumber<B> {
        &self.population
    }

    /// The loosely-typed area cell.
    pub fn area(&self) -> &LooseNumber<B> {
        &self.area
    }

    /// Read-only slice of states/provinces belonging to this country.
    pub fn states(&self) -> &[State<B>] {
        &self.states
    }
}

impl<B: FactBackend> State<B> {
    /// State/province display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }
}

impl FactBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

impl<B: FactBackend> NameMatch for Country<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: FactBackend> NameMatch for State<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// Converts raw JSON data into a [`FactDb`] instance using the specified
/// backend.
///
/// Loose numeric cells become explicit [`LooseNumber`] states (empty text
/// normalizes to `Missing`), the languages cell is decoded to a native
/// list, and nested states are carried over in order.
pub fn build_factdb<B: FactBackend>(raw: CountriesRaw) -> FactDb<B> {
    let countries = raw
        .into_iter()
        .map(|c| {
            let states = c
                .states
                .into_iter()
                .map(|s| State::<B> {
                    name: B::str_from(&s.name),
                })
                .collect();

            Country::<B> {
                name: B::str_from(&c.name),
                flag: c.flag.as_deref().map(B::str_from),
                capital: c.capital.as_deref().map(B::str_from),
                region: c.region.as_deref().map(B::str_from),
                currency: c.currency.as_deref().map(B::str_from),
                government: c.government.as_deref().map(B::str_from),
                languages: c.languages.decode(),
                population: convert_number(c.population),
                area: convert_number(c.area),
                states,
            }
        })
        .collect();

    FactDb { countries }
}

fn convert_number<B: FactBackend>(raw: RawNumber) -> LooseNumber<B> {
    match raw {
        RawNumber::Number(n) => LooseNumber::Exact(B::float_from(n)),
        RawNumber::Text(t) if t.trim().is_empty() => LooseNumber::Missing,
        RawNumber::Text(t) => LooseNumber::Raw(B::str_from(&t)),
        RawNumber::Missing => LooseNumber::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::CountriesRaw;

    fn sample_db() -> DefaultFactDb {
        let raw: CountriesRaw = serde_json::from_str(
            r#"[
                {"name":"Curaçao","region":"Americas","population":"150,000","area":444},
                {"name":"United States","region":"Americas","population":331900000,
                 "area":"9,833,520 km²","states":[{"name":"Texas"},{"name":"Ohio"}]},
                {"name":"United Kingdom","region":"Europe","population":"","languages":"bad"}
            ]"#,
        )
        .unwrap();
        build_factdb(raw)
    }

    #[test]
    fn finds_by_folded_name() {
        let db = sample_db();
        assert!(db.find_country("curacao").is_some());
        assert!(db.find_country("UNITED STATES").is_some());
        assert!(db.find_country("Atlantis").is_none());
    }

    #[test]
    fn substring_search_matches_loosely() {
        let db = sample_db();
        let hits = db.find_countries_by_substring("united");
        assert_eq!(hits.len(), 2);
        assert!(db.find_countries_by_substring("").is_empty());
    }

    #[test]
    fn empty_numeric_text_normalizes_to_missing() {
        let db = sample_db();
        let uk = db.find_country("United Kingdom").unwrap();
        assert!(uk.population().is_missing());
        assert_eq!(uk.population().magnitude(), 0.0);
    }

    #[test]
    fn states_are_owned_in_order() {
        let db = sample_db();
        let us = db.find_country("United States").unwrap();
        let names: Vec<&str> = us.states().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Texas", "Ohio"]);
        assert!(us.states().iter().any(|s| s.is_named("TEXAS")));
    }

    #[test]
    fn malformed_languages_degrade_to_empty() {
        let db = sample_db();
        let uk = db.find_country("United Kingdom").unwrap();
        assert!(uk.languages().is_empty());
    }
}
