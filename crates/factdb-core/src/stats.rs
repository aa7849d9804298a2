// crates/factdb-core/src/stats.rs

//! Aggregation over the record set: running min/max/mean, stable top-N
//! rankings, region grouping and the derived statistics snapshot.
//!
//! Every aggregation reads a numeric column through the fallback-zero
//! [`magnitude`] view, so malformed cells contribute 0 instead of failing.
//!
//! [`magnitude`]: crate::numeric::LooseNumber::magnitude

use crate::common::DbStats;
use crate::model::{Country, FactDb};
use crate::session::RecentlyViewed;
use crate::traits::FactBackend;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which loosely-typed numeric column an aggregation reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    Population,
    Area,
}

impl NumericField {
    /// Extracted magnitude of this field for one record.
    pub fn extract<B: FactBackend>(self, country: &Country<B>) -> f64 {
        match self {
            Self::Population => country.population.magnitude(),
            Self::Area => country.area.magnitude(),
        }
    }
}

/// Running aggregates over one numeric field.
///
/// An empty record set is a defined neutral result: zero count and sum,
/// no extremes, mean 0.0.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldStats {
    pub count: usize,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: f64,
}

impl<B: FactBackend> FactDb<B> {
    /// Compute running min/max/mean/sum of `field` across all countries.
    pub fn field_stats(&self, field: NumericField) -> FieldStats {
        let mut stats = FieldStats::default();
        for country in &self.countries {
            let value = field.extract(country);
            stats.count += 1;
            stats.sum += value;
            stats.min = Some(stats.min.map_or(value, |m: f64| m.min(value)));
            stats.max = Some(stats.max.map_or(value, |m: f64| m.max(value)));
        }
        if stats.count > 0 {
            stats.mean = stats.sum / stats.count as f64;
        }
        stats
    }

    /// The `n` countries with the largest extracted `field` magnitude.
    ///
    /// The ranking is stable: records with equal magnitude keep their
    /// relative order from the record set.
    pub fn top_by(&self, field: NumericField, n: usize) -> Vec<&Country<B>> {
        let mut ranked: Vec<&Country<B>> = self.countries.iter().collect();
        ranked.sort_by(|a, b| field.extract(b).total_cmp(&field.extract(a)));
        ranked.truncate(n);
        ranked
    }

    /// Partition countries by region, sorted by region name.
    ///
    /// Countries with an empty/absent region are excluded, not assigned
    /// to a synthetic bucket.
    pub fn group_by_region(&self) -> BTreeMap<&str, Vec<&Country<B>>> {
        let mut groups: BTreeMap<&str, Vec<&Country<B>>> = BTreeMap::new();
        for country in &self.countries {
            let region = country.region();
            if region.is_empty() {
                continue;
            }
            groups.entry(region).or_default().push(country);
        }
        groups
    }

    /// Aggregate statistics snapshot, freshly derived on every call.
    pub fn stats(&self) -> DbStats {
        let mut states = 0usize;
        let mut total_population = 0.0f64;
        let mut largest: Option<(&Country<B>, f64)> = None;
        let mut smallest: Option<(&Country<B>, f64)> = None;

        for country in &self.countries {
            states += country.states.len();
            total_population += country.population.magnitude();

            let area = country.area.magnitude();
            if largest.is_none_or(|(_, a)| area > a) {
                largest = Some((country, area));
            }
            if smallest.is_none_or(|(_, a)| area < a) {
                smallest = Some((country, area));
            }
        }

        let region_counts = self
            .group_by_region()
            .into_iter()
            .map(|(region, members)| (region.to_string(), members.len()))
            .collect();

        DbStats {
            countries: self.countries.len(),
            states,
            total_population,
            largest_by_area: largest.map(|(c, _)| c.name().to_string()),
            smallest_by_area: smallest.map(|(c, _)| c.name().to_string()),
            region_counts,
        }
    }

    /// Resolve a recently-viewed list against the record set, in recency
    /// order. Names that no longer resolve are skipped.
    pub fn popular(&self, recent: &RecentlyViewed) -> Vec<&Country<B>> {
        recent
            .names()
            .iter()
            .filter_map(|name| self.find_country(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_factdb, DefaultFactDb};
    use crate::raw::CountriesRaw;

    fn db_from(json: &str) -> DefaultFactDb {
        let raw: CountriesRaw = serde_json::from_str(json).unwrap();
        build_factdb(raw)
    }

    #[test]
    fn empty_set_is_a_defined_neutral_result() {
        let db = db_from("[]");
        let stats = db.field_stats(NumericField::Population);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.mean, 0.0);
        assert!(stats.min.is_none());
        assert!(stats.max.is_none());

        let snapshot = db.stats();
        assert_eq!(snapshot.countries, 0);
        assert!(snapshot.largest_by_area.is_none());
    }

    #[test]
    fn field_stats_read_through_the_fallback_view() {
        let db = db_from(
            r#"[
                {"name":"A","area":"10"},
                {"name":"B","area":30},
                {"name":"C","area":"garbled"}
            ]"#,
        );
        let stats = db.field_stats(NumericField::Area);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.sum, 40.0);
        assert_eq!(stats.min, Some(0.0));
        assert_eq!(stats.max, Some(30.0));
        assert!((stats.mean - 40.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn top_by_ranks_descending() {
        let db = db_from(
            r#"[
                {"name":"A","area":"10"},
                {"name":"B","area":"30"},
                {"name":"C","area":"20"}
            ]"#,
        );
        let top = db.top_by(NumericField::Area, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name(), "B");
    }

    #[test]
    fn top_by_is_stable_on_ties() {
        let db = db_from(
            r#"[
                {"name":"First","population":"100"},
                {"name":"Second","population":"100"},
                {"name":"Third","population":"100"}
            ]"#,
        );
        let top = db.top_by(NumericField::Population, 3);
        let names: Vec<&str> = top.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn region_grouping_excludes_blank_regions() {
        let db = db_from(
            r#"[
                {"name":"A","region":"Europe"},
                {"name":"B","region":"Asia"},
                {"name":"C","region":""},
                {"name":"D"}
            ]"#,
        );
        let groups = db.group_by_region();
        assert_eq!(groups.len(), 2);
        assert!(groups.contains_key("Asia"));
        assert!(!groups.contains_key(""));
    }

    #[test]
    fn snapshot_finds_area_extremes() {
        let db = db_from(
            r#"[
                {"name":"Tiny","region":"Europe","area":"0.49 km²","population":825},
                {"name":"Big","region":"Americas","area":9984670,"population":"38,250,000"}
            ]"#,
        );
        let snapshot = db.stats();
        assert_eq!(snapshot.largest_by_area.as_deref(), Some("Big"));
        assert_eq!(snapshot.smallest_by_area.as_deref(), Some("Tiny"));
        assert_eq!(snapshot.total_population, 825.0 + 38250000.0);
        assert_eq!(snapshot.region_counts.len(), 2);
    }

    #[test]
    fn popular_resolves_in_recency_order() {
        let db = db_from(r#"[{"name":"A"},{"name":"B"}]"#);
        let mut recent = RecentlyViewed::new();
        recent.record("B");
        recent.record("Gone");
        recent.record("A");
        let popular = db.popular(&recent);
        let names: Vec<&str> = popular.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
