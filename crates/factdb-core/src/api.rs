// crates/factdb-core/src/api.rs

//! Owned JSON views of the model types.
//!
//! [`CountryView`] is a field-for-field mirror of a [`Country`] record:
//! the languages field is already a native list, states collapse to their
//! names, and the loose numeric cells serialize as whatever the dataset
//! stored: a JSON number, the raw text, or null.

use crate::model::Country;
use crate::numeric::LooseNumber;
use crate::traits::FactBackend;
use serde::Serialize;

/// JSON mirror of one loosely-typed numeric cell.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum LooseField {
    Number(f64),
    Text(String),
    Null,
}

impl LooseField {
    fn from_loose<B: FactBackend>(value: &LooseNumber<B>) -> Self {
        match value {
            LooseNumber::Exact(f) => Self::Number(B::float_to_f64(*f)),
            LooseNumber::Raw(s) => Self::Text(s.as_ref().to_string()),
            LooseNumber::Missing => Self::Null,
        }
    }
}

/// Owned, serde-friendly mirror of a [`Country`] record.
#[derive(Clone, Debug, Serialize)]
pub struct CountryView {
    pub name: String,
    pub flag: Option<String>,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub currency: Option<String>,
    pub government: Option<String>,
    pub languages: Vec<String>,
    pub population: LooseField,
    pub area: LooseField,
    pub states: Vec<String>,
}

impl<B: FactBackend> From<&Country<B>> for CountryView {
    fn from(country: &Country<B>) -> Self {
        Self {
            name: B::str_to_string(&country.name),
            flag: country.flag.as_ref().map(B::str_to_string),
            capital: country.capital.as_ref().map(B::str_to_string),
            region: country.region.as_ref().map(B::str_to_string),
            currency: country.currency.as_ref().map(B::str_to_string),
            government: country.government.as_ref().map(B::str_to_string),
            languages: country.languages.clone(),
            population: LooseField::from_loose(&country.population),
            area: LooseField::from_loose(&country.area),
            states: country.states.iter().map(|s| s.name().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_factdb;
    use crate::raw::CountriesRaw;

    #[test]
    fn view_mirrors_the_record() {
        let raw: CountriesRaw = serde_json::from_str(
            r#"[{"name":"Switzerland","flag":"🇨🇭","capital":"Bern","region":"Europe",
                 "currency":"Swiss franc","languages":"[\"German\",\"French\"]",
                 "population":8700000,"area":"41,284 km²",
                 "states":[{"name":"Zürich"},{"name":"Bern"}]}]"#,
        )
        .unwrap();
        let db = build_factdb::<crate::model::DefaultBackend>(raw);
        let view = CountryView::from(&db.countries()[0]);
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&view).unwrap()).unwrap();

        assert_eq!(json["name"], "Switzerland");
        assert_eq!(json["languages"][1], "French");
        // number stays a number, decorated text stays text
        assert_eq!(json["population"], 8700000.0);
        assert_eq!(json["area"], "41,284 km²");
        assert_eq!(json["states"][0], "Zürich");
        assert_eq!(json["government"], serde_json::Value::Null);
    }
}
