// crates/factdb-core/src/raw.rs

//! Raw input shapes for the source dataset.
//!
//! These structs mirror the JSON exactly as it is stored, loose typing
//! included. They exist only as a deserialization target; the loader
//! converts them into the proper model via [`crate::model::build_factdb`].

use serde::Deserialize;

pub type CountriesRaw = Vec<CountryRaw>;

/// One country object as it appears in the source JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub government: Option<String>,
    #[serde(default)]
    pub languages: RawLanguages,
    #[serde(default)]
    pub population: RawNumber,
    #[serde(default)]
    pub area: RawNumber,
    #[serde(default)]
    pub states: Vec<StateRaw>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StateRaw {
    pub name: String,
}

/// A population/area cell. The dataset mixes plain JSON numbers with
/// free-text values, so this deserializes as whichever it finds.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

/// The languages cell: either a native JSON list or a serialized list
/// embedded in a string (the upstream storage kept the column as TEXT).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(untagged)]
pub enum RawLanguages {
    List(Vec<String>),
    Serialized(String),
    #[default]
    Missing,
}

impl RawLanguages {
    /// Decode into a native ordered list.
    ///
    /// A malformed serialized list degrades to an empty list rather than
    /// failing the load.
    pub fn decode(self) -> Vec<String> {
        match self {
            Self::List(list) => list,
            Self::Serialized(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::debug!("undecodable languages field {text:?}: {e}");
                Vec::new()
            }),
            Self::Missing => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_serialized_list() {
        let raw = RawLanguages::Serialized(r#"["German","French","Italian"]"#.to_string());
        assert_eq!(raw.decode(), vec!["German", "French", "Italian"]);
    }

    #[test]
    fn keeps_native_list_order() {
        let raw = RawLanguages::List(vec!["Hindi".into(), "English".into()]);
        assert_eq!(raw.decode(), vec!["Hindi", "English"]);
    }

    #[test]
    fn malformed_serialized_list_degrades_to_empty() {
        let raw = RawLanguages::Serialized("not a json list".to_string());
        assert!(raw.decode().is_empty());
        assert!(RawLanguages::Missing.decode().is_empty());
    }

    #[test]
    fn loose_cells_accept_numbers_text_and_null() {
        let json = r#"{"name":"X","population":42,"area":"1,234 km²","flag":null}"#;
        let raw: CountryRaw = serde_json::from_str(json).unwrap();
        assert!(matches!(raw.population, RawNumber::Number(n) if n == 42.0));
        assert!(matches!(raw.area, RawNumber::Text(ref t) if t == "1,234 km²"));
        assert!(matches!(raw.languages, RawLanguages::Missing));
    }
}
