// crates/factdb-core/src/numeric.rs

//! Loosely-typed numeric fields: extraction and display formatting.
//!
//! The upstream dataset stores population and area as free text, mixing
//! plain numbers ("9833520"), grouped digits ("331,900,000"), decorated
//! values ("357,022 km²") and word-scale phrases ("3.4 million"). All of
//! that is kept behind [`LooseNumber`], whose [`magnitude`] view is total:
//! it never fails, it falls back to zero.
//!
//! Known limitation: only the *first* contiguous number run is extracted,
//! so "3.4 million" yields 3.4 rather than 3,400,000. Word-scale suffixes
//! are not interpreted.
//!
//! [`magnitude`]: LooseNumber::magnitude

use crate::traits::FactBackend;
use serde::{Deserialize, Serialize};

/// Unit suffix appended by [`format_area`].
pub const AREA_SUFFIX: &str = " km²";

/// A loosely-typed numeric field as found in the dataset.
///
/// Instead of parsing eagerly and swallowing failures, the field is kept
/// as an explicit sum type, so "this cell holds decorated text" is an
/// inspectable state rather than a silent zero somewhere downstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LooseNumber<B: FactBackend> {
    /// The dataset stored a real number.
    Exact(B::Float),
    /// Non-numeric or decorated text, kept verbatim.
    Raw(B::Str),
    /// Absent or empty in the dataset.
    Missing,
}

impl<B: FactBackend> LooseNumber<B> {
    /// The fallback-zero numeric view.
    ///
    /// Exact values pass through unchanged; raw text goes through
    /// [`first_number_in`]; missing cells and digit-free text yield 0.0.
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Exact(f) => B::float_to_f64(*f),
            Self::Raw(s) => first_number_in(s.as_ref()).unwrap_or(0.0),
            Self::Missing => 0.0,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Render with thousands separators (see [`format_count`]).
    pub fn display_count(&self) -> String {
        format_count(self.magnitude())
    }

    /// Render with thousands separators and the area unit suffix.
    pub fn display_area(&self) -> String {
        format_area(self.magnitude())
    }
}

/// Extract the first contiguous `digits[.digits]` run from `text`.
///
/// Comma grouping separators inside a run are skipped, so "1,234 km²"
/// yields 1234.0 and "331,900,000" yields 331900000.0. Leading decoration
/// (currency symbols, unit words) is ignored. Returns `None` when the text
/// contains no digit at all.
pub fn first_number_in(text: &str) -> Option<f64> {
    let mut run = String::new();
    let mut seen_dot = false;

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else if ch == ',' && !run.is_empty() && !seen_dot {
            // grouping separator inside the run
            continue;
        } else if ch == '.' && !run.is_empty() && !seen_dot {
            seen_dot = true;
            run.push(ch);
        } else if !run.is_empty() {
            break;
        }
    }

    if run.is_empty() {
        return None;
    }
    run.parse::<f64>().ok()
}

/// Render a magnitude with thousands separators.
///
/// Whole values render as grouped integers ("1,234,567"). Values with a
/// fractional part render with one decimal place instead of truncating
/// ("67.4", "1,234.5"). Total over all finite inputs.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let value = value.abs();

    if value.fract() == 0.0 {
        return format!("{sign}{}", group_thousands(&format!("{value:.0}")));
    }

    // One decimal place; rounding may collapse the fraction back to zero
    // (including float noise on ratio-scaled magnitudes).
    let rendered = format!("{value:.1}");
    match rendered.split_once('.') {
        Some((whole, "0")) => format!("{sign}{}", group_thousands(whole)),
        Some((whole, frac)) => format!("{sign}{}.{frac}", group_thousands(whole)),
        None => format!("{sign}{}", group_thousands(&rendered)),
    }
}

/// Render a magnitude as an area: [`format_count`] plus the unit suffix.
pub fn format_area(value: f64) -> String {
    format!("{}{AREA_SUFFIX}", format_count(value))
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    type Loose = LooseNumber<DefaultBackend>;

    #[test]
    fn extracts_plain_digits() {
        assert_eq!(first_number_in("9833520"), Some(9833520.0));
    }

    #[test]
    fn extracts_grouped_digits() {
        assert_eq!(first_number_in("331,900,000"), Some(331900000.0));
        assert_eq!(first_number_in("1,234 km²"), Some(1234.0));
    }

    #[test]
    fn extracts_only_the_first_run() {
        // Word-scale suffixes are not interpreted.
        assert_eq!(first_number_in("3.4 million"), Some(3.4));
        assert_eq!(first_number_in("between 10 and 20"), Some(10.0));
    }

    #[test]
    fn ignores_leading_decoration() {
        assert_eq!(first_number_in("approx. 825 residents"), Some(825.0));
        assert_eq!(first_number_in("$12.50"), Some(12.5));
    }

    #[test]
    fn digit_free_text_yields_none() {
        assert_eq!(first_number_in(""), None);
        assert_eq!(first_number_in("unknown"), None);
        assert_eq!(first_number_in("km²"), None);
    }

    #[test]
    fn second_dot_ends_the_run() {
        assert_eq!(first_number_in("1.2.3"), Some(1.2));
    }

    #[test]
    fn magnitude_is_total() {
        assert_eq!(Loose::Exact(125700000.0).magnitude(), 125700000.0);
        assert_eq!(Loose::Raw("357,022 km²".to_string()).magnitude(), 357022.0);
        assert_eq!(Loose::Raw("no census".to_string()).magnitude(), 0.0);
        assert_eq!(Loose::Missing.magnitude(), 0.0);
    }

    #[test]
    fn formats_whole_values_with_separators() {
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(825.0), "825");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn formats_fractional_values_with_one_decimal() {
        assert_eq!(format_count(67.4), "67.4");
        assert_eq!(format_count(1234.56), "1,234.6");
    }

    #[test]
    fn float_noise_does_not_leak_into_whole_values() {
        assert_eq!(format_count(100_560_000.000_000_01), "100,560,000");
        assert_eq!(format_count(0.98), "1");
    }

    #[test]
    fn formats_area_with_suffix() {
        assert_eq!(format_area(1234.0), "1,234 km²");
        assert_eq!(format_area(0.49), "0.5 km²");
    }

    #[test]
    fn loose_display_delegates_to_extraction() {
        let area = Loose::Raw("3,287,263 km²".to_string());
        assert_eq!(area.display_area(), "3,287,263 km²");
        assert_eq!(Loose::Missing.display_count(), "0");
    }
}
