// crates/factdb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1. Transliterate Unicode → ASCII (e.g. `Curaçao` -> `Curacao`)
/// 2. Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use factdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// assert_eq!(fold_key("São Tomé"), "sao tome");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use factdb_core::text::equals_folded;
///
/// assert!(equals_folded("Türkiye", "turkiye"));
/// assert!(equals_folded("CURAÇAO", "curacao"));
/// assert!(!equals_folded("Chad", "Chile"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
