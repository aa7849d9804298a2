// crates/factdb-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`FactDb::stats`], these values are recomputed from the
/// live record set on every call; nothing here is cached.
///
/// [`FactDb::stats`]: crate::model::FactDb::stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub states: usize,
    /// Sum of extracted population magnitudes; fallback zeros included.
    pub total_population: f64,
    /// Name of the country with the largest extracted area, if any records exist.
    pub largest_by_area: Option<String>,
    /// Name of the country with the smallest extracted area, if any records exist.
    pub smallest_by_area: Option<String>,
    /// Countries per region, sorted by region name. Countries without a
    /// region are not counted here.
    pub region_counts: Vec<(String, usize)>,
}
