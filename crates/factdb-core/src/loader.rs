// crates/factdb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates payload
//! parsing to serde_json (source datasets) or bincode (binary caches).

use crate::error::{FactError, Result};
use crate::model::{build_factdb, DefaultBackend, FactDb};
use crate::raw::CountriesRaw;
use crate::traits::FactBackend;
use bincode::Options;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

static FACT_DB_CACHE: OnceCell<FactDb<DefaultBackend>> = OnceCell::new();

/// Upper bound accepted by the binary-cache deserializer, to keep a
/// corrupt or malicious cache from ballooning memory.
const CACHE_SIZE_LIMIT: u64 = 64 * 1024 * 1024;

impl FactDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// Process-wide cached load of the bundled dataset.
    ///
    /// The first call reads and converts the dataset; later calls clone
    /// the cached database.
    pub fn load() -> Result<Self> {
        FACT_DB_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_from_path(dir.join(file))
            })
            .cloned()
    }

    /// Load a dataset from disk.
    ///
    /// Dispatches on the file name: `*.bin` is read as a bincode cache,
    /// anything else as source JSON. A `.gz` suffix is decompressed
    /// transparently when the `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading dataset from {}", path.display());

        let mut reader = Self::open_stream(path)?;

        if path.extension().is_some_and(|e| e == "bin") {
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            Self::from_bytes(&data)
        } else {
            let raw: CountriesRaw = serde_json::from_reader(&mut reader)?;
            let db = build_factdb(raw);
            log::debug!("loaded {} countries", db.country_count());
            Ok(db)
        }
    }

    // -----------------------------------------------------------------------
    // INTERNAL TRANSPORT HELPER
    // -----------------------------------------------------------------------

    /// Opens a file, buffers it, and wraps it in a Gzip decoder when the
    /// file name asks for one. Returns a generic reader so the caller
    /// doesn't care about the compression.
    fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
        let file = File::open(path).map_err(|e| {
            FactError::NotFound(format!("dataset not found at {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);

        if path.extension().is_some_and(|e| e == "gz") {
            #[cfg(feature = "compact")]
            {
                return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(FactError::Unsupported(format!(
                    "{} is gzip-compressed; rebuild with the `compact` feature",
                    path.display()
                )));
            }
        }

        Ok(Box::new(reader))
    }
}

impl<B: FactBackend> FactDb<B> {
    /// Reconstructs the database from its serialized binary-cache form.
    pub fn from_bytes(data: &[u8]) -> Result<Self>
    where
        B: for<'de> serde::Deserialize<'de>,
    {
        let db = bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        Ok(db)
    }

    /// Serializes the database for a binary cache next to the dataset.
    pub fn to_bytes(&self) -> Result<Vec<u8>>
    where
        B: serde::Serialize,
    {
        let data = bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .serialize(self)?;
        Ok(data)
    }
}
