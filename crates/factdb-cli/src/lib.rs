//! factdb-cli
//! ==========
//!
//! Command-line interface for the `factdb-core` country-facts database.
//!
//! This crate primarily provides a binary (`factdb-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! factdb-cli --help
//! factdb-cli stats
//! factdb-cli country japan
//! factdb-cli quiz --difficulty medium --seed 42
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`factdb-core`] crate directly.
//!
//! [`factdb-core`]: https://docs.rs/factdb-core

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
