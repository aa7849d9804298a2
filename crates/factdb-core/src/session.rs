// crates/factdb-core/src/session.rs

use serde::{Deserialize, Serialize};

/// How many names the recently-viewed list keeps.
pub const RECENT_CAP: usize = 10;

/// A visitor's recently viewed country names, most recent first.
///
/// This is deliberately a plain value that callers thread through
/// explicitly rather than ambient shared state. Persisting it between
/// runs (the CLI keeps a small JSON session file) is the caller's
/// concern; serde support is all this type contributes to that.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecentlyViewed {
    names: Vec<String>,
}

impl RecentlyViewed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view. Re-viewing moves the name to the front; the list
    /// never grows beyond [`RECENT_CAP`] entries.
    pub fn record(&mut self, name: &str) {
        self.names.retain(|n| n != name);
        self.names.insert(0, name.to_string());
        self.names.truncate(RECENT_CAP);
    }

    /// Names in most-recent-first order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
