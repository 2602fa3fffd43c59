//! Expense identifiers
//!
//! Ids are opaque strings: new expenses get a random UUID, while ids written
//! by older versions (millisecond timestamps) are carried through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of characters shown in compact listings
const SHORT_LEN: usize = 8;

/// Unique, stable identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters used in tables
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Shortest prefix, at least as long as [`short`](Self::short), that no
    /// other id in `ids` starts with
    ///
    /// Falls back to the full id when every prefix is shared, as when this id
    /// is itself a prefix of another.
    pub fn unique_prefix<'b, I>(&self, ids: I) -> &str
    where
        I: IntoIterator<Item = &'b ExpenseId>,
    {
        let others: Vec<&str> = ids
            .into_iter()
            .filter(|id| *id != self)
            .map(ExpenseId::as_str)
            .collect();

        let start = self.short().len();
        let ends = self
            .0
            .char_indices()
            .map(|(idx, _)| idx)
            .filter(|idx| *idx >= start)
            .chain(std::iter::once(self.0.len()));

        for end in ends {
            let prefix = &self.0[..end];
            if !others.iter().any(|other| other.starts_with(prefix)) {
                return prefix;
            }
        }
        &self.0
    }

    /// Whether this id starts with the given (non-empty) prefix
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.starts_with(prefix)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
