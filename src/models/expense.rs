//! Expense model
//!
//! An expense is one recorded spending event. Expenses are immutable once
//! created; the only lifecycle events are creation and removal.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Shown in place of an empty description
pub const DESCRIPTION_PLACEHOLDER: &str = "-";

/// The calendar date of an expense
///
/// Stored data may hold either a plain ISO date (`2024-03-05`) or a full
/// ISO-8601 timestamp (`2024-03-05T09:30:00.000Z`). The original text is kept
/// so saving a loaded collection writes back exactly what was read, while
/// ordering uses the parsed instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDate {
    raw: String,
    instant: NaiveDateTime,
}

impl ExpenseDate {
    /// Create from a calendar date, stored as `YYYY-MM-DD`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            raw: date.format("%Y-%m-%d").to_string(),
            instant: date.and_time(NaiveTime::MIN),
        }
    }

    /// Parse an ISO-8601 calendar date or date-time
    pub fn parse(s: &str) -> Result<Self, ExpenseDateError> {
        let trimmed = s.trim();

        let instant = if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            date.and_time(NaiveTime::MIN)
        } else if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            dt.naive_utc()
        } else if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            dt
        } else if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
            dt
        } else {
            return Err(ExpenseDateError(s.to_string()));
        };

        Ok(Self {
            raw: trimmed.to_string(),
            instant,
        })
    }

    /// The calendar day
    pub fn date(&self) -> NaiveDate {
        self.instant.date()
    }

    /// The instant used for ordering
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// The stored textual form
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialOrd for ExpenseDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExpenseDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant
            .cmp(&other.instant)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for ExpenseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ExpenseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ExpenseDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Error for unparsable expense dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDateError(pub String);

impl fmt::Display for ExpenseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid date '{}': expected YYYY-MM-DD or an ISO-8601 timestamp",
            self.0
        )
    }
}

impl std::error::Error for ExpenseDateError {}

/// A recorded spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Spending classification
    pub category: Category,

    /// Amount spent (never negative for expenses created by the store)
    pub amount: Money,

    /// Free-text note; may be empty
    #[serde(default)]
    pub description: String,

    /// Day the money was spent (not necessarily when it was recorded)
    pub date: ExpenseDate,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        category: Category,
        amount: Money,
        description: impl Into<String>,
        date: ExpenseDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            category,
            amount,
            description: description.into().trim().to_string(),
            date,
        }
    }

    /// Description, or the placeholder when none was given
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            DESCRIPTION_PLACEHOLDER
        } else {
            &self.description
        }
    }
}
