//! Conversion history records and their partition keys.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use super::unit::{Category, UnknownCategory};

/// Partition of the history log: one per unit category, one for currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartitionKey {
    Unit(Category),
    Currency,
}

const CURRENCY_KEY: &str = "currency";
const UNIT_PREFIX: &str = "unit:";

impl PartitionKey {
    /// Key as stored in the database, e.g. `unit:Length` or `currency`.
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self {
            PartitionKey::Unit(category) => format!("{UNIT_PREFIX}{}", category.name()),
            PartitionKey::Currency => CURRENCY_KEY.to_string(),
        }
    }

    /// Inverse of [`storage_key`](Self::storage_key).
    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        if key == CURRENCY_KEY {
            return Some(PartitionKey::Currency);
        }
        let name = key.strip_prefix(UNIT_PREFIX)?;
        Category::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .map(PartitionKey::Unit)
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionKey::Unit(category) => write!(f, "{category}"),
            PartitionKey::Currency => f.write_str(CURRENCY_KEY),
        }
    }
}

impl FromStr for PartitionKey {
    type Err = UnknownCategory;

    /// `currency` (any case) or a category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(CURRENCY_KEY) {
            return Ok(PartitionKey::Currency);
        }
        s.parse::<Category>().map(PartitionKey::Unit)
    }
}

/// One completed conversion, as entered on the calculator.
///
/// Amounts are normalized decimal strings; labels are opaque display names
/// (unit names or currency codes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    #[serde(serialize_with = "serialize_partition")]
    pub partition: PartitionKey,
    pub from_amount: String,
    pub from_label: String,
    pub to_amount: String,
    pub to_label: String,
}

/// A conversion stamped with its creation time, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub conversion: Conversion,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: i64,
}

/// A stored, immutable history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    /// Monotonic surrogate id; insertion order within a partition.
    pub id: i64,
    #[serde(flatten)]
    pub conversion: Conversion,
    pub created_at_ms: i64,
}

impl ConversionRecord {
    /// Build the stored form of `record` under the id the store assigned.
    #[must_use]
    pub fn from_new(id: i64, record: NewRecord) -> Self {
        Self {
            id,
            conversion: record.conversion,
            created_at_ms: record.created_at_ms,
        }
    }

    /// Creation time, if the stored millis are in chrono's range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at_ms).single()
    }

    #[must_use]
    pub fn partition(&self) -> PartitionKey {
        self.conversion.partition
    }
}

fn serialize_partition<S: serde::Serializer>(key: &PartitionKey, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&key.to_string())
}
