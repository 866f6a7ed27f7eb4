//! SQLite conversion history store.
//!
//! Provides persistent, bounded conversion history using SQLite and Diesel
//! ORM. Insert and trim run inside one `IMMEDIATE` transaction, so the write
//! lock is held from the insert until the partition is back under its cap.

use diesel::prelude::*;
use diesel::sql_types::BigInt;
use tracing::{debug, warn};

use crate::adapter::outbound::sqlite::database::connection::{
    configure_sqlite_connection, DbPool,
};
use crate::adapter::outbound::sqlite::database::model::{HistoryRow, NewHistoryRow};
use crate::adapter::outbound::sqlite::database::schema::conversion_history;
use crate::domain::{Conversion, ConversionRecord, NewRecord, PartitionKey};
use crate::error::{Error, Result};
use crate::port::HistoryStore;

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = BigInt)]
    #[diesel(column_name = "id")]
    id: i64,
}

type PooledConnection =
    diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>;

/// SQLite-backed history store.
///
/// Implements the [`HistoryStore`] trait; records survive restarts.
pub struct SqliteHistoryStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteHistoryStore {
    /// Create a new SQLite history store with the given connection pool.
    ///
    /// The pool must already be migrated.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn connection(&self) -> Result<PooledConnection> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;
        if let Err(e) = configure_sqlite_connection(&mut conn) {
            warn!(error = %e, "Failed to configure SQLite connection");
        }
        Ok(conn)
    }

    fn to_row(record: &NewRecord) -> NewHistoryRow {
        let conversion = &record.conversion;
        NewHistoryRow {
            partition: conversion.partition.storage_key(),
            from_amount: conversion.from_amount.clone(),
            from_label: conversion.from_label.clone(),
            to_amount: conversion.to_amount.clone(),
            to_label: conversion.to_label.clone(),
            created_at: record.created_at_ms,
        }
    }

    fn from_row(row: HistoryRow) -> Result<ConversionRecord> {
        let partition = PartitionKey::from_storage_key(&row.partition)
            .ok_or_else(|| Error::Parse(format!("unknown partition key: {}", row.partition)))?;
        Ok(ConversionRecord {
            id: row.id,
            conversion: Conversion {
                partition,
                from_amount: row.from_amount,
                from_label: row.from_label,
                to_amount: row.to_amount,
                to_label: row.to_label,
            },
            created_at_ms: row.created_at,
        })
    }
}

impl HistoryStore for SqliteHistoryStore {
    async fn insert_and_trim(&self, record: NewRecord, max_size: usize) -> Result<ConversionRecord> {
        let row = Self::to_row(&record);
        let key = row.partition.clone();
        let mut conn = self.connection()?;

        let (id, evicted) = conn
            .immediate_transaction(|conn| {
                diesel::insert_into(conversion_history::table)
                    .values(&row)
                    .execute(conn)?;

                let id = diesel::sql_query("SELECT last_insert_rowid() AS id")
                    .get_result::<LastInsertRowId>(conn)?
                    .id;

                let evicted = match max_size.checked_sub(1) {
                    None => diesel::delete(
                        conversion_history::table
                            .filter(conversion_history::partition.eq(&key)),
                    )
                    .execute(conn)?,
                    Some(skip) => {
                        // Oldest id that survives the trim.
                        let cutoff = conversion_history::table
                            .filter(conversion_history::partition.eq(&key))
                            .select(conversion_history::id)
                            .order(conversion_history::id.desc())
                            .offset(i64::try_from(skip).unwrap_or(i64::MAX))
                            .first::<i64>(conn)
                            .optional()?;
                        match cutoff {
                            Some(cutoff) => diesel::delete(
                                conversion_history::table
                                    .filter(conversion_history::partition.eq(&key))
                                    .filter(conversion_history::id.lt(cutoff)),
                            )
                            .execute(conn)?,
                            None => 0,
                        }
                    }
                };

                Ok::<_, diesel::result::Error>((id, evicted))
            })
            .map_err(|e| Error::Storage(e.to_string()))?;

        debug!(partition = %key, id, evicted, "History record stored");
        Ok(ConversionRecord::from_new(id, record))
    }

    async fn list_all(&self, key: PartitionKey) -> Result<Vec<ConversionRecord>> {
        let mut conn = self.connection()?;

        let rows: Vec<HistoryRow> = conversion_history::table
            .filter(conversion_history::partition.eq(key.storage_key()))
            .order(conversion_history::id.desc())
            .select(HistoryRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Storage(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn latest(&self, key: PartitionKey) -> Result<Option<ConversionRecord>> {
        let mut conn = self.connection()?;

        let row: Option<HistoryRow> = conversion_history::table
            .filter(conversion_history::partition.eq(key.storage_key()))
            .order(conversion_history::id.desc())
            .select(HistoryRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Storage(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    async fn clear(&self, key: PartitionKey) -> Result<usize> {
        let mut conn = self.connection()?;

        diesel::delete(
            conversion_history::table
                .filter(conversion_history::partition.eq(key.storage_key())),
        )
        .execute(&mut conn)
        .map_err(|e| Error::Storage(e.to_string()))
    }
}
