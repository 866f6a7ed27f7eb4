//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::conversion_history;

/// Database row for a history entry (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = conversion_history)]
pub struct NewHistoryRow {
    pub partition: String,
    pub from_amount: String,
    pub from_label: String,
    pub to_amount: String,
    pub to_label: String,
    pub created_at: i64,
}

/// Database row for a history entry (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = conversion_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HistoryRow {
    pub id: i64,
    pub partition: String,
    pub from_amount: String,
    pub from_label: String,
    pub to_amount: String,
    pub to_label: String,
    pub created_at: i64,
}
