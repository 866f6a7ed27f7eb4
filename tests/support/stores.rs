//! History stores under test.

use std::path::Path;

use unitconv::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, IN_MEMORY,
};
use unitconv::adapter::outbound::{MemoryHistoryStore, SqliteHistoryStore};

pub fn memory() -> MemoryHistoryStore {
    MemoryHistoryStore::new()
}

pub fn sqlite_in_memory() -> SqliteHistoryStore {
    let pool = create_pool(IN_MEMORY).expect("create sqlite pool");
    run_migrations(&pool).expect("run migrations");
    SqliteHistoryStore::new(pool)
}

/// File-backed store; several pooled connections share one database.
pub fn sqlite_file(dir: &Path) -> SqliteHistoryStore {
    let path = dir.join("history.db");
    let pool = create_pool(&path.display().to_string()).expect("create sqlite pool");
    run_migrations(&pool).expect("run migrations");
    SqliteHistoryStore::new(pool)
}
