use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskdesk.db";

/// One open SQLite connection.
///
/// Held only for the duration of a single gateway call; dropping it closes the
/// connection on every exit path.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens or creates the database file. The caller decides which
    /// [`StoreError`](crate::libs::error::StoreError) a failure becomes.
    pub fn open(path: &Path) -> rusqlite::Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }
}
