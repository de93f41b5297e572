//! DDL and column list for the `employers` table.

/// `AUTOINCREMENT` keeps identities monotonic: an id freed by a delete or a
/// re-identification is never handed out again.
pub const CREATE_EMPLOYERS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS employers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    sector TEXT,
    summary TEXT
)";

pub const EMPLOYER_SELECT_SQL: &str = "SELECT id, name, sector, summary FROM employers";
