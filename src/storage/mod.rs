//! SQLite persistence for employers.

pub mod error;
pub mod pool;
pub mod schema;
pub mod sqlite;

pub use pool::connect;
pub use sqlite::SqliteEmployerStore;
