pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::employer_service::EmployerService;
pub use domain::{
    ConstraintKind, CreateOrUpdateStatus, Employer, EmployerField, EmployerRepository, StoreError,
    StoreResult,
};
pub use infra::config::{AppConfig, ConfigError, DatabaseConfig};
pub use storage::SqliteEmployerStore;
