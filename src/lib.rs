// Weekly Ledger - Core Library
// Exposes the ledger screen logic for the TUI, the headless commands and tests

pub mod app;
pub mod config;
pub mod db;
pub mod entry;
pub mod error;
pub mod gateway;
pub mod ledger;
pub mod locale;
pub mod total;
pub mod validation;

// Re-export commonly used types
pub use app::{update, Action, AppState, Effect, PersistOp, Status};
pub use config::Config;
pub use db::{setup_database, KeyValueStore, MemoryStore, SqliteStore};
pub use entry::{next_id, Entry};
pub use error::{StorageError, ValidationError};
pub use gateway::{PersistenceGateway, STORAGE_KEY};
pub use ledger::{Clock, Ledger, SystemClock};
pub use locale::Locale;
pub use total::{format_total, total};
pub use validation::{is_numeric, validate_input};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
