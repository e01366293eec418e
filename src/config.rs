use crate::db::SqliteStore;
use crate::gateway::PersistenceGateway;
use crate::ledger::Ledger;
use crate::locale::Locale;
use anyhow::Result;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "ledger.db";
pub const DEFAULT_LOG_FILE: &str = "weekly-ledger.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_file: PathBuf,
    pub locale: Locale,
}

impl Config {
    pub fn new(db_path: impl Into<PathBuf>, log_file: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            log_file: log_file.into(),
            locale: Locale::default(),
        }
    }

    /// Open the configured database and hydrate a ledger from it.
    pub fn open_ledger(&self) -> Result<Ledger<SqliteStore>> {
        let store = SqliteStore::open(&self.db_path)?;
        let mut ledger = Ledger::new(PersistenceGateway::new(store), self.locale.clone());
        ledger.mount();
        Ok(ledger)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH, DEFAULT_LOG_FILE)
    }
}
