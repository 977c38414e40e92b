// 💾 Preference Persistence - small named string values that survive restarts
//
// Persistence is never a hard dependency: `Preferences::load` falls back to the
// caller's default and `Preferences::save` gives up after logging. Callers see
// the same behavior whether the store works or not.

use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// Theme name: "light" | "dark"
pub const THEME_KEY: &str = "theme";

/// Selected issuer chip on the certifications page
pub const CERT_ISSUER_KEY: &str = "cert-filter-issuer";

/// Selected category chip on the certifications page
pub const CERT_CATEGORY_KEY: &str = "cert-filter-category";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

// ============================================================================
// STORE BACKENDS
// ============================================================================

/// Raw key-value access. Implementations may fail; `Preferences` absorbs it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// SQLite-backed store (one `preferences` table)
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        // WAL so a crash mid-write never corrupts earlier values
        conn.pragma_update(None, "journal_mode", "WAL")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        Ok(SqliteStore { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local store, forgotten on exit. Clones share the same values.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: &[(&str, &str)]) -> Self {
        let values = values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MemoryStore {
            values: Rc::new(RefCell::new(values)),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stands in when no store could be opened: every access fails
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// ============================================================================
// FAIL-SOFT SHIM
// ============================================================================

pub struct Preferences {
    store: Box<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Preferences { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn unavailable() -> Self {
        Self::new(Box::new(UnavailableStore))
    }

    /// Stored value, or `default` when missing or unreadable
    pub fn load(&self, key: &str, default: &str) -> String {
        match self.store.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read preference, using default");
                default.to_string()
            }
        }
    }

    /// Stored value if present and readable. Errors are logged and read as absent.
    pub fn load_opt(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read preference");
                None
            }
        }
    }

    /// Best-effort write; failures are logged and dropped
    pub fn save(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, value, error = %err, "failed to save preference");
        }
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_returns_default() {
        let prefs = Preferences::in_memory();
        assert_eq!(prefs.load(CERT_ISSUER_KEY, "All"), "All");
        assert_eq!(prefs.load_opt(CERT_ISSUER_KEY), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut prefs = Preferences::in_memory();
        prefs.save(THEME_KEY, "light");
        assert_eq!(prefs.load(THEME_KEY, "dark"), "light");

        prefs.save(THEME_KEY, "dark");
        assert_eq!(prefs.load(THEME_KEY, "light"), "dark");
    }

    #[test]
    fn test_unavailable_store_is_fail_soft() {
        let mut prefs = Preferences::unavailable();
        prefs.save(THEME_KEY, "light");
        assert_eq!(prefs.load(THEME_KEY, "dark"), "dark");
        assert_eq!(prefs.load(CERT_CATEGORY_KEY, "All"), "All");
        assert_eq!(prefs.load_opt(THEME_KEY), None);
    }

    #[test]
    fn test_changed_default_does_not_backfill() {
        let mut prefs = Preferences::in_memory();
        prefs.save(CERT_ISSUER_KEY, "Udemy");
        assert_eq!(prefs.load(CERT_ISSUER_KEY, "freeCodeCamp"), "Udemy");
    }

    #[test]
    fn test_sqlite_store_roundtrip_and_overwrite() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_sqlite_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");

        {
            let mut prefs = Preferences::new(Box::new(SqliteStore::open(&path).unwrap()));
            prefs.save(CERT_CATEGORY_KEY, "Web Design");
        }

        let prefs = Preferences::new(Box::new(SqliteStore::open(&path).unwrap()));
        assert_eq!(prefs.load(CERT_CATEGORY_KEY, "All"), "Web Design");
    }

    #[test]
    fn test_sqlite_open_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/nested/prefs.db");
        assert!(SqliteStore::open(&path).is_err());
    }
}
