//! Persistent session storage.
//!
//! The bearer token is the only client-side state that survives a restart.
//! It is written on login and deleted on logout; nothing else writes it.

mod schema;

pub use schema::*;

use std::path::Path;
use std::sync::Mutex;

use clinic_dash_core::models::AuthenticatedUser;
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        StoreError::Poisoned
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A persisted login.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub session_id: String,
    pub token: String,
    pub user: Option<AuthenticatedUser>,
    pub saved_at: String,
}

/// Where the session token lives between runs.
pub trait TokenStore: Send + Sync {
    /// Load the saved session, if any.
    fn load(&self) -> StoreResult<Option<StoredSession>>;

    /// Replace the saved session.
    fn save(&self, session: &StoredSession) -> StoreResult<()>;

    /// Delete the saved session. Succeeds when nothing is saved.
    fn clear(&self) -> StoreResult<()>;
}

/// SQLite-backed token store.
pub struct SqliteTokenStore {
    conn: Mutex<Connection>,
}

impl SqliteTokenStore {
    /// Open store at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// Create in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl TokenStore for SqliteTokenStore {
    fn load(&self) -> StoreResult<Option<StoredSession>> {
        let conn = self.conn.lock()?;
        let row = conn
            .query_row(
                "SELECT session_id, token, user_json, saved_at FROM auth_session WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((session_id, token, user_json, saved_at)) => {
                let user = user_json
                    .map(|json| serde_json::from_str(&json))
                    .transpose()?;
                Ok(Some(StoredSession {
                    session_id,
                    token,
                    user,
                    saved_at,
                }))
            }
            None => Ok(None),
        }
    }

    fn save(&self, session: &StoredSession) -> StoreResult<()> {
        let user_json = session.user.as_ref().map(serde_json::to_string).transpose()?;
        let conn = self.conn.lock()?;
        conn.execute(
            r#"
            INSERT INTO auth_session (id, session_id, token, user_json, saved_at)
            VALUES (1, ?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                session_id = excluded.session_id,
                token = excluded.token,
                user_json = excluded.user_json,
                saved_at = excluded.saved_at
            "#,
            params![session.session_id, session.token, user_json, session.saved_at],
        )?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        let conn = self.conn.lock()?;
        conn.execute("DELETE FROM auth_session", [])?;
        Ok(())
    }
}

/// Process-local token store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> StoreResult<Option<StoredSession>> {
        Ok(self.session.lock()?.clone())
    }

    fn save(&self, session: &StoredSession) -> StoreResult<()> {
        *self.session.lock()? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.session.lock()? = None;
        Ok(())
    }
}
