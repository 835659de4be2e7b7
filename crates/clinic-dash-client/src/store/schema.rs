//! SQLite schema definition.

/// Schema for the client-side session store.
///
/// Only the auth session is persisted; entity data is always refetched.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Auth Session (single row, replaced on login, deleted on logout)
-- ============================================================================

CREATE TABLE IF NOT EXISTS auth_session (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    session_id TEXT NOT NULL,
    token TEXT NOT NULL,
    user_json TEXT,                              -- JSON AuthenticatedUser
    saved_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
