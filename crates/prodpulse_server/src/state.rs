//! Shared server state.

use prodpulse_core::db::Connection;
use std::sync::Mutex;

/// State behind every route handler.
///
/// One SQLite connection serialized by a mutex: each request runs as a
/// single unit of work against the store, which owns all further
/// concurrency control. No other mutable state is shared across requests.
pub struct AppState {
    conn: Mutex<Connection>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Runs `f` with exclusive access to the connection.
    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> T) -> T {
        let conn = self.conn.lock().expect("connection lock poisoned");
        f(&conn)
    }
}
