use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::errors::AppError;

pub struct AppState {
    pub db: Option<Arc<Mutex<Connection>>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn with_db<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let db = self.db.as_ref().ok_or(AppError::Unavailable)?;
        let conn = db
            .lock()
            .map_err(|e| AppError::Internal(format!("database lock poisoned: {e}")))?;
        f(&conn)
    }
}
