use std::sync::Arc;

use crate::storage::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<tokio::sync::Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(tokio::sync::Mutex::new(db)),
        }
    }
}
