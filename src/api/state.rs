//! Application state shared across all API handlers

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::directory::Directory;

/// One lock for all three stores: id allocation, the delete guard, cascade delete and
/// termination each read and write more than one collection.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<Directory>>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            start_time: std::time::Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
