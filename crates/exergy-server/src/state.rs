//! Application State

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Root of the built frontend
    pub site_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_dir: Arc::new(site_dir.into()),
        }
    }

    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Document served for every client-side route
    pub fn index_path(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }

    pub fn index_available(&self) -> bool {
        self.index_path().is_file()
    }
}
