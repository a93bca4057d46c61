//! Store configuration
//!
//! Host applications describe where and how records are persisted with a
//! [`StoreConfig`]; the factory turns it into a concrete backend. The storage
//! root is configuration, never a compiled-in constant.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which storage backend the factory should construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// One file per key under the configured root directory
    File,
    /// Volatile in-memory key/value area
    Memory,
}

/// Configuration for a flatstore instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory the file backend writes under; ignored by the memory backend
    pub root: PathBuf,
    /// Backend selection
    pub backend: BackendKind,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("flatstore-data"),
            backend: BackendKind::File,
        }
    }
}
