//! Dataset loading
//!
//! The log sequence the dashboard reads. Either a JSON file or the built-in
//! demo data.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{DashboardStats, LogEntry, Macros};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the dataset came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum DatasetSource {
    Demo,
    File(PathBuf),
}

/// Dashboard stats plus the fully materialized log sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset file
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&content)?;
        if dataset.logs.is_empty() {
            warn!(path = %path.display(), "dataset has no log entries");
        }
        info!(path = %path.display(), entries = dataset.logs.len(), "dataset loaded");
        Ok(dataset)
    }

    /// Load from `path` when given, otherwise build the demo dataset
    pub fn load_or_demo(path: Option<&Path>) -> Result<(Self, DatasetSource), DatasetError> {
        match path {
            Some(path) => Ok((Self::load(path)?, DatasetSource::File(path.to_path_buf()))),
            None => {
                info!("no dataset path configured, serving demo data");
                Ok((Self::demo(Utc::now()), DatasetSource::Demo))
            }
        }
    }

    /// Two meals today and three yesterday, relative to `now`
    pub fn demo(now: DateTime<Utc>) -> Self {
        let yesterday = now - Duration::days(1);
        let log = |id: &str, at: DateTime<Utc>, food: &str, calories: u64, macros: Macros| {
            LogEntry::new(id, "user1", at, food, calories, macros)
        };

        Self {
            stats: DashboardStats::demo(),
            logs: vec![
                log("1", now, "Café da manhã: Pão integral com ovo", 280, Macros::new(28, 15, 12)),
                log("2", now, "Almoço: Frango grelhado com salada", 420, Macros::new(15, 45, 18)),
                log("3", yesterday, "Café da manhã: Iogurte com granola", 310, Macros::new(45, 12, 8)),
                log("4", yesterday, "Almoço: Salmão com legumes", 450, Macros::new(20, 38, 22)),
                log("5", yesterday, "Jantar: Sopa de legumes", 180, Macros::new(25, 8, 5)),
            ],
        }
    }
}
