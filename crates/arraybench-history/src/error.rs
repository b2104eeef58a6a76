use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a criterion output tree.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("criterion directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no benchmarks for baseline(s) {baselines:?} under {}", dir.display())]
    NoBenchmarks { dir: PathBuf, baselines: Vec<String> },

    #[error("failed to serialize comparison: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("at least one baseline is required")]
    NoBaselines,
}

pub type Result<T> = std::result::Result<T, HistoryError>;
