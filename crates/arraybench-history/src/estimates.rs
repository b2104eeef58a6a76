//! Reading criterion's on-disk results.
//!
//! Criterion stores each benchmark under
//! `<criterion-dir>/<group>/<function>/<parameter>/<baseline>/`, with the
//! id in `benchmark.json` and the statistics in `estimates.json`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{HistoryError, Result};

const BENCHMARK_FILE: &str = "benchmark.json";
const ESTIMATES_FILE: &str = "estimates.json";

#[derive(Debug, Deserialize)]
struct BenchmarkMeta {
    full_id: String,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
    median: Estimate,
}

/// One benchmark's timing in one baseline, in nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub full_id: String,
    pub baseline: String,
    pub mean_ns: f64,
    pub median_ns: f64,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| HistoryError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| HistoryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| HistoryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

fn load(dir: &Path, baseline: &str) -> Result<Measurement> {
    let meta: BenchmarkMeta = read_json(&dir.join(BENCHMARK_FILE))?;
    let estimates: Estimates = read_json(&dir.join(ESTIMATES_FILE))?;
    Ok(Measurement {
        full_id: meta.full_id,
        baseline: baseline.to_string(),
        mean_ns: estimates.mean.point_estimate,
        median_ns: estimates.median.point_estimate,
    })
}

fn walk(dir: &Path, baselines: &[String], out: &mut Vec<Measurement>) -> Result<()> {
    for path in read_dir_sorted(dir)? {
        if !path.is_dir() {
            continue;
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        // HTML reports mirror the tree but hold no estimates
        if name == "report" {
            continue;
        }
        if let Some(baseline) = baselines.iter().find(|b| b.as_str() == name) {
            if path.join(BENCHMARK_FILE).is_file() {
                trace!("reading {}", path.display());
                out.push(load(&path, baseline)?);
                continue;
            }
        }
        walk(&path, baselines, out)?;
    }
    Ok(())
}

/// Collect every measurement saved under `dir` for the given baselines.
pub fn scan(dir: &Path, baselines: &[String]) -> Result<Vec<Measurement>> {
    if baselines.is_empty() {
        return Err(HistoryError::NoBaselines);
    }
    if !dir.is_dir() {
        return Err(HistoryError::MissingDir(dir.to_path_buf()));
    }

    let mut out = Vec::new();
    walk(dir, baselines, &mut out)?;
    debug!("found {} measurements under {}", out.len(), dir.display());

    if out.is_empty() {
        return Err(HistoryError::NoBenchmarks {
            dir: dir.to_path_buf(),
            baselines: baselines.to_vec(),
        });
    }
    Ok(out)
}
