//! Compare arraybench timings across saved criterion baselines.
//!
//! Run the suite once per library version with
//! `cargo bench --bench suite -- --save-baseline <name>`, then point this
//! tool at `target/criterion` with every baseline name to see how each
//! benchmark moved.

pub mod compare;
pub mod error;
pub mod estimates;
pub mod render;

pub use compare::{compare, Cell, Comparison, Row};
pub use error::{HistoryError, Result};
pub use estimates::{scan, Measurement};
pub use render::{render, Format};

use std::path::Path;

/// Scan, compare and render in one step.
pub fn report(
    dir: &Path,
    baselines: &[String],
    filter: Option<&str>,
    format: Format,
) -> Result<String> {
    let measurements = scan(dir, baselines)?;
    let cmp = compare(&measurements, baselines, filter);
    if cmp.is_empty() {
        log::warn!("no benchmark ids match filter {:?}", filter.unwrap_or_default());
    }
    render(&cmp, format)
}
