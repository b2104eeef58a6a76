//! Text and JSON output for a [`Comparison`].

use std::fmt::Write as _;

use clap::ValueEnum;

use crate::compare::{Cell, Comparison};
use crate::error::Result;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

fn format_time(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.3} s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.3} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.3} us", ns / 1e3)
    } else {
        format!("{:.1} ns", ns)
    }
}

fn format_cell(cell: &Option<Cell>) -> String {
    match cell {
        None => "-".to_string(),
        Some(cell) => match cell.ratio {
            Some(ratio) => format!("{} ({:.2}x)", format_time(cell.mean_ns), ratio),
            None => format_time(cell.mean_ns),
        },
    }
}

/// Aligned text table: benchmark id, then the mean per baseline.
pub fn table(cmp: &Comparison) -> String {
    let header: Vec<String> = std::iter::once("benchmark".to_string())
        .chain(cmp.baselines.iter().cloned())
        .collect();
    let body: Vec<Vec<String>> = cmp
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.full_id.clone())
                .chain(row.cells.iter().map(format_cell))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for line in &body {
        for (w, field) in widths.iter_mut().zip(line) {
            *w = (*w).max(field.len());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&body) {
        let mut fields = line.iter().zip(&widths);
        if let Some((id, w)) = fields.next() {
            let _ = write!(out, "{:<w$}", id, w = *w);
        }
        for (field, w) in fields {
            let _ = write!(out, "  {:>w$}", field, w = *w);
        }
        out.push('\n');
    }
    out
}

pub fn json(cmp: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(cmp)?)
}

pub fn render(cmp: &Comparison, format: Format) -> Result<String> {
    match format {
        Format::Table => Ok(table(cmp)),
        Format::Json => json(cmp),
    }
}
