//! Lining up measurements from several baselines.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::estimates::Measurement;

/// Timings of one baseline for one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub mean_ns: f64,
    pub median_ns: f64,
    /// Mean relative to the first baseline, when both were measured.
    pub ratio: Option<f64>,
}

/// One benchmark across every requested baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub full_id: String,
    /// One entry per baseline, in the requested order.
    pub cells: Vec<Option<Cell>>,
}

/// Rows sorted by benchmark id, with one column per baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub baselines: Vec<String>,
    pub rows: Vec<Row>,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group `measurements` by `full_id`, keeping ids that contain `filter`.
pub fn compare(
    measurements: &[Measurement],
    baselines: &[String],
    filter: Option<&str>,
) -> Comparison {
    let mut by_id: BTreeMap<&str, Vec<Option<&Measurement>>> = BTreeMap::new();
    for m in measurements {
        if filter.is_some_and(|f| !m.full_id.contains(f)) {
            continue;
        }
        let Some(col) = baselines.iter().position(|b| *b == m.baseline) else {
            continue;
        };
        let slots = by_id
            .entry(m.full_id.as_str())
            .or_insert_with(|| vec![None; baselines.len()]);
        slots[col] = Some(m);
    }

    let rows = by_id
        .into_iter()
        .map(|(full_id, slots)| {
            let reference = slots.first().copied().flatten().map(|m| m.mean_ns);
            let cells = slots
                .iter()
                .map(|slot| {
                    slot.map(|m| Cell {
                        mean_ns: m.mean_ns,
                        median_ns: m.median_ns,
                        ratio: reference.filter(|&r| r > 0.0).map(|r| m.mean_ns / r),
                    })
                })
                .collect();
            Row {
                full_id: full_id.to_string(),
                cells,
            }
        })
        .collect();

    Comparison {
        baselines: baselines.to_vec(),
        rows,
    }
}
