//! 2-D padding in constant, symmetric and periodic modes.
//!
//! Symmetric mirrors including the edge element, so `[a b c]` padded by two
//! on each side is `b a | a b c | c b`. Periodic wraps around. Widths wider
//! than the input keep mirroring or wrapping.

use crate::element::Element;
use crate::error::PadError;

#[cfg(feature = "ndarray")]
use ndarray::{s, Array2, ArrayBase, Data, Ix2};

/// How the border is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadMode<T> {
    Constant(T),
    Symmetric,
    Periodic,
}

impl<T> PadMode<T> {
    pub fn name(&self) -> &'static str {
        match self {
            PadMode::Constant(_) => "constant",
            PadMode::Symmetric => "symmetric",
            PadMode::Periodic => "periodic",
        }
    }
}

/// `(before, after)` widths for the row and column axes.
pub type PadWidths = [(usize, usize); 2];

fn padded_extent(n: usize, (before, after): (usize, usize)) -> Result<usize, PadError> {
    n.checked_add(before)
        .and_then(|v| v.checked_add(after))
        .ok_or(PadError::Overflow)
}

/// Source index along one axis for output position `out`, `None` for the
/// constant border.
fn source_index<T>(out: usize, before: usize, n: usize, mode: &PadMode<T>) -> Option<usize> {
    let rel = out as isize - before as isize;
    if (0..n as isize).contains(&rel) {
        return Some(rel as usize);
    }
    match mode {
        PadMode::Constant(_) => None,
        PadMode::Symmetric => {
            let period = 2 * n as isize;
            let m = rel.rem_euclid(period) as usize;
            Some(if m < n { m } else { 2 * n - 1 - m })
        }
        PadMode::Periodic => Some(rel.rem_euclid(n as isize) as usize),
    }
}

fn axis_map<T>(out_len: usize, before: usize, n: usize, mode: &PadMode<T>) -> Vec<Option<usize>> {
    (0..out_len).map(|i| source_index(i, before, n, mode)).collect()
}

/// Pad a row-major `rows x cols` slice into a new row-major buffer.
pub fn pad_slice2d<T: Element>(
    data: &[T],
    rows: usize,
    cols: usize,
    widths: PadWidths,
    mode: PadMode<T>,
) -> Result<Vec<T>, PadError> {
    if data.len() != rows * cols {
        return Err(PadError::ShapeMismatch {
            len: data.len(),
            rows,
            cols,
        });
    }
    let out_rows = padded_extent(rows, widths[0])?;
    let out_cols = padded_extent(cols, widths[1])?;
    let fill = match mode {
        PadMode::Constant(value) => value,
        _ if rows == 0 || cols == 0 => return Err(PadError::EmptyInput { mode: mode.name() }),
        _ => T::ZERO,
    };

    let row_map = axis_map(out_rows, widths[0].0, rows, &mode);
    let col_map = axis_map(out_cols, widths[1].0, cols, &mode);

    let mut out = Vec::with_capacity(out_rows * out_cols);
    for r in &row_map {
        for c in &col_map {
            out.push(match (r, c) {
                (Some(r), Some(c)) => data[r * cols + c],
                _ => fill,
            });
        }
    }
    Ok(out)
}

/// Pad an ndarray matrix.
#[cfg(feature = "ndarray")]
pub fn pad2d<T, S>(
    input: &ArrayBase<S, Ix2>,
    widths: PadWidths,
    mode: PadMode<T>,
) -> Result<Array2<T>, PadError>
where
    T: Element,
    S: Data<Elem = T>,
{
    let (rows, cols) = input.dim();
    let out_rows = padded_extent(rows, widths[0])?;
    let out_cols = padded_extent(cols, widths[1])?;
    let (top, left) = (widths[0].0, widths[1].0);

    if let PadMode::Constant(value) = mode {
        let mut out = Array2::from_elem((out_rows, out_cols), value);
        out.slice_mut(s![top..top + rows, left..left + cols])
            .assign(input);
        return Ok(out);
    }
    if rows == 0 || cols == 0 {
        return Err(PadError::EmptyInput { mode: mode.name() });
    }

    let row_map = axis_map(out_rows, top, rows, &mode);
    let col_map = axis_map(out_cols, left, cols, &mode);
    Ok(Array2::from_shape_fn((out_rows, out_cols), |(i, j)| {
        match (row_map[i], col_map[j]) {
            (Some(r), Some(c)) => input[[r, c]],
            _ => T::ZERO,
        }
    }))
}
