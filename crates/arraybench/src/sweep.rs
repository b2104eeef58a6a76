//! Benchmark size sweeps.
//!
//! A [`SizeSweep`] expands into the list of problem sizes a benchmark group
//! runs over. `range` sweeps follow the classic microbenchmark framework
//! `Range(lo, hi)` rule: `lo`, every power of the multiplier strictly
//! between the bounds, then `hi`.

use crate::error::SweepError;

/// Multiplier used by [`SizeSweep::range`] unless overridden.
pub const DEFAULT_MULTIPLIER: usize = 8;

/// A parameter sweep over problem sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSweep {
    /// `lo`, powers of `mult` in `(lo, hi)`, `hi`.
    Range { lo: usize, hi: usize, mult: usize },
    /// `lo, lo + step, ...` up to and including `hi` when it lands on a step.
    Dense { lo: usize, hi: usize, step: usize },
    /// Explicit list, used as given.
    Fixed(&'static [usize]),
}

impl SizeSweep {
    pub const fn range(lo: usize, hi: usize) -> Self {
        SizeSweep::Range {
            lo,
            hi,
            mult: DEFAULT_MULTIPLIER,
        }
    }

    pub const fn dense(lo: usize, hi: usize, step: usize) -> Self {
        SizeSweep::Dense { lo, hi, step }
    }

    pub const fn fixed(sizes: &'static [usize]) -> Self {
        SizeSweep::Fixed(sizes)
    }

    /// Replace the range multiplier. No effect on other sweep kinds.
    pub const fn multiplier(self, mult: usize) -> Self {
        match self {
            SizeSweep::Range { lo, hi, .. } => SizeSweep::Range { lo, hi, mult },
            other => other,
        }
    }

    /// Expand into ascending sizes.
    pub fn sizes(&self) -> Result<Vec<usize>, SweepError> {
        match *self {
            SizeSweep::Range { lo, hi, mult } => expand_range(lo, hi, mult),
            SizeSweep::Dense { lo, hi, step } => {
                if lo > hi {
                    return Err(SweepError::EmptyRange { lo, hi });
                }
                if step == 0 {
                    return Err(SweepError::ZeroStep);
                }
                Ok((lo..=hi).step_by(step).collect())
            }
            SizeSweep::Fixed(sizes) => Ok(sizes.to_vec()),
        }
    }

    /// Sizes whose `size^rank` element count stays within `max_elements`.
    pub fn capped(&self, max_elements: usize, rank: u32) -> Result<Vec<usize>, SweepError> {
        let mut sizes = self.sizes()?;
        sizes.retain(|&n| n.checked_pow(rank).is_some_and(|total| total <= max_elements));
        Ok(sizes)
    }
}

fn expand_range(lo: usize, hi: usize, mult: usize) -> Result<Vec<usize>, SweepError> {
    if lo > hi {
        return Err(SweepError::EmptyRange { lo, hi });
    }
    if mult < 2 {
        return Err(SweepError::BadMultiplier(mult));
    }

    let mut out = vec![lo];
    if lo == hi {
        return Ok(out);
    }

    let mut power = 1usize;
    while power < hi {
        if power > lo {
            out.push(power);
        }
        match power.checked_mul(mult) {
            Some(next) => power = next,
            None => break,
        }
    }

    out.push(hi);
    Ok(out)
}

/// 1-D addition, 16 to 16384 elements.
pub const ADD_1D: SizeSweep = SizeSweep::range(16, 16 * 1024);
/// 2-D addition, 16x16 to 1024x1024.
pub const ADD_2D: SizeSweep = SizeSweep::range(16, 1024);
pub const VIEWS: SizeSweep = SizeSweep::range(3, 1000);
pub const BROADCAST: SizeSweep = SizeSweep::range(3, 1000);
pub const SCALAR: SizeSweep = SizeSweep::range(16, 1024);
pub const ITERATE: SizeSweep = SizeSweep::range(16, 1024);
pub const CONSTRUCT: SizeSweep = SizeSweep::range(3, 1000);
/// Tenths of the lazy-evaluation input that get consumed.
pub const LAZY_FRACTION: SizeSweep = SizeSweep::range(1, 10).multiplier(2);
pub const PAD: SizeSweep = SizeSweep::range(16, 1000);
/// Legacy 2-D addition and allocator sweeps.
pub const LEGACY: SizeSweep = SizeSweep::range(3, 100);
pub const LEGACY_1D: SizeSweep = SizeSweep::range(3, 1000);
