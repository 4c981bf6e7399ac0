use crate::errors::{Axis, CapacityErrors};

/// Position of a query value on an ascending grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// The value equals `grid[i]`.
    Exact(usize),
    /// The value lies strictly between `grid[i]` and `grid[i + 1]`.
    Between(usize),
}

impl Bracket {
    /// Locates `x` on the ascending grid `xs`.
    /// Both ends of the grid are inclusive; anything outside (or NaN) is out of bounds.
    pub fn locate(xs: &[f64], x: f64, axis: Axis) -> Result<Self, CapacityErrors> {
        let (min, max) = match (xs.first(), xs.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Err(CapacityErrors::InsufficientGridPoints(xs.len())),
        };

        // NaN fails both comparisons, so it is rejected here as well
        if !(x >= min && x <= max) {
            return Err(CapacityErrors::OutOfBounds {
                axis,
                value: x,
                min,
                max,
            });
        }

        let idx = search_sorted(xs, x);
        if xs[idx] == x {
            Ok(Bracket::Exact(idx))
        } else {
            // x > min, so idx >= 1
            Ok(Bracket::Between(idx - 1))
        }
    }

    /// Evaluates the piecewise-linear curve `ys` (aligned with `xs`) at `x`.
    pub fn apply(&self, xs: &[f64], ys: &[f64], x: f64) -> f64 {
        match *self {
            Bracket::Exact(i) => ys[i],
            Bracket::Between(i) => {
                let (x0, x1) = (xs[i], xs[i + 1]);
                let (y0, y1) = (ys[i], ys[i + 1]);
                y0 + (x - x0) * (y1 - y0) / (x1 - x0)
            }
        }
    }
}

/// Linear interpolation of `ys` over the ascending grid `xs`, without extrapolation.
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64, axis: Axis) -> Result<f64, CapacityErrors> {
    debug_assert_eq!(xs.len(), ys.len());
    Bracket::locate(xs, x, axis).map(|bracket| bracket.apply(xs, ys, x))
}

/// Index of the first element of `xs` that is not less than `x`.
pub fn search_sorted(xs: &[f64], x: f64) -> usize {
    xs.partition_point(|&v| v < x)
}

/// The two adjacent grid values around `x`, for diagnostics.
///
/// Returns `None` when `x` is at or below the first grid value or above the
/// last one, so an exact hit on the minimum has no bracket.
pub fn surrounding(xs: &[f64], x: f64) -> Option<(f64, f64)> {
    let idx = search_sorted(xs, x);
    if idx > 0 && idx < xs.len() {
        Some((xs[idx - 1], xs[idx]))
    } else {
        None
    }
}
