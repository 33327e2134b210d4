//! Equally spaced quadrature nodes and the weighted sums over them
use rayon::prelude::*;

/// The n + 1 equally spaced nodes partitioning `[a, b]` into `n` panels.
///
/// Nodes are generated on demand: `x_i = a + i * h` for `i < n`, and the last
/// node is exactly `b` so that rounding in `h` never moves the upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Nodes {
    a: f64,
    b: f64,
    n_panels: usize,
    step: f64,
}

impl Nodes {
    /// Partition `[a, b]` into `n_panels` panels. `n_panels` must already be
    /// validated as nonzero.
    pub(crate) fn new(a: f64, b: f64, n_panels: usize) -> Self {
        assert!(n_panels > 0, "cannot partition an interval into 0 panels");
        Nodes {
            a,
            b,
            n_panels,
            step: (b - a) / n_panels as f64,
        }
    }

    /// The panel width, h
    #[inline]
    pub(crate) fn step(&self) -> f64 {
        self.step
    }

    /// The location of node `ix`
    #[inline]
    pub(crate) fn x(&self, ix: usize) -> f64 {
        if ix == self.n_panels {
            self.b
        } else {
            self.step.mul_add(ix as f64, self.a)
        }
    }

    /// Iterate over `(ix, x_ix)` in ascending order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..=self.n_panels).map(move |ix| (ix, self.x(ix)))
    }

    /// Compute `Σ weight(i) f(x_i)`, evaluating `f` once per node in ascending
    /// order.
    pub(crate) fn weighted_sum<F, W>(&self, f: F, weight: W) -> f64
    where
        F: Fn(f64) -> f64,
        W: Fn(usize) -> f64,
    {
        self.iter().fold(0.0, |acc, (ix, x)| weight(ix).mul_add(f(x), acc))
    }

    /// Like `weighted_sum`, but evaluates the nodes on the rayon thread pool.
    ///
    /// Each node is still evaluated exactly once; the order of the additions
    /// is unspecified, so the result may differ from `weighted_sum` in the
    /// last few bits.
    pub(crate) fn weighted_sum_par<F, W>(&self, f: F, weight: W) -> f64
    where
        F: Fn(f64) -> f64 + Sync,
        W: Fn(usize) -> f64 + Sync,
    {
        (0..=self.n_panels)
            .into_par_iter()
            .map(|ix| weight(ix) * f(self.x(ix)))
            .sum()
    }
}

/// The global weight of node `ix` in a composite rule made by repeating a
/// closed block formula.
///
/// `block` holds the `m + 1` weights of a block spanning `m` panels. Adjacent
/// blocks share their boundary node, so interior nodes at multiples of `m`
/// take the weight from both blocks.
#[inline]
pub(crate) fn block_weight(block: &[f64], ix: usize, n_panels: usize) -> f64 {
    let m = block.len() - 1;
    let offset = ix % m;
    if offset != 0 {
        block[offset]
    } else if ix == 0 {
        block[0]
    } else if ix == n_panels {
        block[m]
    } else {
        block[0] + block[m]
    }
}
