//! Simpson-pattern Newton-Cotes for any number of panels
use super::nodes_for;
use crate::error::InvalidArgument;
use crate::Rule;
use log::warn;

#[inline]
fn weight(ix: usize, n_panels: usize) -> f64 {
    if ix == 0 || ix == n_panels {
        1.0
    } else if ix % 2 == 1 {
        4.0
    } else {
        2.0
    }
}

/// Integrate `f` over `[a, b]` with Simpson's 1/3 weights without requiring
/// an even number of panels.
///
/// Interior nodes alternate between weight 4 (odd index) and 2 (even index),
/// the endpoints take weight 1, and the sum is scaled by `h/3`. For an even
/// `n_panels` this is exactly [`integrate_simpson13`]. For an odd `n_panels`
/// the last panel has no partner and the result is only an approximation, off
/// by O(h) rather than O(h⁴); a warning is logged in that case.
///
/// [`integrate_simpson13`]: crate::integrate_simpson13
///
/// # Errors
///
/// Returns `InvalidArgument::NoPanels` if `n_panels` is zero.
pub fn integrate_newton_cotes_general<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64,
{
    let nodes = nodes_for(Rule::NewtonCotesGeneral, a, b, n_panels)?;
    warn_if_odd(n_panels);
    let sum = nodes.weighted_sum(f, |ix| weight(ix, n_panels));
    Ok(nodes.step() / 3.0 * sum)
}

/// Parallel version of [`integrate_newton_cotes_general`]
pub fn integrate_par<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64 + Sync,
{
    let nodes = nodes_for(Rule::NewtonCotesGeneral, a, b, n_panels)?;
    warn_if_odd(n_panels);
    let sum = nodes.weighted_sum_par(f, |ix| weight(ix, n_panels));
    Ok(nodes.step() / 3.0 * sum)
}

fn warn_if_odd(n_panels: usize) {
    if n_panels % 2 == 1 {
        warn!(
            "{}: {n_panels} panels is odd; Simpson weights on an odd number \
             of panels only approximate the integral",
            Rule::NewtonCotesGeneral
        );
    }
}
