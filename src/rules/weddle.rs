//! Composite Weddle's rule
use super::nodes_for;
use crate::error::InvalidArgument;
use crate::nodes::block_weight;
use crate::Rule;

const BLOCK: [f64; 7] = [1.0, 5.0, 1.0, 6.0, 1.0, 5.0, 1.0];

/// Integrate `f` over `[a, b]` with the composite Weddle's rule.
///
/// Each block of six panels with local nodes `x0..x6` contributes
///
/// ```text
/// f(x0) + 5f(x1) + f(x2) + 6f(x3) + f(x4) + 5f(x5) + f(x6)
/// ```
///
/// and the total is scaled by `3h/10`. Interior nodes at multiples of six are
/// shared by two blocks and carry weight 2.
///
/// Weddle's weights perturb the seven-point Newton-Cotes weights to make them
/// small integers, which costs one degree: the rule is exact up to degree
/// five, not six.
///
/// # Errors
///
/// Returns `InvalidArgument` if `n_panels` is zero or not a multiple of 6.
pub fn integrate_weddle<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64,
{
    let nodes = nodes_for(Rule::Weddle, a, b, n_panels)?;
    let sum = nodes.weighted_sum(f, |ix| block_weight(&BLOCK, ix, n_panels));
    Ok(0.3 * nodes.step() * sum)
}

/// Parallel version of [`integrate_weddle`]
pub fn integrate_par<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64 + Sync,
{
    let nodes = nodes_for(Rule::Weddle, a, b, n_panels)?;
    let sum =
        nodes.weighted_sum_par(f, |ix| block_weight(&BLOCK, ix, n_panels));
    Ok(0.3 * nodes.step() * sum)
}
