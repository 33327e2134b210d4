//! Composite Boole's rule
use super::nodes_for;
use crate::error::InvalidArgument;
use crate::nodes::block_weight;
use crate::Rule;

const BLOCK: [f64; 5] = [7.0, 32.0, 12.0, 32.0, 7.0];

/// Integrate `f` over `[a, b]` with the composite Boole's rule.
///
/// The panels are consumed four at a time. Each block with local nodes
/// `x0..x4` contributes
///
/// ```text
/// 7f(x0) + 32f(x1) + 12f(x2) + 32f(x3) + 7f(x4)
/// ```
///
/// and the total is scaled by `2h/45`. The last node of one block is the first
/// node of the next; it is evaluated once and counted by both blocks. Exact
/// for polynomials up to degree five. The error shrinks as O(h⁶).
///
/// # Errors
///
/// Returns `InvalidArgument` if `n_panels` is zero or not a multiple of 4.
///
/// # Example
///
/// ```
/// use newton_cotes::integrate_boole;
///
/// // ∫x⁵ on [0, 1]
/// let q = integrate_boole(|x: f64| x.powi(5), 0.0, 1.0, 4).unwrap();
/// assert!((q - 1.0 / 6.0).abs() < 1e-14);
/// ```
pub fn integrate_boole<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64,
{
    let nodes = nodes_for(Rule::Boole, a, b, n_panels)?;

    let mut f_left = f(nodes.x(0));
    let mut sum = 0.0;
    for start in (0..n_panels).step_by(4) {
        let f1 = f(nodes.x(start + 1));
        let f2 = f(nodes.x(start + 2));
        let f3 = f(nodes.x(start + 3));
        let f_right = f(nodes.x(start + 4));
        sum += 7.0 * (f_left + f_right) + 32.0 * (f1 + f3) + 12.0 * f2;
        f_left = f_right;
    }

    Ok(2.0 * nodes.step() / 45.0 * sum)
}

/// Parallel version of [`integrate_boole`]
pub fn integrate_par<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64 + Sync,
{
    let nodes = nodes_for(Rule::Boole, a, b, n_panels)?;
    let sum =
        nodes.weighted_sum_par(f, |ix| block_weight(&BLOCK, ix, n_panels));
    Ok(2.0 * nodes.step() / 45.0 * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_utils::Counted;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn constant() {
        let q = integrate_boole(|_| 1.5, 2.0, 4.0, 8).unwrap();
        assert_relative_eq!(q, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn quintic_is_exact() {
        // ∫(x⁵ - x⁴ + 3x) on [-1, 1] = 0 - 2/5 + 0
        let f = |x: f64| x.powi(5) - x.powi(4) + 3.0 * x;
        let q = integrate_boole(f, -1.0, 1.0, 8).unwrap();
        assert_relative_eq!(q, -0.4, epsilon = 1e-12);
    }

    #[test]
    fn shared_block_node_counts_for_both_blocks() {
        // Only x4 is nonzero: weight 7 + 7 with h = 1
        let spike = |x: f64| if (x - 4.0).abs() < 1e-9 { 1.0 } else { 0.0 };
        let q = integrate_boole(spike, 0.0, 8.0, 8).unwrap();
        assert_relative_eq!(q, 2.0 * 14.0 / 45.0, epsilon = 1e-12);
    }

    #[test]
    fn sin_converges_quickly() {
        let q = integrate_boole(|x: f64| x.sin(), 0.0, PI, 12).unwrap();
        assert_relative_eq!(q, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn ten_panels_is_an_error() {
        let counted = Counted::new(|x| x);
        let err =
            integrate_boole(|x| counted.call(x), 0.0, 1.0, 10).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::PanelsNotMultiple {
                rule: Rule::Boole,
                n_panels: 10,
                multiple: 4,
            }
        );
        assert_eq!(counted.calls(), 0);
        assert!(integrate_boole(|x| x, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn evaluates_each_node_once() {
        let counted = Counted::new(|x: f64| x.ln_1p());
        integrate_boole(|x| counted.call(x), 0.0, 1.0, 16).unwrap();
        assert_eq!(counted.calls(), 17);
    }

    #[test]
    fn parallel_agrees() {
        let seq = integrate_boole(|x: f64| x.cos(), 0.0, 3.0, 40).unwrap();
        let par = integrate_par(|x: f64| x.cos(), 0.0, 3.0, 40).unwrap();
        assert_relative_eq!(seq, par, max_relative = 1e-12);
    }
}
