//! Composite trapezoidal rule
use super::nodes_for;
use crate::error::InvalidArgument;
use crate::nodes::block_weight;
use crate::Rule;

const BLOCK: [f64; 2] = [1.0, 1.0];

/// Integrate `f` over `[a, b]` with the composite trapezoidal rule.
///
/// ```text
/// ∫f(x)dx ≈ (h/2)·[f(x₀) + f(xₙ)] + h·[f(x₁) + ... + f(xₙ₋₁)]
/// ```
///
/// Exact for polynomials of degree one. The error shrinks as O(h²).
///
/// # Errors
///
/// Returns `InvalidArgument::NoPanels` if `n_panels` is zero.
///
/// # Example
///
/// ```
/// use newton_cotes::integrate_trapezoidal;
/// use std::f64::consts::PI;
///
/// let q = integrate_trapezoidal(|x: f64| x.sin(), 0.0, PI, 10).unwrap();
/// assert!((q - 1.9835235375).abs() < 1e-10);
/// ```
pub fn integrate_trapezoidal<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64,
{
    let nodes = nodes_for(Rule::Trapezoidal, a, b, n_panels)?;
    let h = nodes.step();

    let f_first = f(nodes.x(0));
    let interior: f64 = (1..n_panels).map(|ix| f(nodes.x(ix))).sum();
    let f_last = f(nodes.x(n_panels));

    Ok(0.5 * h * (f_first + f_last) + h * interior)
}

/// Parallel version of [`integrate_trapezoidal`]
pub fn integrate_par<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64 + Sync,
{
    let nodes = nodes_for(Rule::Trapezoidal, a, b, n_panels)?;
    let sum =
        nodes.weighted_sum_par(f, |ix| block_weight(&BLOCK, ix, n_panels));
    Ok(0.5 * nodes.step() * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_utils::Counted;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn constant() {
        let q = integrate_trapezoidal(|_| 3.0, 1.0, 5.0, 7).unwrap();
        assert_relative_eq!(q, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_is_exact_with_one_panel() {
        let q = integrate_trapezoidal(|x| 2.0 * x - 1.0, 0.0, 3.0, 1).unwrap();
        assert_relative_eq!(q, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn quadratic_is_overestimated() {
        // ∫x² on [0, 1] = 1/3, overshot by (b - a)·h²·f''/12
        let q = integrate_trapezoidal(|x| x * x, 0.0, 1.0, 4).unwrap();
        assert_relative_eq!(q, 1.0 / 3.0 + 1.0 / 96.0, epsilon = 1e-12);
    }

    #[test]
    fn sin_over_zero_to_pi() {
        let q = integrate_trapezoidal(|x: f64| x.sin(), 0.0, PI, 10).unwrap();
        assert_relative_eq!(q, 1.983_523_537_5, epsilon = 1e-10);
    }

    #[test]
    fn reversed_bounds_flip_sign() {
        let fwd = integrate_trapezoidal(|x: f64| x.exp(), 0.0, 1.0, 9).unwrap();
        let rev = integrate_trapezoidal(|x: f64| x.exp(), 1.0, 0.0, 9).unwrap();
        assert_relative_eq!(fwd, -rev, epsilon = 1e-14);
    }

    #[test]
    fn zero_panels_is_an_error() {
        let counted = Counted::new(|x| x);
        let err = integrate_trapezoidal(|x| counted.call(x), 0.0, 1.0, 0)
            .unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::NoPanels {
                rule: Rule::Trapezoidal
            }
        );
        assert_eq!(counted.calls(), 0);
    }

    #[test]
    fn evaluates_each_node_once() {
        let counted = Counted::new(|x: f64| x.cos());
        integrate_trapezoidal(|x| counted.call(x), 0.0, 2.0, 13).unwrap();
        assert_eq!(counted.calls(), 14);
    }

    #[test]
    fn parallel_agrees() {
        let seq =
            integrate_trapezoidal(|x: f64| x.sin(), 0.0, PI, 100).unwrap();
        let par = integrate_par(|x: f64| x.sin(), 0.0, PI, 100).unwrap();
        assert_relative_eq!(seq, par, max_relative = 1e-12);
    }
}
