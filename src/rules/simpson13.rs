//! Composite Simpson's 1/3 rule
use super::nodes_for;
use crate::error::InvalidArgument;
use crate::nodes::block_weight;
use crate::Rule;

const BLOCK: [f64; 3] = [1.0, 4.0, 1.0];

/// Integrate `f` over `[a, b]` with the composite Simpson's 1/3 rule.
///
/// ```text
/// ∫f(x)dx ≈ (h/3)·[f(x₀) + 4f(x₁) + 2f(x₂) + 4f(x₃) + ... + 4f(xₙ₋₁) + f(xₙ)]
/// ```
///
/// Exact for cubics. The error shrinks as O(h⁴).
///
/// # Errors
///
/// Returns `InvalidArgument` if `n_panels` is zero or odd.
///
/// # Example
///
/// ```
/// use newton_cotes::integrate_simpson13;
/// use std::f64::consts::PI;
///
/// let q = integrate_simpson13(|x: f64| x.sin(), 0.0, PI, 10).unwrap();
/// assert!((q - 2.0001095173).abs() < 1e-10);
///
/// assert!(integrate_simpson13(|x: f64| x.sin(), 0.0, PI, 7).is_err());
/// ```
pub fn integrate_simpson13<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64,
{
    let nodes = nodes_for(Rule::Simpson13, a, b, n_panels)?;

    let mut ends = f(nodes.x(0));
    let mut odd = 0.0;
    let mut even = 0.0;
    for ix in 1..n_panels {
        let fx = f(nodes.x(ix));
        if ix % 2 == 1 {
            odd += fx;
        } else {
            even += fx;
        }
    }
    ends += f(nodes.x(n_panels));

    Ok(nodes.step() / 3.0 * (ends + 4.0 * odd + 2.0 * even))
}

/// Parallel version of [`integrate_simpson13`]
pub fn integrate_par<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64 + Sync,
{
    let nodes = nodes_for(Rule::Simpson13, a, b, n_panels)?;
    let sum =
        nodes.weighted_sum_par(f, |ix| block_weight(&BLOCK, ix, n_panels));
    Ok(nodes.step() / 3.0 * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_utils::Counted;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn constant() {
        let q = integrate_simpson13(|_| -2.5, -1.0, 3.0, 4).unwrap();
        assert_relative_eq!(q, -10.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_is_exact() {
        // ∫(x³ - 2x + 1) on [0, 2] = 4 - 4 + 2
        let q = integrate_simpson13(|x| x.powi(3) - 2.0 * x + 1.0, 0.0, 2.0, 2)
            .unwrap();
        assert_relative_eq!(q, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn quartic_is_not_exact() {
        let q = integrate_simpson13(|x| x.powi(4), 0.0, 1.0, 2).unwrap();
        // (1/6)·(0 + 4/16 + 1)
        assert_relative_eq!(q, 5.0 / 24.0, epsilon = 1e-12);
        assert!((q - 0.2).abs() > 1e-3);
    }

    #[test]
    fn sin_over_zero_to_pi() {
        let q = integrate_simpson13(|x: f64| x.sin(), 0.0, PI, 10).unwrap();
        assert_relative_eq!(q, 2.000_109_517_3, epsilon = 1e-10);
    }

    #[test]
    fn odd_panels_is_an_error() {
        let counted = Counted::new(|x| x);
        let err =
            integrate_simpson13(|x| counted.call(x), 0.0, 1.0, 7).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::PanelsNotMultiple {
                rule: Rule::Simpson13,
                n_panels: 7,
                multiple: 2,
            }
        );
        assert_eq!(counted.calls(), 0);
    }

    #[test]
    fn zero_panels_is_an_error() {
        assert_eq!(
            integrate_simpson13(|x| x, 0.0, 1.0, 0),
            Err(InvalidArgument::NoPanels {
                rule: Rule::Simpson13
            })
        );
    }

    #[test]
    fn evaluates_each_node_once() {
        let counted = Counted::new(|x: f64| x.exp());
        integrate_simpson13(|x| counted.call(x), 0.0, 1.0, 20).unwrap();
        assert_eq!(counted.calls(), 21);
    }

    #[test]
    fn parallel_agrees() {
        let seq = integrate_simpson13(|x: f64| x.exp(), 0.0, 2.0, 64).unwrap();
        let par = integrate_par(|x: f64| x.exp(), 0.0, 2.0, 64).unwrap();
        assert_relative_eq!(seq, par, max_relative = 1e-12);
    }
}
