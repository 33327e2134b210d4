//! Composite Simpson's 3/8 rule
use super::nodes_for;
use crate::error::InvalidArgument;
use crate::nodes::block_weight;
use crate::Rule;

const BLOCK: [f64; 4] = [1.0, 3.0, 3.0, 1.0];

/// Integrate `f` over `[a, b]` with the composite Simpson's 3/8 rule.
///
/// ```text
/// ∫f(x)dx ≈ (3h/8)·[f(x₀) + 3f(x₁) + 3f(x₂) + 2f(x₃) + 3f(x₄) + ... + f(xₙ)]
/// ```
///
/// Interior nodes at multiples of three close one block and open the next,
/// so they carry weight 2. Exact for cubics.
///
/// # Errors
///
/// Returns `InvalidArgument` if `n_panels` is zero or not a multiple of 3.
pub fn integrate_simpson38<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64,
{
    let nodes = nodes_for(Rule::Simpson38, a, b, n_panels)?;
    let sum = nodes.weighted_sum(f, |ix| block_weight(&BLOCK, ix, n_panels));
    Ok(3.0 * nodes.step() / 8.0 * sum)
}

/// Parallel version of [`integrate_simpson38`]
pub fn integrate_par<F>(
    f: F,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<f64, InvalidArgument>
where
    F: Fn(f64) -> f64 + Sync,
{
    let nodes = nodes_for(Rule::Simpson38, a, b, n_panels)?;
    let sum =
        nodes.weighted_sum_par(f, |ix| block_weight(&BLOCK, ix, n_panels));
    Ok(3.0 * nodes.step() / 8.0 * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_utils::Counted;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn spike_at(at: f64) -> impl Fn(f64) -> f64 {
        move |x| if (x - at).abs() < 1e-9 { 1.0 } else { 0.0 }
    }

    #[test]
    fn constant() {
        let q = integrate_simpson38(|_| 4.0, 0.0, 0.5, 3).unwrap();
        assert_relative_eq!(q, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_is_exact() {
        // ∫x³ on [-1, 2] = (16 - 1) / 4
        let q = integrate_simpson38(|x| x.powi(3), -1.0, 2.0, 6).unwrap();
        assert_relative_eq!(q, 3.75, epsilon = 1e-12);
    }

    #[test]
    fn block_boundary_weight_is_doubled() {
        let q = integrate_simpson38(spike_at(3.0), 0.0, 6.0, 6).unwrap();
        assert_relative_eq!(q, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn upper_endpoint_weight_is_one() {
        let q = integrate_simpson38(spike_at(6.0), 0.0, 6.0, 6).unwrap();
        assert_relative_eq!(q, 0.375, epsilon = 1e-12);
    }

    #[test]
    fn sin_over_zero_to_pi() {
        let q = integrate_simpson38(|x: f64| x.sin(), 0.0, PI, 12).unwrap();
        assert_relative_eq!(q, 2.000_119_386_4, epsilon = 1e-9);
    }

    #[test]
    fn panels_not_multiple_of_three_is_an_error() {
        let counted = Counted::new(|x| x);
        let err =
            integrate_simpson38(|x| counted.call(x), 0.0, 1.0, 8).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::PanelsNotMultiple {
                rule: Rule::Simpson38,
                n_panels: 8,
                multiple: 3,
            }
        );
        assert_eq!(counted.calls(), 0);
        assert!(integrate_simpson38(|x| x, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn evaluates_each_node_once() {
        let counted = Counted::new(|x: f64| x.sqrt());
        integrate_simpson38(|x| counted.call(x), 0.0, 1.0, 27).unwrap();
        assert_eq!(counted.calls(), 28);
    }
}
