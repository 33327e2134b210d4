//! Composite closed Newton-Cotes rules
//!
//! Every rule partitions `[a, b]` into `n` panels of width `h = (b - a) / n`,
//! evaluates the integrand once at each of the `n + 1` nodes, and returns a
//! weighted sum of those values scaled by a multiple of `h`.
//!
//! | Rule | Panels per block | Weights | Scale | Exact to degree |
//! |------|------------------|---------|-------|-----------------|
//! | [`integrate_trapezoidal`] | 1 | 1 1 | h/2 | 1 |
//! | [`integrate_simpson13`] | 2 | 1 4 1 | h/3 | 3 |
//! | [`integrate_simpson38`] | 3 | 1 3 3 1 | 3h/8 | 3 |
//! | [`integrate_boole`] | 4 | 7 32 12 32 7 | 2h/45 | 5 |
//! | [`integrate_weddle`] | 6 | 1 5 1 6 1 5 1 | 3h/10 | 5 |
//!
//! The number of panels must be a multiple of the block size. Neighboring
//! blocks share a node, which is evaluated once and carries the weight of
//! both blocks.
//!
//! [`integrate_newton_cotes_general`] applies the Simpson 1/3 weights without
//! checking that the number of panels is even.
pub mod boole;
pub mod general;
pub mod simpson13;
pub mod simpson38;
pub mod trapezoidal;
pub mod weddle;

pub use boole::integrate_boole;
pub use general::integrate_newton_cotes_general;
pub use simpson13::integrate_simpson13;
pub use simpson38::integrate_simpson38;
pub use trapezoidal::integrate_trapezoidal;
pub use weddle::integrate_weddle;

use crate::error::InvalidArgument;
use crate::nodes::Nodes;
use crate::Rule;
use log::debug;

/// Validate the panel count for `rule` and lay out the nodes
pub(crate) fn nodes_for(
    rule: Rule,
    a: f64,
    b: f64,
    n_panels: usize,
) -> Result<Nodes, InvalidArgument> {
    rule.validate(n_panels)?;
    let nodes = Nodes::new(a, b, n_panels);
    debug!(
        "{rule}: integrating over [{a}, {b}] with {n_panels} panels (h = {})",
        nodes.step()
    );
    Ok(nodes)
}
