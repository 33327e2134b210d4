//! Closed Newton-Cotes quadrature
//!
//! Approximates `∫f(x)dx` over a finite interval `[a, b]` by partitioning it
//! into `n` equal panels and taking a weighted sum of `f` at the `n + 1` panel
//! boundaries.
//!
//! # Choosing a rule
//!
//! | Rule | Panels must be a multiple of | Exact to degree | Error |
//! |------|------------------------------|-----------------|-------|
//! | [`integrate_trapezoidal`] | 1 | 1 | O(h²) |
//! | [`integrate_simpson13`] | 2 | 3 | O(h⁴) |
//! | [`integrate_simpson38`] | 3 | 3 | O(h⁴) |
//! | [`integrate_boole`] | 4 | 5 | O(h⁶) |
//! | [`integrate_weddle`] | 6 | 5 | O(h⁶) |
//! | [`integrate_newton_cotes_general`] | 1 | 3 if panels are even | O(h⁴) if panels are even |
//!
//! Every rule evaluates the integrand exactly once per node, and validates
//! the panel count before evaluating anything.
//!
//! # Example
//!
//! ```
//! use newton_cotes::{Rule, integrate_simpson13};
//! use std::f64::consts::PI;
//!
//! let q = integrate_simpson13(|x: f64| x.sin(), 0.0, PI, 10).unwrap();
//! assert!((q - 2.0).abs() < 1e-3);
//!
//! // The rule can also be picked at run time
//! let rule: Rule = "boole".parse().unwrap();
//! let q = rule.integrate(|x: f64| x.sin(), 0.0, PI, 12).unwrap();
//! assert!((q - 2.0).abs() < 1e-5);
//! ```
#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]
pub mod config;
pub mod error;
mod nodes;
mod rule;
pub mod rules;

pub use config::QuadConfig;
pub use error::{InvalidArgument, ParseRuleError};
pub use rule::Rule;
pub use rules::{
    integrate_boole, integrate_newton_cotes_general, integrate_simpson13,
    integrate_simpson38, integrate_trapezoidal, integrate_weddle,
};
