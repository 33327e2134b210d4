use crate::error::InvalidArgument;
use crate::Rule;
use serde::{Deserialize, Serialize};

/// Configuration for a single quadrature
///
/// Sets the rule, the number of panels, and whether the integrand is
/// evaluated on the rayon thread pool.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuadConfig {
    /// Which rule to integrate with
    pub rule: Rule,
    /// Number of panels to partition the interval into
    pub n_panels: usize,
    /// Evaluate the integrand in parallel
    #[serde(default)]
    pub parallel: bool,
}

impl QuadConfig {
    pub fn new(rule: Rule, n_panels: usize) -> Self {
        Self {
            rule,
            n_panels,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Round `n_panels` up to the nearest panel count the rule accepts
    pub fn round_panels(mut self) -> Self {
        self.n_panels = self.rule.round_panels(self.n_panels);
        self
    }

    pub fn validate(&self) -> Result<(), InvalidArgument> {
        self.rule.validate(self.n_panels)
    }

    /// Integrate `f` over `[a, b]`
    ///
    /// # Example
    ///
    /// ```
    /// use newton_cotes::{QuadConfig, Rule};
    ///
    /// let config = QuadConfig::new(Rule::Boole, 8).with_parallel(true);
    /// let q = config.integrate(|x: f64| x.powi(4), 0.0, 1.0).unwrap();
    /// assert!((q - 0.2).abs() < 1e-12);
    /// ```
    pub fn integrate<F>(
        &self,
        f: F,
        a: f64,
        b: f64,
    ) -> Result<f64, InvalidArgument>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        if self.parallel {
            self.rule.integrate_par(f, a, b, self.n_panels)
        } else {
            self.rule.integrate(f, a, b, self.n_panels)
        }
    }
}

impl Default for QuadConfig {
    fn default() -> Self {
        QuadConfig::new(Rule::Simpson13, 10)
    }
}
