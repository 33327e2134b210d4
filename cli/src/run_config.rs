use newton_cotes::QuadConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::integrand::Integrand;

/// A batch of quadratures of one integrand over one interval
///
/// ```yaml
/// integrand: sin
/// lower: 0.0
/// upper: 3.141592653589793
/// quadratures:
///   - rule: trapezoidal
///     n_panels: 10
///   - rule: boole
///     n_panels: 12
///     parallel: true
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub integrand: Integrand,
    pub lower: f64,
    pub upper: f64,
    pub quadratures: Vec<QuadConfig>,
}

impl RunConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    /// Check every quadrature before running any of them
    pub fn validate(&self) -> Result<(), CliError> {
        self.quadratures
            .iter()
            .try_for_each(|quad| quad.validate())
            .map_err(CliError::from)
    }
}
