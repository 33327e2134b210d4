use clap::Parser;
use newton_cotes::{QuadConfig, Rule};
use std::path::PathBuf;

use crate::integrand::Integrand;

#[derive(Parser, Debug)]
pub struct IntegrateArgs {
    /// The quadrature rule: trapezoidal, simpson13, simpson38, boole, weddle,
    /// or newton_cotes_general
    #[clap(long, short)]
    pub rule: Rule,
    /// The function to integrate: sin, cos, exp, square, cube, quintic, or inv
    #[clap(long, short, default_value = "sin")]
    pub integrand: Integrand,
    /// Lower bound of the interval
    #[clap(long, short = 'a', allow_negative_numbers = true)]
    pub lower: f64,
    /// Upper bound of the interval
    #[clap(long, short = 'b', allow_negative_numbers = true)]
    pub upper: f64,
    /// The number of panels
    #[clap(long = "panels", short = 'n', default_value = "12")]
    pub n_panels: usize,
    /// Round the number of panels up to the nearest count the rule accepts
    #[clap(long)]
    pub round: bool,
    /// Evaluate the integrand in parallel
    #[clap(long, short)]
    pub parallel: bool,
}

impl IntegrateArgs {
    pub fn quad_config(&self) -> QuadConfig {
        let config = QuadConfig::new(self.rule, self.n_panels)
            .with_parallel(self.parallel);
        if self.round {
            config.round_panels()
        } else {
            config
        }
    }
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the run config yaml
    #[clap(name = "RUN_CONFIG")]
    pub config: PathBuf,
}

#[derive(Parser, Debug)]
#[clap(
    name = "newton-cotes",
    version,
    about = "Closed Newton-Cotes quadrature"
)]
pub enum Opt {
    /// Integrate sin(x) over [0, π] with every rule
    #[clap(name = "demo")]
    Demo,
    /// Integrate a built-in function with one rule
    #[clap(name = "integrate")]
    Integrate(IntegrateArgs),
    /// Run every quadrature in a yaml config
    #[clap(name = "run")]
    Run(RunArgs),
}
