use newton_cotes::{QuadConfig, Rule};
use std::f64::consts::PI;

use crate::error::CliError;
use crate::integrand::Integrand;
use crate::opt;
use crate::run_config::RunConfig;

/// The quadratures of the demo, mirroring the classic sin(x) on [0, π] table
const DEMO: [(Rule, usize); 6] = [
    (Rule::Trapezoidal, 10),
    (Rule::Simpson13, 10),
    (Rule::NewtonCotesGeneral, 10),
    (Rule::Simpson38, 12),
    (Rule::Boole, 12),
    (Rule::Weddle, 12),
];

fn rule_name(rule: Rule) -> &'static str {
    match rule {
        Rule::Trapezoidal => "Trapezoidal rule",
        Rule::Simpson13 => "Simpson's 1/3 rule",
        Rule::Simpson38 => "Simpson's 3/8 rule",
        Rule::Boole => "Boole's rule",
        Rule::Weddle => "Weddle's rule",
        Rule::NewtonCotesGeneral => "General Newton-Cotes",
    }
}

fn format_row(config: &QuadConfig, value: f64) -> String {
    let label = format!("{} (n={})", rule_name(config.rule), config.n_panels);
    format!("{label:<32}{value:.10}")
}

fn quad_rows(
    integrand: Integrand,
    lower: f64,
    upper: f64,
    quadratures: &[QuadConfig],
) -> Result<Vec<String>, CliError> {
    quadratures
        .iter()
        .map(|config| {
            let value = config.integrate(|x| integrand.eval(x), lower, upper)?;
            Ok(format_row(config, value))
        })
        .collect()
}

fn demo_lines() -> Result<Vec<String>, CliError> {
    let quadratures: Vec<QuadConfig> = DEMO
        .iter()
        .map(|&(rule, n_panels)| QuadConfig::new(rule, n_panels))
        .collect();

    let mut lines = vec![
        String::from("Numerical integration of sin(x) from 0 to π"),
        String::new(),
    ];
    lines.extend(quad_rows(Integrand::Sin, 0.0, PI, &quadratures)?);
    lines.push(String::new());
    lines.push(String::from("Exact value: 2.0"));
    Ok(lines)
}

fn run_lines(config: &RunConfig) -> Result<Vec<String>, CliError> {
    config.validate()?;
    let mut lines = vec![
        format!(
            "Numerical integration of {} from {} to {}",
            config.integrand, config.lower, config.upper
        ),
        String::new(),
    ];
    lines.extend(quad_rows(
        config.integrand,
        config.lower,
        config.upper,
        &config.quadratures,
    )?);
    lines.push(String::new());
    lines.push(format!(
        "Exact value: {:.10}",
        config.integrand.exact(config.lower, config.upper)
    ));
    Ok(lines)
}

fn print_or_fail(lines: Result<Vec<String>, CliError>) -> i32 {
    match lines {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

pub fn demo() -> i32 {
    print_or_fail(demo_lines())
}

pub fn integrate(cmd: opt::IntegrateArgs) -> i32 {
    let config = cmd.quad_config();
    if config.n_panels != cmd.n_panels {
        log::info!(
            "{}: rounded {} panels up to {}",
            config.rule,
            cmd.n_panels,
            config.n_panels
        );
    }
    let lines = quad_rows(cmd.integrand, cmd.lower, cmd.upper, &[config]);
    print_or_fail(lines)
}

pub fn run(cmd: opt::RunArgs) -> i32 {
    let lines = RunConfig::from_path(&cmd.config)
        .and_then(|config| run_lines(&config));
    print_or_fail(lines)
}
