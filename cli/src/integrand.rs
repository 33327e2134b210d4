//! Integrands with known antiderivatives
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integrand '{0}'")]
pub struct ParseIntegrandError(String);

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Integrand {
    /// sin(x)
    Sin,
    /// cos(x)
    Cos,
    /// exp(x)
    Exp,
    /// x²
    Square,
    /// x³
    Cube,
    /// x⁵
    Quintic,
    /// 1 / (1 + x)
    Inv,
}

impl Integrand {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Exp => x.exp(),
            Self::Square => x * x,
            Self::Cube => x.powi(3),
            Self::Quintic => x.powi(5),
            Self::Inv => (1.0 + x).recip(),
        }
    }

    fn antiderivative(&self, x: f64) -> f64 {
        match self {
            Self::Sin => -x.cos(),
            Self::Cos => x.sin(),
            Self::Exp => x.exp(),
            Self::Square => x.powi(3) / 3.0,
            Self::Cube => x.powi(4) / 4.0,
            Self::Quintic => x.powi(6) / 6.0,
            Self::Inv => x.ln_1p(),
        }
    }

    /// The exact integral over `[a, b]`
    pub fn exact(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

impl fmt::Display for Integrand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Exp => "exp",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Quintic => "quintic",
            Self::Inv => "inv",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Integrand {
    type Err = ParseIntegrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "exp" => Ok(Self::Exp),
            "square" => Ok(Self::Square),
            "cube" => Ok(Self::Cube),
            "quintic" => Ok(Self::Quintic),
            "inv" => Ok(Self::Inv),
            _ => Err(ParseIntegrandError(s.to_owned())),
        }
    }
}
