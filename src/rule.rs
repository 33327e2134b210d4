//! The closed Newton-Cotes rules and what each one requires of its panels
use crate::error::{InvalidArgument, ParseRuleError};
use crate::rules;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A closed Newton-Cotes composite rule
#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    Eq,
    PartialEq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Two-point rule, one panel per block
    Trapezoidal,
    /// Three-point rule, two panels per block
    Simpson13,
    /// Four-point rule, three panels per block
    Simpson38,
    /// Five-point rule, four panels per block
    Boole,
    /// Seven-point rule, six panels per block
    Weddle,
    /// The Simpson 1/3 weight pattern applied to any number of panels. Only a
    /// proper composite rule when the number of panels is even.
    NewtonCotesGeneral,
}

impl Rule {
    /// Every rule, ordered by block size
    pub const ALL: [Rule; 6] = [
        Rule::Trapezoidal,
        Rule::Simpson13,
        Rule::Simpson38,
        Rule::Boole,
        Rule::Weddle,
        Rule::NewtonCotesGeneral,
    ];

    /// The number the panel count must be a multiple of
    pub fn panel_multiple(&self) -> usize {
        match self {
            Self::Trapezoidal | Self::NewtonCotesGeneral => 1,
            Self::Simpson13 => 2,
            Self::Simpson38 => 3,
            Self::Boole => 4,
            Self::Weddle => 6,
        }
    }

    /// The highest degree of polynomial the rule integrates exactly.
    ///
    /// For `NewtonCotesGeneral` this only holds for an even number of panels.
    pub fn degree_of_exactness(&self) -> u32 {
        match self {
            Self::Trapezoidal => 1,
            Self::Simpson13 | Self::Simpson38 | Self::NewtonCotesGeneral => 3,
            Self::Boole | Self::Weddle => 5,
        }
    }

    /// The power of h the composite error shrinks with for smooth integrands
    pub fn convergence_order(&self) -> u32 {
        match self {
            Self::Trapezoidal => 2,
            Self::Simpson13 | Self::Simpson38 | Self::NewtonCotesGeneral => 4,
            Self::Boole | Self::Weddle => 6,
        }
    }

    /// Check that the rule can integrate with `n_panels` panels
    pub fn validate(&self, n_panels: usize) -> Result<(), InvalidArgument> {
        let multiple = self.panel_multiple();
        if n_panels == 0 {
            Err(InvalidArgument::NoPanels { rule: *self })
        } else if n_panels % multiple != 0 {
            Err(InvalidArgument::PanelsNotMultiple {
                rule: *self,
                n_panels,
                multiple,
            })
        } else {
            Ok(())
        }
    }

    /// The smallest panel count at least `n_panels` the rule accepts
    ///
    /// # Example
    ///
    /// ```
    /// use newton_cotes::Rule;
    ///
    /// assert_eq!(Rule::Boole.round_panels(10), 12);
    /// assert_eq!(Rule::Weddle.round_panels(12), 12);
    /// assert_eq!(Rule::Simpson13.round_panels(0), 2);
    /// ```
    pub fn round_panels(&self, n_panels: usize) -> usize {
        let multiple = self.panel_multiple();
        let n = n_panels.max(1);
        (n + multiple - 1) / multiple * multiple
    }

    /// Integrate `f` over `[a, b]` with `n_panels` panels.
    ///
    /// # Example
    ///
    /// ```
    /// use newton_cotes::Rule;
    ///
    /// let q = Rule::Simpson13.integrate(|x| x * x, 0.0, 3.0, 2).unwrap();
    /// assert!((q - 9.0).abs() < 1e-12);
    /// ```
    pub fn integrate<F>(
        &self,
        f: F,
        a: f64,
        b: f64,
        n_panels: usize,
    ) -> Result<f64, InvalidArgument>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Trapezoidal => {
                rules::integrate_trapezoidal(f, a, b, n_panels)
            }
            Self::Simpson13 => rules::integrate_simpson13(f, a, b, n_panels),
            Self::Simpson38 => rules::integrate_simpson38(f, a, b, n_panels),
            Self::Boole => rules::integrate_boole(f, a, b, n_panels),
            Self::Weddle => rules::integrate_weddle(f, a, b, n_panels),
            Self::NewtonCotesGeneral => {
                rules::integrate_newton_cotes_general(f, a, b, n_panels)
            }
        }
    }

    /// Integrate `f` over `[a, b]`, evaluating the nodes in parallel.
    ///
    /// Uses the same nodes and weights as `integrate`, but the summation order
    /// is up to rayon, so the result can differ in the last few bits.
    pub fn integrate_par<F>(
        &self,
        f: F,
        a: f64,
        b: f64,
        n_panels: usize,
    ) -> Result<f64, InvalidArgument>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        match self {
            Self::Trapezoidal => {
                rules::trapezoidal::integrate_par(f, a, b, n_panels)
            }
            Self::Simpson13 => {
                rules::simpson13::integrate_par(f, a, b, n_panels)
            }
            Self::Simpson38 => {
                rules::simpson38::integrate_par(f, a, b, n_panels)
            }
            Self::Boole => rules::boole::integrate_par(f, a, b, n_panels),
            Self::Weddle => rules::weddle::integrate_par(f, a, b, n_panels),
            Self::NewtonCotesGeneral => {
                rules::general::integrate_par(f, a, b, n_panels)
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Trapezoidal => "trapezoidal",
            Self::Simpson13 => "simpson13",
            Self::Simpson38 => "simpson38",
            Self::Boole => "boole",
            Self::Weddle => "weddle",
            Self::NewtonCotesGeneral => "newton_cotes_general",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trapezoidal" => Ok(Self::Trapezoidal),
            "simpson13" => Ok(Self::Simpson13),
            "simpson38" => Ok(Self::Simpson38),
            "boole" => Ok(Self::Boole),
            "weddle" => Ok(Self::Weddle),
            "newton_cotes_general" => Ok(Self::NewtonCotesGeneral),
            _ => Err(ParseRuleError(s.to_owned())),
        }
    }
}
