//! Errors that can occur when setting up a quadrature
use crate::Rule;
use thiserror::Error;

/// Describes a panel count that a rule cannot integrate with.
///
/// Validation happens before the integrand is evaluated, so a rule that
/// returns this error has not called the integrand at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// The panel count was zero
    #[error("{rule} requires a positive number of panels")]
    NoPanels { rule: Rule },
    /// The panel count is not a multiple of the rule's block size
    #[error(
        "{rule} requires the number of panels to be a multiple of \
         {multiple}, but got {n_panels}"
    )]
    PanelsNotMultiple {
        /// The rule that rejected the panel count
        rule: Rule,
        /// The panel count that was passed
        n_panels: usize,
        /// The rule's required multiple
        multiple: usize,
    },
}

impl InvalidArgument {
    /// The rule that rejected its arguments
    pub fn rule(&self) -> Rule {
        match self {
            Self::NoPanels { rule } => *rule,
            Self::PanelsNotMultiple { rule, .. } => *rule,
        }
    }
}

/// A rule name could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{0}' as a quadrature rule")]
pub struct ParseRuleError(pub String);
