//! Error types for the statistical core.
//!
//! Every out-of-range input is rejected with a `Validation` error naming the
//! offending field and the violated bound; the engines never clamp or coerce
//! values and never surface a NaN for bad input.

use thiserror::Error;

use super::engine::DistributionFamily;

/// Errors produced by the distribution engines, the model selector, and the
/// distribution factory.
#[derive(Debug, Error)]
pub enum DistError {
    /// An input parameter is out of range.
    ///
    /// `field` holds the short parameter name (`"n"`, `"p"`, `"x"`, `"N"`,
    /// `"K"`); `message` spells out the violated bound.
    #[error("{message}")]
    Validation {
        /// Short name of the offending parameter
        field: &'static str,
        /// Human-readable description of the violated bound
        message: String,
    },

    /// A distribution family name was not found in the factory registry.
    #[error("distribution '{name}' is not available. Options: {available}")]
    UnknownDistribution {
        /// The name that was looked up
        name: String,
        /// Comma-separated list of registered names
        available: String,
    },

    /// An engine received calculation inputs for a different family.
    #[error("the {expected} engine received {got} parameters")]
    MismatchedInputs {
        /// Family of the engine that was invoked
        expected: DistributionFamily,
        /// Family of the inputs it was handed
        got: DistributionFamily,
    },
}

impl DistError {
    /// Shorthand for a `Validation` error.
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DistError::Validation {
            field,
            message: message.into(),
        }
    }

    /// The short parameter name for validation errors, if applicable.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DistError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_message_only() {
        let err = DistError::validation("n", "sample size (n) must be greater than 0");
        assert_eq!(err.to_string(), "sample size (n) must be greater than 0");
        assert_eq!(err.field(), Some("n"));
    }

    #[test]
    fn test_unknown_distribution_lists_options() {
        let err = DistError::UnknownDistribution {
            name: "poisson".to_string(),
            available: "binomial, hypergeometric".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "distribution 'poisson' is not available. Options: binomial, hypergeometric"
        );
    }

    #[test]
    fn test_mismatched_inputs_display() {
        let err = DistError::MismatchedInputs {
            expected: DistributionFamily::Binomial,
            got: DistributionFamily::Hypergeometric,
        };
        assert_eq!(
            err.to_string(),
            "the Binomial engine received Hypergeometric parameters"
        );
        assert_eq!(err.field(), None);
    }
}
