//! # Error Types
//!
//! This module defines the error type shared by the genome and population
//! operations. Only construction can fail: once a genome or population exists,
//! mutation, crossover and the generational step are total.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use strevo::error::{GeneticError, Result};
//!
//! fn checked_rate(rate: f64) -> Result<f64> {
//!     if (0.0..=1.0).contains(&rate) {
//!         Ok(rate)
//!     } else {
//!         Err(GeneticError::InvalidParameter(format!("bad rate {}", rate)))
//!     }
//! }
//!
//! assert!(checked_rate(0.5).is_ok());
//! assert!(checked_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use strevo::error::{GeneticError, OptionExt};
//!
//! fn first_symbol(text: &str) -> strevo::error::Result<char> {
//!     text.chars().next().ok_or_else_genetic(|| {
//!         GeneticError::InvalidParameter("empty text".to_string())
//!     })
//! }
//!
//! assert_eq!(first_symbol("AB").unwrap(), 'A');
//! ```

use thiserror::Error;

/// Represents errors that can occur while setting up an evolution run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A construction parameter is outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A character is not a member of the alphabet.
    #[error("Unknown symbol: {0:?} is not part of the alphabet")]
    UnknownSymbol(char),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A specialized Result type for evolution operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Checks that a mutation rate is a probability.
pub(crate) fn validate_rate(rate: f64) -> Result<()> {
    if rate.is_nan() || !(0.0..=1.0).contains(&rate) {
        return Err(GeneticError::InvalidParameter(format!(
            "Mutation rate must be within [0, 1], got {}",
            rate
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rate_bounds() {
        assert!(validate_rate(0.0).is_ok());
        assert!(validate_rate(1.0).is_ok());
        assert!(validate_rate(0.25).is_ok());
        assert!(validate_rate(-0.01).is_err());
        assert!(validate_rate(1.01).is_err());
        assert!(validate_rate(f64::NAN).is_err());
        assert!(validate_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeneticError::UnknownSymbol('a').to_string(),
            "Unknown symbol: 'a' is not part of the alphabet"
        );
        assert_eq!(
            GeneticError::InvalidParameter("x".to_string()).to_string(),
            "Invalid parameter: x"
        );
    }

    #[test]
    fn test_option_ext() {
        let none: Option<u8> = None;
        let result = none.ok_or_else_genetic(|| GeneticError::EmptyPopulation);
        assert_eq!(result, Err(GeneticError::EmptyPopulation));
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::EmptyPopulation), Ok(3));
    }
}
