//! # Environment
//!
//! The immutable configuration every genome is scored against: the alphabet
//! and the target symbol sequence. An environment is built once and shared
//! between genomes through an `Arc`.
//!
//! ## Example
//!
//! ```rust
//! use strevo::environment::Environment;
//!
//! let environment = Environment::default();
//! assert_eq!(environment.target_len(), 25);
//!
//! let short = Environment::with_target("AB").unwrap();
//! assert_eq!(short.target_text(), "AB");
//! assert!(Environment::with_target("ab").is_err());
//! ```

use crate::{
    alphabet::Alphabet,
    error::{GeneticError, OptionExt, Result},
};

/// The string evolution is steered toward unless another target is given.
pub const DEFAULT_TARGET: &str = "JOSHUA DAVID RUESCHENBERG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    alphabet: Alphabet,
    target: Vec<usize>,
}

impl Environment {
    /// Creates an environment over the standard alphabet evolving toward `target`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty target and `UnknownSymbol` for a
    /// character outside the alphabet.
    pub fn with_target(target: &str) -> Result<Self> {
        let alphabet = Alphabet::standard();
        let target = encode(&alphabet, target)?;
        Ok(Self { alphabet, target })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Target as alphabet indices.
    pub fn target(&self) -> &[usize] {
        &self.target
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    pub fn target_text(&self) -> String {
        decode(&self.alphabet, &self.target)
    }

    /// Scores a symbol sequence against the target.
    ///
    /// Each symbol missing or surplus relative to the target costs one point,
    /// and every aligned position adds its circular-distance similarity.
    pub fn score(&self, symbols: &[usize]) -> i64 {
        let length_penalty = -(self.target.len() as i64 - symbols.len() as i64).abs();
        symbols
            .iter()
            .zip(&self.target)
            .map(|(&symbol, &target)| self.alphabet.similarity(symbol, target))
            .sum::<i64>()
            + length_penalty
    }
}

impl Default for Environment {
    fn default() -> Self {
        let alphabet = Alphabet::standard();
        let target = DEFAULT_TARGET
            .chars()
            .filter_map(|c| alphabet.index_of(c))
            .collect();
        Self { alphabet, target }
    }
}

/// Maps text onto alphabet indices.
pub(crate) fn encode(alphabet: &Alphabet, text: &str) -> Result<Vec<usize>> {
    if text.is_empty() {
        return Err(GeneticError::InvalidParameter(
            "Symbol sequence cannot be empty".to_string(),
        ));
    }
    text.chars()
        .map(|c| {
            alphabet
                .index_of(c)
                .ok_or_else_genetic(|| GeneticError::UnknownSymbol(c))
        })
        .collect()
}

pub(crate) fn decode(alphabet: &Alphabet, symbols: &[usize]) -> String {
    symbols.iter().map(|&i| alphabet.symbol(i)).collect()
}
