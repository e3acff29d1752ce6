//! # Alphabet
//!
//! The fixed, ordered symbol pool genomes are written in. The pool is treated
//! as a ring: its two ends are adjacent both for neighbour mutation and for
//! the distance used when scoring.
//!
//! ## Example
//!
//! ```rust
//! use strevo::alphabet::Alphabet;
//!
//! let alphabet = Alphabet::standard();
//! assert_eq!(alphabet.len(), 29);
//! assert_eq!(alphabet.index_of('C'), Some(2));
//! assert_eq!(alphabet.distance(0, 28), 1);
//! assert_eq!(alphabet.similarity(4, 4), 14);
//! ```

/// Score awarded to a position whose symbol matches the target exactly.
pub const MATCH_SCORE: i64 = 14;

/// Ordered, cyclic symbol set.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Upper-case letters, space, hyphen and right single quotation mark.
    pub const STANDARD_SYMBOLS: [char; 29] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '-', '\u{2019}',
    ];

    /// Creates the standard 29-symbol alphabet.
    pub fn standard() -> Self {
        Self {
            symbols: Self::STANDARD_SYMBOLS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Genomes only ever store indices
    /// produced by this alphabet.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Steps one place around the ring, upward or downward, wrapping at both ends.
    pub fn neighbour(&self, index: usize, upward: bool) -> usize {
        let last = self.last_index();
        match (upward, index) {
            (true, i) if i == last => 0,
            (true, i) => i + 1,
            (false, 0) => last,
            (false, i) => i - 1,
        }
    }

    /// Distance between two indices.
    ///
    /// This is the plain index difference, except that the two ends of the
    /// ring count as adjacent. No other pair wraps: `distance(0, 27)` is 27.
    pub fn distance(&self, a: usize, b: usize) -> i64 {
        let last = self.last_index();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if low == 0 && high == last && last > 0 {
            1
        } else {
            (high - low) as i64
        }
    }

    /// Per-position score of `symbol` against `target`: `MATCH_SCORE - distance`.
    pub fn similarity(&self, symbol: usize, target: usize) -> i64 {
        MATCH_SCORE - self.distance(symbol, target)
    }

    fn last_index(&self) -> usize {
        self.symbols.len().saturating_sub(1)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}
