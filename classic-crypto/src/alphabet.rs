//! Ordered symbol sets and the index arithmetic the substitution ciphers run on.

use crate::errors::ClassicCryptoError;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// An ordered sequence of distinct characters. Its length is the working modulus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

/// Lowercases `ch` when its lowercase form is a single character.
///
/// Characters like `'İ'` lowercase into several code points; those are
/// returned unchanged so the lookup stays one char to one index.
pub fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

impl Alphabet {
    /// Builds an alphabet, rejecting duplicate symbols and alphabets shorter than two symbols.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::alphabet::Alphabet;
    /// let alphabet = Alphabet::try_with("abcdefghijklmnopqrstuvwxyz ").unwrap();
    /// assert_eq!(alphabet.len(), 27);
    /// assert!(Alphabet::try_with("abca").is_err());
    /// ```
    pub fn try_with(symbols: &str) -> Result<Self, ClassicCryptoError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(ClassicCryptoError::InvalidAlphabet(format!(
                "Alphabet needs at least 2 symbols, got {}",
                symbols.len()
            )));
        }

        for (i, ch) in symbols.iter().enumerate() {
            if symbols[..i].contains(ch) {
                return Err(ClassicCryptoError::InvalidAlphabet(format!(
                    "Symbol {:?} appears more than once",
                    ch
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// Skips validation. Only for the built-in presets.
    pub(crate) fn from_trusted(symbols: &str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Z_m with `m = len()`.
    pub fn ring(&self) -> Result<Ring, ClassicCryptoError> {
        Ring::try_with(self.len() as u64)
    }

    /// Position of `ch` in the alphabet, first match wins.
    ///
    /// The input is case-folded before searching; the alphabet itself is used as given.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::alphabet::Alphabet;
    /// let alphabet = Alphabet::try_with("abc").unwrap();
    /// assert_eq!(alphabet.index_of('b'), Some(1));
    /// assert_eq!(alphabet.index_of('C'), Some(2));
    /// assert_eq!(alphabet.index_of('?'), None);
    /// ```
    pub fn index_of(&self, ch: char) -> Option<usize> {
        let needle = fold_case(ch);
        self.symbols.iter().position(|&symbol| symbol == needle)
    }

    /// Like [`Alphabet::index_of`] but a miss is an error.
    pub fn position(&self, ch: char) -> Result<usize, ClassicCryptoError> {
        self.index_of(ch)
            .ok_or(ClassicCryptoError::CharacterNotInAlphabet(ch))
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Symbol at `index` reduced modulo the alphabet length.
    pub(crate) fn symbol(&self, index: i64) -> char {
        let len = self.symbols.len() as i64;
        self.symbols[index.rem_euclid(len) as usize]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|ch| write!(f, "{}", ch))
    }
}

impl FromStr for Alphabet {
    type Err = ClassicCryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::try_with(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = ClassicCryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Alphabet::try_with(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
