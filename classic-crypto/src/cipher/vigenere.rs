use crate::alphabet::Alphabet;
use crate::cipher::TextCipher;
use crate::errors::ClassicCryptoError;
use crate::ring::Ring;

use log::{debug, trace};

/// Polyalphabetic cipher driven by a repeated keyword ("gamma").
///
/// Text characters outside the alphabet are copied unchanged, but they still
/// consume a keystream position so the gamma stays aligned with the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    alphabet: Alphabet,
    ring: Ring,
    keyword: String,
    /// alphabet indices of the keyword characters
    shifts: Vec<i64>,
}

impl VigenereCipher {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidKey` for an empty keyword and
    /// `ClassicCryptoError::CharacterNotInAlphabet` for a keyword character the
    /// alphabet does not contain.
    pub fn try_with(alphabet: Alphabet, keyword: &str) -> Result<Self, ClassicCryptoError> {
        if keyword.is_empty() {
            return Err(ClassicCryptoError::InvalidKey(
                "Keyword must not be empty".into(),
            ));
        }

        let ring = alphabet.ring()?;
        let shifts = keyword
            .chars()
            .map(|ch| alphabet.position(ch).map(|i| i as i64))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "vigenere cipher over {} symbols, keyword length {}",
            ring.modulus(),
            shifts.len()
        );

        Ok(Self {
            alphabet,
            ring,
            keyword: keyword.to_string(),
            shifts,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The keyword repeated to exactly `len` characters.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::cipher::VigenereCipher;
    /// # use classic_crypto::preset::alphabets::LATIN_LOWERCASE;
    /// let cipher = VigenereCipher::try_with(LATIN_LOWERCASE.clone(), "rus").unwrap();
    /// assert_eq!(cipher.keystream(10), "rusrusrusr");
    /// ```
    pub fn keystream(&self, len: usize) -> String {
        self.keyword.chars().cycle().take(len).collect()
    }

    fn combine(&self, text: &str, f: impl Fn(i64, i64) -> i64) -> String {
        text.chars()
            .zip(self.shifts.iter().cycle())
            .map(|(ch, &shift)| match self.alphabet.index_of(ch) {
                Some(index) => self.alphabet.symbol(f(index as i64, shift)),
                None => {
                    trace!("passing {:?} through: not in the alphabet", ch);
                    ch
                }
            })
            .collect()
    }
}

impl TextCipher for VigenereCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        Ok(self.combine(plaintext, |x, k| self.ring.add(x, k)))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        Ok(self.combine(ciphertext, |y, k| self.ring.sub(y, k)))
    }
}
