use crate::cipher::TextCipher;
use crate::errors::ClassicCryptoError;
use crate::preset::alphabets::LATIN_LETTERS;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

const LETTERS: usize = 26;

/// Monoalphabetic substitution over `a..z`.
///
/// The key is a permutation of the 26 lowercase letters: the i-th key letter
/// replaces the i-th letter of the alphabet. ASCII letters are lowercased
/// before mapping, everything else is copied unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleSubstitution {
    forward: [char; LETTERS],
    inverse: [char; LETTERS],
}

fn letter_index(ch: char) -> Option<usize> {
    ch.is_ascii_alphabetic()
        .then(|| (ch.to_ascii_lowercase() as u8 - b'a') as usize)
}

impl SimpleSubstitution {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidKey` if the key is not exactly 26
    /// characters long, contains a non-letter, or repeats a letter.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::cipher::{SimpleSubstitution, TextCipher};
    /// let cipher = SimpleSubstitution::try_with("qwertyuiopasdfghjklzxcvbnm").unwrap();
    /// assert_eq!(cipher.encrypt("hello").unwrap(), "itssg");
    /// assert!(SimpleSubstitution::try_with("qwerty").is_err());
    /// ```
    pub fn try_with(key: &str) -> Result<Self, ClassicCryptoError> {
        let key_len = key.chars().count();
        if key_len != LETTERS {
            return Err(ClassicCryptoError::InvalidKey(format!(
                "Substitution key must contain exactly {} letters, got {}",
                LETTERS, key_len
            )));
        }

        let mut forward = ['\0'; LETTERS];
        let mut inverse = ['\0'; LETTERS];
        for (plain, key_ch) in key.chars().enumerate() {
            let cipher = letter_index(key_ch).ok_or_else(|| {
                ClassicCryptoError::InvalidKey(format!("Key character {:?} is not a letter", key_ch))
            })?;
            if inverse[cipher] != '\0' {
                return Err(ClassicCryptoError::InvalidKey(format!(
                    "Key letter {:?} appears more than once",
                    key_ch.to_ascii_lowercase()
                )));
            }
            forward[plain] = (b'a' + cipher as u8) as char;
            inverse[cipher] = (b'a' + plain as u8) as char;
        }

        debug!("substitution key accepted");
        Ok(Self { forward, inverse })
    }

    /// A uniformly shuffled key.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters: Vec<char> = LATIN_LETTERS.chars().collect();
        letters.shuffle(rng);

        let mut forward = ['\0'; LETTERS];
        let mut inverse = ['\0'; LETTERS];
        for (plain, &cipher) in letters.iter().enumerate() {
            forward[plain] = cipher;
            inverse[(cipher as u8 - b'a') as usize] = (b'a' + plain as u8) as char;
        }
        Self { forward, inverse }
    }

    /// The key as a 26-letter string.
    pub fn key(&self) -> String {
        self.forward.iter().collect()
    }

    fn substitute(text: &str, table: &[char; LETTERS]) -> String {
        text.chars()
            .map(|ch| letter_index(ch).map_or(ch, |i| table[i]))
            .collect()
    }
}

impl TextCipher for SimpleSubstitution {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        Ok(Self::substitute(plaintext, &self.forward))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        Ok(Self::substitute(ciphertext, &self.inverse))
    }
}
