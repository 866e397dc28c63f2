use crate::cipher::TextCipher;
use crate::errors::ClassicCryptoError;
use crate::preset::alphabets::LATIN_LOWERCASE;
use crate::ring::matrix_ops::{ensure_2x2, invert_2x2, matrix_vector_mul};
use crate::ring::{Matrix, Ring};

use itertools::Itertools;
use log::debug;
use rand::Rng;

/// Letters per block, the size of the key matrix.
pub const BLOCK_SIZE: usize = 2;
/// Appended to odd-length texts.
pub const FILLER: char = 'x';

/// Hill cipher with a 2×2 key matrix over Z_26.
///
/// Each pair of letters `(p1, p2)` is a column vector; the ciphertext pair is
/// `K · (p1, p2)^T mod 26`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: Matrix,
    inverse: Matrix,
    ring: Ring,
}

impl HillCipher {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::UnsupportedMatrixSize` if the key is not 2×2
    /// and `ClassicCryptoError::MatrixNotInvertible` if its determinant is not
    /// coprime with 26.
    pub fn try_with(key: Matrix) -> Result<Self, ClassicCryptoError> {
        ensure_2x2(&key)?;
        let ring = Ring::latin();
        let inverse = invert_2x2(&key, &ring)?;
        let key = key
            .iter()
            .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
            .collect();

        debug!("hill key accepted");
        Ok(Self { key, inverse, ring })
    }

    /// Draws random matrices until one is invertible mod 26.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let ring = Ring::latin();
        loop {
            let key: Matrix = (0..BLOCK_SIZE)
                .map(|_| (0..BLOCK_SIZE).map(|_| rng.random_range(0..26)).collect())
                .collect();
            if let Ok(inverse) = invert_2x2(&key, &ring) {
                return Self { key, inverse, ring };
            }
        }
    }

    /// The key matrix, entries reduced into `[0, 26)`.
    pub fn key(&self) -> &Matrix {
        &self.key
    }

    /// The decryption matrix.
    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }

    /// Keeps ASCII letters, lowercases them and pads with [`FILLER`] to a whole number of blocks.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::cipher::HillCipher;
    /// assert_eq!(HillCipher::prepare("Hello!"), "hello");
    /// assert_eq!(HillCipher::prepare("Hi, you"), "hiyoux");
    /// ```
    pub fn prepare(text: &str) -> String {
        let mut prepared: String = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        while prepared.len() % BLOCK_SIZE != 0 {
            prepared.push(FILLER);
        }
        prepared
    }

    fn transform(&self, text: &str, matrix: &Matrix) -> Result<String, ClassicCryptoError> {
        let prepared = Self::prepare(text);
        let mut output = String::with_capacity(prepared.len());

        for (first, second) in prepared.chars().tuples() {
            let block = vec![
                LATIN_LOWERCASE.position(first)? as i64,
                LATIN_LOWERCASE.position(second)? as i64,
            ];
            let mapped = matrix_vector_mul(matrix, &block, &self.ring)?;
            output.extend(mapped.into_iter().map(|i| LATIN_LOWERCASE.symbol(i)));
        }
        Ok(output)
    }
}

impl TextCipher for HillCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        self.transform(plaintext, &self.key)
    }

    /// The ciphertext goes through the same preparation as plaintext, so stray
    /// punctuation or an odd length never breaks block alignment.
    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        self.transform(ciphertext, &self.inverse)
    }
}
