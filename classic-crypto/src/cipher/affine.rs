use crate::alphabet::Alphabet;
use crate::cipher::TextCipher;
use crate::errors::ClassicCryptoError;
use crate::ring::Ring;

use log::{debug, trace};

/// Affine cipher `E(x) = (a·x + b) mod m` over a caller-supplied alphabet.
///
/// Characters missing from the alphabet are dropped from the output in both
/// directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineCipher {
    alphabet: Alphabet,
    ring: Ring,
    /// multiplicative key, reduced mod m
    a: i64,
    /// additive key, reduced mod m
    b: i64,
    /// a^-1 mod m
    inverse_a: i64,
}

impl AffineCipher {
    /// Builds the cipher. Both keys are reduced modulo the alphabet length.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::KeyNotCoprime` if `gcd(a, m) != 1`, in which
    /// case no decryption key exists.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::alphabet::Alphabet;
    /// # use classic_crypto::cipher::{AffineCipher, TextCipher};
    /// let alphabet = Alphabet::try_with("abcdefghijklmnopqrstuvwxyz ").unwrap();
    /// let cipher = AffineCipher::try_with(alphabet, 5, 8).unwrap();
    /// assert_eq!(cipher.encrypt("hello world").unwrap(), "qbjjydkymjx");
    /// ```
    pub fn try_with(alphabet: Alphabet, a: i64, b: i64) -> Result<Self, ClassicCryptoError> {
        let ring = alphabet.ring()?;
        let a = ring.normalize(a);
        let b = ring.normalize(b);

        if !ring.is_unit(a) {
            return Err(ClassicCryptoError::KeyNotCoprime {
                value: a as u64,
                modulus: ring.modulus(),
                gcd: num_integer::gcd(a as u64, ring.modulus()),
            });
        }
        let inverse_a = ring.inv(a)?;

        debug!("affine cipher over {} symbols", ring.modulus());

        Ok(Self {
            alphabet,
            ring,
            a,
            b,
            inverse_a,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The reduced `(a, b)` key pair.
    pub fn key(&self) -> (i64, i64) {
        (self.a, self.b)
    }

    fn map_known(&self, text: &str, f: impl Fn(i64) -> i64) -> String {
        text.chars()
            .filter_map(|ch| match self.alphabet.index_of(ch) {
                Some(index) => Some(self.alphabet.symbol(f(index as i64))),
                None => {
                    trace!("dropping {:?}: not in the alphabet", ch);
                    None
                }
            })
            .collect()
    }
}

impl TextCipher for AffineCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        let ring = &self.ring;
        Ok(self.map_known(plaintext, |x| ring.add(ring.mul(self.a, x), self.b)))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        let ring = &self.ring;
        Ok(self.map_known(ciphertext, |y| ring.mul(ring.sub(y, self.b), self.inverse_a)))
    }
}
