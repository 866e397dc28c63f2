//! Arithmetic in Z_m on signed values.

use crate::errors::ClassicCryptoError;

use super::helper::{mod_inverse, square_and_multiply};

use serde::{Deserialize, Serialize};

/// Largest modulus whose residues all fit in an `i64`.
pub const MAX_MODULUS: u64 = i64::MAX as u64;

/// The integers modulo `modulus`. Inputs may be any `i64`; results are always in `[0, modulus)`.
///
/// Serialized as the bare modulus, and deserialization goes through [`Ring::try_with`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidModulus` unless `1 < modulus <= MAX_MODULUS`.
    pub fn try_with(modulus: u64) -> Result<Self, ClassicCryptoError> {
        match modulus {
            0 | 1 => Err(ClassicCryptoError::InvalidModulus(format!(
                "a ring needs a modulus above 1, got {}",
                modulus
            ))),
            m if m > MAX_MODULUS => Err(ClassicCryptoError::InvalidModulus(format!(
                "modulus {} exceeds the i64 range (max {})",
                m, MAX_MODULUS
            ))),
            _ => Ok(Self { modulus }),
        }
    }

    /// The ring the Hill cipher works in.
    pub fn latin() -> Self {
        Self { modulus: 26 }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Least non-negative residue of `value`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(30), 4);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        self.reduce(value as i128)
    }

    /// `a + b`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.add(35, 8), 16);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        self.reduce(self.normalize(a) as i128 + self.normalize(b) as i128)
    }

    /// `a - b`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.sub(24, 17), 7);
    /// assert_eq!(ring.sub(3, 5), 24);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.add(a, self.neg(b))
    }

    /// `a · b`, widened to `i128` before reducing.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.mul(3, 9), 1);
    /// assert_eq!(ring.mul(-3, 5), 11);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        self.reduce(self.normalize(a) as i128 * self.normalize(b) as i128)
    }

    pub fn neg(&self, a: i64) -> i64 {
        match self.normalize(a) {
            0 => 0,
            residue => self.modulus as i64 - residue,
        }
    }

    /// `a^-1`, found by [`mod_inverse`].
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NoInverseExists` if `gcd(a, modulus) != 1`, including `a = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.inv(5).unwrap(), 11);
    /// assert_eq!(ring.inv(-22).unwrap(), 11); // -22 = 5 mod 27
    /// assert!(ring.inv(3).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ClassicCryptoError> {
        mod_inverse(self.normalize(a) as u64, self.modulus).map(|x| x as i64)
    }

    /// `base^exponent`.
    pub fn pow(&self, base: i64, exponent: u64) -> i64 {
        square_and_multiply(self.normalize(base) as u64, exponent, self.modulus) as i64
    }

    fn reduce(&self, value: i128) -> i64 {
        value.rem_euclid(self.modulus as i128) as i64
    }

    /// Whether `a` is a unit of the ring.
    pub fn is_unit(&self, a: i64) -> bool {
        num_integer::gcd(self.normalize(a) as u64, self.modulus) == 1
    }
}

impl TryFrom<u64> for Ring {
    type Error = ClassicCryptoError;

    fn try_from(modulus: u64) -> Result<Self, Self::Error> {
        Ring::try_with(modulus)
    }
}

impl From<Ring> for u64 {
    fn from(ring: Ring) -> Self {
        ring.modulus
    }
}
