//! Textbook RSA over machine-width integers.
//!
//! Messages are single integers in `[0, n)`. The private exponent is found by
//! exhaustive inverse search, so φ(n) is capped at [`MAX_TOTIENT`].

use crate::cipher::TextCipher;
use crate::errors::ClassicCryptoError;
use crate::ring::{is_prime, mod_inverse, mod_pow};

use log::debug;
use num_integer::Integer;
use serde::{Deserialize, Serialize};

/// Largest accepted φ(n), the `i32` range.
pub const MAX_TOTIENT: u64 = i32::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPublicKey {
    pub e: u64,
    pub n: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPrivateKey {
    pub d: u64,
    pub n: u64,
}

/// Full key material derived from two primes and a public exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToyRsa {
    pub p: u64,
    pub q: u64,
    /// n = p * q
    pub n: u64,
    /// φ(n) = (p - 1)(q - 1)
    pub phi: u64,
    pub e: u64,
    pub d: u64,
}

fn ensure_in_range(message: u64, n: u64) -> Result<(), ClassicCryptoError> {
    if message >= n {
        return Err(ClassicCryptoError::MessageOutOfRange {
            message,
            modulus: n,
        });
    }
    Ok(())
}

impl RsaPublicKey {
    /// `message^e mod n`.
    pub fn encrypt(&self, message: u64) -> Result<u64, ClassicCryptoError> {
        ensure_in_range(message, self.n)?;
        mod_pow(message, self.e, self.n)
    }
}

impl RsaPrivateKey {
    /// `cipher^d mod n`.
    pub fn decrypt(&self, cipher: u64) -> Result<u64, ClassicCryptoError> {
        ensure_in_range(cipher, self.n)?;
        mod_pow(cipher, self.d, self.n)
    }
}

/// Returns `(n, φ(n))` for two distinct primes with `φ(n) <= MAX_TOTIENT`.
fn modulus_and_totient(p: u64, q: u64) -> Result<(u64, u64), ClassicCryptoError> {
    for factor in [p, q] {
        if !is_prime(factor) {
            return Err(ClassicCryptoError::InvalidKey(format!(
                "{} is not a prime",
                factor
            )));
        }
    }
    if p == q {
        return Err(ClassicCryptoError::InvalidKey(format!(
            "p and q must be distinct, both are {}",
            p
        )));
    }

    let n = p.checked_mul(q).ok_or_else(|| {
        ClassicCryptoError::InvalidKey(format!("n = {} * {} does not fit in 64 bits", p, q))
    })?;
    let phi = (p - 1) * (q - 1);
    if phi > MAX_TOTIENT {
        return Err(ClassicCryptoError::InvalidKey(format!(
            "phi = {} exceeds the supported maximum {}",
            phi, MAX_TOTIENT
        )));
    }
    Ok((n, phi))
}

impl ToyRsa {
    /// Derives `n`, `φ(n)` and the private exponent `d = e^-1 mod φ(n)`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidKey` if `p` or `q` is not prime, if they
    /// are equal, if `p * q` overflows, if `φ(n)` exceeds [`MAX_TOTIENT`], or if
    /// `e` is outside `(1, φ(n))`.
    /// Returns `ClassicCryptoError::KeyNotCoprime` if `gcd(e, φ(n)) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::cipher::ToyRsa;
    /// let rsa = ToyRsa::try_with(3557, 2579, 3).unwrap();
    /// assert_eq!(rsa.n, 9173503);
    /// assert_eq!(rsa.encrypt_number(111111).unwrap(), 4051753);
    /// ```
    pub fn try_with(p: u64, q: u64, e: u64) -> Result<Self, ClassicCryptoError> {
        let (n, phi) = modulus_and_totient(p, q)?;

        if e <= 1 || e >= phi {
            return Err(ClassicCryptoError::InvalidKey(format!(
                "Public exponent must satisfy 1 < e < {}, got {}",
                phi, e
            )));
        }
        let g = e.gcd(&phi);
        if g != 1 {
            return Err(ClassicCryptoError::KeyNotCoprime {
                value: e,
                modulus: phi,
                gcd: g,
            });
        }

        let d = mod_inverse(e, phi)?;
        debug!("toy rsa key derived, n = {}, phi = {}", n, phi);

        Ok(Self { p, q, n, phi, e, d })
    }

    /// Builds the key with the smallest valid public exponent.
    pub fn with_smallest_exponent(p: u64, q: u64) -> Result<Self, ClassicCryptoError> {
        let e = Self::smallest_public_exponent(p, q)?;
        Self::try_with(p, q, e)
    }

    /// The smallest `e > 1` coprime with `φ(n)`.
    pub fn smallest_public_exponent(p: u64, q: u64) -> Result<u64, ClassicCryptoError> {
        let (_, phi) = modulus_and_totient(p, q)?;
        (2..phi).find(|e| e.gcd(&phi) == 1).ok_or_else(|| {
            ClassicCryptoError::InvalidKey(format!("No public exponent exists for phi = {}", phi))
        })
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            e: self.e,
            n: self.n,
        }
    }

    pub fn private_key(&self) -> RsaPrivateKey {
        RsaPrivateKey {
            d: self.d,
            n: self.n,
        }
    }

    pub fn encrypt_number(&self, message: u64) -> Result<u64, ClassicCryptoError> {
        self.public_key().encrypt(message)
    }

    pub fn decrypt_number(&self, cipher: u64) -> Result<u64, ClassicCryptoError> {
        self.private_key().decrypt(cipher)
    }
}

fn parse_number(message: &str) -> Result<u64, ClassicCryptoError> {
    message.trim().parse::<u64>().map_err(|e| {
        ClassicCryptoError::InvalidMessage(format!(
            "RSA message must be a non-negative integer, got {:?}: {}",
            message, e
        ))
    })
}

/// Messages and results are decimal integers.
impl TextCipher for ToyRsa {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        self.encrypt_number(parse_number(plaintext)?)
            .map(|c| c.to_string())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        self.decrypt_number(parse_number(ciphertext)?)
            .map(|m| m.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;
    use std::time::{Duration, Instant};

    fn test_rsa() -> ToyRsa {
        ToyRsa::try_with(3557, 2579, 3).unwrap()
    }

    #[test]
    fn test_key_derivation() {
        let rsa = test_rsa();
        assert_eq!(rsa.n, 9173503);
        assert_eq!(rsa.phi, 9167368);
        assert_eq!(rsa.d, 6111579);
        assert_eq!((rsa.e as u128 * rsa.d as u128) % rsa.phi as u128, 1);
    }

    #[test]
    fn test_known_vector() -> Result<(), ClassicCryptoError> {
        let rsa = test_rsa();
        assert_eq!(rsa.encrypt_number(111111)?, 4051753);
        assert_eq!(rsa.decrypt_number(4051753)?, 111111);
        Ok(())
    }

    #[test]
    fn test_text_interface() -> Result<(), ClassicCryptoError> {
        let rsa = test_rsa();
        assert_eq!(rsa.encrypt("111111")?, "4051753");
        assert_eq!(rsa.decrypt(" 4051753\n")?, "111111");
        assert!(matches!(
            rsa.encrypt("hello"),
            Err(ClassicCryptoError::InvalidMessage(_))
        ));
        assert!(rsa.encrypt("-5").is_err());
        Ok(())
    }

    #[test]
    fn test_message_out_of_range() {
        let rsa = test_rsa();
        assert!(matches!(
            rsa.encrypt_number(rsa.n),
            Err(ClassicCryptoError::MessageOutOfRange { .. })
        ));
        assert!(rsa.decrypt_number(u64::MAX).is_err());
    }

    #[test]
    fn test_invalid_primes() {
        assert!(matches!(
            ToyRsa::try_with(3557, 2580, 3),
            Err(ClassicCryptoError::InvalidKey(_))
        ));
        assert!(ToyRsa::try_with(1, 13, 5).is_err());
        assert!(ToyRsa::try_with(13, 13, 5).is_err());
        // both primes exceed 2^32, the product overflows u64
        assert!(matches!(
            ToyRsa::try_with(4294967311, 4294967357, 3),
            Err(ClassicCryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_totient_above_limit_is_rejected() {
        // n fits in u64 but phi is near 2^64
        let started = Instant::now();
        assert!(matches!(
            ToyRsa::try_with(4294967291, 4294967279, 3),
            Err(ClassicCryptoError::InvalidKey(_))
        ));
        assert!(ToyRsa::smallest_public_exponent(4294967291, 4294967279).is_err());
        // phi = 65536 * 65538, just past the limit
        assert!(ToyRsa::try_with(65537, 65539, 5).is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_totient_at_limit_scale_is_accepted() -> Result<(), ClassicCryptoError> {
        // phi = 46336 * 46348 = 2147580928, just above MAX_TOTIENT
        assert!(ToyRsa::try_with(46337, 46349, 5).is_err());
        // phi = 46326 * 46336 = 2146561536; e is chosen so that d = 5
        let rsa = ToyRsa::try_with(46327, 46337, 1717249229)?;
        assert!(rsa.phi <= MAX_TOTIENT);
        assert_eq!(rsa.d, 5);
        assert_eq!(rsa.decrypt_number(rsa.encrypt_number(123456789)?)?, 123456789);
        Ok(())
    }

    #[test]
    fn test_invalid_exponent() {
        // phi = 60
        assert!(matches!(
            ToyRsa::try_with(11, 7, 1),
            Err(ClassicCryptoError::InvalidKey(_))
        ));
        assert!(ToyRsa::try_with(11, 7, 60).is_err());
        assert!(matches!(
            ToyRsa::try_with(11, 7, 4),
            Err(ClassicCryptoError::KeyNotCoprime {
                value: 4,
                modulus: 60,
                gcd: 4
            })
        ));
    }

    #[test]
    fn test_smallest_exponent() -> Result<(), ClassicCryptoError> {
        // phi = 60: 2, 3, 4, 5, 6 share factors, 7 does not
        assert_eq!(ToyRsa::smallest_public_exponent(11, 7)?, 7);
        let rsa = ToyRsa::with_smallest_exponent(61, 53)?;
        assert_eq!(rsa.phi, 3120);
        assert_eq!(rsa.e, 7);
        Ok(())
    }

    #[test]
    fn test_key_serialization() -> Result<(), ClassicCryptoError> {
        let rsa = test_rsa();
        let json = serde_json::to_string(&rsa.public_key())?;
        assert_eq!(json, r#"{"e":3,"n":9173503}"#);
        let back: RsaPublicKey = serde_json::from_str(&json)?;
        assert_eq!(back.encrypt(111111)?, 4051753);
        Ok(())
    }

    #[quickcheck]
    fn prop_round_trip(message: u32) -> bool {
        let rsa = ToyRsa::try_with(61, 53, 17).unwrap();
        let message = message as u64 % rsa.n;
        rsa.encrypt_number(message)
            .and_then(|c| rsa.decrypt_number(c))
            .map(|m| m == message)
            .unwrap_or(false)
    }
}
