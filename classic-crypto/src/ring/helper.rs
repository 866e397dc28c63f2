use crate::errors::ClassicCryptoError;

/// Finds the modular multiplicative inverse of `a` mod `m` by exhaustive search.
///
/// Returns the unique `x` in `[1, m)` with `(a * x) mod m == 1`. Linear in `m`.
///
/// # Errors
///
/// Returns `ClassicCryptoError::InvalidModulus` if `m <= 1`.
/// Returns `ClassicCryptoError::NoInverseExists` if `gcd(a, m) != 1`.
///
/// # Example
///
/// ```
/// # use classic_crypto::ring::mod_inverse;
/// assert_eq!(mod_inverse(3, 26).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
/// assert_eq!(mod_inverse(29, 26).unwrap(), 9); // 29 is reduced to 3 first
/// assert!(mod_inverse(13, 26).is_err());
/// ```
pub fn mod_inverse(a: u64, m: u64) -> Result<u64, ClassicCryptoError> {
    if m <= 1 {
        return Err(ClassicCryptoError::InvalidModulus(format!(
            "Modulus must be greater than 1, got {}",
            m
        )));
    }

    let a = a % m;
    (1..m)
        .find(|&x| (a as u128 * x as u128) % m as u128 == 1)
        .ok_or_else(|| {
            ClassicCryptoError::NoInverseExists(format!(
                "{} has no inverse mod {} (gcd={})",
                a,
                m,
                num_integer::gcd(a, m)
            ))
        })
}

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// Every product is taken in `u128` and reduced before the next step, so the
/// result is exact for any `u64` modulus.
///
/// # Errors
///
/// Returns `ClassicCryptoError::InvalidModulus` if `modulus == 0`.
///
/// # Example
///
/// ```
/// # use classic_crypto::ring::mod_pow;
/// assert_eq!(mod_pow(4, 13, 497).unwrap(), 445);
/// assert_eq!(mod_pow(7, 0, 13).unwrap(), 1);
/// assert_eq!(mod_pow(7, 5, 1).unwrap(), 0);
/// ```
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> Result<u64, ClassicCryptoError> {
    if modulus == 0 {
        return Err(ClassicCryptoError::InvalidModulus(
            "Modulus of an exponentiation must be positive".into(),
        ));
    }

    Ok(square_and_multiply(base, exponent, modulus))
}

/// `mod_pow` for a modulus already known to be non-zero.
pub(crate) fn square_and_multiply(base: u64, exponent: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut result: u128 = 1 % m;
    let mut base = base as u128 % m;
    let mut exp = exponent;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    result as u64
}

/// Primality by trial division up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut d: u64 = 3;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_integer::Integer;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_mod_inverse_basic() -> Result<(), ClassicCryptoError> {
        assert_eq!(mod_inverse(5, 27)?, 11); // 55 = 2*27 + 1
        assert_eq!(mod_inverse(9, 26)?, 3);
        assert_eq!(mod_inverse(1, 2)?, 1);
        assert_eq!(mod_inverse(3, 9167368)?, 6111579);
        Ok(())
    }

    #[test]
    fn test_mod_inverse_sweep() -> Result<(), ClassicCryptoError> {
        for m in 2..=64u64 {
            for a in 1..m {
                if a.gcd(&m) != 1 {
                    assert!(matches!(
                        mod_inverse(a, m),
                        Err(ClassicCryptoError::NoInverseExists(_))
                    ));
                    continue;
                }
                let x = mod_inverse(a, m)?;
                assert!((1..m).contains(&x));
                assert_eq!((a * x) % m, 1, "a={} m={} x={}", a, m, x);
            }
        }
        Ok(())
    }

    #[test]
    fn test_mod_inverse_rejects_small_modulus() {
        assert!(matches!(
            mod_inverse(1, 1),
            Err(ClassicCryptoError::InvalidModulus(_))
        ));
        assert!(matches!(
            mod_inverse(1, 0),
            Err(ClassicCryptoError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_mod_inverse_zero_has_no_inverse() {
        assert!(mod_inverse(0, 26).is_err());
        assert!(mod_inverse(26, 26).is_err());
    }

    #[test]
    fn test_mod_pow_small() -> Result<(), ClassicCryptoError> {
        assert_eq!(mod_pow(2, 10, 1000)?, 24);
        assert_eq!(mod_pow(3, 4, 5)?, 1);
        assert_eq!(mod_pow(0, 0, 7)?, 1);
        assert_eq!(mod_pow(0, 5, 7)?, 0);
        assert!(mod_pow(2, 2, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_mod_pow_does_not_overflow() -> Result<(), ClassicCryptoError> {
        // (2^64 - 2)^2 = 1 mod (2^64 - 1)
        let m = u64::MAX;
        assert_eq!(mod_pow(m - 1, 2, m)?, 1);
        Ok(())
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
        assert!(is_prime(3557));
        assert!(is_prime(2579));
        assert!(!is_prime(3557 * 2579));
    }

    #[quickcheck]
    fn prop_mod_pow_matches_repeated_multiplication(base: u32, exponent: u8, modulus: u32) -> TestResult {
        if modulus == 0 {
            return TestResult::discard();
        }
        let m = modulus as u64;
        let mut expected = 1 % m;
        for _ in 0..exponent {
            expected = expected * (base as u64 % m) % m;
        }
        TestResult::from_bool(mod_pow(base as u64, exponent as u64, m).ok() == Some(expected))
    }
}
