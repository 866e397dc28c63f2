//! # Ring Module
//!
//! [`Ring`] (Z_m), modular inverse and exponentiation, and the 2×2 matrix
//! algebra behind the Hill cipher.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// A column of ring elements, e.g. one Hill block.
pub type Vector = Vec<i64>;
/// Row-major; every row must have the same length.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{is_prime, mod_inverse, mod_pow};
pub use math::{MAX_MODULUS, Ring};
