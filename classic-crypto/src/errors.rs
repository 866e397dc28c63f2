#[derive(thiserror::Error, Debug)]
pub enum ClassicCryptoError {
    /// Malformed key material: wrong length, empty, non-prime RSA factors and so on.
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    /// Alphabet with duplicate symbols or fewer than two symbols.
    #[error("InvalidAlphabet: {0}")]
    InvalidAlphabet(String),
    /// Ring modulus outside `(1, i64::MAX]`.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// No x in [1, m) satisfies a*x = 1 (mod m).
    #[error("NoInverseExists: {0}")]
    NoInverseExists(String),
    /// A key value with no inverse mod the working modulus, such as an affine `a` or an RSA `e`.
    #[error("Key value {value} is not coprime with modulus {modulus} (gcd = {gcd})")]
    KeyNotCoprime { value: u64, modulus: u64, gcd: u64 },
    /// 2×2 matrix whose determinant shares a factor with the modulus (26 for Hill keys).
    #[error("Matrix is not invertible mod {modulus}: determinant {determinant} shares a factor with the modulus")]
    MatrixNotInvertible { determinant: i64, modulus: u64 },
    /// Hill key of any shape other than 2×2, ragged rows included.
    #[error("Only 2x2 matrices are supported, got {rows}x{cols}")]
    UnsupportedMatrixSize { rows: usize, cols: usize },
    /// Operand shapes that cannot be multiplied.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Strict lookup of a symbol the alphabet lacks, e.g. in a Vigenère keyword.
    #[error("Character {0:?} is not in the alphabet")]
    CharacterNotInAlphabet(char),
    /// RSA input not in `[0, n)`.
    #[error("Message {message} is out of range, it must be less than the modulus {modulus}")]
    MessageOutOfRange { message: u64, modulus: u64 },
    /// Input a cipher cannot read: a non-numeric RSA message, or Vernam output that is not UTF-8.
    #[error("InvalidMessage: {0}")]
    InvalidMessage(String),

    /// Vernam ciphertext that is not valid Base64.
    #[error("Base64 decoding: {0}")]
    Encoding(#[from] base64::DecodeError),
    /// Malformed or invalid JSON configuration.
    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
