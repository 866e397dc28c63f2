use crate::alphabet::Alphabet;

use lazy_static::lazy_static;

/// The 26 lowercase Latin letters, the fixed domain of the substitution and Hill ciphers.
pub const LATIN_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

lazy_static! {
    /// `a..z`, indices 0 to 25.
    pub static ref LATIN_LOWERCASE: Alphabet = Alphabet::from_trusted(LATIN_LETTERS);

    /// `a..z` followed by a space, indices 0 to 26. Lets affine ciphertext keep word breaks.
    pub static ref LATIN_WITH_SPACE: Alphabet = Alphabet::from_trusted("abcdefghijklmnopqrstuvwxyz ");
}
