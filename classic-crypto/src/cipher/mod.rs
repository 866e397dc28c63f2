//! # Cipher Module
//!
//! The six classical ciphers. Each one is configured once with its key and
//! then exposes an encrypt/decrypt pair through [`TextCipher`].
//!
//! Characters outside a cipher's domain are handled per cipher and never abort
//! the whole operation:
//! - [`AffineCipher`] drops them,
//! - [`VigenereCipher`] passes them through (their keystream slot is still consumed),
//! - [`SimpleSubstitution`] passes them through,
//! - [`HillCipher`] strips them before splitting the text into blocks.

pub mod affine;
pub mod hill;
pub mod rsa;
pub mod substitution;
pub mod vernam;
pub mod vigenere;

use crate::errors::ClassicCryptoError;

use serde::{Deserialize, Serialize};

pub use affine::AffineCipher;
pub use hill::HillCipher;
pub use rsa::{MAX_TOTIENT, RsaPrivateKey, RsaPublicKey, ToyRsa};
pub use substitution::SimpleSubstitution;
pub use vernam::VernamCipher;
pub use vigenere::VigenereCipher;

/// Which way a message goes through a cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A keyed cipher over text messages.
pub trait TextCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError>;

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError>;

    /// Runs the message through the cipher in the given direction.
    fn apply(&self, direction: Direction, message: &str) -> Result<String, ClassicCryptoError> {
        match direction {
            Direction::Encrypt => self.encrypt(message),
            Direction::Decrypt => self.decrypt(message),
        }
    }
}
