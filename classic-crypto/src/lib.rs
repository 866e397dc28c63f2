//! Classical ciphers over modular arithmetic: Affine, Vigenère, textbook RSA,
//! simple substitution, 2×2 Hill and Vernam.

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod errors;
pub mod preset;
pub mod ring;

pub use alphabet::Alphabet;
pub use cipher::{Direction, TextCipher};
pub use config::CipherConfig;
pub use errors::ClassicCryptoError;
