//! # Cipher Configuration
//!
//! A cipher and its key described as JSON, e.g.
//!
//! ```json
//! { "cipher": "affine", "alphabet": "abcdefghijklmnopqrstuvwxyz ", "a": 5, "b": 8 }
//! ```
//!
//! `alphabet` may be omitted for the alphabet-based ciphers and defaults to
//! the 26 lowercase Latin letters.

use crate::alphabet::Alphabet;
use crate::cipher::{
    AffineCipher, Direction, HillCipher, SimpleSubstitution, TextCipher, ToyRsa, VernamCipher,
    VigenereCipher,
};
use crate::errors::ClassicCryptoError;
use crate::preset::alphabets::LATIN_LOWERCASE;
use crate::ring::Matrix;

use log::debug;
use serde::{Deserialize, Serialize};

fn default_alphabet() -> Alphabet {
    LATIN_LOWERCASE.clone()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "snake_case")]
pub enum CipherConfig {
    Affine {
        #[serde(default = "default_alphabet")]
        alphabet: Alphabet,
        a: i64,
        b: i64,
    },
    Vigenere {
        #[serde(default = "default_alphabet")]
        alphabet: Alphabet,
        keyword: String,
    },
    Rsa {
        p: u64,
        q: u64,
        e: u64,
    },
    SimpleSubstitution {
        key: String,
    },
    Hill {
        matrix: Matrix,
    },
    Vernam {
        key: String,
    },
}

impl CipherConfig {
    pub fn from_json(json: &str) -> Result<Self, ClassicCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ClassicCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Name of the selected cipher as it appears in the `"cipher"` tag.
    pub fn name(&self) -> &'static str {
        match self {
            CipherConfig::Affine { .. } => "affine",
            CipherConfig::Vigenere { .. } => "vigenere",
            CipherConfig::Rsa { .. } => "rsa",
            CipherConfig::SimpleSubstitution { .. } => "simple_substitution",
            CipherConfig::Hill { .. } => "hill",
            CipherConfig::Vernam { .. } => "vernam",
        }
    }

    /// Validates the key and builds the configured cipher.
    pub fn build(&self) -> Result<Box<dyn TextCipher>, ClassicCryptoError> {
        debug!("building {} cipher from config", self.name());

        let cipher: Box<dyn TextCipher> = match self {
            CipherConfig::Affine { alphabet, a, b } => {
                Box::new(AffineCipher::try_with(alphabet.clone(), *a, *b)?)
            }
            CipherConfig::Vigenere { alphabet, keyword } => {
                Box::new(VigenereCipher::try_with(alphabet.clone(), keyword)?)
            }
            CipherConfig::Rsa { p, q, e } => Box::new(ToyRsa::try_with(*p, *q, *e)?),
            CipherConfig::SimpleSubstitution { key } => {
                Box::new(SimpleSubstitution::try_with(key)?)
            }
            CipherConfig::Hill { matrix } => Box::new(HillCipher::try_with(matrix.clone())?),
            CipherConfig::Vernam { key } => Box::new(VernamCipher::try_with(key)?),
        };
        Ok(cipher)
    }

    /// Builds the cipher and runs one message through it.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::cipher::Direction;
    /// # use classic_crypto::config::CipherConfig;
    /// let config = CipherConfig::from_json(r#"{"cipher":"vigenere","keyword":"rus"}"#).unwrap();
    /// assert_eq!(config.run(Direction::Encrypt, "helloworld").unwrap(), "yydciofldu");
    /// ```
    pub fn run(&self, direction: Direction, message: &str) -> Result<String, ClassicCryptoError> {
        self.build()?.apply(direction, message)
    }
}
