use crate::cipher::TextCipher;
use crate::errors::ClassicCryptoError;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use rand::RngCore;

/// XOR cipher with a key repeated over the message.
///
/// With a key at least as long as the message and never reused this is the
/// one-time pad. Encryption and decryption are the same operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VernamCipher {
    key: Vec<u8>,
}

impl VernamCipher {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidKey` if the key is empty.
    pub fn try_with(key: impl AsRef<[u8]>) -> Result<Self, ClassicCryptoError> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(ClassicCryptoError::InvalidKey(
                "Vernam key must not be empty".into(),
            ));
        }

        debug!("vernam key of {} bytes", key.len());
        Ok(Self { key: key.to_vec() })
    }

    /// A cipher keyed with `len` random bytes.
    pub fn generate_pad(len: usize) -> Result<Self, ClassicCryptoError> {
        let mut pad = vec![0u8; len];
        rand::rng().fill_bytes(&mut pad);
        Self::try_with(pad)
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// `out[i] = input[i] ^ key[i mod key.len()]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::cipher::VernamCipher;
    /// let cipher = VernamCipher::try_with("secret").unwrap();
    /// let masked = cipher.process(b"test");
    /// assert_eq!(cipher.process(&masked), b"test");
    /// ```
    pub fn process(&self, input: &[u8]) -> Vec<u8> {
        input
            .iter()
            .zip(self.key.iter().cycle())
            .map(|(byte, key)| byte ^ key)
            .collect()
    }

    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Vec<u8> {
        self.process(plaintext)
    }

    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Vec<u8> {
        self.process(ciphertext)
    }
}

/// The ciphertext is standard Base64 of the XOR-ed bytes.
impl TextCipher for VernamCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, ClassicCryptoError> {
        Ok(STANDARD.encode(self.encrypt_bytes(plaintext.as_bytes())))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, ClassicCryptoError> {
        let masked = STANDARD.decode(ciphertext.trim())?;
        String::from_utf8(self.decrypt_bytes(&masked)).map_err(|e| {
            ClassicCryptoError::InvalidMessage(format!(
                "Decrypted bytes are not valid UTF-8: {}",
                e
            ))
        })
    }
}
