use std::fmt;

use base64::prelude::*;
use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::signature::{Keypair, SignatureEncoding, Signer};
use sha2::Sha256;

use super::key_loader::PrivateKeyHandle;
use crate::core::{AppError, Result};

/// Signs canonical messages with RSA PKCS#1 v1.5 over SHA-256
///
/// The signature is computed over the raw message bytes; the digest is part
/// of the signing step, not applied beforehand by the caller.
#[derive(Clone)]
pub struct MessageSigner {
    signing_key: SigningKey<Sha256>,
    key_bits: usize,
}

impl MessageSigner {
    pub fn new(private_key: PrivateKeyHandle) -> Self {
        let key_bits = private_key.size_bits();
        Self {
            signing_key: SigningKey::<Sha256>::new(private_key.into_inner()),
            key_bits,
        }
    }

    /// Join `NAME=value` pairs with commas, in the given order
    ///
    /// Values pass through untouched: embedded commas and whitespace are not
    /// escaped or trimmed.
    pub fn canonicalize<V: AsRef<str>>(fields: &[(&str, V)]) -> String {
        fields
            .iter()
            .map(|(name, value)| format!("{}={}", name, value.as_ref()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Raw signature bytes over the canonical form of `fields`
    pub fn sign<V: AsRef<str>>(&self, fields: &[(&str, V)]) -> Result<Vec<u8>> {
        self.sign_message(&Self::canonicalize(fields))
    }

    /// Raw signature bytes over `message`
    pub fn sign_message(&self, message: &str) -> Result<Vec<u8>> {
        let signature = self
            .signing_key
            .try_sign(message.as_bytes())
            .map_err(|e| AppError::signature(e.to_string()))?;
        Ok(signature.to_vec())
    }

    /// Base64 token for the canonical form of `fields`
    pub fn token<V: AsRef<str>>(&self, fields: &[(&str, V)]) -> Result<String> {
        self.token_for_message(&Self::canonicalize(fields))
    }

    /// Base64 token for an already-canonical message
    pub fn token_for_message(&self, message: &str) -> Result<String> {
        Ok(BASE64_STANDARD.encode(self.sign_message(message)?))
    }

    pub fn verifying_key(&self) -> VerifyingKey<Sha256> {
        self.signing_key.verifying_key()
    }
}

impl fmt::Debug for MessageSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSigner")
            .field("algorithm", &"RSA-SHA256")
            .field("key_bits", &self.key_bits)
            .finish()
    }
}
