//! Demo-only transfer envelope.
//!
//! This module is a display artifact, not a security boundary: the keypair
//! and the symmetric key are generated fresh per call and dropped before the
//! function returns, so the ciphertext is not decryptable by any party. It
//! exists so the UI can show a sealed receipt. It must never be used as the
//! basis for real fund custody.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chacha20poly1305::{aead::Aead, ChaCha20Poly1305, Key, KeyInit, Nonce};
use chrono::{DateTime, Utc};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Serialize;

/// ChaCha20-Poly1305 nonce length, prepended to the ciphertext.
pub const NONCE_LEN: usize = 12;

const SYMMETRIC_KEY_LEN: usize = 32;
const PAYLOAD_NONCE_LEN: usize = 8;

/// Error raised while building the envelope. Surfaced to callers as an
/// opaque internal failure.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("failed to serialize envelope payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("failed to seal envelope payload")]
    Seal,
}

/// Base64-encoded display envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct SealedEnvelope {
    pub public_key: String,
    pub encrypted_data: String,
}

#[derive(Serialize)]
struct EnvelopePayload<'a> {
    amount: f64,
    recipient: &'a str,
    timestamp: DateTime<Utc>,
    nonce: String,
}

/// Seal `{amount, recipient, timestamp, nonce}` under a fresh, immediately
/// discarded key. The returned public key is the base64 form of an ephemeral
/// ed25519 verifying key whose signing half is never kept.
pub fn seal(
    amount: f64,
    recipient: &str,
    timestamp: DateTime<Utc>,
) -> Result<SealedEnvelope, EnvelopeError> {
    let signing_key = SigningKey::generate(&mut OsRng);
    let public_key = BASE64.encode(signing_key.verifying_key().to_bytes());

    let mut payload_nonce = [0u8; PAYLOAD_NONCE_LEN];
    OsRng.fill_bytes(&mut payload_nonce);

    let payload = serde_json::to_vec(&EnvelopePayload {
        amount,
        recipient,
        timestamp,
        nonce: BASE64.encode(payload_nonce),
    })?;

    let mut key_bytes = [0u8; SYMMETRIC_KEY_LEN];
    OsRng.fill_bytes(&mut key_bytes);
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = ChaCha20Poly1305::new(Key::from_slice(&key_bytes));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), payload.as_slice())
        .map_err(|_| EnvelopeError::Seal)?;

    let mut combined = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    combined.extend_from_slice(&nonce_bytes);
    combined.extend_from_slice(&ciphertext);

    Ok(SealedEnvelope {
        public_key,
        encrypted_data: BASE64.encode(combined),
    })
}
