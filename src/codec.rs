// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Message framing around the block transform.
//!
//! A message is canonicalized, prefixed with its length in bits as a 64-bit big-endian
//! integer, zero padded to a whole number of `4 * w` bit blocks and every block is encrypted
//! on its own (no chaining between blocks). Ciphertext crosses the crate boundary as a string
//! of `'0'`/`'1'` characters.
//!
use crate::algorithm::{new_rc6_dyn, RC6Algo};
use crate::bits::{bits_to_bytes, bytes_to_bits, validate_bits};
use crate::error::{DecodeFramingError, InvalidInputTypeError, RC6Error};
use crate::params::CipherParameters;
use base64::Engine;

/// Bytes taken by the length prefix.
const LENGTH_PREFIX_BYTES: usize = std::mem::size_of::<u64>();

/// A message to encrypt: either text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    Bytes(Vec<u8>),
}

impl Message {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Message::Text(text) => text.as_bytes(),
            Message::Bytes(bytes) => bytes,
        }
    }
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Message::Text(value.to_owned())
    }
}

impl From<String> for Message {
    fn from(value: String) -> Self {
        Message::Text(value)
    }
}

impl From<&[u8]> for Message {
    fn from(value: &[u8]) -> Self {
        Message::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Message {
    fn from(value: &[u8; N]) -> Self {
        Message::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Message {
    fn from(value: Vec<u8>) -> Self {
        Message::Bytes(value)
    }
}

/// A reversible re-encoding applied to the message and the key before they are framed, and
/// undone on the recovered message after decryption.
pub trait Canonicalization {
    fn canonicalize(&self, raw: &[u8]) -> Vec<u8>;
    fn restore(&self, canonical: &[u8]) -> Result<Vec<u8>, DecodeFramingError>;
}

/// Standard base64 with padding. Ciphertexts produced with it decode with any other
/// implementation that base64 encodes message and key before encryption.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Canonicalization;

impl Canonicalization for Base64Canonicalization {
    fn canonicalize(&self, raw: &[u8]) -> Vec<u8> {
        base64::engine::general_purpose::STANDARD
            .encode(raw)
            .into_bytes()
    }

    fn restore(&self, canonical: &[u8]) -> Result<Vec<u8>, DecodeFramingError> {
        base64::engine::general_purpose::STANDARD
            .decode(canonical)
            .map_err(|e| DecodeFramingError::InvalidCanonicalForm(e.to_string()))
    }
}

/// Passes bytes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCanonicalization;

impl Canonicalization for RawCanonicalization {
    fn canonicalize(&self, raw: &[u8]) -> Vec<u8> {
        raw.to_vec()
    }

    fn restore(&self, canonical: &[u8]) -> Result<Vec<u8>, DecodeFramingError> {
        Ok(canonical.to_vec())
    }
}

/// Encodes and decodes whole messages for one set of [CipherParameters].
///
/// The codec itself holds no key material; every call expands its own key schedule and
/// drops it on return.
///
/// # Examples
///
/// ```
/// use rc6::{bits_to_text, CipherParameters, MessageCodec};
///
/// let codec = MessageCodec::new(CipherParameters::new(32, 20).unwrap());
/// let ciphertext = codec.encode("hello", "testkey").unwrap();
/// assert_eq!(ciphertext.len() % 128, 0);
///
/// let recovered = codec.decode(&ciphertext, "testkey").unwrap();
/// assert_eq!(bits_to_text(&recovered).unwrap(), "hello");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MessageCodec<C = Base64Canonicalization> {
    params: CipherParameters,
    canonicalization: C,
}

impl MessageCodec<Base64Canonicalization> {
    pub fn new(params: CipherParameters) -> Self {
        MessageCodec::with_canonicalization(params, Base64Canonicalization)
    }
}

impl<C: Canonicalization> MessageCodec<C> {
    pub fn with_canonicalization(params: CipherParameters, canonicalization: C) -> Self {
        MessageCodec {
            params,
            canonicalization,
        }
    }

    pub fn params(&self) -> CipherParameters {
        self.params
    }

    /// Encrypts `message` under `key` and returns the ciphertext bits.
    ///
    /// The result length is always a multiple of `4 * w`.
    pub fn encode(&self, message: impl Into<Message>, key: &str) -> Result<String, RC6Error> {
        let message = message.into();
        let cipher = self.cipher(key)?;

        let payload = self.canonicalization.canonicalize(message.as_bytes());
        let mut framed = frame(&payload, cipher.block_bytes());
        for block in framed.chunks_exact_mut(cipher.block_bytes()) {
            cipher.encrypt(block)?;
        }

        Ok(bytes_to_bits(&framed))
    }

    /// Decrypts `ciphertext` bits under `key` and returns the bits of the original message.
    pub fn decode(&self, ciphertext: &str, key: &str) -> Result<String, RC6Error> {
        Ok(bytes_to_bits(&self.decode_to_bytes(ciphertext, key)?))
    }

    /// Decrypts `ciphertext` bits under `key` and returns the original message bytes.
    pub fn decode_to_bytes(&self, ciphertext: &str, key: &str) -> Result<Vec<u8>, RC6Error> {
        validate_bits(ciphertext)?;
        let block_bits = self.params.block_bits();
        if ciphertext.len() % block_bits != 0 {
            return Err(DecodeFramingError::LengthNotMultiple {
                len: ciphertext.len(),
                block_bits,
            }
            .into());
        }
        if ciphertext.is_empty() {
            return Err(DecodeFramingError::MissingLengthPrefix.into());
        }
        let cipher = self.cipher(key)?;

        let mut framed = bits_to_bytes(ciphertext)?;
        for block in framed.chunks_exact_mut(cipher.block_bytes()) {
            cipher.decrypt(block)?;
        }

        let payload = unframe(&framed)?;
        Ok(self.canonicalization.restore(payload)?)
    }

    fn cipher(&self, key: &str) -> Result<Box<dyn RC6Algo>, RC6Error> {
        if key.is_empty() {
            return Err(InvalidInputTypeError::EmptyKey.into());
        }
        let key = self.canonicalization.canonicalize(key.as_bytes());
        new_rc6_dyn(self.params, &key)
    }
}

/// `len_in_bits(payload) || payload || zero padding` up to a whole number of blocks.
fn frame(payload: &[u8], block_bytes: usize) -> Vec<u8> {
    let bit_len = payload.len() as u64 * 8;
    let mut framed = Vec::with_capacity(LENGTH_PREFIX_BYTES + payload.len() + block_bytes);
    framed.extend_from_slice(&bit_len.to_be_bytes());
    framed.extend_from_slice(payload);

    let padding_size = (block_bytes - framed.len() % block_bytes) % block_bytes;
    framed.resize(framed.len() + padding_size, 0);
    framed
}

/// Reads the length prefix and returns the payload it covers.
fn unframe(framed: &[u8]) -> Result<&[u8], DecodeFramingError> {
    let (prefix, rest) = framed
        .split_first_chunk::<LENGTH_PREFIX_BYTES>()
        .ok_or(DecodeFramingError::MissingLengthPrefix)?;
    let bit_len = u64::from_be_bytes(*prefix);

    let available = rest.len() * 8;
    if bit_len > available as u64 {
        return Err(DecodeFramingError::LengthPrefixOverflow {
            declared: bit_len,
            available,
        });
    }
    if bit_len % 8 != 0 {
        return Err(DecodeFramingError::UnalignedLengthPrefix(bit_len));
    }

    Ok(&rest[..(bit_len / 8) as usize])
}

/// Encrypts `message` under `key` with word size `w` and `r` rounds.
///
/// Parameters and inputs are validated before any key schedule work.
///
/// # Examples
///
/// ```
/// use rc6::{decode, encode, bytes_to_bits};
///
/// let ciphertext = encode("hello", "testkey", 32, 20).unwrap();
/// assert_eq!(ciphertext.len() % 128, 0);
/// assert_eq!(decode(&ciphertext, "testkey", 32, 20).unwrap(), bytes_to_bits(b"hello"));
///
/// assert!(encode("hello", "testkey", 24, 20).is_err());
/// ```
pub fn encode(message: impl Into<Message>, key: &str, w: usize, r: i64) -> Result<String, RC6Error> {
    MessageCodec::new(CipherParameters::new(w, r)?).encode(message, key)
}

/// Decrypts `ciphertext` bits produced by [encode] with the same key, `w` and `r`.
pub fn decode(ciphertext: &str, key: &str, w: usize, r: i64) -> Result<String, RC6Error> {
    MessageCodec::new(CipherParameters::new(w, r)?).decode(ciphertext, key)
}
