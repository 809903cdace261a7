// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Error types reported by the cipher entry points.
//!
//! Every check happens before any key schedule or block work starts, so an error never
//! leaves a partially computed result behind.

/// Invalid cipher parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameterError {
    #[error("invalid width `{0}`; supported widths are: {{16, 32, 64}}")]
    InvalidWidth(usize),
    #[error("invalid round count `{0}`; supported range is [0, 255]")]
    InvalidRounds(i64),
    #[error("value `{value:#x}` does not fit in {width} bits")]
    ValueOutOfRange { value: u64, width: u32 },
}

/// Input that is not of an accepted kind or shape.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputTypeError {
    #[error("the key must not be empty")]
    EmptyKey,
    #[error("invalid character `{character}` at position {position}; bit strings may only contain '0' and '1'")]
    InvalidBitCharacter { position: usize, character: char },
    #[error("bit string of length {0} is not a whole number of bytes")]
    UnalignedBitString(usize),
    #[error("recovered bytes are not valid UTF-8")]
    NotUtf8,
}

/// Ciphertext or decoded plaintext that does not follow the message framing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeFramingError {
    #[error("ciphertext length {len} is not a multiple of the {block_bits}-bit block size")]
    LengthNotMultiple { len: usize, block_bits: usize },
    #[error("ciphertext is empty; expected at least one block holding the length prefix")]
    MissingLengthPrefix,
    #[error("length prefix declares {declared} bits but only {available} bits were decoded")]
    LengthPrefixOverflow { declared: u64, available: usize },
    #[error("length prefix `{0}` is not a whole number of bytes")]
    UnalignedLengthPrefix(u64),
    #[error("decoded payload is not in canonical form: {0}")]
    InvalidCanonicalForm(String),
}

/// The `RC6InitError` enum represents the possible errors that can occur during the
/// [crate::RC6] initialization
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RC6InitError {
    #[error("the key must not be empty")]
    EmptyKey,
}

/// The `RC6AlgoError` enum represents the possible errors that can occur during the
/// encryption decryption in [crate::RC6Algo].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RC6AlgoError {
    #[error("invalid input block size `{0}`; expected a `4 * {1}` byte block")]
    InvalidBlockSize(usize, usize),
}

/// Any error produced by the message level entry points.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RC6Error {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),
    #[error(transparent)]
    InvalidInputType(#[from] InvalidInputTypeError),
    #[error(transparent)]
    DecodeFraming(#[from] DecodeFramingError),
    #[error(transparent)]
    Algo(#[from] RC6AlgoError),
}

impl From<RC6InitError> for RC6Error {
    fn from(value: RC6InitError) -> Self {
        match value {
            RC6InitError::EmptyKey => RC6Error::InvalidInputType(InvalidInputTypeError::EmptyKey),
        }
    }
}
