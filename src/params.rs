// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Cipher parameters: word size and round count.
//!
use crate::error::InvalidParameterError;

/// Supported register widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordSize {
    W16,
    W32,
    W64,
}

impl WordSize {
    /// The word size `w` in bits.
    pub const fn bits(self) -> usize {
        match self {
            WordSize::W16 => 16,
            WordSize::W32 => 32,
            WordSize::W64 => 64,
        }
    }

    /// One block holds four words.
    pub const fn block_bits(self) -> usize {
        4 * self.bits()
    }

    pub const fn block_bytes(self) -> usize {
        self.block_bits() / 8
    }
}

impl TryFrom<usize> for WordSize {
    type Error = InvalidParameterError;

    fn try_from(width: usize) -> Result<Self, Self::Error> {
        match width {
            16 => Ok(WordSize::W16),
            32 => Ok(WordSize::W32),
            64 => Ok(WordSize::W64),
            _ => Err(InvalidParameterError::InvalidWidth(width)),
        }
    }
}

/// Word size and round count of one RC6 instance, validated at construction.
///
/// # Examples
///
/// ```
/// use rc6::CipherParameters;
///
/// let params = CipherParameters::new(32, 20).unwrap();
/// assert_eq!(params.schedule_len(), 44);
/// assert_eq!(params.block_bits(), 128);
///
/// assert!(CipherParameters::new(24, 20).is_err());
/// assert!(CipherParameters::new(32, -1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherParameters {
    word_size: WordSize,
    rounds: u8,
}

impl CipherParameters {
    pub fn new(width: usize, rounds: i64) -> Result<CipherParameters, InvalidParameterError> {
        let word_size = WordSize::try_from(width)?;
        let rounds = u8::try_from(rounds).map_err(|_| InvalidParameterError::InvalidRounds(rounds))?;

        Ok(CipherParameters::with_word_size(word_size, rounds))
    }

    pub const fn with_word_size(word_size: WordSize, rounds: u8) -> CipherParameters {
        CipherParameters { word_size, rounds }
    }

    pub const fn word_size(&self) -> WordSize {
        self.word_size
    }

    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    /// `t = 2 * (r + 2)`
    pub const fn schedule_len(&self) -> usize {
        2 * (self.rounds as usize + 2)
    }

    pub const fn block_bits(&self) -> usize {
        self.word_size.block_bits()
    }
}

impl Default for CipherParameters {
    /// RC6-32/20, the recommended configuration.
    fn default() -> Self {
        CipherParameters::with_word_size(WordSize::W32, 20)
    }
}
