// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This library provides an implementation of the RC6 block cipher algorithm
//!
//! RC6 is a symmetric-key block cipher derived from RC5. It works on four words (16-bit,
//! 32-bit, or 64-bit each) per block, with a variable number of rounds, and adds an integer
//! multiplication `x * (2x + 1)` to every round so that rotation amounts depend on the whole
//! register instead of only its low bits.
//!
//! The crate is layered:
//!
//! * [RoundKeySchedule] expands a key into `2 * (r + 2)` round keys.
//! * [RC6] encrypts and decrypts single blocks, and [new_rc6_dyn] picks the word size at runtime.
//! * [MessageCodec] (and the [encode]/[decode] shortcuts) frames arbitrary messages into blocks
//!   and exchanges ciphertext as `'0'`/`'1'` bit strings.
//!
//! Every call owns its own key schedule; there is no shared state between calls.
//!
//! ```
//! use rc6::{bits_to_text, decode, encode};
//!
//! let ciphertext = encode("hello", "testkey", 32, 20).unwrap();
//! let recovered = decode(&ciphertext, "testkey", 32, 20).unwrap();
//! assert_eq!(bits_to_text(&recovered).unwrap(), "hello");
//! ```
//!
mod algorithm;
mod bits;
mod chunker;
mod codec;
mod error;
mod key_schedule;
mod params;
mod type_traits;

pub use crate::algorithm::*;
pub use crate::bits::{
    bits_to_bytes, bits_to_text, bytes_to_bits, rotate, round_up_to_odd, to_fixed_width_bits,
    xor_many,
};
pub use crate::codec::*;
pub use crate::error::*;
pub use crate::key_schedule::*;
pub use crate::params::*;
pub use crate::type_traits::{Direction, FromU64, Word};
