// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Bit level primitives shared by the key schedule, the block transform and the message codec,
//! plus the conversions between bytes and `'0'`/`'1'` bit strings used at the crate boundary.
//!
use crate::error::{InvalidInputTypeError, InvalidParameterError};
use crate::type_traits::{Direction, Word};

/// Circular shift of a `w`-bit word by `amount mod w` positions.
///
/// The amount may be negative or wider than the word, it is normalized before use, so
/// rotating left by `-1` is the same as rotating right by `1`.
///
/// # Examples
///
/// ```
/// use rc6::{rotate, Direction};
///
/// assert_eq!(rotate(0x8001u16, 17, Direction::Left), 0x0003);
/// assert_eq!(rotate(0x8001u16, -1, Direction::Left), 0xC000);
/// ```
pub fn rotate<T: Word>(value: T, amount: impl Into<i128>, direction: Direction) -> T {
    let amount = amount.into().rem_euclid(T::BITS as i128) as u32;
    value.rotate_by(amount, direction)
}

/// XOR of any number of words; the XOR of no words is zero.
pub fn xor_many<T: Word>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, v| acc ^ *v)
}

/// Renders `value` as exactly `width` binary digits, zero extended on the left.
///
/// # Examples
///
/// ```
/// use rc6::to_fixed_width_bits;
///
/// assert_eq!(to_fixed_width_bits(5, 8).unwrap(), "00000101");
/// assert!(to_fixed_width_bits(256, 8).is_err());
/// ```
pub fn to_fixed_width_bits(value: u64, width: u32) -> Result<String, InvalidParameterError> {
    if width == 0 || width > u64::BITS || (width < u64::BITS && value >> width != 0) {
        return Err(InvalidParameterError::ValueOutOfRange { value, width });
    }

    Ok(format!("{:0width$b}", value, width = width as usize))
}

/// Smallest odd integer not below `value`.
pub fn round_up_to_odd(value: u64) -> u64 {
    value | 1
}

/// Bits of every byte, most significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:08b}")).collect()
}

/// Checks that `bits` only holds binary digits.
pub(crate) fn validate_bits(bits: &str) -> Result<(), InvalidInputTypeError> {
    match bits.char_indices().find(|(_, c)| *c != '0' && *c != '1') {
        Some((position, character)) => Err(InvalidInputTypeError::InvalidBitCharacter {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// Packs a bit string, most significant bit first, into bytes.
///
/// # Examples
///
/// ```
/// use rc6::bits_to_bytes;
///
/// assert_eq!(bits_to_bytes("0110100001101001").unwrap(), b"hi");
/// ```
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>, InvalidInputTypeError> {
    validate_bits(bits)?;
    if bits.len() % 8 != 0 {
        return Err(InvalidInputTypeError::UnalignedBitString(bits.len()));
    }

    Ok(bits
        .as_bytes()
        .chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |acc, digit| (acc << 1) | (digit - b'0'))
        })
        .collect())
}

/// Packs a bit string into bytes and reads them as UTF-8 text.
pub fn bits_to_text(bits: &str) -> Result<String, InvalidInputTypeError> {
    String::from_utf8(bits_to_bytes(bits)?).map_err(|_| InvalidInputTypeError::NotUtf8)
}
