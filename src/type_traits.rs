// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Traits describing the fixed-width unsigned words the cipher registers are built from.
//!

/// Direction of a circular shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A trait for types that can be created from a `u64` value, keeping only the low bits.
pub trait FromU64 {
    fn from_u64(v: u64) -> Self;
}

macro_rules! impl_from_u64 {
    ($($ty:ty)*) => {
        $(
            impl FromU64 for $ty {
                #[inline]
                fn from_u64(v: u64) -> $ty {
                    v as $ty
                }
            }
        )*
    }
}

impl_from_u64!(u16 u32 u64);

/// One cipher register of `BITS` bits.
///
/// All arithmetic the cipher needs is wrapping, which is exactly reduction modulo `2^BITS`.
pub trait Word:
    num_traits::Unsigned
    + num_traits::WrappingAdd
    + num_traits::WrappingSub
    + num_traits::WrappingMul
    + FromU64
    + std::ops::BitXor<Self, Output = Self>
    + std::marker::Copy
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// The word size `w`.
    const BITS: u32;
    /// Number of bytes in one word.
    const BYTES: usize = (Self::BITS / 8) as usize;
    /// `log2(w)`, the fixed rotation applied to the quadratic term of a round.
    const LG_W: u32 = Self::BITS.trailing_zeros();

    /// Circular shift by `amount`, which must already be below `BITS`.
    fn rotate_by(self, amount: u32, direction: Direction) -> Self;

    fn to_u64(self) -> u64;

    /// Reads a word from exactly `BYTES` big-endian bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Writes the word as exactly `BYTES` big-endian bytes.
    fn write_be_slice(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($($t:ty)*) => {
        $(
            impl Word for $t {
                const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;

                #[inline]
                fn rotate_by(self, amount: u32, direction: Direction) -> Self {
                    match direction {
                        Direction::Left => self.rotate_left(amount),
                        Direction::Right => self.rotate_right(amount),
                    }
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_be_bytes(buf)
                }

                fn write_be_slice(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_word!(u16 u32 u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lg_w_per_width() {
        assert_eq!(<u16 as Word>::LG_W, 4);
        assert_eq!(<u32 as Word>::LG_W, 5);
        assert_eq!(<u64 as Word>::LG_W, 6);
    }

    #[test]
    fn bytes_per_width() {
        assert_eq!(<u16 as Word>::BYTES, 2);
        assert_eq!(<u32 as Word>::BYTES, 4);
        assert_eq!(<u64 as Word>::BYTES, 8);
    }

    #[test]
    fn from_u64_truncates() {
        assert_eq!(<u16 as FromU64>::from_u64(0x1_2345), 0x2345);
        assert_eq!(<u32 as FromU64>::from_u64(0xFFFF_0000_0000_0001), 1);
    }

    #[test]
    fn big_endian_slices() {
        let w = u32::from_be_slice(&[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(w, 0x1234_5678);

        let mut out = [0u8; 2];
        0xABCDu16.write_be_slice(&mut out);
        assert_eq!(out, [0xAB, 0xCD]);
    }

    #[test]
    fn rotate_by_both_directions() {
        assert_eq!(0x8001u16.rotate_by(1, Direction::Left), 0x0003);
        assert_eq!(0x8001u16.rotate_by(1, Direction::Right), 0xC000);
    }
}
