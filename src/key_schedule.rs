// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Expansion of a user key into the round key array `S`.
//!
use crate::bits::{rotate, round_up_to_odd};
use crate::chunker::{runs, CircularCursor};
use crate::error::RC6InitError;
use crate::type_traits::{Direction, Word};
use std::cmp::{max, min};

/// ODD((E - 2) * (1 << 64)), truncated to the word size before rounding
const P64: u64 = 0xB7E151628AED2A6B;
/// ODD((PHI - 1) * (1 << 64)), truncated to the word size before rounding
const Q64: u64 = 0x9E3779B97F4A7C15;

/// The magic constants `(P, Q)` for the word size of `T`.
pub fn magic_constants<T: Word>() -> (T, T) {
    let shift = 64 - T::BITS;
    (
        T::from_u64(round_up_to_odd(P64 >> shift)),
        T::from_u64(round_up_to_odd(Q64 >> shift)),
    )
}

/// The round keys derived from one key for one round count.
///
/// Holds exactly `2 * (r + 2)` words: `S[0]`, `S[1]` pre-whiten the block, `S[t - 2]`,
/// `S[t - 1]` post-whiten it and the pairs in between key the rounds.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeySchedule<T> {
    keys: Box<[T]>,
}

impl<T: Word> RoundKeySchedule<T> {
    /// Expands `key` into the schedule for `rounds` rounds.
    ///
    /// The key is zero padded on the right to a whole number of words and each word is read
    /// big-endian.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::RoundKeySchedule;
    ///
    /// let schedule = RoundKeySchedule::<u32>::new(b"my secret key", 20).unwrap();
    /// assert_eq!(schedule.len(), 44);
    ///
    /// assert!(RoundKeySchedule::<u32>::new(b"", 20).is_err());
    /// ```
    pub fn new(key: &[u8], rounds: u8) -> Result<RoundKeySchedule<T>, RC6InitError> {
        if key.is_empty() {
            return Err(RC6InitError::EmptyKey);
        }

        let (s_arr, l_arr) = RoundKeySchedule::init_sl_arrays(key, rounds);

        Ok(RoundKeySchedule {
            keys: RoundKeySchedule::mix_sl_arrays(s_arr, l_arr),
        })
    }

    fn init_sl_arrays(key: &[u8], rounds: u8) -> (Box<[T]>, Box<[T]>) {
        let (p, q) = magic_constants::<T>();

        let padding_size = (T::BYTES - key.len() % T::BYTES) % T::BYTES;
        let mut padded = key.to_vec();
        padded.resize(key.len() + padding_size, 0);
        let l = padded.chunks_exact(T::BYTES).map(T::from_be_slice);

        let t = 2 * (rounds as usize + 2);
        let s = std::iter::successors(Some(p), |x| Some(x.wrapping_add(&q))).take(t);

        (s.collect(), l.collect())
    }

    fn mix_sl_arrays(s_arr: Box<[T]>, l_arr: Box<[T]>) -> Box<[T]> {
        // one step short of 3 * max(c, t)
        let total_count = 3 * max(s_arr.len(), l_arr.len()) - 1;
        let run = min(s_arr.len(), l_arr.len());
        let mut s_cursor = CircularCursor::new(s_arr);
        let mut l_cursor = CircularCursor::new(l_arr);

        let mut a = T::zero();
        let mut b = T::zero();
        for current_run in runs(total_count, run) {
            std::iter::zip(s_cursor.take_mut(current_run), l_cursor.take_mut(current_run))
                .for_each(|(si, li)| {
                    // A = S[i] = (S[i] + A + B) <<< 3
                    *si = rotate(si.wrapping_add(&a).wrapping_add(&b), 3, Direction::Left);
                    a = *si;
                    // B = L[j] = (L[j] + A + B) <<< (A + B)
                    let ab = a.wrapping_add(&b);
                    *li = rotate(li.wrapping_add(&ab), ab.to_u64(), Direction::Left);
                    b = *li;
                });
        }

        s_cursor.into_inner()
    }

    /// The schedule length `t`.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false, a schedule keeps at least its four whitening keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of rounds the schedule was expanded for.
    pub fn rounds(&self) -> u8 {
        (self.keys.len() / 2 - 2) as u8
    }

    pub fn as_slice(&self) -> &[T] {
        &self.keys
    }

    /// `(S[0], S[1])`
    pub(crate) fn pre_whitening(&self) -> (T, T) {
        (self.keys[0], self.keys[1])
    }

    /// `(S[t - 2], S[t - 1])`
    pub(crate) fn post_whitening(&self) -> (T, T) {
        let t = self.keys.len();
        (self.keys[t - 2], self.keys[t - 1])
    }

    /// `(S[2i], S[2i + 1])`
    pub(crate) fn round_keys(&self, round: usize) -> (T, T) {
        (self.keys[2 * round], self.keys[2 * round + 1])
    }
}

impl<T> std::fmt::Debug for RoundKeySchedule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // round keys are key material
        f.debug_struct("RoundKeySchedule")
            .field("len", &self.keys.len())
            .finish_non_exhaustive()
    }
}
