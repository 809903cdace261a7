// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Cyclic traversal of an array in runs, used to walk the `S` and `L` arrays of the key
//! schedule in lock step while each index wraps at its own length.

use std::cmp::min;

/// An owned array read as an endless ring.
///
/// Every call to [CircularCursor::take_mut] hands out the next `n` elements, continuing where
/// the previous run stopped and wrapping back to index 0 past the end.
///
/// # Examples
///
/// ```ignore
/// let mut cursor = CircularCursor::new([1, 2, 3].into());
///
/// let run: Vec<i32> = cursor.take_mut(2).map(|a| *a).collect();
/// assert_eq!(run, [1, 2]);
///
/// let run: Vec<i32> = cursor.take_mut(2).map(|a| *a).collect();
/// assert_eq!(run, [3, 1]);
/// ```
pub struct CircularCursor<T> {
    arr: Box<[T]>,
    position: usize,
}

impl<T> CircularCursor<T> {
    pub fn new(arr: Box<[T]>) -> CircularCursor<T> {
        CircularCursor { arr, position: 0 }
    }

    /// Mutable iterator over the next `n` elements of the ring.
    ///
    /// A run never visits the same element twice, so `n` is capped at the array length.
    pub fn take_mut(&mut self, n: usize) -> impl Iterator<Item = &mut T> {
        let len = self.arr.len();
        let n = min(n, len);
        let (head, tail) = self.arr.split_at_mut(self.position);
        if len > 0 {
            self.position = (self.position + n) % len;
        }
        tail.iter_mut().chain(head).take(n)
    }

    pub fn into_inner(self) -> Box<[T]> {
        self.arr
    }
}

/// Splits `total` steps into runs of at most `run` steps.
///
/// ```ignore
/// let runs: Vec<usize> = runs(10, 3).collect();
/// assert_eq!(runs, [3, 3, 3, 1]);
/// ```
pub fn runs(total: usize, run: usize) -> impl Iterator<Item = usize> {
    let mut remaining = total;

    std::iter::from_fn(move || {
        if run == 0 || remaining == 0 {
            return None;
        }
        let current = min(remaining, run);
        remaining -= current;
        Some(current)
    })
}
