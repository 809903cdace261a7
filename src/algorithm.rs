// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The implementation details of the RC6 block transform
//!
use crate::bits::{rotate, xor_many};
use crate::error::{RC6AlgoError, RC6Error, RC6InitError};
use crate::key_schedule::RoundKeySchedule;
use crate::params::{CipherParameters, WordSize};
use crate::type_traits::{Direction, Word};

/// One block: the four registers `A`, `B`, `C`, `D`.
pub type Block<T> = [T; 4];

/// `(x * (2x + 1)) <<< lg(w)`
#[inline]
fn quadratic<T: Word>(x: T) -> T {
    let f = x.wrapping_mul(&x.wrapping_add(&x).wrapping_add(&T::one()));
    rotate(f, T::LG_W, Direction::Left)
}

/// Encrypts one block in place with the round keys of `schedule`.
///
/// The first round is folded into the pre-whitening, so a schedule for `r` rounds runs the
/// round function `r - 1` times; `r = 0` and `r = 1` only whiten.
pub fn encrypt_block_words<T: Word>(block: &mut Block<T>, schedule: &RoundKeySchedule<T>) {
    let [mut a, mut b, mut c, mut d] = *block;
    let (s0, s1) = schedule.pre_whitening();

    b = b.wrapping_add(&s0);
    d = d.wrapping_add(&s1);

    for i in 1..schedule.rounds() as usize {
        let (s_a, s_c) = schedule.round_keys(i);
        let t = quadratic(b);
        let u = quadratic(d);
        // A = ((A ^ t) <<< u) + S[2i]
        a = rotate(xor_many(&[a, t]), u.to_u64(), Direction::Left).wrapping_add(&s_a);
        // C = ((C ^ u) <<< t) + S[2i + 1]
        c = rotate(xor_many(&[c, u]), t.to_u64(), Direction::Left).wrapping_add(&s_c);
        (a, b, c, d) = (b, c, d, a);
    }

    let (s_a, s_c) = schedule.post_whitening();
    a = a.wrapping_add(&s_a);
    c = c.wrapping_add(&s_c);

    *block = [a, b, c, d];
}

/// Decrypts one block in place, the exact inverse of [encrypt_block_words].
pub fn decrypt_block_words<T: Word>(block: &mut Block<T>, schedule: &RoundKeySchedule<T>) {
    let [mut a, mut b, mut c, mut d] = *block;
    let (s_a, s_c) = schedule.post_whitening();

    c = c.wrapping_sub(&s_c);
    a = a.wrapping_sub(&s_a);

    for i in (1..schedule.rounds() as usize).rev() {
        (a, b, c, d) = (d, a, b, c);
        let (s_a, s_c) = schedule.round_keys(i);
        let u = quadratic(d);
        let t = quadratic(b);
        // C = ((C - S[2i + 1]) >>> t) ^ u
        c = xor_many(&[rotate(c.wrapping_sub(&s_c), t.to_u64(), Direction::Right), u]);
        // A = ((A - S[2i]) >>> u) ^ t
        a = xor_many(&[rotate(a.wrapping_sub(&s_a), u.to_u64(), Direction::Right), t]);
    }

    let (s0, s1) = schedule.pre_whitening();
    d = d.wrapping_sub(&s1);
    b = b.wrapping_sub(&s0);

    *block = [a, b, c, d];
}

/// The RC6 struct represents an instance of the RC6 block cipher algorithm.
///
/// An instance owns the round key schedule expanded from one key, nothing is shared
/// between instances.
pub struct RC6<T> {
    schedule: RoundKeySchedule<T>,
}

impl<T: Word> RC6<T> {
    /// Creates a new RC6 instance with the given key and number of rounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::RC6;
    ///
    /// let key = b"my secret key";
    /// let rc6 = RC6::<u32>::new(key, 20);
    /// assert!(rc6.is_ok());
    /// ```
    pub fn new(key: &[u8], rounds: u8) -> Result<RC6<T>, RC6InitError> {
        Ok(RC6::from_schedule(RoundKeySchedule::new(key, rounds)?))
    }

    pub fn from_schedule(schedule: RoundKeySchedule<T>) -> RC6<T> {
        RC6 { schedule }
    }

    pub fn schedule(&self) -> &RoundKeySchedule<T> {
        &self.schedule
    }

    /// Encrypts the four-word block `[A, B, C, D]` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::<u32>::new(b"my secret key", 20)?;
    ///
    /// let mut block = [0x00010203, 0x04050607, 0x08090A0B, 0x0C0D0E0F];
    /// rc6.encrypt_words(&mut block);
    /// assert_eq!(block, [0xF64A7682, 0x495F77AF, 0xA4435DB2, 0x775967BD]);
    ///
    /// rc6.decrypt_words(&mut block);
    /// assert_eq!(block, [0x00010203, 0x04050607, 0x08090A0B, 0x0C0D0E0F]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_words(&self, block: &mut Block<T>) {
        encrypt_block_words(block, &self.schedule);
    }

    /// Decrypts the four-word block `[A, B, C, D]` in place.
    pub fn decrypt_words(&self, block: &mut Block<T>) {
        decrypt_block_words(block, &self.schedule);
    }

    /// Encrypts one `4 * w / 8` byte block in place, words read big-endian in the order
    /// `A || B || C || D`.
    pub fn encrypt_block(&self, bytes: &mut [u8]) -> Result<(), RC6AlgoError> {
        let mut block = read_block::<T>(bytes)?;
        self.encrypt_words(&mut block);
        write_block(&block, bytes);
        Ok(())
    }

    /// Decrypts one `4 * w / 8` byte block in place.
    pub fn decrypt_block(&self, bytes: &mut [u8]) -> Result<(), RC6AlgoError> {
        let mut block = read_block::<T>(bytes)?;
        self.decrypt_words(&mut block);
        write_block(&block, bytes);
        Ok(())
    }
}

fn read_block<T: Word>(bytes: &[u8]) -> Result<Block<T>, RC6AlgoError> {
    if bytes.len() != 4 * T::BYTES {
        return Err(RC6AlgoError::InvalidBlockSize(bytes.len(), T::BYTES));
    }

    let mut block = [T::zero(); 4];
    for (word, chunk) in block.iter_mut().zip(bytes.chunks_exact(T::BYTES)) {
        *word = T::from_be_slice(chunk);
    }
    Ok(block)
}

fn write_block<T: Word>(block: &Block<T>, bytes: &mut [u8]) {
    for (word, chunk) in block.iter().zip(bytes.chunks_exact_mut(T::BYTES)) {
        word.write_be_slice(chunk);
    }
}

/// The `RC6Algo` trait provides methods for encrypting and decrypting data using
/// the RC6 block cipher algorithm. This trait is useful when the RC6 algorithm needs
/// to be constructed with a word size that is determined at runtime.
pub trait RC6Algo {
    /// Size of one block in bytes.
    fn block_bytes(&self) -> usize;
    /// Encrypts the given block of bytes in place.
    ///
    /// Returns a reference to the encrypted bytes on success, or an [RC6AlgoError] if
    /// the encryption failed.
    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;
    /// Decrypts the given block of bytes in place.
    ///
    /// Returns a reference to the decrypted bytes on success, or an [RC6AlgoError] if
    /// the decryption failed.
    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;
}

impl<T: Word> RC6Algo for RC6<T> {
    fn block_bytes(&self) -> usize {
        4 * T::BYTES
    }

    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        self.encrypt_block(bytes)?;
        Ok(bytes)
    }

    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        self.decrypt_block(bytes)?;
        Ok(bytes)
    }
}

/// Constructs a new [RC6] instance for a word size chosen at runtime.
///
/// # Examples
///
/// ```
/// use rc6::{new_rc6_dyn, CipherParameters, RC6Algo};
///
/// let params = CipherParameters::new(64, 20).unwrap();
/// let algo = new_rc6_dyn(params, b"my secret key").unwrap();
/// let pt_org = [0x5Au8; 32];
/// let mut pt = pt_org.clone();
/// let ct = algo.encrypt(&mut pt).unwrap();
/// assert_ne!(pt_org, *ct);
/// let decrypted = algo.decrypt(ct).unwrap();
/// assert_eq!(pt_org, *decrypted);
/// ```
pub fn new_rc6_dyn(params: CipherParameters, key: &[u8]) -> Result<Box<dyn RC6Algo>, RC6Error> {
    let rounds = params.rounds();
    match params.word_size() {
        WordSize::W16 => Ok(Box::new(RC6::<u16>::new(key, rounds)?)),
        WordSize::W32 => Ok(Box::new(RC6::<u32>::new(key, rounds)?)),
        WordSize::W64 => Ok(Box::new(RC6::<u64>::new(key, rounds)?)),
    }
}
