// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rc6::*;

pub const BITS_IN_BYTE: usize = 8;

macro_rules! test_concrete_vs_dynamic {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            let key = [
                0x2B, 0xD6, 0x45, 0x9F, 0x82, 0xC5, 0xB3, 0x00, 0x95, 0x2C, 0x49, 0x10, 0x48, 0x81,
                0xFF, 0x48,
            ];
            let rounds = 20;
            const W: usize = BITS_IN_BYTE * std::mem::size_of::<$t>();
            let rc6_concrete = RC6::<$t>::new(&key, rounds).unwrap();
            let params = CipherParameters::new(W, rounds as i64).unwrap();
            let rc6_dyn = new_rc6_dyn(params, &key).unwrap();

            let mut pt = [0u8; W * 4 / BITS_IN_BYTE];
            let mut pt_dyn = pt;

            rc6_concrete.encrypt_block(&mut pt).unwrap();
            rc6_dyn.encrypt(&mut pt_dyn).unwrap();

            assert_eq!(pt[..], pt_dyn[..]);
        }
    };
}

test_concrete_vs_dynamic!(test_concrete_vs_dynamic_16, u16);
test_concrete_vs_dynamic!(test_concrete_vs_dynamic_32, u32);
test_concrete_vs_dynamic!(test_concrete_vs_dynamic_64, u64);

macro_rules! test_message_round_trip {
    ($name:ident, $w:expr) => {
        #[test]
        fn $name() {
            let messages: [&[u8]; 5] = [
                b"",
                b"a",
                b"Shall we drink a tea?",
                &[0x00, 0xFF, 0x80, 0x7F],
                &[0xA5; 300],
            ];
            for rounds in [0, 1, 2, 12, 20] {
                for message in messages {
                    let ciphertext = encode(message, "With donuts!", $w, rounds).unwrap();
                    assert_eq!(ciphertext.len() % (4 * $w), 0);

                    let recovered = decode(&ciphertext, "With donuts!", $w, rounds).unwrap();
                    assert_eq!(recovered, bytes_to_bits(message));
                    assert_eq!(bits_to_bytes(&recovered).unwrap(), message);
                }
            }
        }
    };
}

test_message_round_trip!(test_message_round_trip_16, 16);
test_message_round_trip!(test_message_round_trip_32, 32);
test_message_round_trip!(test_message_round_trip_64, 64);

#[test]
fn hello_testkey() {
    let ciphertext = encode("hello", "testkey", 32, 20).unwrap();
    assert_eq!(ciphertext.len() % 128, 0);
    assert!(ciphertext.chars().all(|c| c == '0' || c == '1'));

    let recovered = decode(&ciphertext, "testkey", 32, 20).unwrap();
    assert_eq!(bits_to_text(&recovered).unwrap(), "hello");
}

#[test]
fn deterministic() {
    let first = encode("Shall we drink a tea?", "With donuts!", 64, 20).unwrap();
    for _ in 0..3 {
        let again = encode("Shall we drink a tea?", "With donuts!", 64, 20).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn wrong_key_does_not_recover_message() {
    let ciphertext = encode("attack at dawn", "right key", 32, 20).unwrap();
    let res = decode(&ciphertext, "wrong key", 32, 20);
    // a wrong key garbles the length prefix or the canonical payload
    assert_ne!(res, Ok(bytes_to_bits(b"attack at dawn")));
}

#[test]
fn parameters_are_part_of_the_key() {
    let a = encode("same message", "same key", 32, 20).unwrap();
    let b = encode("same message", "same key", 32, 12).unwrap();
    let c = encode("same message", "same key", 16, 20).unwrap();
    assert_ne!(a, b);
    assert_ne!(a[..64], c[..64]);
}

#[test]
fn short_key_is_padded_deterministically() {
    let codec = MessageCodec::with_canonicalization(
        CipherParameters::new(64, 20).unwrap(),
        RawCanonicalization,
    );
    let ciphertext = codec.encode("padded", "k").unwrap();
    assert_eq!(ciphertext, codec.encode("padded", "k").unwrap());
    // a one byte key and the same byte followed by zeros expand to the same schedule
    assert_eq!(
        ciphertext,
        codec.encode("padded", "k\0\0\0\0\0\0\0").unwrap()
    );
    assert_eq!(codec.decode_to_bytes(&ciphertext, "k").unwrap(), b"padded");
}

#[test]
fn decode_framing_errors() {
    let ciphertext = encode("hello world, hello world", "key", 16, 20).unwrap();
    assert_eq!(ciphertext.len(), 320);

    let truncated = &ciphertext[..ciphertext.len() - 8];
    assert!(matches!(
        decode(truncated, "key", 16, 20),
        Err(RC6Error::DecodeFraming(DecodeFramingError::LengthNotMultiple { .. }))
    ));

    // three 64-bit blocks do not fill one 256-bit block
    let res = decode(&ciphertext[..64 * 3], "key", 64, 20);
    assert!(matches!(
        res,
        Err(RC6Error::DecodeFraming(DecodeFramingError::LengthNotMultiple {
            len: 192,
            block_bits: 256
        }))
    ));
}

#[test]
fn cross_parameter_isolation() {
    let expected_1 = encode("first message", "first key", 32, 20).unwrap();
    let expected_2 = encode("second message", "second key", 16, 12).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    if i % 2 == 0 {
                        (i, encode("first message", "first key", 32, 20).unwrap())
                    } else {
                        (i, encode("second message", "second key", 16, 12).unwrap())
                    }
                })
            })
            .collect();

        for handle in handles {
            let (i, ciphertext) = handle.join().unwrap();
            if i % 2 == 0 {
                assert_eq!(ciphertext, expected_1);
            } else {
                assert_eq!(ciphertext, expected_2);
            }
        }
    });
}

#[test]
fn random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..50 {
        let w = [16, 32, 64][rng.gen_range(0..3)];
        let rounds = rng.gen_range(0..30);
        let key: String = (0..rng.gen_range(1..40))
            .map(|_| rng.gen_range(b' '..=b'~') as char)
            .collect();
        let len = rng.gen_range(0..500);
        let message: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let ciphertext = encode(message.clone(), &key, w, rounds).unwrap();
        let codec = MessageCodec::new(CipherParameters::new(w, rounds).unwrap());
        assert_eq!(codec.decode_to_bytes(&ciphertext, &key).unwrap(), message);
    }
}

fn changed_bits(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

macro_rules! test_plaintext_avalanche {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            const BLOCK_BYTES: usize = 4 * std::mem::size_of::<$t>();
            let mut rng = StdRng::seed_from_u64(42);
            let rc6 = RC6::<$t>::new(b"avalanche", 20).unwrap();

            let trials = 400;
            let mut changed = 0;
            for _ in 0..trials {
                let mut pt = [0u8; BLOCK_BYTES];
                rng.fill(&mut pt[..]);
                let mut flipped = pt;
                let bit = rng.gen_range(0..BLOCK_BYTES * BITS_IN_BYTE);
                flipped[bit / BITS_IN_BYTE] ^= 1 << (bit % BITS_IN_BYTE);

                rc6.encrypt_block(&mut pt).unwrap();
                rc6.encrypt_block(&mut flipped).unwrap();
                changed += changed_bits(&pt, &flipped);
            }

            let ratio = changed as f64 / (trials * BLOCK_BYTES * BITS_IN_BYTE) as f64;
            assert!((0.45..0.55).contains(&ratio), "ratio {ratio}");
        }
    };
}

test_plaintext_avalanche!(test_plaintext_avalanche_16, u16);
test_plaintext_avalanche!(test_plaintext_avalanche_32, u32);
test_plaintext_avalanche!(test_plaintext_avalanche_64, u64);

#[test]
fn key_avalanche() {
    let mut rng = StdRng::seed_from_u64(7);
    let message = "The quick brown fox jumps over the lazy dog";

    let trials = 100;
    let mut changed = 0;
    let mut total = 0;
    for _ in 0..trials {
        let mut key: Vec<u8> = (0..16).map(|_| rng.gen_range(b'a'..=b'z')).collect();
        let ciphertext = encode(message, std::str::from_utf8(&key).unwrap(), 32, 20).unwrap();

        // flipping one of the low bits keeps the key printable ASCII
        let i = rng.gen_range(0..key.len());
        key[i] ^= 1 << rng.gen_range(0..4);
        let flipped = encode(message, std::str::from_utf8(&key).unwrap(), 32, 20).unwrap();

        changed += ciphertext
            .chars()
            .zip(flipped.chars())
            .filter(|(a, b)| a != b)
            .count();
        total += ciphertext.len();
    }

    let ratio = changed as f64 / total as f64;
    assert!((0.45..0.55).contains(&ratio), "ratio {ratio}");
}
