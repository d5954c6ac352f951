use daily_puzzles::cipher::{
    generate_derangement, generate_derangement_with_stats, generate_keys, write_keys,
    Derangement, KeyError, LetterPermutation, ALPHABET, DEFAULT_KEY_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const SHIFT_BY_ONE: &str = "BCDEFGHIJKLMNOPQRSTUVWXYZA";

fn assert_valid_key(key: &str) {
    assert_eq!(key.len(), 26, "key {key} has wrong length");
    assert!(key.chars().all(|ch| ch.is_ascii_uppercase()), "key {key}");
    let unique: HashSet<char> = key.chars().collect();
    assert_eq!(unique.len(), 26, "key {key} repeats a letter");
    for (idx, letter) in key.bytes().enumerate() {
        assert_ne!(letter, ALPHABET[idx], "key {key} fixes position {}", idx + 1);
    }
}

#[test]
fn generated_keys_have_no_fixed_points() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let key = generate_derangement(&mut rng);
        assert_valid_key(&key.to_string());
    }
}

#[test]
fn batch_has_requested_size() {
    let mut rng = StdRng::seed_from_u64(20);
    let keys = generate_keys(DEFAULT_KEY_COUNT, &mut rng);
    assert_eq!(keys.len(), 20);
    for key in &keys {
        assert_valid_key(&key.to_string());
    }
    assert!(generate_keys(0, &mut rng).is_empty());
}

#[test]
fn same_seed_reproduces_the_batch() {
    let first = generate_keys(5, &mut StdRng::seed_from_u64(99));
    let second = generate_keys(5, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn consecutive_calls_are_independent() {
    let mut rng = StdRng::seed_from_u64(3);
    let keys: HashSet<Derangement> = (0..50).map(|_| generate_derangement(&mut rng)).collect();
    // 50 draws from ~1.5e26 derangements
    assert_eq!(keys.len(), 50);
}

#[test]
fn rejection_count_stays_small_on_average() {
    let mut rng = StdRng::seed_from_u64(7);
    let samples = 2_000u32;
    let rejected: u32 = (0..samples)
        .map(|_| generate_derangement_with_stats(&mut rng).1)
        .sum();
    let trials_per_key = f64::from(rejected + samples) / f64::from(samples);
    assert!(
        (2.2..3.3).contains(&trials_per_key),
        "expected about e trials per key, got {trials_per_key:.3}"
    );
}

#[test]
fn identity_is_not_a_derangement() {
    assert!(Derangement::from_permutation(LetterPermutation::identity()).is_none());
    assert_eq!(
        LetterPermutation::identity().fixed_points().count(),
        ALPHABET.len()
    );
}

#[test]
fn parses_valid_key() {
    let key: Derangement = SHIFT_BY_ONE.parse().expect("shift key is a derangement");
    assert_eq!(key.to_string(), SHIFT_BY_ONE);
    assert_eq!(key.cipher_letter(b'A'), Some(b'B'));
    assert_eq!(key.cipher_letter(b'a'), None);
}

#[test]
fn rejects_malformed_keys() {
    assert_eq!(
        "BCDEFGHIJKLMNOPQRSTUVWXYZ".parse::<Derangement>(),
        Err(KeyError::Length(25))
    );
    assert_eq!(
        "bCDEFGHIJKLMNOPQRSTUVWXYZA".parse::<Derangement>(),
        Err(KeyError::NotUppercase {
            character: 'b',
            position: 1
        })
    );
    assert_eq!(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ".parse::<Derangement>(),
        Err(KeyError::FixedPoint {
            letter: 'A',
            position: 1
        })
    );
    assert_eq!(
        "CADCFEHGJILKNMPORQTSVUXWZY".parse::<Derangement>(),
        Err(KeyError::Repeated('C'))
    );
}

#[test]
fn encipher_then_decipher_restores_text() {
    let key: Derangement = SHIFT_BY_ONE.parse().expect("valid key");
    let ciphertext = key.encipher("Hello, World!");
    assert_eq!(ciphertext, "Ifmmp, Xpsme!");
    assert_eq!(key.decipher(&ciphertext), "Hello, World!");
}

#[test]
fn inverse_is_also_a_derangement() {
    let mut rng = StdRng::seed_from_u64(11);
    let key = generate_derangement(&mut rng);
    let inverse = key.inverse();
    assert_valid_key(&inverse.to_string());
    assert_eq!(inverse.inverse(), key);
}

#[test]
fn writes_one_key_per_line() {
    let keys = generate_keys(3, &mut StdRng::seed_from_u64(1));
    let mut out = Vec::new();
    write_keys(&mut out, &keys).expect("write to vec");
    let text = String::from_utf8(out).expect("ascii output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for (line, key) in lines.iter().zip(&keys) {
        assert_eq!(*line, key.to_string());
        assert_valid_key(line);
    }
}

#[test]
fn serializes_as_plain_string() {
    let key: Derangement = SHIFT_BY_ONE.parse().expect("valid key");
    let json = serde_json::to_string(&key).expect("serialize key");
    assert_eq!(json, format!("\"{SHIFT_BY_ONE}\""));
}
