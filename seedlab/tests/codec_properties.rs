//! Behavioural properties of the mnemonic codec

use std::sync::Arc;
use std::thread;

use rand::{rngs::StdRng, Rng, SeedableRng};
use seedlab::crypto::{
    decode_and_validate, encode, generate_mnemonic, Entropy, MnemonicStrength, Wordlist,
};
use seedlab::ValidationError;

fn random_entropy(rng: &mut StdRng, strength: MnemonicStrength) -> Entropy {
    let mut bytes = vec![0u8; strength.entropy_bytes()];
    rng.fill(&mut bytes[..]);
    Entropy::new(bytes).unwrap()
}

#[test]
fn test_round_trip_all_strengths() {
    let wordlist = Wordlist::english();
    let mut rng = StdRng::seed_from_u64(42);

    for strength in MnemonicStrength::all() {
        for _ in 0..64 {
            let entropy = random_entropy(&mut rng, strength);
            let phrase = encode(&entropy, &wordlist);
            let decoded = decode_and_validate(&phrase, &wordlist).unwrap();

            assert_eq!(decoded, entropy);
            assert_eq!(encode(&decoded, &wordlist), phrase);
        }
    }
}

#[test]
fn test_word_counts_for_zero_entropy() {
    let wordlist = Wordlist::english();

    for (len, words) in [(16, 12), (20, 15), (24, 18), (28, 21), (32, 24)] {
        let entropy = Entropy::new(vec![0u8; len]).unwrap();
        let phrase = encode(&entropy, &wordlist);
        assert_eq!(phrase.split(' ').count(), words, "{} bytes", len);
    }
}

#[test]
fn test_encode_is_deterministic() {
    let wordlist = Wordlist::english();
    let entropy = Entropy::from_hex("c0ba5a8e914111210f2bd131f3d5e08d").unwrap();

    let first = encode(&entropy, &wordlist);
    for _ in 0..10 {
        assert_eq!(encode(&entropy, &wordlist), first);
    }
}

#[test]
fn test_last_word_mutation_is_detected() {
    let wordlist = Wordlist::english();
    let mut rng = StdRng::seed_from_u64(7);

    for strength in MnemonicStrength::all() {
        for _ in 0..16 {
            let entropy = random_entropy(&mut rng, strength);
            let phrase = encode(&entropy, &wordlist);
            let mut words: Vec<&str> = phrase.split(' ').collect();
            let last = wordlist.index_of(words[words.len() - 1]).unwrap();

            for delta in [-1i32, 1] {
                let mutated_index = (i32::from(last) + delta).rem_euclid(2048) as u16;
                let slot = words.len() - 1;
                words[slot] = wordlist.word(mutated_index);
                let mutated = words.join(" ");

                match decode_and_validate(&mutated, &wordlist) {
                    Err(err) => assert_eq!(err, ValidationError::InvalidChecksum),
                    // Only acceptable if the mutation happens to be a valid phrase itself
                    Ok(other) => assert_eq!(encode(&other, &wordlist), mutated),
                }
            }
        }
    }
}

#[test]
fn test_unknown_word_detection() {
    let wordlist = Wordlist::english();
    let phrase = "abandon abandon notaword abandon abandon abandon abandon abandon abandon abandon abandon about";

    assert_eq!(
        decode_and_validate(phrase, &wordlist).unwrap_err(),
        ValidationError::InvalidWords(vec!["notaword".to_string()])
    );
}

#[test]
fn test_unknown_words_reported_in_order() {
    let wordlist = Wordlist::english();
    let err = decode_and_validate("zzz abandon yyy zzz", &wordlist).unwrap_err();

    assert_eq!(
        err,
        ValidationError::InvalidWords(vec!["zzz".into(), "yyy".into(), "zzz".into()])
    );
    assert_eq!(err.to_string(), "Invalid words: zzz, yyy, zzz");
}

#[test]
fn test_empty_input() {
    let wordlist = Wordlist::english();
    assert_eq!(
        decode_and_validate("", &wordlist).unwrap_err(),
        ValidationError::EmptyMnemonic
    );
}

#[test]
fn test_wrong_length() {
    let wordlist = Wordlist::english();
    let phrase = vec!["abandon"; 13].join(" ");

    assert_eq!(
        decode_and_validate(&phrase, &wordlist).unwrap_err(),
        ValidationError::InvalidLength(13)
    );
}

#[test]
fn test_every_invalid_length_up_to_30() {
    let wordlist = Wordlist::english();

    for count in 1..=30usize {
        if MnemonicStrength::from_word_count(count).is_some() {
            continue;
        }
        let phrase = vec!["zoo"; count].join(" ");
        assert_eq!(
            decode_and_validate(&phrase, &wordlist).unwrap_err(),
            ValidationError::InvalidLength(count)
        );
    }
}

#[test]
fn test_custom_wordlist_round_trip() {
    let words: Vec<String> = (0..2048).map(|i| format!("tok{}", i)).collect();
    let wordlist = Wordlist::new(words).unwrap();
    let entropy = Entropy::new(vec![0xa5; 24]).unwrap();

    let phrase = encode(&entropy, &wordlist);
    assert!(phrase.split(' ').all(|w| w.starts_with("tok")));
    assert_eq!(decode_and_validate(&phrase, &wordlist).unwrap(), entropy);

    // A phrase from another wordlist is unknown here
    assert!(matches!(
        decode_and_validate(&encode(&entropy, &Wordlist::english()), &wordlist),
        Err(ValidationError::InvalidWords(_))
    ));
}

#[test]
fn test_shared_wordlist_across_threads() {
    let wordlist = Arc::new(Wordlist::english());

    let handles: Vec<_> = MnemonicStrength::all()
        .into_iter()
        .map(|strength| {
            let wordlist = Arc::clone(&wordlist);
            thread::spawn(move || {
                for _ in 0..50 {
                    let phrase = generate_mnemonic(strength, &wordlist).unwrap();
                    let entropy = decode_and_validate(&phrase, &wordlist).unwrap();
                    assert_eq!(entropy.strength(), strength);
                    assert_eq!(encode(&entropy, &wordlist), phrase);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
