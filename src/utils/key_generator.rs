//! Short key generation.
//!
//! Keys are drawn uniformly from a 62-character alphabet using the OS
//! CSPRNG. Predictable keys would let an attacker enumerate or guess short
//! links, so a non-cryptographic generator is not acceptable here.

/// Alphabet for generated keys: ASCII letters plus digits.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default key length. 62^5 is roughly 9.2e8 keys.
pub const DEFAULT_KEY_LENGTH: usize = 5;

/// Generates a random key of `length` characters from the 62-symbol alphabet.
///
/// Bytes from the OS random source are rejection-sampled so every symbol is
/// exactly equally likely (a plain modulo would bias the first 8 symbols).
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_key(length: usize) -> String {
    // Largest multiple of 62 that fits in a byte; values at or above it are
    // rediscarded to keep the distribution uniform.
    const LIMIT: u8 = 62 * 4;

    let mut key = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while key.len() < length {
        getrandom::fill(&mut buffer).expect("OS random source failed");

        for byte in buffer {
            if byte < LIMIT {
                key.push(ALPHABET[(byte % 62) as usize] as char);
                if key.len() == length {
                    break;
                }
            }
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_key_has_requested_length() {
        assert_eq!(generate_key(5).len(), 5);
        assert_eq!(generate_key(6).len(), 6);
        assert_eq!(generate_key(12).len(), 12);
    }

    #[test]
    fn test_generate_key_default_length_is_five() {
        assert_eq!(generate_key(DEFAULT_KEY_LENGTH).len(), 5);
    }

    #[test]
    fn test_generate_key_uses_only_alphabet_characters() {
        for _ in 0..100 {
            let key = generate_key(5);
            assert!(key.bytes().all(|b| ALPHABET.contains(&b)), "bad key: {key}");
        }
    }

    #[test]
    fn test_generate_key_produces_unique_keys() {
        let mut keys = HashSet::new();

        for _ in 0..1000 {
            keys.insert(generate_key(8));
        }

        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_generate_key_covers_alphabet_classes() {
        // With 2000 symbols drawn, missing a whole class would be astronomically
        // unlikely under a uniform distribution.
        let sample: String = (0..400).map(|_| generate_key(5)).collect();

        assert!(sample.bytes().any(|b| b.is_ascii_lowercase()));
        assert!(sample.bytes().any(|b| b.is_ascii_uppercase()));
        assert!(sample.bytes().any(|b| b.is_ascii_digit()));
    }
}
