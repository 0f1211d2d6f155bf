//! Random hexadecimal identifiers.
//!
//! Record ids and transaction hashes are fabricated from the injected random
//! source. They are NOT cryptographic and carry no uniqueness guarantee.

use rand::RngCore;

/// Lowercase hex string of exactly `chars` characters.
pub fn random_hex<R: RngCore + ?Sized>(rng: &mut R, chars: usize) -> String {
    let mut bytes = vec![0u8; chars.div_ceil(2)];
    rng.fill_bytes(&mut bytes);
    let mut encoded = hex::encode(bytes);
    encoded.truncate(chars);
    encoded
}

/// Keep the first `head` and last `tail` characters, joined by `...`.
///
/// Strings too short to shorten are returned unchanged.
pub fn truncate_middle(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= head + tail {
        return value.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}
