//! Symmetric obfuscation for sensitive designer properties.
//!
//! Deployed output must not carry values like API keys in the clear, so the
//! serializer runs them through this transform and emits a deobfuscation
//! call instead. The runtime applies the exact inverse; the two sides must
//! agree bit for bit, which is why both directions live in one module and
//! both work on UTF-16 code units (an obfuscated unit may land in the lone
//! surrogate range, which a `String` cannot hold).

use rand::Rng;
use rand::distr::Alphanumeric;

/// Draws a random alphanumeric confounder at least as long as the input it
/// will mask.
pub fn random_confounder(min_len: usize) -> String {
    let len = min_len.max(8);
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Obfuscates `input` against `confounder`.
///
/// The confounder repeats as needed to cover the input. Each code unit is
/// XORed with the confounder unit at its index (folded to the low byte),
/// then with the remaining length; the unit's own index goes into the high
/// byte. An empty confounder contributes nothing to the mask.
pub fn obfuscate(input: &str, confounder: &str) -> Vec<u16> {
    let conf: Vec<u16> = confounder.encode_utf16().collect();
    let units: Vec<u16> = input.encode_utf16().collect();
    let len = units.len() as u32;
    units
        .iter()
        .enumerate()
        .map(|(i, &unit)| {
            let mask = if conf.is_empty() {
                0
            } else {
                conf[i % conf.len()] as u32
            };
            let c = (unit as u32 ^ mask) & 0xFF;
            let low = (c ^ (len - i as u32)) & 0xFF;
            let high = ((c >> 8) ^ i as u32) & 0xFF;
            (((high << 8) | low) & 0xFFFF) as u16
        })
        .collect()
}

/// Exact inverse of [`obfuscate`] for inputs whose masked units fit a byte
/// (any ASCII input against an alphanumeric confounder does).
pub fn deobfuscate(units: &[u16], confounder: &str) -> String {
    let conf: Vec<u16> = confounder.encode_utf16().collect();
    let len = units.len() as u32;
    let restored: Vec<u16> = units
        .iter()
        .enumerate()
        .map(|(i, &unit)| {
            let mask = if conf.is_empty() {
                0
            } else {
                conf[i % conf.len()] as u32
            };
            let c = (((unit as u32) & 0xFF) ^ (len - i as u32)) & 0xFF;
            ((c ^ mask) & 0xFF) as u16
        })
        .collect();
    String::from_utf16_lossy(&restored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_every_unit() {
        let obfuscated = obfuscate("secret", "abc");
        assert_eq!(obfuscated.len(), 6);
        let clear: Vec<u16> = "secret".encode_utf16().collect();
        assert_ne!(obfuscated, clear);
    }

    #[test]
    fn empty_confounder_still_round_trips() {
        let obfuscated = obfuscate("key", "");
        assert_eq!(deobfuscate(&obfuscated, ""), "key");
    }
}
