//! Win/loss decision from an oracle-supplied random word.

use soroban_sdk::BytesN;

/// Reduces the leading 8 bytes of the word (big-endian) into `[0, denominator)`.
pub fn roll(random_word: &BytesN<32>, denominator: u32) -> u64 {
    let bytes = random_word.to_array();
    let mut head = [0u8; 8];
    head.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(head) % denominator.max(1) as u64
}

/// A participation wins when its roll lands below the probability numerator.
pub fn is_winning_roll(random_word: &BytesN<32>, win_probability: u32, denominator: u32) -> bool {
    roll(random_word, denominator) < win_probability as u64
}
