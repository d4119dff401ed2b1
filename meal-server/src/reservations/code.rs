//! Reservation code generation and normalization
//!
//! Codes are short, human-typeable identifiers handed to students and
//! read back aloud at staff terminals. The alphabet drops the
//! characters that are ambiguous in print or speech (`0`/`O`, `1`/`I`).
//!
//! A draw is random and carries no uniqueness guarantee on its own;
//! uniqueness is enforced where the code is registered (the store's
//! collision-checked insert), so issuing and registration stay atomic.

use rand::Rng;

/// Characters a code may contain. 32 symbols, no `0 O 1 I`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Code length. 32^6 ≈ 1.07e9 combinations, collision probability over
/// a campus-sized reservation volume is negligible.
pub const CODE_LEN: usize = 6;

/// Draw a fresh candidate code
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Normalize a client-supplied code for lookup
///
/// Trims surrounding whitespace and uppercases, so `abc123`, `ABC123`
/// and ` Abc123 ` all resolve to the same key. Clients normalize too;
/// doing it again here is the server-side half of that contract.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
