// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decorative commitment hashes attached to consent records.
//!
//! These are displayed as "on-chain proof" in the ledger but commit to
//! nothing: they are random tokens, not hashes of record contents.

use rand::RngCore;

/// Random bytes per hash; hex-encodes to 64 characters.
const HASH_BYTES: usize = 32;

/// How many leading/trailing characters survive display truncation.
const TRUNCATE_HEAD: usize = 10;
const TRUNCATE_TAIL: usize = 6;

/// Generate a fresh `0x`-prefixed 64-character hex token.
pub fn generate_hash() -> String {
    let mut bytes = [0u8; HASH_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

/// Shorten a hash for logs and list views: `0x8f4e2d1a9b...e9f2a4b`.
pub fn truncate_hash(hash: &str) -> String {
    if hash.len() <= TRUNCATE_HEAD + TRUNCATE_TAIL {
        return hash.to_string();
    }
    format!(
        "{}...{}",
        &hash[..TRUNCATE_HEAD],
        &hash[hash.len() - TRUNCATE_TAIL..]
    )
}
