// wallet-core/src/encoding/mod.rs

//! Text Encodings
//!
//! - **Bech32**: BIP-173 checksummed base32 with a human-readable prefix, plus the
//!   generic 8-bit <-> 5-bit regrouping it relies on. See [`bech32`].

pub mod bech32;
