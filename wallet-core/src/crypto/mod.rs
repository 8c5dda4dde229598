// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Secure Randomness**: OS CSPRNG bytes and UUIDs via [`SecureRandom`].
//! - **Mnemonic**: BIP-39 phrases (24 words by default) via [`WalletMnemonic`].
//! - **Derivation Path**: the fixed `m/44'/508'/0'/0/0` path via [`DerivationPath`].
//! - **Key Derivation**: secp256k1 (BIP-32) or Ed25519 (SLIP-0010) key pairs via [`KeyDeriver`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;
pub mod random;

pub use key_deriver::{CurveType, KeyDeriver, KeyPair};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::DerivationPath;
pub use random::SecureRandom;
