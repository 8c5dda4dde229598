// wallet-core/src/keystore/mod.rs

//! Encrypted Mnemonic Keystore
//!
//! - **Schema**: the version-4 JSON record, see [`Keystore`].
//! - **Codec**: Argon2id key derivation and XChaCha20-Poly1305 encryption, see [`KeystoreCodec`].

pub mod codec;
pub mod types;

pub use codec::KeystoreCodec;
pub use types::{CipherParams, CryptoSection, KdfAlgorithm, KdfCost, KdfParams, Keystore, KeystoreKind};
