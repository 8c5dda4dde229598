// wallet-core/src/chains/mvx/mod.rs

//! erd1 Address Support
//!
//! Bech32 addresses over a 20-byte payload: the last 20 bytes of the Keccak-256
//! hash of the encoded public key, derived at `m/44'/508'/0'/0/0`. See [`MvxAddress`].

pub mod address;

pub use address::MvxAddress;
