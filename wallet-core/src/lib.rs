// wallet-core/src/lib.rs

//! Wallet core for erd1 addresses
//!
//! Mnemonic → BIP-32 key at `m/44'/508'/0'/0/0` → Keccak-256 → Bech32 address,
//! plus a password-encrypted keystore for the mnemonic.
//!
//! ```no_run
//! use erd_wallet_core::{wallet, ChainConfig, KdfCost};
//!
//! let chain = ChainConfig::multiversx();
//! let account = wallet::create_wallet(&chain)?;
//! let stored = wallet::create_keystore(account.mnemonic.phrase(), "password", &chain, &KdfCost::default())?;
//! let json = stored.keystore.to_json()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chains;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod keystore;
pub mod logging;
pub mod wallet;

pub use chains::{mvx::MvxAddress, ChainConfig};
pub use crypto::{CurveType, WalletMnemonic};
pub use error::{WalletError, WalletResult};
pub use keystore::{KdfCost, Keystore, KeystoreCodec};
pub use wallet::{KeystoreAccount, WalletAccount};
