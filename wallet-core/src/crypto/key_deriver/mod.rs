// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - fixed path, selectable curve
//
// ┌──────────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)                │
// │                    │                                 │
// │     ┌──────────────┴──────────────┐                  │
// │     ▼                             ▼                  │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)       │
// │  m/44'/508'/0'/0/0         m/44'/508'/0'/0'/0'       │
// │  pubkey: SEC1 65B          pubkey: 32B               │
// └──────────────────────────────────────────────────────┘
//
// secp256k1 is what erd1 addresses are derived with here. Ed25519 is kept
// selectable because production wallets on this chain use it; the two yield
// different addresses for the same mnemonic.

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::paths::DerivationPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    #[default]
    Secp256k1,
    Ed25519,
}

/// Private scalar + public key on one curve
///
/// The private key is zeroized on drop and never printed by `Debug`.
pub struct KeyPair {
    private_key: Zeroizing<[u8; 32]>,
    public_key: Vec<u8>,
    curve: CurveType,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve)
            .field("public_key", &hex::encode(&self.public_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl KeyPair {
    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// Encoded public key: SEC1 uncompressed (65B) for secp256k1, 32B for ed25519
    #[inline]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    #[inline]
    pub fn curve(&self) -> CurveType {
        self.curve
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================

pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the key pair at `path` on `curve`
    ///
    /// secp256k1 uses the BIP-32 form of the path, ed25519 its all-hardened form.
    pub fn derive(seed: &[u8], path: &DerivationPath, curve: CurveType) -> WalletResult<KeyPair> {
        Self::validate_seed(seed)?;

        let (private_key, public_key) = match curve {
            CurveType::Secp256k1 => {
                let sk = Secp256k1Deriver::derive(seed, &path.to_bip32_string())?;
                let pk = Secp256k1Deriver::public_key(&sk)?;
                (sk, pk)
            }
            CurveType::Ed25519 => {
                let sk = Ed25519Deriver::derive(seed, &path.to_slip10_string())?;
                let pk = Ed25519Deriver::public_key(&sk)?;
                (sk, pk)
            }
        };

        Ok(KeyPair {
            private_key,
            public_key,
            curve,
        })
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != 64 {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected 64 bytes, got {}",
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
