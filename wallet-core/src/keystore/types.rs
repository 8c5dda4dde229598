// wallet-core/src/keystore/types.rs
//
// Keystore Schema - version 4
//
// {
//   "version": 4,
//   "id": "<uuid v4>",
//   "kind": "mnemonic",
//   "crypto": {
//     "ciphertext": "<hex>",
//     "cipherparams": { "iv": "<hex>" },
//     "cipher": "xchacha20poly1305",
//     "kdf": "argon2id",
//     "kdfparams": { "salt": "<hex>", "opslimit": 2, "memlimit": 67108864, "algorithm": 2 }
//   }
// }
//
// Field order is part of the format. Binary fields are lowercase hex.

use crate::error::KeystoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CIPHER_XCHACHA20POLY1305: &str = "xchacha20poly1305";
pub const KDF_ARGON2ID: &str = "argon2id";

// =============================================================================
// RECORD
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keystore {
    /// Signed so any integer a foreign tool writes reaches the version check
    pub version: i64,
    pub id: Uuid,
    pub kind: KeystoreKind,
    pub crypto: CryptoSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeystoreKind {
    Mnemonic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoSection {
    /// Encrypted mnemonic followed by the 16-byte Poly1305 tag
    #[serde(with = "hex::serde")]
    pub ciphertext: Vec<u8>,
    pub cipherparams: CipherParams,
    pub cipher: String,
    pub kdf: String,
    pub kdfparams: KdfParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    /// 24-byte XChaCha20 nonce
    #[serde(with = "hex::serde")]
    pub iv: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    #[serde(with = "hex::serde")]
    pub salt: Vec<u8>,
    pub opslimit: u32,
    /// Bytes, as in libsodium `crypto_pwhash`
    pub memlimit: u64,
    /// libsodium algorithm id, see [`KdfAlgorithm`]
    pub algorithm: u32,
}

impl Keystore {
    pub fn to_json(&self) -> Result<String, KeystoreError> {
        serde_json::to_string_pretty(self).map_err(|e| KeystoreError::Malformed(e.to_string()))
    }

    /// Parse a keystore document
    ///
    /// Only the shape is checked here. Version and algorithm checks happen on decrypt.
    pub fn from_json(json: &str) -> Result<Self, KeystoreError> {
        serde_json::from_str(json).map_err(|e| KeystoreError::Malformed(e.to_string()))
    }
}

// =============================================================================
// KDF COST
// =============================================================================

/// libsodium `crypto_pwhash` algorithm identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KdfAlgorithm {
    Argon2i13,
    #[default]
    Argon2id13,
}

impl KdfAlgorithm {
    pub fn id(self) -> u32 {
        match self {
            KdfAlgorithm::Argon2i13 => 1,
            KdfAlgorithm::Argon2id13 => 2,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(KdfAlgorithm::Argon2i13),
            2 => Some(KdfAlgorithm::Argon2id13),
            _ => None,
        }
    }
}

/// Password hashing cost, in libsodium units
///
/// `memlimit` is in bytes; Argon2 receives `memlimit / 1024` KiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfCost {
    pub opslimit: u32,
    pub memlimit: u64,
    #[serde(default)]
    pub algorithm: KdfAlgorithm,
}

impl KdfCost {
    /// Argon2 floor: 8 KiB per lane
    pub const MIN_MEMLIMIT: u64 = 8 * 1024;
    /// Same as the sensitive preset
    pub const MAX_MEMLIMIT: u64 = 1024 * 1024 * 1024;
    /// Same as the sensitive preset
    pub const MAX_OPSLIMIT: u32 = 4;

    /// 2 passes, 64 MiB
    pub const fn interactive() -> Self {
        Self {
            opslimit: 2,
            memlimit: 64 * 1024 * 1024,
            algorithm: KdfAlgorithm::Argon2id13,
        }
    }

    /// 3 passes, 256 MiB
    pub const fn moderate() -> Self {
        Self {
            opslimit: 3,
            memlimit: 256 * 1024 * 1024,
            algorithm: KdfAlgorithm::Argon2id13,
        }
    }

    /// 4 passes, 1 GiB
    pub const fn sensitive() -> Self {
        Self {
            opslimit: Self::MAX_OPSLIMIT,
            memlimit: Self::MAX_MEMLIMIT,
            algorithm: KdfAlgorithm::Argon2id13,
        }
    }

    /// Reject costs that cannot be run or that exceed the sensitive preset
    ///
    /// Keystores come from outside, so this runs before any hashing.
    pub fn validate(&self) -> Result<(), KeystoreError> {
        if self.opslimit == 0 {
            return Err(KeystoreError::Malformed("opslimit must be at least 1".to_string()));
        }
        if self.opslimit > Self::MAX_OPSLIMIT {
            return Err(KeystoreError::Malformed(format!(
                "opslimit {} above maximum {}",
                self.opslimit,
                Self::MAX_OPSLIMIT
            )));
        }
        if self.memlimit < Self::MIN_MEMLIMIT {
            return Err(KeystoreError::Malformed(format!(
                "memlimit {} below minimum {}",
                self.memlimit,
                Self::MIN_MEMLIMIT
            )));
        }
        if self.memlimit > Self::MAX_MEMLIMIT {
            return Err(KeystoreError::Malformed(format!(
                "memlimit {} above maximum {}",
                self.memlimit,
                Self::MAX_MEMLIMIT
            )));
        }
        Ok(())
    }

    /// Argon2 memory cost in KiB
    #[inline]
    pub fn memory_kib(&self) -> u32 {
        // validate() caps memlimit at 1 GiB, so the quotient fits
        u32::try_from(self.memlimit / 1024).unwrap_or(u32::MAX)
    }
}

impl Default for KdfCost {
    fn default() -> Self {
        Self::interactive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
