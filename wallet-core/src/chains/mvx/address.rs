// wallet-core/src/chains/mvx/address.rs
//
// erd1 Address - Keccak-256 over the public key, Bech32 over the last 20 bytes
//
// Flow: Public Key → Keccak-256 (32B) → hash[12..32] (20B) → 8→5 bits → Bech32("erd")

use crate::chains::ChainConfig;
use crate::crypto::{DerivationPath, KeyDeriver, WalletMnemonic};
use crate::encoding::bech32;
use crate::error::{AddressError, WalletResult};
use std::fmt;
use tiny_keccak::{Hasher, Keccak};
use tracing::debug;

/// A validated Bech32 address with a 20-byte payload
///
/// Holds both the raw payload and its canonical lowercase encoding, so
/// formatting never fails once a value exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MvxAddress {
    hrp: String,
    payload: [u8; 20],
    encoded: String,
}

impl MvxAddress {
    pub const PAYLOAD_LEN: usize = 20;

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Encode a raw 20-byte payload under `hrp`
    pub fn from_payload(hrp: &str, payload: [u8; 20]) -> WalletResult<Self> {
        let groups = bech32::convert_bits(&payload, 8, 5, true)?;
        let encoded = bech32::encode(hrp, &groups)?;
        Ok(Self {
            hrp: hrp.to_string(),
            payload,
            encoded,
        })
    }

    /// Address from a 32-byte public key hash: only `hash[12..32]` is kept
    pub fn from_public_key_hash(hrp: &str, hash: &[u8; 32]) -> WalletResult<Self> {
        let mut payload = [0u8; Self::PAYLOAD_LEN];
        payload.copy_from_slice(&hash[32 - Self::PAYLOAD_LEN..]);
        Self::from_payload(hrp, payload)
    }

    /// Address from an encoded public key
    ///
    /// The key is hashed as given: 65 bytes with the 0x04 prefix for
    /// secp256k1, 32 bytes for ed25519.
    pub fn from_public_key(hrp: &str, public_key: &[u8]) -> WalletResult<Self> {
        Self::from_public_key_hash(hrp, &Self::hash_public_key(public_key))
    }

    /// Mnemonic → seed (empty passphrase) → key pair at `m/44'/508'/0'/0/0` → address
    pub fn from_mnemonic(mnemonic: &WalletMnemonic, chain: &ChainConfig) -> WalletResult<Self> {
        let seed = mnemonic.to_seed(None)?;
        let path = DerivationPath::MULTIVERSX;
        debug!(chain = %chain.name, curve = ?chain.curve, path = %path, "deriving address");

        let pair = KeyDeriver::derive(&seed[..], &path, chain.curve)?;
        Self::from_public_key(&chain.hrp, pair.public_key())
    }

    // =========================================================================
    // PARSING
    // =========================================================================

    /// Parse and fully validate an address string against `hrp`
    ///
    /// # Checks, in order
    /// 1. Starts with `hrp` followed by `'1'` (case-insensitive)
    /// 2. Decodes as Bech32 with a valid checksum
    /// 3. Decoded prefix equals `hrp`
    /// 4. 5→8 regrouping has canonical padding
    /// 5. Payload is exactly 20 bytes
    pub fn parse(hrp: &str, address: &str) -> Result<Self, AddressError> {
        let expected = format!("{}1", hrp);
        let has_prefix = address
            .get(..expected.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(&expected));
        if !has_prefix {
            return Err(Self::wrong_prefix(hrp, address));
        }

        let (decoded_hrp, groups) = bech32::decode(address)?;
        if decoded_hrp != hrp {
            return Err(AddressError::WrongPrefix {
                expected: hrp.to_string(),
                found: decoded_hrp,
            });
        }

        let bytes = bech32::convert_bits(&groups, 5, 8, false)?;
        let payload: [u8; 20] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidPayloadLength(bytes.len()))?;

        Ok(Self {
            hrp: decoded_hrp,
            payload,
            encoded: address.to_ascii_lowercase(),
        })
    }

    #[inline]
    pub fn is_valid(hrp: &str, address: &str) -> bool {
        Self::parse(hrp, address).is_ok()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[inline]
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    #[inline]
    pub fn payload(&self) -> &[u8; 20] {
        &self.payload
    }

    /// Canonical lowercase Bech32 form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn to_bech32(&self) -> String {
        self.encoded.clone()
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Keccak-256 of the encoded public key
    pub fn hash_public_key(public_key: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(public_key);
        hasher.finalize(&mut hash);
        hash
    }

    fn wrong_prefix(hrp: &str, address: &str) -> AddressError {
        let found = address
            .rsplit_once('1')
            .map(|(head, _)| head)
            .unwrap_or(address);
        AddressError::WrongPrefix {
            expected: hrp.to_string(),
            found: found.chars().take(bech32::MAX_HRP_LENGTH).collect(),
        }
    }
}

impl fmt::Display for MvxAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl AsRef<str> for MvxAddress {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

// =============================================================================
// TESTS
// =============================================================================
