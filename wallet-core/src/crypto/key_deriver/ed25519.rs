// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010
// Algorithm: HMAC-SHA512, hardened child derivation only
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// Every level of the path MUST be hardened:
//   m/44'/508'/0'/0'/0' (OK)    m/44'/508'/0'/0/0 (INVALID)

use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Ed25519 Key Deriver - SLIP-0010
///
/// # Differences from BIP-32
/// - Master key HMAC key: "ed25519 seed" (instead of "Bitcoin seed")
/// - Hardened derivation only
/// - Any 32 bytes form a valid private key, no range check
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive a private key from seed + all-hardened path
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let indices = Self::parse_path(path)?;

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::split_hmac(Self::MASTER_SECRET, &[seed])?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index'))
        for index in indices {
            let hardened = (index | HARDENED_OFFSET).to_be_bytes();
            let (child_key, child_chain) =
                Self::split_hmac(&chain_code, &[&[0x00u8][..], &key[..], &hardened[..]])?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();
        Ok(Zeroizing::new(key))
    }

    /// 32-byte Ed25519 public key
    pub fn public_key(private_key: &[u8; 32]) -> WalletResult<Vec<u8>> {
        // SigningKey zeroizes itself on drop
        let signing_key = SigningKey::from_bytes(private_key);
        Ok(signing_key.verifying_key().to_bytes().to_vec())
    }

    /// HMAC-SHA512 split into (IL, IR)
    fn split_hmac(mac_key: &[u8], parts: &[&[u8]]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(mac_key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;
        for part in parts {
            mac.update(part);
        }

        let mut buf = Zeroizing::new([0u8; 64]);
        buf.copy_from_slice(&mac.finalize().into_bytes());

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);
        Ok((key, chain_code))
    }

    /// "m/44'/508'/0'/0'/0'" -> [44, 508, 0, 0, 0]
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        let segments = path.strip_prefix("m/").ok_or_else(|| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Path must start with 'm/': {}",
                path
            )))
        })?;
        if segments.is_empty() {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(
                "Empty derivation path".to_string(),
            )));
        }

        let mut indices = Vec::new();
        for segment in segments.split('/') {
            let num_str = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| {
                    WalletError::Crypto(CryptoError::DerivationFailed(format!(
                        "SLIP-0010 ed25519 requires every level hardened, got '{}'",
                        segment
                    )))
                })?;

            let index: u32 = num_str.parse().map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Invalid index '{}': {}",
                    num_str, e
                )))
            })?;
            if index >= HARDENED_OFFSET {
                return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Index out of range: {}",
                    index
                ))));
            }

            indices.push(index);
        }

        Ok(indices)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPath;

    const TEST_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_derive_multiversx_key() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = Ed25519Deriver::derive(&seed, &DerivationPath::MULTIVERSX.to_slip10_string()).unwrap();
        assert_eq!(
            hex::encode(&key[..]),
            "0eb89d816d68610683f209074af218d121a7c7db45d861fbdd959ec662b6404b"
        );

        let public_key = Ed25519Deriver::public_key(&key).unwrap();
        assert_eq!(
            hex::encode(public_key),
            "802f21af709d092b69c7a3ca509d8ff91e8388a136419a359ca0fe954fcc0458"
        );
    }

    #[test]
    fn test_non_hardened_path_rejected() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let err = Ed25519Deriver::derive(&seed, &DerivationPath::MULTIVERSX.to_bip32_string())
            .unwrap_err()
            .to_string();
        assert!(err.contains("hardened"));
    }

    #[test]
    fn test_invalid_path_format() {
        let seed = hex::decode(TEST_SEED).unwrap();
        assert!(Ed25519Deriver::derive(&seed, "invalid").is_err());
        assert!(Ed25519Deriver::derive(&seed, "44'/508'/0'").is_err());
        assert!(Ed25519Deriver::derive(&seed, "m/").is_err());
        assert!(Ed25519Deriver::derive(&seed, "m/2147483648'").is_err());
    }

    // SLIP-0010 test vector 1, chain m/0'
    // Seed: 000102030405060708090a0b0c0d0e0f
    #[test]
    fn test_slip0010_vector_first_child() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = Ed25519Deriver::derive(&seed, "m/0'").unwrap();
        assert_eq!(
            hex::encode(&key[..]),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
    }
}
