// wallet-core/src/keystore/codec.rs
//
// Keystore Codec - password → Argon2id → 32-byte key → XChaCha20-Poly1305(mnemonic)
//
// KDF parameters follow libsodium `crypto_pwhash`:
//   t_cost = opslimit, m_cost = memlimit / 1024 KiB, parallelism = 1,
//   salt = first 16 bytes of the stored salt, output = 32 bytes.
// Associated data is empty. Ciphertext carries the 16-byte tag at its end.

use crate::crypto::{SecureRandom, WalletMnemonic};
use crate::error::{CryptoError, KeystoreError, WalletError, WalletResult};
use crate::keystore::types::{
    CipherParams, CryptoSection, KdfAlgorithm, KdfCost, KdfParams, Keystore, KeystoreKind,
    CIPHER_XCHACHA20POLY1305, KDF_ARGON2ID,
};
use argon2::{Algorithm, Argon2, Params, Version};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    XChaCha20Poly1305, XNonce,
};
use tracing::debug;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Keystore Codec
///
/// # Security
/// - The password and derived key are never stored or logged
/// - Derived keys and decrypted plaintext are zeroized on drop
/// - A wrong password and a tampered ciphertext both yield `InvalidPassword`
pub struct KeystoreCodec;

impl KeystoreCodec {
    pub const VERSION: i64 = 4;
    pub const SALT_LEN: usize = 32;
    /// Salt bytes consumed by the KDF
    pub const KDF_SALT_LEN: usize = 16;
    pub const NONCE_LEN: usize = 24;
    pub const KEY_LEN: usize = 32;
    pub const TAG_LEN: usize = 16;

    // =========================================================================
    // ENCRYPT
    // =========================================================================

    /// Encrypt with the interactive cost preset
    pub fn encrypt(mnemonic: &WalletMnemonic, password: &str) -> WalletResult<Keystore> {
        Self::encrypt_with_cost(mnemonic, password, &KdfCost::default())
    }

    /// Encrypt with fresh salt, nonce and id from the OS random source
    pub fn encrypt_with_cost(
        mnemonic: &WalletMnemonic,
        password: &str,
        cost: &KdfCost,
    ) -> WalletResult<Keystore> {
        let salt = SecureRandom::bytes::<32>()?;
        let nonce = SecureRandom::bytes::<24>()?;
        let id = SecureRandom::uuid_v4()?;

        Self::encrypt_with_params(mnemonic, password, cost, id, &salt, &nonce)
    }

    /// Encrypt with caller-supplied randomness
    ///
    /// Deterministic for fixed inputs. Never reuse a nonce under the same key.
    pub fn encrypt_with_params(
        mnemonic: &WalletMnemonic,
        password: &str,
        cost: &KdfCost,
        id: Uuid,
        salt: &[u8; 32],
        nonce: &[u8; 24],
    ) -> WalletResult<Keystore> {
        cost.validate()?;

        let key = Self::derive_key(password.as_bytes(), salt, cost)?;
        let cipher = Self::cipher(&key)?;
        let ciphertext = cipher
            .encrypt(XNonce::from_slice(nonce), mnemonic.phrase().as_bytes())
            .map_err(|_| CryptoError::EncryptionFailed("AEAD encryption failed".to_string()))?;

        debug!(keystore_id = %id, opslimit = cost.opslimit, memlimit = cost.memlimit, "mnemonic encrypted");

        Ok(Keystore {
            version: Self::VERSION,
            id,
            kind: KeystoreKind::Mnemonic,
            crypto: CryptoSection {
                ciphertext,
                cipherparams: CipherParams { iv: nonce.to_vec() },
                cipher: CIPHER_XCHACHA20POLY1305.to_string(),
                kdf: KDF_ARGON2ID.to_string(),
                kdfparams: KdfParams {
                    salt: salt.to_vec(),
                    opslimit: cost.opslimit,
                    memlimit: cost.memlimit,
                    algorithm: cost.algorithm.id(),
                },
            },
        })
    }

    // =========================================================================
    // DECRYPT
    // =========================================================================

    /// Recover the mnemonic
    ///
    /// # Checks, in order
    /// 1. `version == 4`, before anything else
    /// 2. Known cipher, kdf and algorithm id
    /// 3. KDF cost within bounds, nonce and salt lengths
    /// 4. Authentication tag (`InvalidPassword` on mismatch)
    /// 5. Recovered phrase is a valid mnemonic (`Corrupted` otherwise)
    pub fn decrypt(keystore: &Keystore, password: &str) -> WalletResult<WalletMnemonic> {
        if keystore.version != Self::VERSION {
            return Err(KeystoreError::UnsupportedVersion(keystore.version).into());
        }

        let crypto = &keystore.crypto;
        if crypto.cipher != CIPHER_XCHACHA20POLY1305 {
            return Err(KeystoreError::UnsupportedCipher(crypto.cipher.clone()).into());
        }
        if crypto.kdf != KDF_ARGON2ID {
            return Err(KeystoreError::UnsupportedKdf(crypto.kdf.clone()).into());
        }

        let params = &crypto.kdfparams;
        let algorithm = KdfAlgorithm::from_id(params.algorithm).ok_or_else(|| {
            KeystoreError::UnsupportedKdf(format!("algorithm id {}", params.algorithm))
        })?;
        let cost = KdfCost {
            opslimit: params.opslimit,
            memlimit: params.memlimit,
            algorithm,
        };
        cost.validate()?;

        if crypto.cipherparams.iv.len() != Self::NONCE_LEN {
            return Err(KeystoreError::Malformed(format!(
                "nonce must be {} bytes, got {}",
                Self::NONCE_LEN,
                crypto.cipherparams.iv.len()
            ))
            .into());
        }

        let key = Self::derive_key(password.as_bytes(), &params.salt, &cost)?;
        let cipher = Self::cipher(&key)?;
        let plaintext = cipher
            .decrypt(
                XNonce::from_slice(&crypto.cipherparams.iv),
                crypto.ciphertext.as_slice(),
            )
            .map(Zeroizing::new)
            .map_err(|_| KeystoreError::InvalidPassword)?;

        WalletMnemonic::from_bytes(&plaintext).map_err(|_| {
            WalletError::Keystore(KeystoreError::Corrupted(
                "decrypted data is not a valid mnemonic".to_string(),
            ))
        })
    }

    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Argon2 password hash → 32-byte symmetric key
    ///
    /// Only the first 16 salt bytes are used.
    pub fn derive_key(
        password: &[u8],
        salt: &[u8],
        cost: &KdfCost,
    ) -> WalletResult<Zeroizing<[u8; 32]>> {
        let salt = salt.get(..Self::KDF_SALT_LEN).ok_or_else(|| {
            KeystoreError::Malformed(format!(
                "salt must be at least {} bytes, got {}",
                Self::KDF_SALT_LEN,
                salt.len()
            ))
        })?;

        let algorithm = match cost.algorithm {
            KdfAlgorithm::Argon2i13 => Algorithm::Argon2i,
            KdfAlgorithm::Argon2id13 => Algorithm::Argon2id,
        };
        let params = Params::new(cost.memory_kib(), cost.opslimit, 1, Some(Self::KEY_LEN))
            .map_err(|e| CryptoError::KdfFailed(format!("Argon2 params: {}", e)))?;

        let mut key = Zeroizing::new([0u8; 32]);
        Argon2::new(algorithm, Version::V0x13, params)
            .hash_password_into(password, salt, &mut key[..])
            .map_err(|e| CryptoError::KdfFailed(format!("Argon2 hash: {}", e)))?;

        Ok(key)
    }

    fn cipher(key: &[u8; 32]) -> WalletResult<XChaCha20Poly1305> {
        XChaCha20Poly1305::new_from_slice(key)
            .map_err(|e| WalletError::Crypto(CryptoError::EncryptionFailed(e.to_string())))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const PASSWORD: &str = "correct horse battery staple";

    // Minimum-memory cost so tests stay fast
    const LIGHT: KdfCost = KdfCost {
        opslimit: 1,
        memlimit: 64 * 1024,
        algorithm: KdfAlgorithm::Argon2id13,
    };

    fn mnemonic() -> WalletMnemonic {
        WalletMnemonic::from_phrase(PHRASE).unwrap()
    }

    fn keystore() -> Keystore {
        KeystoreCodec::encrypt_with_cost(&mnemonic(), PASSWORD, &LIGHT).unwrap()
    }

    #[test]
    fn test_roundtrip() {
        let recovered = KeystoreCodec::decrypt(&keystore(), PASSWORD).unwrap();
        assert_eq!(recovered.phrase(), PHRASE);
    }

    #[test]
    fn test_record_layout() {
        let ks = keystore();
        assert_eq!(ks.version, 4);
        assert_eq!(ks.kind, KeystoreKind::Mnemonic);
        assert_eq!(ks.id.get_version_num(), 4);
        assert_eq!(ks.crypto.cipher, "xchacha20poly1305");
        assert_eq!(ks.crypto.kdf, "argon2id");
        assert_eq!(ks.crypto.cipherparams.iv.len(), 24);
        assert_eq!(ks.crypto.kdfparams.salt.len(), 32);
        assert_eq!(ks.crypto.kdfparams.algorithm, 2);
        assert_eq!(ks.crypto.ciphertext.len(), PHRASE.len() + KeystoreCodec::TAG_LEN);
    }

    #[test]
    fn test_fresh_randomness_per_keystore() {
        let a = keystore();
        let b = keystore();
        assert_ne!(a.id, b.id);
        assert_ne!(a.crypto.kdfparams.salt, b.crypto.kdfparams.salt);
        assert_ne!(a.crypto.ciphertext, b.crypto.ciphertext);
    }

    // Argon2id (t=1, m=64 KiB, p=1) over salt[..16], then XChaCha20-Poly1305
    // with empty associated data, computed independently.
    #[test]
    fn test_known_answer() {
        let salt: [u8; 32] = core::array::from_fn(|i| i as u8);
        let nonce = [0x24u8; 24];

        let key = KeystoreCodec::derive_key(PASSWORD.as_bytes(), &salt, &LIGHT).unwrap();
        assert_eq!(
            hex::encode(&key[..]),
            "92dc5d67019623868bde079275e522f4b7e8213d3414ed85cbc2ac8a41117288"
        );

        let ks = KeystoreCodec::encrypt_with_params(&mnemonic(), PASSWORD, &LIGHT, Uuid::nil(), &salt, &nonce).unwrap();
        assert_eq!(
            hex::encode(&ks.crypto.ciphertext),
            "d2ab33f754474b49ed0c8df5e3f97097732f3868cee3e513902e2bc6dd3f5dbd006a9eb374fadaac53f26910819841d586b942eb0ff15e12a1f99f57090139042d187975ceffaecf882a0471ddf4d529812205e0c780729c8766d0323a1007983d7321216241e708116035f145"
        );
    }

    #[test]
    fn test_wrong_password() {
        let err = KeystoreCodec::decrypt(&keystore(), "wrong password").unwrap_err();
        assert_eq!(err, WalletError::Keystore(KeystoreError::InvalidPassword));
    }

    #[test]
    fn test_tampered_ciphertext_reads_as_wrong_password() {
        let mut ks = keystore();
        ks.crypto.ciphertext[0] ^= 0x01;
        assert_eq!(
            KeystoreCodec::decrypt(&ks, PASSWORD).unwrap_err(),
            WalletError::Keystore(KeystoreError::InvalidPassword)
        );

        ks.crypto.ciphertext.truncate(8);
        assert_eq!(
            KeystoreCodec::decrypt(&ks, PASSWORD).unwrap_err(),
            WalletError::Keystore(KeystoreError::InvalidPassword)
        );
    }

    #[test]
    fn test_version_checked_first() {
        let mut ks = keystore();
        // An unrunnable cost proves no KDF work happens before the version check
        ks.crypto.kdfparams.memlimit = u64::MAX;
        for version in [-1, 0, 3, 5, 4_294_967_296] {
            ks.version = version;
            assert_eq!(
                KeystoreCodec::decrypt(&ks, PASSWORD).unwrap_err(),
                WalletError::Keystore(KeystoreError::UnsupportedVersion(version))
            );
        }
    }

    #[test]
    fn test_huge_opslimit_rejected_before_hashing() {
        let mut ks = keystore();
        ks.crypto.kdfparams.opslimit = u32::MAX;
        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::Malformed(_)))
        ));
    }

    #[test]
    fn test_unknown_algorithms() {
        let mut ks = keystore();
        ks.crypto.cipher = "aes-128-ctr".to_string();
        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::UnsupportedCipher(_)))
        ));

        let mut ks = keystore();
        ks.crypto.kdf = "scrypt".to_string();
        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::UnsupportedKdf(_)))
        ));

        let mut ks = keystore();
        ks.crypto.kdfparams.algorithm = 7;
        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::UnsupportedKdf(_)))
        ));
    }

    #[test]
    fn test_malformed_params() {
        let mut ks = keystore();
        ks.crypto.cipherparams.iv.truncate(16);
        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::Malformed(_)))
        ));

        let mut ks = keystore();
        ks.crypto.kdfparams.memlimit = KdfCost::sensitive().memlimit * 2;
        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::Malformed(_)))
        ));

        let mut ks = keystore();
        ks.crypto.kdfparams.salt.truncate(8);
        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::Malformed(_)))
        ));
    }

    #[test]
    fn test_valid_tag_over_non_mnemonic_is_corrupted() {
        let mut ks = keystore();
        let key = KeystoreCodec::derive_key(PASSWORD.as_bytes(), &ks.crypto.kdfparams.salt, &LIGHT).unwrap();
        let cipher = KeystoreCodec::cipher(&key).unwrap();
        ks.crypto.ciphertext = cipher
            .encrypt(XNonce::from_slice(&ks.crypto.cipherparams.iv), b"not a mnemonic".as_slice())
            .unwrap();

        assert!(matches!(
            KeystoreCodec::decrypt(&ks, PASSWORD),
            Err(WalletError::Keystore(KeystoreError::Corrupted(_)))
        ));
    }

    #[test]
    fn test_argon2i_keystore() {
        let cost = KdfCost { algorithm: KdfAlgorithm::Argon2i13, ..LIGHT };
        let ks = KeystoreCodec::encrypt_with_cost(&mnemonic(), PASSWORD, &cost).unwrap();
        assert_eq!(ks.crypto.kdfparams.algorithm, 1);
        assert_eq!(KeystoreCodec::decrypt(&ks, PASSWORD).unwrap().phrase(), PHRASE);
    }

    #[test]
    fn test_default_interactive_cost() {
        let ks = KeystoreCodec::encrypt(&mnemonic(), PASSWORD).unwrap();
        assert_eq!(ks.crypto.kdfparams.opslimit, 2);
        assert_eq!(ks.crypto.kdfparams.memlimit, 67108864);
        assert_eq!(KeystoreCodec::decrypt(&ks, PASSWORD).unwrap().phrase(), PHRASE);
    }
}
