// wallet-core/src/wallet.rs
//
// Wallet Flows - the operations a host application calls
//
// create_wallet:      SecureRandom → mnemonic → address
// create_keystore:    validate mnemonic → Argon2id + XChaCha20-Poly1305 → keystore + address
// decrypt_keystore:   keystore → mnemonic (re-validated) → address
//
// Nothing here holds state; every flow takes the chain settings explicitly.

use crate::chains::{mvx::MvxAddress, ChainConfig};
use crate::crypto::WalletMnemonic;
use crate::error::WalletResult;
use crate::keystore::{KdfCost, Keystore, KeystoreCodec};
use tracing::{info, warn};

/// A mnemonic together with the address it derives
#[derive(Debug)]
pub struct WalletAccount {
    pub mnemonic: WalletMnemonic,
    pub address: MvxAddress,
}

/// A freshly encrypted keystore together with its address
#[derive(Debug, Clone)]
pub struct KeystoreAccount {
    pub keystore: Keystore,
    pub address: MvxAddress,
}

/// New 24-word wallet
pub fn create_wallet(chain: &ChainConfig) -> WalletResult<WalletAccount> {
    let mnemonic = WalletMnemonic::generate()?;
    let address = MvxAddress::from_mnemonic(&mnemonic, chain)?;
    info!(chain = %chain.name, address = %address, "wallet created");
    Ok(WalletAccount { mnemonic, address })
}

pub fn import_from_mnemonic(phrase: &str, chain: &ChainConfig) -> WalletResult<WalletAccount> {
    let mnemonic = WalletMnemonic::from_phrase(phrase)?;
    let address = MvxAddress::from_mnemonic(&mnemonic, chain)?;
    info!(chain = %chain.name, address = %address, "wallet imported");
    Ok(WalletAccount { mnemonic, address })
}

/// Encrypt `phrase` under `password`
///
/// The phrase is validated (and whitespace-normalized) first; an invalid
/// phrase never reaches the KDF.
pub fn create_keystore(
    phrase: &str,
    password: &str,
    chain: &ChainConfig,
    cost: &KdfCost,
) -> WalletResult<KeystoreAccount> {
    let mnemonic = WalletMnemonic::from_phrase(phrase)?;
    let keystore = KeystoreCodec::encrypt_with_cost(&mnemonic, password, cost)?;
    let address = MvxAddress::from_mnemonic(&mnemonic, chain)?;
    info!(keystore_id = %keystore.id, address = %address, "keystore created");
    Ok(KeystoreAccount { keystore, address })
}

pub fn decrypt_keystore(
    keystore: &Keystore,
    password: &str,
    chain: &ChainConfig,
) -> WalletResult<WalletAccount> {
    let mnemonic = KeystoreCodec::decrypt(keystore, password).inspect_err(|e| {
        warn!(keystore_id = %keystore.id, error = %e, "keystore decryption failed");
    })?;
    let address = MvxAddress::from_mnemonic(&mnemonic, chain)?;
    info!(keystore_id = %keystore.id, address = %address, "keystore decrypted");
    Ok(WalletAccount { mnemonic, address })
}

/// Whether `address` is a well-formed address for `chain`
#[inline]
pub fn validate_address(address: &str, chain: &ChainConfig) -> bool {
    MvxAddress::is_valid(&chain.hrp, address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{KeystoreError, MnemonicError, WalletError};
    use crate::keystore::KdfAlgorithm;

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ADDRESS: &str = "erd12f6kvra9j54hkgapnzrualn5x2el3gk65e6xtq";

    const LIGHT: KdfCost = KdfCost {
        opslimit: 1,
        memlimit: 64 * 1024,
        algorithm: KdfAlgorithm::Argon2id13,
    };

    #[test]
    fn test_create_wallet() {
        let chain = ChainConfig::multiversx();
        let account = create_wallet(&chain).unwrap();
        assert_eq!(account.mnemonic.word_count(), 24);
        assert!(account.address.as_str().starts_with("erd1"));
        assert!(validate_address(account.address.as_str(), &chain));

        let again = import_from_mnemonic(account.mnemonic.phrase(), &chain).unwrap();
        assert_eq!(again.address, account.address);
    }

    #[test]
    fn test_import_normalizes_whitespace() {
        let messy = format!("  {}  ", PHRASE.replace(' ', "   "));
        let account = import_from_mnemonic(&messy, &ChainConfig::multiversx()).unwrap();
        assert_eq!(account.mnemonic.phrase(), PHRASE);
        assert_eq!(account.address.as_str(), ADDRESS);
    }

    #[test]
    fn test_import_rejects_bad_phrase() {
        let err = import_from_mnemonic("abandon abandon", &ChainConfig::multiversx()).unwrap_err();
        assert_eq!(err, WalletError::Mnemonic(MnemonicError::InvalidWordCount(2)));
    }

    #[test]
    fn test_keystore_flow() {
        let chain = ChainConfig::multiversx();
        let created = create_keystore(PHRASE, "pw", &chain, &LIGHT).unwrap();
        assert_eq!(created.address.as_str(), ADDRESS);

        let opened = decrypt_keystore(&created.keystore, "pw", &chain).unwrap();
        assert_eq!(opened.mnemonic.phrase(), PHRASE);
        assert_eq!(opened.address, created.address);

        assert_eq!(
            decrypt_keystore(&created.keystore, "nope", &chain).unwrap_err(),
            WalletError::Keystore(KeystoreError::InvalidPassword)
        );
    }

    #[test]
    fn test_create_keystore_rejects_invalid_mnemonic() {
        let bad = PHRASE.replace("about", "abandon");
        let err = create_keystore(&bad, "pw", &ChainConfig::multiversx(), &LIGHT).unwrap_err();
        assert_eq!(err, WalletError::Mnemonic(MnemonicError::ChecksumFailed));
    }

    #[test]
    fn test_validate_address() {
        let chain = ChainConfig::multiversx();
        assert!(validate_address(ADDRESS, &chain));
        assert!(!validate_address("erd12f6kvra9j54hkgapnzrualn5x2el3gk65e6xtp", &chain));
        assert!(!validate_address("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266", &chain));
    }
}
