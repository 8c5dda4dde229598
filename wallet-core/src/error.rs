// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Bech32 Error: {0}")]
    Bech32(#[from] Bech32Error),

    #[error("Address Error: {0}")]
    Address(#[from] AddressError),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Keystore Error: {0}")]
    Keystore(#[from] KeystoreError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    /// The OS random source failed. No wallet material can be produced without it.
    #[error("Secure random source unavailable: {0}")]
    EntropySource(String),
}

impl WalletError {
    /// Only an entropy failure is unrecoverable; every other kind depends on caller input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, WalletError::EntropySource(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Bech32Error {
    #[error("Invalid length: {0}. Expected 8 to 90 characters.")]
    InvalidLength(usize),

    #[error("Data part too short: {0} characters, checksum needs 6.")]
    DataTooShort(usize),

    #[error("Invalid human-readable part: {0}")]
    InvalidHrp(String),

    #[error("Missing separator '1' after the human-readable part.")]
    MissingSeparator,

    #[error("Invalid character '{0}'.")]
    InvalidChar(char),

    #[error("Mixed-case string.")]
    MixedCase,

    #[error("Value {0} does not fit in the source bit width.")]
    InvalidDataValue(u32),

    #[error("Unsupported bit widths {from} -> {to}. Both must be 1 to 8.")]
    UnsupportedBitWidth { from: u32, to: u32 },

    #[error("Non-canonical padding.")]
    InvalidPadding,

    #[error("Checksum validation failed.")]
    InvalidChecksum,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Wrong prefix: expected '{expected}', found '{found}'.")]
    WrongPrefix { expected: String, found: String },

    #[error("Invalid payload length: {0}. Expected 20 bytes.")]
    InvalidPayloadLength(usize),

    #[error("Invalid address encoding: {0}")]
    Encoding(#[from] Bech32Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    /// Carries the word position only, never the word itself.
    #[error("Word at position {0} not found in the BIP39 wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeystoreError {
    #[error("Unsupported keystore version: {0}. Expected 4.")]
    UnsupportedVersion(i64),

    /// Authentication tag mismatch. A wrong password and tampered ciphertext are indistinguishable.
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Corrupted keystore: {0}")]
    Corrupted(String),

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    #[error("Unsupported kdf: {0}")]
    UnsupportedKdf(String),

    #[error("Malformed keystore: {0}")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Password key derivation failed: {0}")]
    KdfFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_conversion() {
        let err: WalletError = Bech32Error::InvalidChecksum.into();
        assert_eq!(err, WalletError::Bech32(Bech32Error::InvalidChecksum));

        let err: WalletError = AddressError::from(Bech32Error::MixedCase).into();
        assert!(err.to_string().contains("Mixed-case"));
    }

    #[test]
    fn test_only_entropy_is_fatal() {
        assert!(WalletError::EntropySource("os rng".into()).is_fatal());
        assert!(!WalletError::Keystore(KeystoreError::InvalidPassword).is_fatal());
        assert!(!WalletError::Mnemonic(MnemonicError::ChecksumFailed).is_fatal());
    }
}
