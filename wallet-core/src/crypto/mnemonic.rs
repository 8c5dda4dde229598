// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39
// Entropy -> words (English wordlist, SHA-256 checksum), PBKDF2-HMAC-SHA512 seed

use crate::crypto::random::SecureRandom;
use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported word counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy). What wallets created here always use.
    #[default]
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// Wallet Mnemonic
///
/// # Security
/// - **ZeroizeOnDrop**: the phrase is overwritten when the value is dropped
/// - **Not Clone**: a single owner per phrase, so copies of it stay bounded
/// - **No Debug Leak**: `Debug` prints the word count only
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh 24-word mnemonic
    pub fn generate() -> WalletResult<Self> {
        Self::with_word_count(WordCount::TwentyFour)
    }

    /// Generate a mnemonic with the given word count
    ///
    /// Fails only if the OS random source is unavailable.
    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        let mut entropy = SecureRandom::secret_bytes::<32>()?;
        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size])
            .map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))?;
        entropy.zeroize();

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Restore from an existing phrase
    ///
    /// Whitespace is collapsed, then word count, wordlist membership and the
    /// embedded checksum are all checked.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = Zeroizing::new(phrase.split_whitespace().collect::<Vec<_>>().join(" "));
        let word_count = Self::check(&normalized)?;

        Ok(Self {
            phrase: normalized.as_str().to_owned(),
            word_count,
        })
    }

    /// Restore from decrypted keystore bytes
    pub(crate) fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        let phrase = std::str::from_utf8(bytes).map_err(|_| {
            WalletError::Mnemonic(MnemonicError::Bip39Error("phrase is not UTF-8".to_string()))
        })?;
        Self::from_phrase(phrase)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The normalized phrase. Never log it.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    pub fn strength_bits(&self) -> usize {
        WordCount::from_count(self.word_count)
            .map(|wc| wc.entropy_bytes() * 8)
            .unwrap_or(0)
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds)
    ///
    /// `None` means the empty passphrase.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &self.phrase)
            .map_err(Self::map_bip39_error)?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        let normalized = Zeroizing::new(phrase.split_whitespace().collect::<Vec<_>>().join(" "));
        Self::check(&normalized).is_ok()
    }

    /// Whether `word` is in the English BIP-39 wordlist
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }

    /// Validate a normalized phrase, returning its word count
    fn check(normalized: &str) -> WalletResult<usize> {
        let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
        let count = words.len();

        if WordCount::from_count(count).is_none() {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(count)));
        }

        if let Some(position) = words.iter().position(|w| !Self::is_valid_word(w)) {
            return Err(WalletError::Mnemonic(MnemonicError::UnknownWord(position)));
        }

        Mnemonic::parse_in_normalized(Language::English, normalized)
            .map_err(Self::map_bip39_error)?;

        Ok(count)
    }

    fn map_bip39_error(e: bip39::Error) -> WalletError {
        let err = match e {
            bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
            bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
            other => MnemonicError::Bip39Error(other.to_string()),
        };
        WalletError::Mnemonic(err)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
