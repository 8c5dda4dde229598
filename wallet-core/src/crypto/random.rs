// wallet-core/src/crypto/random.rs
//
// Secure Random Source
// OS-level CSPRNG (`OsRng`): stateless, safe to call from any thread.

use crate::error::{WalletError, WalletResult};
use rand::{rngs::OsRng, RngCore};
use uuid::{Builder, Uuid};
use zeroize::Zeroizing;

/// Secure Random - entropy for mnemonics, keystore salts/nonces and identifiers
///
/// Every failure of the OS source surfaces as [`WalletError::EntropySource`].
/// Nothing here retries: a broken entropy source cannot produce wallet material.
pub struct SecureRandom;

impl SecureRandom {
    /// Fill `buf` from the OS random source
    pub fn fill_bytes(buf: &mut [u8]) -> WalletResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| WalletError::EntropySource(e.to_string()))
    }

    /// Fixed-size random array (salts, nonces)
    pub fn bytes<const N: usize>() -> WalletResult<[u8; N]> {
        let mut buf = [0u8; N];
        Self::fill_bytes(&mut buf)?;
        Ok(buf)
    }

    /// Fixed-size random array for secret material, zeroed on drop
    pub fn secret_bytes<const N: usize>() -> WalletResult<Zeroizing<[u8; N]>> {
        let mut buf = Zeroizing::new([0u8; N]);
        Self::fill_bytes(&mut buf[..])?;
        Ok(buf)
    }

    /// Random UUID v4 (version and variant bits set by the builder)
    pub fn uuid_v4() -> WalletResult<Uuid> {
        let bytes = Self::bytes::<16>()?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}
