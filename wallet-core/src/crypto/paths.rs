// wallet-core/src/crypto/paths.rs
//
// Derivation Path - the single fixed BIP-44 path used for erd1 addresses
// m / purpose' / coin_type' / account' / change / address_index

use std::fmt;

/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const MULTIVERSX: u32 = 508;
}

pub const BIP44_PURPOSE: u32 = 44;

/// BIP-44 path components
///
/// Only [`DerivationPath::MULTIVERSX`] is used to derive addresses. The path is
/// a constant of the wallet, not a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationPath {
    pub purpose: u32,
    pub coin_type: u32,
    pub account: u32,
    pub change: u32,
    pub address_index: u32,
}

impl DerivationPath {
    /// m/44'/508'/0'/0/0
    pub const MULTIVERSX: DerivationPath = DerivationPath {
        purpose: BIP44_PURPOSE,
        coin_type: coin_type::MULTIVERSX,
        account: 0,
        change: 0,
        address_index: 0,
    };

    /// BIP-32 notation: first three levels hardened (secp256k1)
    pub fn to_bip32_string(&self) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            self.purpose, self.coin_type, self.account, self.change, self.address_index
        )
    }

    /// SLIP-0010 notation: every level hardened (ed25519 has no normal derivation)
    pub fn to_slip10_string(&self) -> String {
        format!(
            "m/{}'/{}'/{}'/{}'/{}'",
            self.purpose, self.coin_type, self.account, self.change, self.address_index
        )
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bip32_string())
    }
}
