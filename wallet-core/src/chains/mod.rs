// wallet-core/src/chains/mod.rs

pub mod mvx;

use crate::crypto::CurveType;
use serde::{Deserialize, Serialize};

/// Per-chain address settings
///
/// Deserializable so a host application can carry it in its own config. The
/// derivation path is not part of it: it is fixed per chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub name: String,
    /// Bech32 human-readable prefix
    pub hrp: String,
    /// Curve used to derive the address key pair
    #[serde(default)]
    pub curve: CurveType,
}

impl ChainConfig {
    pub const MULTIVERSX_HRP: &'static str = "erd";

    /// erd1 addresses from secp256k1 keys
    pub fn multiversx() -> Self {
        Self {
            name: "MultiversX".to_string(),
            hrp: Self::MULTIVERSX_HRP.to_string(),
            curve: CurveType::Secp256k1,
        }
    }

    pub fn with_curve(mut self, curve: CurveType) -> Self {
        self.curve = curve;
        self
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::multiversx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiversx_defaults() {
        let chain = ChainConfig::default();
        assert_eq!(chain.hrp, "erd");
        assert_eq!(chain.curve, CurveType::Secp256k1);
        assert_eq!(chain.with_curve(CurveType::Ed25519).curve, CurveType::Ed25519);
    }

    #[test]
    fn test_deserialize_without_curve() {
        let chain: ChainConfig =
            serde_json::from_str(r#"{"name":"MultiversX Devnet","hrp":"erd"}"#).unwrap();
        assert_eq!(chain.curve, CurveType::Secp256k1);
        assert_eq!(chain.name, "MultiversX Devnet");
    }
}
