// wallet-core/src/encoding/bech32.rs
//
// Bech32 Codec - BIP-173, on top of the `bech32` crate
// Checksum constant 1 (Bech32). Bech32m strings are rejected.
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
//
// Layout:  <hrp> "1" <data: 5-bit groups> <checksum: 6 groups>
//
// The crate does the polymod and charset work. Bounds it does not enforce
// (overall 8..=90, lowercase-only HRP on encode) are checked here, and its
// errors are mapped onto `Bech32Error`.

use crate::error::Bech32Error;
use bech32::{u5, Variant};

// =============================================================================
// CONSTANTS
// =============================================================================

/// 32-symbol alphabet, index = 5-bit value
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

pub const SEPARATOR: char = '1';
pub const CHECKSUM_LEN: usize = 6;
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 90;
pub const MAX_HRP_LENGTH: usize = 83;

// =============================================================================
// ENCODE / DECODE
// =============================================================================

#[inline]
fn is_printable_ascii(c: char) -> bool {
    (33..=126).contains(&(c as u32))
}

fn validate_hrp(hrp: &str) -> Result<(), Bech32Error> {
    if hrp.is_empty() || hrp.len() > MAX_HRP_LENGTH {
        return Err(Bech32Error::InvalidHrp(format!(
            "length {} outside 1..={}",
            hrp.len(),
            MAX_HRP_LENGTH
        )));
    }
    for c in hrp.chars() {
        if !is_printable_ascii(c) {
            return Err(Bech32Error::InvalidChar(c));
        }
        if c.is_ascii_uppercase() {
            return Err(Bech32Error::InvalidHrp(format!(
                "'{}' must be lowercase",
                hrp
            )));
        }
    }
    Ok(())
}

fn map_crate_error(e: bech32::Error, len: usize) -> Bech32Error {
    match e {
        bech32::Error::MissingSeparator => Bech32Error::MissingSeparator,
        bech32::Error::InvalidChecksum => Bech32Error::InvalidChecksum,
        bech32::Error::InvalidLength => Bech32Error::InvalidLength(len),
        bech32::Error::InvalidChar(c) => Bech32Error::InvalidChar(c),
        bech32::Error::InvalidData(v) => Bech32Error::InvalidDataValue(u32::from(v)),
        bech32::Error::InvalidPadding => Bech32Error::InvalidPadding,
        bech32::Error::MixedCase => Bech32Error::MixedCase,
        #[allow(unreachable_patterns)]
        _ => Bech32Error::InvalidChecksum,
    }
}

/// Encode `hrp` + 5-bit `data` into a lowercase Bech32 string.
///
/// # Errors
/// - [`Bech32Error::InvalidHrp`] / [`Bech32Error::InvalidChar`] for a bad prefix
/// - [`Bech32Error::InvalidDataValue`] if any element is > 31
/// - [`Bech32Error::InvalidLength`] if the result would exceed 90 characters
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    validate_hrp(hrp)?;

    let groups = data
        .iter()
        .map(|&v| u5::try_from_u8(v).map_err(|_| Bech32Error::InvalidDataValue(u32::from(v))))
        .collect::<Result<Vec<u5>, _>>()?;

    let total = hrp.len() + 1 + groups.len() + CHECKSUM_LEN;
    if total > MAX_LENGTH {
        return Err(Bech32Error::InvalidLength(total));
    }

    bech32::encode(hrp, groups, Variant::Bech32).map_err(|e| map_crate_error(e, total))
}

/// Decode a Bech32 string into `(hrp, data)`, checksum stripped.
///
/// Input may be all-lowercase or all-uppercase; the returned HRP is lowercase.
/// A valid Bech32m checksum is reported as [`Bech32Error::InvalidChecksum`].
pub fn decode(s: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let len = s.len();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        return Err(Bech32Error::InvalidLength(len));
    }

    let mut has_lower = false;
    let mut has_upper = false;
    for c in s.chars() {
        if !is_printable_ascii(c) {
            return Err(Bech32Error::InvalidChar(c));
        }
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
    }
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }

    // Last '1' is the separator; the HRP itself may contain '1'
    let data_len = match s.rfind(SEPARATOR) {
        Some(pos) if pos >= 1 => len - pos - 1,
        _ => return Err(Bech32Error::MissingSeparator),
    };
    if data_len < CHECKSUM_LEN {
        return Err(Bech32Error::DataTooShort(data_len));
    }

    let (hrp, groups, variant) = bech32::decode(s).map_err(|e| map_crate_error(e, len))?;
    if variant != Variant::Bech32 {
        return Err(Bech32Error::InvalidChecksum);
    }

    Ok((hrp, groups.into_iter().map(u5::to_u8).collect()))
}

// =============================================================================
// BIT REGROUPING
// =============================================================================

/// Regroup a sequence of `from_bits`-wide values into `to_bits`-wide values.
///
/// With `pad = true` a trailing partial group is zero-padded (8 -> 5 when encoding).
/// With `pad = false` (5 -> 8 when decoding) leftover bits must be fewer than
/// `from_bits` and all zero, otherwise the input is non-canonical.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, Bech32Error> {
    if !(1..=8).contains(&from_bits) || !(1..=8).contains(&to_bits) {
        return Err(Bech32Error::UnsupportedBitWidth {
            from: from_bits,
            to: to_bits,
        });
    }

    bech32::convert_bits(data, from_bits, to_bits, pad).map_err(|e| map_crate_error(e, data.len()))
}

// =============================================================================
// TESTS
// =============================================================================
