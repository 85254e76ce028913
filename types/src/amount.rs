//! Fixed-point token amounts and bridge rates.
//!
//! Amounts are stored as raw `u128` units with 18 decimal places (the same
//! granularity as wei) so that fee arithmetic is exact. Rates are stored in
//! parts-per-million.

use crate::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of decimal places carried by a [`TokenAmount`].
pub const AMOUNT_DECIMALS: u32 = 18;

/// Raw units in one whole token.
pub const AMOUNT_SCALE: u128 = 10u128.pow(AMOUNT_DECIMALS);

/// Decimal places carried by ppm rates.
const RATE_DECIMALS: u32 = 6;

/// Denominator for ppm rates.
pub const PPM: u32 = 1_000_000;

/// Parse a non-negative decimal string into raw fixed-point units.
fn parse_fixed(s: &str, decimals: u32) -> Result<u128, ParseError> {
    let s = s.trim();
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(ParseError::InvalidAmount(s.to_string()));
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(frac) {
        return Err(ParseError::InvalidAmount(s.to_string()));
    }
    let frac = frac.trim_end_matches('0');
    if frac.len() > decimals as usize {
        return Err(ParseError::TooManyDecimals {
            value: s.to_string(),
            max: decimals,
        });
    }

    let overflow = || ParseError::Overflow(s.to_string());
    let whole_raw = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| overflow())?
    };
    let frac_raw = if frac.is_empty() {
        0
    } else {
        let digits = frac.parse::<u128>().map_err(|_| overflow())?;
        digits * 10u128.pow(decimals - frac.len() as u32)
    };
    whole_raw
        .checked_mul(10u128.pow(decimals))
        .and_then(|w| w.checked_add(frac_raw))
        .ok_or_else(overflow)
}

/// Render raw fixed-point units as a decimal string without trailing zeros.
fn format_fixed(raw: u128, decimals: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let scale = 10u128.pow(decimals);
    let whole = raw / scale;
    let frac = raw % scale;
    if frac == 0 {
        return write!(f, "{whole}");
    }
    let digits = format!("{:0width$}", frac, width = decimals as usize);
    write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
}

/// An unsigned token quantity with 18 decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    /// Create an amount from raw units (1 token = 10^18 raw).
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Create an amount from a whole number of tokens.
    pub const fn from_tokens(tokens: u64) -> Self {
        Self(tokens as u128 * AMOUNT_SCALE)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl FromStr for TokenAmount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed(s, AMOUNT_DECIMALS).map(Self)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_fixed(self.0, AMOUNT_DECIMALS, f)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A fraction in `[0, 1]` held back by the bridge on every mint and burn.
///
/// Stored in parts-per-million: `0.001` is 1000 ppm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeRate(u32);

impl FeeRate {
    pub const ZERO: Self = Self(0);

    /// Returns `None` if `ppm` exceeds one million (a rate above 100%).
    pub const fn from_ppm(ppm: u32) -> Option<Self> {
        if ppm > PPM {
            None
        } else {
            Some(Self(ppm))
        }
    }

    pub fn ppm(&self) -> u32 {
        self.0
    }

    /// The fee on `amount`, rounded down to the nearest raw unit.
    ///
    /// Split into quotient and remainder so the product never overflows.
    pub fn fee_on(&self, amount: TokenAmount) -> TokenAmount {
        let denom = PPM as u128;
        let rate = self.0 as u128;
        let raw = amount.raw();
        TokenAmount((raw / denom) * rate + (raw % denom) * rate / denom)
    }
}

impl FromStr for FeeRate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = parse_fixed(s, RATE_DECIMALS)?;
        u32::try_from(raw)
            .ok()
            .and_then(FeeRate::from_ppm)
            .ok_or_else(|| ParseError::InvalidRate(s.to_string()))
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_fixed(self.0 as u128, RATE_DECIMALS, f)
    }
}

impl Serialize for FeeRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FeeRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Exchange ratio between an original token and its wrapped counterpart.
///
/// Stored in parts-per-million; `1.0` is the 1:1 default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BridgeRatio(u64);

impl BridgeRatio {
    pub const ONE: Self = Self(PPM as u64);

    pub const fn from_ppm(ppm: u64) -> Self {
        Self(ppm)
    }

    pub fn ppm(&self) -> u64 {
        self.0
    }
}

impl Default for BridgeRatio {
    fn default() -> Self {
        Self::ONE
    }
}

impl FromStr for BridgeRatio {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = parse_fixed(s, RATE_DECIMALS)?;
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| ParseError::Overflow(s.to_string()))
    }
}

impl fmt::Display for BridgeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_fixed(self.0 as u128, RATE_DECIMALS, f)
    }
}

impl Serialize for BridgeRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BridgeRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
