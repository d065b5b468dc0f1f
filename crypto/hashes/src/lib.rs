use std::fmt;
use std::hash::Hash as StdHash;
use std::ops::Deref;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const HASH_SIZE: usize = 32;

/// The all-zero hash, used where a checkpoint hash is not known yet.
pub const ZERO_HASH: Hash = Hash([0u8; HASH_SIZE]);

// FromHexError is PartialEq only
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HashParseError {
    #[error("expected {} hex characters, got {0}", HASH_SIZE * 2)]
    InvalidLength(usize),

    #[error("invalid hex digit: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 32-byte hash, displayed and parsed as 64 hex characters in storage order.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decodes a hex literal in const context.
    ///
    /// Meant for static tables: a malformed literal fails const evaluation, so a
    /// bad genesis or checkpoint hash never makes it into a build. Panics when
    /// evaluated at runtime with bad input.
    pub const fn from_hex_const(s: &str) -> Self {
        let src = s.as_bytes();
        if src.len() != HASH_SIZE * 2 {
            panic!("hash literal must be exactly 64 hex characters");
        }
        let mut bytes = [0u8; HASH_SIZE];
        let mut i = 0;
        while i < HASH_SIZE {
            bytes[i] = (hex_nibble(src[2 * i]) << 4) | hex_nibble(src[2 * i + 1]);
            i += 1;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_SIZE]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in hash literal"),
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; HASH_SIZE] {
    fn from(h: Hash) -> Self {
        h.0
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; HASH_SIZE] = slice.try_into()?;
        Ok(Self(array))
    }
}

impl FromStr for Hash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH_SIZE * 2 {
            return Err(HashParseError::InvalidLength(s.len()));
        }
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Hash {
    type Target = [u8; HASH_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", hex::encode(self.0))
    }
}

impl StdHash for Hash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // the tail bytes of a pow hash are the well distributed ones
        let mut le = [0u8; 8];
        le.copy_from_slice(&self.0[24..32]);
        u64::from_le_bytes(le).hash(state);
    }
}

// Hex strings keep config files and JSON reports readable.
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "00000000db7eb7a9e1a06cf995363dcdc4c28e8ae04827a961942657db9a1631";

    #[test]
    fn const_decoder_matches_runtime_parser() {
        const H: Hash = Hash::from_hex_const(GENESIS);
        let parsed: Hash = GENESIS.parse().unwrap();
        assert_eq!(H, parsed);
        assert_eq!(H.to_string(), GENESIS);
        assert_eq!(H.as_bytes()[0..4], [0, 0, 0, 0]);
        assert_eq!(H.as_bytes()[4], 0xdb);
    }

    #[test]
    fn const_decoder_accepts_uppercase() {
        let upper = GENESIS.to_uppercase();
        // runtime evaluation of the const fn
        assert_eq!(Hash::from_hex_const(&upper), Hash::from_hex_const(GENESIS));
    }

    #[test]
    #[should_panic(expected = "invalid hex digit")]
    fn const_decoder_panics_on_bad_digit() {
        let bad = format!("zz{}", &GENESIS[2..]);
        let _ = Hash::from_hex_const(&bad);
    }

    #[test]
    #[should_panic(expected = "exactly 64 hex characters")]
    fn const_decoder_panics_on_short_literal() {
        let _ = Hash::from_hex_const("00ff");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!("abcd".parse::<Hash>(), Err(HashParseError::InvalidLength(4)));
    }

    #[test]
    fn parse_rejects_bad_hex() {
        let bad = format!("{}xy", &GENESIS[..62]);
        assert!(matches!(bad.parse::<Hash>(), Err(HashParseError::InvalidHex(_))));
    }

    #[test]
    fn parse_error_reports_offending_character() {
        let bad = format!("{}x0", &GENESIS[..62]);
        let err = bad.parse::<Hash>().unwrap_err();
        assert_eq!(err, HashParseError::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'x', index: 62 }));
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn zero_hash() {
        assert!(ZERO_HASH.is_zero());
        assert!(!Hash::from_hex_const(GENESIS).is_zero());
        assert_eq!(ZERO_HASH, Hash::default());
    }

    #[test]
    fn borsh_is_raw_bytes() {
        let h = Hash::from_hex_const(GENESIS);
        let encoded = borsh::to_vec(&h).unwrap();
        assert_eq!(encoded.as_slice(), h.as_bytes());
        assert_eq!(borsh::from_slice::<Hash>(&encoded).unwrap(), h);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let h = Hash::from_hex_const(GENESIS);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{}\"", GENESIS));
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        assert!(serde_json::from_str::<Hash>("\"00ff\"").is_err());
        assert!(serde_json::from_str::<Hash>("42").is_err());
    }
}
