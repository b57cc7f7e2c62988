//! # Value Objects
//!
//! Identities, digests and message kinds. Everything here is `Copy` and
//! defined purely by its bytes.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Re-export U256 from primitive-types for 256-bit words
pub use primitive_types::U256;

/// Position assigned by the sequencer. Strictly increasing per inbox.
pub type Position = u64;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte principal identity (plain account or code-bearing contract).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; 20]>::try_from(slice).ok().map(Self)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// The address right-aligned in a 32-byte word.
    #[must_use]
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let bytes = decode_prefixed_hex(&raw).map_err(de::Error::custom)?;
        Self::from_slice(&bytes)
            .ok_or_else(|| de::Error::custom(format!("expected 20 bytes, got {}", bytes.len())))
    }
}

// =============================================================================
// HASH (32 bytes)
// =============================================================================

/// A 32-byte Keccak-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// The zero hash. Reported as the code digest of an identity with no account.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a hash from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero hash.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[28..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let bytes = decode_prefixed_hex(&raw).map_err(de::Error::custom)?;
        <[u8; 32]>::try_from(bytes.as_slice())
            .map(Self)
            .map_err(|_| de::Error::custom(format!("expected 32 bytes, got {}", bytes.len())))
    }
}

/// Decode hex with or without a leading `0x`.
pub fn decode_prefixed_hex(raw: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(raw.strip_prefix("0x").unwrap_or(raw))
}

/// Serde helper: byte strings as `0x`-prefixed hex.
pub(crate) mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::decode_prefixed_hex(&raw).map_err(de::Error::custom)
    }
}

// =============================================================================
// MESSAGE KIND
// =============================================================================

/// Tag identifying which fixed field layout a payload follows.
///
/// | Tag | Kind |
/// |-----|------|
/// | 0 | plain value transfer |
/// | 3 | generic relayed message |
/// | 5 | paired-deploy request |
/// | 7 | value-funded message |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Native value moved to a destination on the execution layer.
    ValueTransfer,
    /// Opaque bytes relayed verbatim.
    RelayedMessage,
    /// Deployment of a paired contract on the execution layer.
    PairedDeploy,
    /// Unsigned transaction or deposit funded by attached value.
    FundedByValue,
}

impl MessageKind {
    /// Wire tag handed to the sequencer.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::ValueTransfer => 0,
            Self::RelayedMessage => 3,
            Self::PairedDeploy => 5,
            Self::FundedByValue => 7,
        }
    }

    /// Inverse of [`MessageKind::tag`].
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::ValueTransfer),
            3 => Some(Self::RelayedMessage),
            5 => Some(Self::PairedDeploy),
            7 => Some(Self::FundedByValue),
            _ => None,
        }
    }

    /// All kinds, in tag order.
    pub const ALL: [MessageKind; 4] = [
        Self::ValueTransfer,
        Self::RelayedMessage,
        Self::PairedDeploy,
        Self::FundedByValue,
    ];
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ValueTransfer => "value-transfer",
            Self::RelayedMessage => "relayed-message",
            Self::PairedDeploy => "paired-deploy",
            Self::FundedByValue => "funded-by-value",
        };
        write!(f, "{name}({})", self.tag())
    }
}

/// First byte of an unsigned-transaction payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxSubKind {
    /// Account-style: carries a sequence number.
    Account,
    /// Contract-style: no sequence number.
    Contract,
}

impl TxSubKind {
    /// Wire byte.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Account => 0,
            Self::Contract => 1,
        }
    }
}
