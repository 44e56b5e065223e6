//! The marketplace algorithm registry
//!
//! Numeric algorithm IDs and canonical names are fixed vocabulary shared
//! with the service; the table below mirrors it entry for entry. IDs are
//! contiguous from 0, so position in [`Algorithm::ALL`] equals ID.

use serde::Deserialize;

/// A hashing algorithm traded on the marketplace
///
/// The discriminant is the algorithm's wire ID. Lookups by ID or name are
/// explicit failures when nothing matches; there is no fallback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Scrypt = 0,
    Sha256 = 1,
    ScryptNf = 2,
    X11 = 3,
    X13 = 4,
    Keccak = 5,
    X15 = 6,
    Nist5 = 7,
    NeoScrypt = 8,
    Lyra2Re = 9,
    WhirlpoolX = 10,
    Qubit = 11,
    Quark = 12,
    Axiom = 13,
    Lyra2Rev2 = 14,
    ScryptJaneNf16 = 15,
    Blake256r8 = 16,
    Blake256r14 = 17,
    Blake256r8vnl = 18,
    Hodl = 19,
    DaggerHashimoto = 20,
    Decred = 21,
    CryptoNight = 22,
    Lbry = 23,
    Equihash = 24,
    Pascal = 25,
    X11Gost = 26,
    Sia = 27,
    Blake2s = 28,
    Skunk = 29,
    CryptoNightV7 = 30,
    CryptoNightHeavy = 31,
    Lyra2Z = 32,
    X16R = 33,
    CryptoNightV8 = 34,
    Sha256AsicBoost = 35,
    Zhash = 36,
    Beam = 37,
    GrinCuckaroo29 = 38,
    GrinCuckatoo31 = 39,
    Lyra2Rev3 = 40,
    Mtp = 41,
    CryptoNightR = 42,
}

impl Algorithm {
    /// Every registry entry, in wire-ID order
    pub const ALL: [Algorithm; 43] = [
        Self::Scrypt,
        Self::Sha256,
        Self::ScryptNf,
        Self::X11,
        Self::X13,
        Self::Keccak,
        Self::X15,
        Self::Nist5,
        Self::NeoScrypt,
        Self::Lyra2Re,
        Self::WhirlpoolX,
        Self::Qubit,
        Self::Quark,
        Self::Axiom,
        Self::Lyra2Rev2,
        Self::ScryptJaneNf16,
        Self::Blake256r8,
        Self::Blake256r14,
        Self::Blake256r8vnl,
        Self::Hodl,
        Self::DaggerHashimoto,
        Self::Decred,
        Self::CryptoNight,
        Self::Lbry,
        Self::Equihash,
        Self::Pascal,
        Self::X11Gost,
        Self::Sia,
        Self::Blake2s,
        Self::Skunk,
        Self::CryptoNightV7,
        Self::CryptoNightHeavy,
        Self::Lyra2Z,
        Self::X16R,
        Self::CryptoNightV8,
        Self::Sha256AsicBoost,
        Self::Zhash,
        Self::Beam,
        Self::GrinCuckaroo29,
        Self::GrinCuckatoo31,
        Self::Lyra2Rev3,
        Self::Mtp,
        Self::CryptoNightR,
    ];

    /// Returns the numeric wire ID
    pub fn id(&self) -> u32 {
        *self as u32
    }

    /// Returns the canonical name as used in API responses
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scrypt => "Scrypt",
            Self::Sha256 => "SHA256",
            Self::ScryptNf => "ScryptNf",
            Self::X11 => "X11",
            Self::X13 => "X13",
            Self::Keccak => "Keccak",
            Self::X15 => "X15",
            Self::Nist5 => "Nist5",
            Self::NeoScrypt => "NeoScrypt",
            Self::Lyra2Re => "Lyra2RE",
            Self::WhirlpoolX => "WhirlpoolX",
            Self::Qubit => "Qubit",
            Self::Quark => "Quark",
            Self::Axiom => "Axiom",
            Self::Lyra2Rev2 => "Lyra2REv2",
            Self::ScryptJaneNf16 => "ScryptJaneNf16",
            Self::Blake256r8 => "Blake256r8",
            Self::Blake256r14 => "Blake256r14",
            Self::Blake256r8vnl => "Blake256r8vnl",
            Self::Hodl => "Hodl",
            Self::DaggerHashimoto => "DaggerHashimoto",
            Self::Decred => "Decred",
            Self::CryptoNight => "CryptoNight",
            Self::Lbry => "Lbry",
            Self::Equihash => "Equihash",
            Self::Pascal => "Pascal",
            Self::X11Gost => "X11Gost",
            Self::Sia => "Sia",
            Self::Blake2s => "Blake2s",
            Self::Skunk => "Skunk",
            Self::CryptoNightV7 => "CryptoNightV7",
            Self::CryptoNightHeavy => "CryptoNightHeavy",
            Self::Lyra2Z => "Lyra2Z",
            Self::X16R => "X16R",
            Self::CryptoNightV8 => "CryptoNightV8",
            Self::Sha256AsicBoost => "SHA256AsicBoost",
            Self::Zhash => "Zhash",
            Self::Beam => "Beam",
            Self::GrinCuckaroo29 => "GrinCuckaroo29",
            Self::GrinCuckatoo31 => "GrinCuckatoo31",
            Self::Lyra2Rev3 => "Lyra2REv3",
            Self::Mtp => "MTP",
            Self::CryptoNightR => "CryptoNightR",
        }
    }

    /// Registry entry for a wire ID
    pub fn from_id(id: u32) -> Result<Self, AlgorithmError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(id.to_string()))
    }

    /// Registry entry for a name, compared case-insensitively
    pub fn from_name(name: &str) -> Result<Self, AlgorithmError> {
        Self::ALL
            .iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(name.to_string()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm referenced either by numeric ID or by name
///
/// Request parameters accept both forms. A numeric reference resolves
/// as-is without a registry check (the service is authoritative for IDs
/// the table has not caught up with); a name must match a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AlgorithmRef {
    /// Numeric wire ID
    Id(i64),
    /// Case-insensitive algorithm name
    Name(String),
}

impl AlgorithmRef {
    /// Resolve to the numeric wire ID
    pub fn resolve(&self) -> Result<u32, AlgorithmError> {
        match self {
            Self::Id(id) => {
                if *id < 0 || *id > i64::from(u32::MAX) {
                    Err(AlgorithmError::InvalidAlgorithmReference(id.to_string()))
                } else {
                    Ok(*id as u32)
                }
            }
            Self::Name(name) => Ok(Algorithm::from_name(name)?.id()),
        }
    }
}

impl From<Algorithm> for AlgorithmRef {
    fn from(algo: Algorithm) -> Self {
        Self::Id(i64::from(algo.id()))
    }
}

impl From<u32> for AlgorithmRef {
    fn from(id: u32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<i32> for AlgorithmRef {
    fn from(id: i32) -> Self {
        Self::Id(i64::from(id))
    }
}

impl From<i64> for AlgorithmRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for AlgorithmRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AlgorithmRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Registry lookup failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    /// No registry entry matches the given name or ID
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    /// The reference is not a usable ID or name
    #[error("invalid algorithm reference: {0}")]
    InvalidAlgorithmReference(String),
}
