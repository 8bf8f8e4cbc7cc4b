//! Digest algorithms a hash variable can be bound to.
//!
//! The set of algorithms is closed: every directive binds the same
//! evaluation pipeline to one [`Algorithm`] variant, and
//! [`Algorithm::digest`] dispatches to the matching implementation.
//!
//! | Algorithm | Digest | Hex width |
//! |-----------|--------|-----------|
//! | [`Algorithm::Md5`] | 16 bytes | 32 |
//! | [`Algorithm::Crc32`] | 32-bit IEEE checksum | 8 |
//! | `Algorithm::Lookup3` | 32-bit `hashlittle`, seed 0 | 8 |
//!
//! `Lookup3` only exists when the `lookup3` feature is enabled.

use std::fmt;
use std::str::FromStr;

use md5::{Digest as _, Md5};

use crate::error::UnknownAlgorithm;

/// Size in bytes of the largest digest (MD5).
pub const MAX_DIGEST_LEN: usize = 16;

/// A supported digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSA MD5 message digest.
    Md5,
    /// CRC-32 with the IEEE polynomial.
    Crc32,
    /// Bob Jenkins' lookup3 `hashlittle` with seed 0.
    #[cfg(feature = "lookup3")]
    Lookup3,
}

impl Algorithm {
    /// All algorithms compiled into this build.
    pub const ALL: &'static [Algorithm] = &[
        Algorithm::Md5,
        Algorithm::Crc32,
        #[cfg(feature = "lookup3")]
        Algorithm::Lookup3,
    ];

    /// Size in bytes of the raw digest.
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Crc32 => 4,
            #[cfg(feature = "lookup3")]
            Algorithm::Lookup3 => 4,
        }
    }

    /// Number of hex characters of the formatted digest.
    pub const fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Lowercase algorithm name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Crc32 => "crc32",
            #[cfg(feature = "lookup3")]
            Algorithm::Lookup3 => "lookup3",
        }
    }

    /// Name of the configuration directive binding this algorithm.
    pub const fn directive(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5_hash",
            Algorithm::Crc32 => "crc32_hash",
            #[cfg(feature = "lookup3")]
            Algorithm::Lookup3 => "lookup3_hash",
        }
    }

    /// Looks up the algorithm bound to a directive name.
    ///
    /// Returns `None` for unknown directives, including `lookup3_hash`
    /// when the `lookup3` feature is disabled.
    pub fn from_directive(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.directive() == name)
    }

    /// Computes the digest of `input` in one pass.
    pub fn digest(self, input: &[u8]) -> Digest {
        match self {
            Algorithm::Md5 => Digest::from_slice(&Md5::digest(input)),
            Algorithm::Crc32 => Digest::from_u32(crc::crc32::checksum_ieee(input)),
            #[cfg(feature = "lookup3")]
            Algorithm::Lookup3 => Digest::from_u32(crate::lookup3::hashlittle(input, 0)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

/// Raw digest bytes, most significant byte first.
///
/// 32-bit checksums are stored big-endian so that formatting the bytes
/// in order yields the zero-padded hex of the integer value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_LEN],
    len: usize,
}

impl Digest {
    fn from_slice(slice: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        let len = slice.len().min(MAX_DIGEST_LEN);
        bytes[..len].copy_from_slice(&slice[..len]);
        Digest { bytes, len }
    }

    fn from_u32(value: u32) -> Self {
        Self::from_slice(&value.to_be_bytes())
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", hex::encode_upper(self.as_bytes()))
    }
}
