//! Recognized operating system and architecture tokens
//!
//! Platform names are free-form, but older descriptions used platform names
//! such as `x64` or `macosx` to mean an architecture or target system. These
//! fixed vocabularies let the resolver recognize such legacy tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Aix,
    Bsd,
    Haiku,
    Linux,
    MacOsX,
    Solaris,
    Wii,
    Windows,
    Xbox360,
}

impl OperatingSystem {
    pub const ALL: [Self; 9] = [
        Self::Aix,
        Self::Bsd,
        Self::Haiku,
        Self::Linux,
        Self::MacOsX,
        Self::Solaris,
        Self::Wii,
        Self::Windows,
        Self::Xbox360,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aix => "aix",
            Self::Bsd => "bsd",
            Self::Haiku => "haiku",
            Self::Linux => "linux",
            Self::MacOsX => "macosx",
            Self::Solaris => "solaris",
            Self::Wii => "wii",
            Self::Windows => "windows",
            Self::Xbox360 => "xbox360",
        }
    }

    /// Look up a token, ignoring case. Returns `None` outside the vocabulary.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|os| os.as_str().eq_ignore_ascii_case(token))
    }

    /// Map a Rust target OS name (`std::env::consts::OS`) onto the vocabulary.
    pub fn from_rust_target(os: &str) -> Option<Self> {
        match os {
            "linux" | "android" => Some(Self::Linux),
            "macos" | "ios" => Some(Self::MacOsX),
            "windows" => Some(Self::Windows),
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Some(Self::Bsd),
            "solaris" | "illumos" => Some(Self::Solaris),
            "aix" => Some(Self::Aix),
            "haiku" => Some(Self::Haiku),
            _ => None,
        }
    }

    /// The operating system this process runs on.
    ///
    /// Hosts outside the vocabulary are reported as Linux.
    pub fn host() -> Self {
        Self::from_rust_target(std::env::consts::OS).unwrap_or(Self::Linux)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| Error::UnknownToken {
            kind: "operating system",
            token: s.to_string(),
        })
    }
}

/// A target processor architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Universal,
    X32,
    X64,
    X86,
    X86_64,
    Arm,
    Arm64,
}

impl Architecture {
    pub const ALL: [Self; 7] = [
        Self::Universal,
        Self::X32,
        Self::X64,
        Self::X86,
        Self::X86_64,
        Self::Arm,
        Self::Arm64,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Universal => "universal",
            Self::X32 => "x32",
            Self::X64 => "x64",
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
        }
    }

    /// Look up a token, ignoring case. Returns `None` outside the vocabulary.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| Error::UnknownToken {
            kind: "architecture",
            token: s.to_string(),
        })
    }
}
