//! PAN-OS version value
//!
//! PAN-OS releases are numbered `<major>.<minor>.<maintenance>`, with an
//! optional hotfix suffix `-h<hotfix>`:
//! - `10.0.0`
//! - `10.1.9-h1`
//!
//! A release without a hotfix sorts before the same release with any hotfix,
//! and a newer maintenance release sorts after every hotfix of an older one.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::version::error::{Component, FormatPart, VersionError};

/// Expected shape of the dotted part of a version
pub const VERSION_PATTERN: &str = "<major>.<minor>.<maintenance>";

/// Separator between the dotted part and the hotfix suffix
pub const HOTFIX_SEPARATOR: char = '-';

/// Literal prefix of the hotfix suffix
pub const HOTFIX_PREFIX: &str = "h";

const COMPONENT_SEPARATOR: char = '.';

/// A parsed PAN-OS version.
///
/// Field order matters: the derived ordering compares fields top to bottom,
/// and `None` sorts before any `Some` hotfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub maintenance: u64,
    pub hotfix: Option<u64>,
}

impl Version {
    /// Create a version without a hotfix
    pub const fn new(major: u64, minor: u64, maintenance: u64) -> Self {
        Self {
            major,
            minor,
            maintenance,
            hotfix: None,
        }
    }

    /// Create a version with a hotfix
    pub const fn with_hotfix(major: u64, minor: u64, maintenance: u64, hotfix: u64) -> Self {
        Self {
            major,
            minor,
            maintenance,
            hotfix: Some(hotfix),
        }
    }

    /// Parse a version string such as `10.0.0` or `10.0.0-h1`.
    ///
    /// The input is split on the first `-`. The left part must have exactly
    /// three numeric dot-separated components; the right part, if present,
    /// must be `h` followed by a number.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let (lhs, rhs) = match version.split_once(HOTFIX_SEPARATOR) {
            Some((lhs, rhs)) => (lhs, Some(rhs)),
            None => (version, None),
        };

        let parts: Vec<&str> = lhs.split(COMPONENT_SEPARATOR).collect();
        let [major, minor, maintenance] = parts.as_slice() else {
            return Err(VersionError::Format {
                part: FormatPart::Version,
                expected: VERSION_PATTERN,
                actual: lhs.to_string(),
            });
        };

        let major = parse_component(major, Component::Major)?;
        let minor = parse_component(minor, Component::Minor)?;
        let maintenance = parse_component(maintenance, Component::Maintenance)?;

        let hotfix = match rhs {
            Some(rhs) => {
                let Some(number) = rhs.strip_prefix(HOTFIX_PREFIX) else {
                    return Err(VersionError::Format {
                        part: FormatPart::HotfixPrefix,
                        expected: HOTFIX_PREFIX,
                        actual: rhs.to_string(),
                    });
                };
                Some(parse_component(number, Component::Hotfix)?)
            }
            None => None,
        };

        Ok(Self {
            major,
            minor,
            maintenance,
            hotfix,
        })
    }

    /// Three-way comparison: `-1` if `self` is older than `other`, `0` if
    /// equal, `1` if newer.
    pub fn compare(&self, other: &Version) -> i8 {
        self.cmp(other) as i8
    }

    /// Whether the version carries a `-h<hotfix>` suffix
    pub fn has_hotfix(&self) -> bool {
        self.hotfix.is_some()
    }

    /// The same release with the hotfix dropped
    pub fn base(&self) -> Version {
        Version::new(self.major, self.minor, self.maintenance)
    }
}

fn parse_component(segment: &str, component: Component) -> Result<u64, VersionError> {
    segment
        .parse()
        .map_err(|source| VersionError::Parse { component, source })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.maintenance)?;
        if let Some(hotfix) = self.hotfix {
            write!(f, "{HOTFIX_SEPARATOR}{HOTFIX_PREFIX}{hotfix}")?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(de::Error::custom)
    }
}
