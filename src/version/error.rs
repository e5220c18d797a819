use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Numeric component of a PAN-OS version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Maintenance,
    Hotfix,
}

impl Component {
    /// Returns the string representation of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Maintenance => "maintenance",
            Component::Hotfix => "hotfix",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the version grammar a format error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatPart {
    /// The dotted `<major>.<minor>.<maintenance>` part
    Version,
    /// The `h` prefix of the hotfix suffix
    HotfixPrefix,
}

impl FormatPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatPart::Version => "version format",
            FormatPart::HotfixPrefix => "hotfix prefix",
        }
    }
}

impl fmt::Display for FormatPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("unexpected PAN-OS {part}. expected: {expected:?}, actual: {actual:?}")]
    Format {
        part: FormatPart,
        expected: &'static str,
        actual: String,
    },

    #[error("parse {component} version: {source}")]
    Parse {
        component: Component,
        #[source]
        source: ParseIntError,
    },
}

impl VersionError {
    /// Returns the component that failed numeric conversion, if any
    pub fn component(&self) -> Option<Component> {
        match self {
            VersionError::Parse { component, .. } => Some(*component),
            VersionError::Format { .. } => None,
        }
    }
}
