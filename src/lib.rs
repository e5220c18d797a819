//! Parsing, ordering and formatting of PAN-OS version strings.
//!
//! ```
//! use panos_version::Version;
//!
//! let base: Version = "10.1.9".parse().unwrap();
//! let hotfix: Version = "10.1.9-h1".parse().unwrap();
//!
//! assert!(base < hotfix);
//! assert_eq!(base.compare(&hotfix), -1);
//! assert_eq!(hotfix.to_string(), "10.1.9-h1");
//! ```

pub mod version;

pub use version::{Component, FormatPart, Version, VersionError};
