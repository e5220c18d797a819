//! PAN-OS version handling
//!
//! # Modules
//!
//! - [`panos`]: the [`Version`] value type (parse, compare, format)
//! - [`error`]: parse errors

pub mod error;
pub mod panos;

pub use error::{Component, FormatPart, VersionError};
pub use panos::Version;
