//! Core data types for profiles, extensions, and scan results.
//!
//! - [`ProfileNode`] - A Chrome profile listed in `Local State`
//! - [`ExtensionNode`] - An installed extension, merged across profiles
//! - [`InstallKind`] - How an extension got installed
//! - [`Platform`] - Operating system platform
//! - [`ScanReport`] - Complete scan results
//!
//! # Example
//!
//! ```
//! use chromhelper::{ExtensionNode, Extensions, InstallKind, ScanReport};
//!
//! let mut extensions = Extensions::new();
//! extensions.insert(
//!     "ext1".to_string(),
//!     ExtensionNode::new(InstallKind::Store, "", "Dark Reader", "ext1/4.9.1_0", "Default"),
//! );
//! let report = ScanReport::new("/tmp/chrome", extensions);
//!
//! println!("Found {} extensions", report.extensions.len());
//! ```

mod extension;
mod platform;
mod profile;

pub use extension::*;
pub use platform::*;
pub use profile::*;
