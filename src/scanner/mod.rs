//! Profile and extension discovery.
//!
//! A [`Scanner`] reads a Chrome user-data directory:
//!
//! | File | Provides |
//! |------|----------|
//! | `Local State` | The profile list (`profile.info_cache`) |
//! | `<profile>/Secure Preferences` | Installed extensions (`extensions.settings`) |
//! | `<install dir>/manifest.json` | Manifests not embedded in preferences |
//!
//! Every scan re-reads every file; nothing is cached between calls.
//!
//! # Example
//!
//! ```no_run
//! use chromhelper::scanner::{FailurePolicy, Scanner};
//!
//! fn main() -> anyhow::Result<()> {
//!     let scanner = Scanner::for_current_user()?.with_policy(FailurePolicy::Abort);
//!     for (id, extension) in scanner.scan_extensions()? {
//!         println!("{} {} ({} profiles)", id, extension.name, extension.profiles.len());
//!     }
//!     Ok(())
//! }
//! ```

mod extensions;
mod icon;
mod locale;
mod profiles;

pub use extensions::{scan_extensions, SECURE_PREFERENCES};
pub use icon::resolve_icon_path;
pub use profiles::{scan_profiles, LOCAL_STATE};

use crate::error::Result;
use crate::model::{Extensions, Profiles, ScanReport};
use crate::platform::current_user_data_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do when a profile's preferences or an extension's manifest cannot
/// be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and leave out the profile or extension.
    #[default]
    Skip,
    /// Stop the whole scan at the first failure.
    Abort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Skip => "skip",
            FailurePolicy::Abort => "abort",
        }
    }
}

/// Scans one Chrome user-data directory.
#[derive(Debug, Clone)]
pub struct Scanner {
    data_root: PathBuf,
    policy: FailurePolicy,
}

impl Scanner {
    /// Creates a scanner for an explicit data root.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            policy: FailurePolicy::default(),
        }
    }

    /// Creates a scanner for the current user's Chrome data.
    ///
    /// # Errors
    ///
    /// Fails on platforms without a known Chrome location, or if the home
    /// directory cannot be determined.
    pub fn for_current_user() -> Result<Self> {
        Ok(Self::new(current_user_data_dir()?))
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Lists the profiles registered in `Local State`.
    ///
    /// # Errors
    ///
    /// Returns an error if `Local State` is missing or not valid JSON.
    pub fn scan_profiles(&self) -> Result<Profiles> {
        scan_profiles(&self.data_root)
    }

    /// Scans all profiles and returns their extensions merged by id.
    ///
    /// # Errors
    ///
    /// Returns an error if `Local State` cannot be read, or under
    /// [`FailurePolicy::Abort`] if any profile's preferences or any needed
    /// manifest cannot be read.
    pub fn scan_extensions(&self) -> Result<Extensions> {
        tracing::debug!(
            "Scanning {} (policy: {})",
            self.data_root.display(),
            self.policy.as_str()
        );
        let profiles = self.scan_profiles()?;
        scan_extensions(&self.data_root, &profiles, self.policy)
    }

    /// Runs [`scan_extensions`](Self::scan_extensions) and wraps the result
    /// with the scan time and data root.
    pub fn scan(&self) -> Result<ScanReport> {
        let extensions = self.scan_extensions()?;
        Ok(ScanReport::new(&self.data_root, extensions))
    }
}
