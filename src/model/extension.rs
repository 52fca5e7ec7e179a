use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An installed extension, merged across every profile that has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionNode {
    /// Absolute path to the best icon, or empty if the manifest has none.
    pub icon: String,
    pub name: String,
    /// Install path exactly as recorded in `Secure Preferences`.
    pub path: String,
    /// Profiles that have this extension, in scan order.
    pub profiles: Vec<String>,
    /// Install kind in the first profile that has the extension.
    pub kind: InstallKind,
}

/// Extensions keyed by extension id.
pub type Extensions = IndexMap<String, ExtensionNode>;

impl ExtensionNode {
    pub fn new(
        kind: InstallKind,
        icon: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            path: path.into(),
            profiles: vec![profile_id.into()],
            kind,
        }
    }
}

/// How an extension ended up in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallKind {
    /// Installed from the web store; the path is `<id>/<version>` relative to
    /// the profile's `Extensions` directory.
    Store,
    /// Loaded unpacked from an existing directory elsewhere on disk.
    Offline,
}

impl InstallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallKind::Store => "store",
            InstallKind::Offline => "offline",
        }
    }

    /// Classifies an extension settings record by its `path`.
    ///
    /// Returns `None` for component and other internal extensions: those with
    /// an empty path, or a path that neither starts with the extension id nor
    /// exists on disk.
    pub fn classify(extension_id: &str, path: &str) -> Option<Self> {
        if path.is_empty() {
            return None;
        }
        if path.starts_with(extension_id) {
            Some(InstallKind::Store)
        } else if Path::new(path).exists() {
            Some(InstallKind::Offline)
        } else {
            None
        }
    }
}

/// Result of a full extension scan, as handed to the output layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_time: DateTime<Utc>,
    pub data_root: PathBuf,
    pub extensions: Extensions,
}

impl ScanReport {
    pub fn new(data_root: impl Into<PathBuf>, extensions: Extensions) -> Self {
        Self {
            scan_time: Utc::now(),
            data_root: data_root.into(),
            extensions,
        }
    }
}
