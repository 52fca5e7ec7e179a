//! Chrome data directory resolution.
//!
//! The user-data root holds `Local State` and one directory per profile.
//! Only Windows and macOS locations are known; every other platform is a
//! configuration error rather than a guess.

use crate::error::{Result, ScanError};
use crate::model::Platform;
use std::path::{Path, PathBuf};

/// Returns the Chrome user-data root for `platform` under `home`.
///
/// Platform-specific locations:
/// - Windows: `<home>\AppData\Local\Google\Chrome\User Data`
/// - macOS: `<home>/Library/Application Support/Google/Chrome`
///
/// The directory is not required to exist.
///
/// # Errors
///
/// Returns [`ScanError::UnsupportedPlatform`] for Linux.
///
/// # Example
///
/// ```
/// use chromhelper::{platform::chrome_user_data_dir, Platform};
/// use std::path::Path;
///
/// let root = chrome_user_data_dir(Platform::MacOS, Path::new("/Users/ada")).unwrap();
/// assert!(root.ends_with("Library/Application Support/Google/Chrome"));
/// ```
pub fn chrome_user_data_dir(platform: Platform, home: &Path) -> Result<PathBuf> {
    match platform {
        Platform::Windows => Ok(home
            .join("AppData")
            .join("Local")
            .join("Google")
            .join("Chrome")
            .join("User Data")),
        Platform::MacOS => Ok(home
            .join("Library")
            .join("Application Support")
            .join("Google")
            .join("Chrome")),
        Platform::Linux => Err(ScanError::UnsupportedPlatform(platform.to_string())),
    }
}

/// Like [`chrome_user_data_dir`], taking a raw platform tag such as `win32`,
/// `darwin` or `macos`.
///
/// # Errors
///
/// Returns [`ScanError::UnsupportedPlatform`] if the tag is unknown or has no
/// Chrome location.
pub fn chrome_user_data_dir_for_tag(tag: &str, home: &Path) -> Result<PathBuf> {
    let platform =
        Platform::from_tag(tag).ok_or_else(|| ScanError::UnsupportedPlatform(tag.to_string()))?;
    chrome_user_data_dir(platform, home)
}

/// Returns the Chrome user-data root for the current user on this machine.
///
/// # Errors
///
/// Returns [`ScanError::UnsupportedPlatform`] on platforms without a known
/// location and [`ScanError::NoHomeDir`] if the home directory is unknown.
pub fn current_user_data_dir() -> Result<PathBuf> {
    let platform = Platform::current()
        .ok_or_else(|| ScanError::UnsupportedPlatform(std::env::consts::OS.to_string()))?;
    let home = dirs::home_dir().ok_or(ScanError::NoHomeDir)?;
    chrome_user_data_dir(platform, &home)
}
