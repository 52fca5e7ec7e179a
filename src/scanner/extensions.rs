use indexmap::map::Entry;
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;

use super::icon::resolve_icon_path;
use super::locale::localize;
use super::FailurePolicy;
use crate::error::Result;
use crate::json::{get_object, read_json, str_field};
use crate::model::{ExtensionNode, Extensions, InstallKind, Profiles};

/// Per-profile preferences file holding extension settings.
pub const SECURE_PREFERENCES: &str = "Secure Preferences";

/// Collects the extensions of every profile into one map keyed by extension
/// id. Each extension appears once; its `profiles` list grows in scan order
/// and the first profile's name, icon and path are kept.
pub fn scan_extensions(
    data_root: &Path,
    profiles: &Profiles,
    policy: FailurePolicy,
) -> Result<Extensions> {
    let mut extensions = Extensions::new();

    for profile_id in profiles.keys() {
        match scan_profile(data_root, profile_id, policy, &mut extensions) {
            Ok(count) => tracing::debug!("Profile {}: {} extensions", profile_id, count),
            Err(e) if policy == FailurePolicy::Skip => {
                tracing::warn!(error = ?e, "Skipping profile {}", profile_id);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(extensions)
}

/// Merges one profile's extensions into `extensions`. Returns how many
/// extensions the profile contributed.
///
/// Manifests are only read for ids not seen in an earlier profile; later
/// profiles just append themselves. Errors can only escape before anything
/// is merged, or under [`FailurePolicy::Abort`].
fn scan_profile(
    data_root: &Path,
    profile_id: &str,
    policy: FailurePolicy,
    extensions: &mut Extensions,
) -> Result<usize> {
    let profile_root = data_root.join(profile_id);
    let preferences = read_json(&profile_root.join(SECURE_PREFERENCES))?;

    let settings = match get_object(&preferences, &["extensions", "settings"]) {
        Some(settings) => settings,
        None => return Ok(0),
    };

    let mut count = 0;
    for (ext_id, ext_settings) in settings {
        let path = ext_settings
            .as_object()
            .map(|settings| str_field(settings, "path", ""))
            .unwrap_or("");

        let kind = match InstallKind::classify(ext_id, path) {
            Some(kind) => kind,
            None => {
                tracing::debug!("Ignoring internal extension {}", ext_id);
                continue;
            }
        };

        let entry = match extensions.entry(ext_id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().profiles.push(profile_id.to_string());
                count += 1;
                continue;
            }
            Entry::Vacant(entry) => entry,
        };

        // An absolute path (offline install) replaces the Extensions prefix.
        let install_dir = profile_root.join("Extensions").join(path);
        let manifest = match load_manifest(ext_settings, &install_dir) {
            Ok(manifest) => manifest,
            Err(e) if policy == FailurePolicy::Skip => {
                tracing::warn!(error = ?e, "Skipping extension {} in {}", ext_id, profile_id);
                continue;
            }
            Err(e) => return Err(e),
        };

        tracing::debug!("New {:?} extension {} at {}", kind, ext_id, path);
        entry.insert(build_node(kind, &manifest, path, &install_dir, &profile_root, profile_id));
        count += 1;
    }

    Ok(count)
}

/// Uses the manifest embedded in the settings record, or reads
/// `manifest.json` from the install directory when none is embedded.
fn load_manifest<'a>(ext_settings: &'a Value, install_dir: &Path) -> Result<Cow<'a, Value>> {
    match ext_settings.get("manifest") {
        Some(manifest) if manifest.as_object().is_some_and(|m| !m.is_empty()) => {
            Ok(Cow::Borrowed(manifest))
        }
        _ => read_json(&install_dir.join("manifest.json")).map(Cow::Owned),
    }
}

fn build_node(
    kind: InstallKind,
    manifest: &Value,
    path: &str,
    install_dir: &Path,
    profile_root: &Path,
    profile_id: &str,
) -> ExtensionNode {
    let name = manifest.get("name").and_then(Value::as_str).unwrap_or("");
    let default_locale = manifest.get("default_locale").and_then(Value::as_str);
    let name = localize(install_dir, name, default_locale).unwrap_or_else(|| name.to_string());

    let icon = manifest
        .get("icons")
        .and_then(Value::as_object)
        .map(|icons| resolve_icon_path(icons, path, profile_root))
        .unwrap_or_default();

    ExtensionNode::new(kind, icon, name, path, profile_id)
}
