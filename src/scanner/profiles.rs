use std::path::Path;

use crate::error::Result;
use crate::json::{get_object, read_json};
use crate::model::{ProfileNode, Profiles};

/// Profile registry at the root of the user-data directory.
pub const LOCAL_STATE: &str = "Local State";

/// Reads `Local State` and returns every profile in `profile.info_cache`, in
/// file order.
///
/// A document without `profile.info_cache` yields no profiles. A missing or
/// malformed `Local State` is an error.
pub fn scan_profiles(data_root: &Path) -> Result<Profiles> {
    let local_state_path = data_root.join(LOCAL_STATE);
    let local_state = read_json(&local_state_path)?;

    let info_cache = match get_object(&local_state, &["profile", "info_cache"]) {
        Some(info_cache) => info_cache,
        None => {
            tracing::warn!(
                "No profile.info_cache in {}, assuming no profiles",
                local_state_path.display()
            );
            return Ok(Profiles::new());
        }
    };

    let profiles: Profiles = info_cache
        .iter()
        .map(|(profile_id, info)| {
            let node = info
                .as_object()
                .map(ProfileNode::from_info)
                .unwrap_or_default();
            (profile_id.clone(), node)
        })
        .collect();

    tracing::debug!("Found {} profiles", profiles.len());
    Ok(profiles)
}
