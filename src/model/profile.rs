use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json::str_field;

/// A browser profile as recorded in `Local State` under `profile.info_cache`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileNode {
    pub name: String,
    pub gaia_given_name: String,
    pub gaia_name: String,
    pub shortcut_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Profiles keyed by profile directory name ("Default", "Profile 1", ...).
pub type Profiles = IndexMap<String, ProfileNode>;

impl ProfileNode {
    /// Builds a profile from its `info_cache` entry. Missing fields default to
    /// empty strings; a missing or `null` user name stays `None`.
    pub fn from_info(info: &Map<String, Value>) -> Self {
        Self {
            name: str_field(info, "name", "").to_string(),
            gaia_given_name: str_field(info, "gaia_given_name", "").to_string(),
            gaia_name: str_field(info, "gaia_name", "").to_string(),
            shortcut_name: str_field(info, "shortcut_name", "").to_string(),
            user_name: info
                .get("user_name")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
