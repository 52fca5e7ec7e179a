use serde_json::Value;
use std::path::Path;

use crate::json::read_json;

const FALLBACK_LOCALES: [&str; 3] = ["en", "en_US", "en_GB"];

/// Resolves a `__MSG_key__` manifest string from the extension's `_locales`
/// directory. Returns `None` for plain strings and for placeholders that no
/// locale defines.
pub fn localize(install_dir: &Path, text: &str, default_locale: Option<&str>) -> Option<String> {
    let key = text.strip_prefix("__MSG_")?.strip_suffix("__")?;
    let locales_dir = install_dir.join("_locales");

    default_locale
        .into_iter()
        .chain(FALLBACK_LOCALES)
        .find_map(|locale| {
            let messages_path = locales_dir.join(locale).join("messages.json");
            if !messages_path.is_file() {
                return None;
            }
            let messages = match read_json(&messages_path) {
                Ok(messages) => messages,
                Err(e) => {
                    tracing::debug!(error = ?e, "Ignoring unreadable locale file");
                    return None;
                }
            };
            lookup_message(&messages, key)
        })
}

/// Message keys are case-insensitive.
fn lookup_message(messages: &Value, key: &str) -> Option<String> {
    messages
        .as_object()?
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))?
        .1
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
