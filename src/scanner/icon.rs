use serde_json::{Map, Value};
use std::path::Path;

const PREFERRED_ICON_SIZE: &str = "128";

/// Picks the best icon from a manifest `icons` map and returns its absolute
/// path under the profile's `Extensions` directory.
///
/// The `"128"` entry wins; otherwise the numerically largest size is used.
/// Returns an empty string when no icon can be selected. The file is not
/// checked for existence.
pub fn resolve_icon_path(icons: &Map<String, Value>, ext_path: &str, profile_root: &Path) -> String {
    let icon_file = match select_icon(icons) {
        Some(file) => file,
        None => return String::new(),
    };

    // A leading separator would make the join discard everything before it.
    let icon_file = icon_file
        .strip_prefix('/')
        .or_else(|| icon_file.strip_prefix('\\'))
        .unwrap_or(icon_file);

    profile_root
        .join("Extensions")
        .join(ext_path)
        .join(icon_file)
        .to_string_lossy()
        .into_owned()
}

fn select_icon(icons: &Map<String, Value>) -> Option<&str> {
    let entry = match icons.get(PREFERRED_ICON_SIZE) {
        Some(entry) => entry,
        None => {
            icons
                .iter()
                .filter_map(|(size, file)| size.parse::<u32>().ok().map(|size| (size, file)))
                .max_by_key(|(size, _)| *size)?
                .1
        }
    };
    entry.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn icons(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn expected(profile_root: &Path, ext_path: &str, file: &str) -> String {
        profile_root
            .join("Extensions")
            .join(ext_path)
            .join(file)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_prefers_128() {
        let root = PathBuf::from("/data/Default");
        let icons = icons(json!({"16": "a.png", "128": "b.png", "256": "d.png"}));

        assert_eq!(
            resolve_icon_path(&icons, "ext/1.0", &root),
            expected(&root, "ext/1.0", "b.png")
        );
    }

    #[test]
    fn test_falls_back_to_largest_size() {
        let root = PathBuf::from("/data/Default");
        let icons = icons(json!({"16": "a.png", "48": "c.png", "32": "e.png"}));

        assert_eq!(
            resolve_icon_path(&icons, "ext/1.0", &root),
            expected(&root, "ext/1.0", "c.png")
        );
    }

    #[test]
    fn test_largest_size_is_numeric_not_lexical() {
        let root = PathBuf::from("/data/Default");
        let icons = icons(json!({"9": "nine.png", "64": "sixty-four.png"}));

        assert_eq!(
            resolve_icon_path(&icons, "ext", &root),
            expected(&root, "ext", "sixty-four.png")
        );
    }

    #[test]
    fn test_empty_icons() {
        let root = PathBuf::from("/data/Default");
        assert_eq!(resolve_icon_path(&Map::new(), "ext/1.0", &root), "");
    }

    #[test]
    fn test_no_usable_icon() {
        let root = PathBuf::from("/data/Default");
        assert_eq!(resolve_icon_path(&icons(json!({"large": "x.png"})), "ext", &root), "");
        assert_eq!(resolve_icon_path(&icons(json!({"128": 5})), "ext", &root), "");
    }

    #[test]
    fn test_strips_one_leading_separator() {
        let root = PathBuf::from("/data/Default");

        assert_eq!(
            resolve_icon_path(&icons(json!({"128": "/icons/b.png"})), "ext/1.0", &root),
            expected(&root, "ext/1.0", "icons/b.png")
        );
        assert_eq!(
            resolve_icon_path(&icons(json!({"48": "\\c.png"})), "ext/1.0", &root),
            expected(&root, "ext/1.0", "c.png")
        );
    }

    #[test]
    fn test_absolute_extension_path() {
        let root = PathBuf::from("/data/Default");
        let icons = icons(json!({"128": "/icon.png"}));

        assert_eq!(
            resolve_icon_path(&icons, "/home/user/myext", &root),
            Path::new("/home/user/myext")
                .join("icon.png")
                .to_string_lossy()
                .into_owned()
        );
    }
}
