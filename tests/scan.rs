use chromhelper::scanner::{FailurePolicy, Scanner, LOCAL_STATE, SECURE_PREFERENCES};
use chromhelper::InstallKind;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Two profiles sharing a store extension; the second also has an unpacked
/// extension whose manifest lives in its own directory.
fn build_data_root(data_root: &Path, unpacked: &Path) {
    fs::write(
        data_root.join(LOCAL_STATE),
        json!({
            "profile": {
                "info_cache": {
                    "Profile A": {"name": "Personal", "gaia_given_name": "Ada"},
                    "Profile B": {"name": "Work", "user_name": "ada@work.example"}
                }
            }
        })
        .to_string(),
    )
    .unwrap();

    let profile_a = data_root.join("Profile A");
    fs::create_dir_all(&profile_a).unwrap();
    fs::write(
        profile_a.join(SECURE_PREFERENCES),
        json!({
            "extensions": {
                "settings": {
                    "ext1": {
                        "path": "ext1_v1.0",
                        "manifest": {"name": "Store Extension", "icons": {"16": "a.png", "128": "b.png"}}
                    },
                    "internal": {"manifest": {"name": "Component"}}
                }
            }
        })
        .to_string(),
    )
    .unwrap();

    let profile_b = data_root.join("Profile B");
    fs::create_dir_all(&profile_b).unwrap();
    fs::write(
        profile_b.join(SECURE_PREFERENCES),
        json!({
            "extensions": {
                "settings": {
                    "ext1": {"path": "ext1_v2.0", "manifest": {"name": "Renamed"}},
                    "ext2": {"path": unpacked.to_string_lossy()}
                }
            }
        })
        .to_string(),
    )
    .unwrap();

    fs::write(
        unpacked.join("manifest.json"),
        json!({"name": "My Unpacked Extension", "icons": {"128": "/icon.png"}}).to_string(),
    )
    .unwrap();
}

#[test]
fn test_end_to_end_scan() {
    let data_root = tempfile::tempdir().unwrap();
    let unpacked = tempfile::tempdir().unwrap();
    build_data_root(data_root.path(), unpacked.path());

    let scanner = Scanner::new(data_root.path()).with_policy(FailurePolicy::Abort);

    let profiles = scanner.scan_profiles().unwrap();
    let profile_ids: Vec<_> = profiles.keys().map(String::as_str).collect();
    assert_eq!(profile_ids, ["Profile A", "Profile B"]);
    assert_eq!(profiles["Profile A"].gaia_given_name, "Ada");

    let extensions = scanner.scan_extensions().unwrap();
    let ids: Vec<_> = extensions.keys().map(String::as_str).collect();
    assert_eq!(ids, ["ext1", "ext2"]);

    let ext1 = &extensions["ext1"];
    assert_eq!(ext1.profiles, ["Profile A", "Profile B"]);
    assert_eq!(ext1.name, "Store Extension");
    assert_eq!(ext1.path, "ext1_v1.0");
    assert_eq!(ext1.kind, InstallKind::Store);
    assert_eq!(
        ext1.icon,
        data_root
            .path()
            .join("Profile A")
            .join("Extensions")
            .join("ext1_v1.0")
            .join("b.png")
            .to_string_lossy()
    );

    let ext2 = &extensions["ext2"];
    assert_eq!(ext2.profiles, ["Profile B"]);
    assert_eq!(ext2.name, "My Unpacked Extension");
    assert_eq!(ext2.kind, InstallKind::Offline);
    assert_eq!(ext2.path, unpacked.path().to_string_lossy());
    assert_eq!(ext2.icon, unpacked.path().join("icon.png").to_string_lossy());
}

#[test]
fn test_rescan_is_deterministic() {
    let data_root = tempfile::tempdir().unwrap();
    let unpacked = tempfile::tempdir().unwrap();
    build_data_root(data_root.path(), unpacked.path());

    let scanner = Scanner::new(data_root.path());
    let first = scanner.scan_extensions().unwrap();
    let second = scanner.scan_extensions().unwrap();

    assert_eq!(first, second);
    assert!(first.keys().eq(second.keys()));
}

#[test]
fn test_rescan_sees_changes() {
    let data_root = tempfile::tempdir().unwrap();
    let unpacked = tempfile::tempdir().unwrap();
    build_data_root(data_root.path(), unpacked.path());

    let scanner = Scanner::new(data_root.path());
    assert_eq!(scanner.scan_extensions().unwrap().len(), 2);

    fs::remove_file(unpacked.path().join("manifest.json")).unwrap();

    let extensions = scanner.scan_extensions().unwrap();
    assert_eq!(extensions.len(), 1);
    assert!(
        Scanner::new(data_root.path())
            .with_policy(FailurePolicy::Abort)
            .scan_extensions()
            .is_err()
    );
}

#[test]
fn test_report_serializes_expected_shape() {
    let data_root = tempfile::tempdir().unwrap();
    let unpacked = tempfile::tempdir().unwrap();
    build_data_root(data_root.path(), unpacked.path());

    let report = Scanner::new(data_root.path()).scan().unwrap();
    let value = serde_json::to_value(&report).unwrap();

    let ext1 = &value["extensions"]["ext1"];
    assert_eq!(ext1["name"], "Store Extension");
    assert_eq!(ext1["path"], "ext1_v1.0");
    assert_eq!(ext1["profiles"], json!(["Profile A", "Profile B"]));
    assert!(ext1["icon"].is_string());
    assert_eq!(ext1["kind"], "store");
    assert!(value["scan_time"].is_string());
}
