use aether_release::{
    inspect_archive, read_entry, PackageStep, Packager, ReleaseConfig, ReleaseManifest,
    DEFAULT_README,
};
use assert_fs::prelude::*;
use assert_fs::TempDir;

fn scenario_config() -> ReleaseConfig {
    ReleaseConfig::with_manifest(
        ReleaseManifest::from_pairs([("A.bin", "desc A"), ("B.bin", "desc B")]).unwrap(),
    )
}

fn leftover_temp_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".tmp"))
        .collect()
}

#[test]
fn test_two_entry_scenario_from_empty_dir() {
    let temp = TempDir::new().unwrap();
    assert!(!temp.path().join("release").exists());

    let report = Packager::new(scenario_config())
        .with_base_dir(temp.path())
        .run()
        .unwrap();

    temp.child("release/README.txt").assert(DEFAULT_README);
    assert_eq!(report.entry_count, 3);

    let entries = inspect_archive(&report.archive_path).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["README.txt", "A.bin", "B.bin"]);

    assert_eq!(
        read_entry(&report.archive_path, "A.bin").unwrap(),
        b"# desc A\n# This is a placeholder - replace with actual build output\n"
    );
    assert_eq!(
        read_entry(&report.archive_path, "B.bin").unwrap(),
        b"# desc B\n# This is a placeholder - replace with actual build output\n"
    );
    assert_eq!(report.summary_lines()[1], "📦 Contains 3 files");
}

#[test]
fn test_stock_release_layout() {
    let temp = TempDir::new().unwrap();
    let report = Packager::new(ReleaseConfig::default())
        .with_base_dir(temp.path())
        .run()
        .unwrap();

    assert_eq!(report.archive_path, temp.path().join("Aether-Release-v1.0.zip"));
    assert_eq!(report.entry_count, 6);

    let names: Vec<_> = inspect_archive(&report.archive_path)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(
        names,
        [
            "README.txt",
            "AetherSetup.exe",
            "AetherGUI.dll",
            "aether_backend.dll",
            "AetherGUI.pdb",
            "aether_backend.pdb",
        ]
    );
    assert_eq!(
        read_entry(&report.archive_path, "AetherGUI.pdb").unwrap(),
        b"# GUI debug symbols\n# This is a placeholder - replace with actual build output\n"
    );
}

#[test]
fn test_readme_on_disk_matches_archive_entry() {
    let temp = TempDir::new().unwrap();
    let report = Packager::new(ReleaseConfig::default())
        .with_base_dir(temp.path())
        .run()
        .unwrap();

    let on_disk = std::fs::read(temp.path().join("release/README.txt")).unwrap();
    let in_archive = read_entry(&report.archive_path, "README.txt").unwrap();
    assert_eq!(on_disk, in_archive);
    assert_eq!(on_disk, DEFAULT_README.as_bytes());
}

#[test]
fn test_repeated_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    let packager = Packager::new(scenario_config()).with_base_dir(temp.path());

    let first = packager.run().unwrap();
    let bytes_first = std::fs::read(&first.archive_path).unwrap();
    let second = packager.run().unwrap();
    let bytes_second = std::fs::read(&second.archive_path).unwrap();

    assert_eq!(first.archive_path, second.archive_path);
    assert_eq!(bytes_first, bytes_second);
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[test]
fn test_existing_release_dir_with_unrelated_files() {
    let temp = TempDir::new().unwrap();
    temp.child("release").create_dir_all().unwrap();
    temp.child("release/notes.txt").write_str("keep me").unwrap();
    temp.child("release/README.txt")
        .write_str("stale readme that should be replaced")
        .unwrap();

    Packager::new(scenario_config())
        .with_base_dir(temp.path())
        .run()
        .unwrap();

    temp.child("release/notes.txt").assert("keep me");
    temp.child("release/README.txt").assert(DEFAULT_README);
}

#[test]
fn test_archive_failure_still_writes_readme() {
    let temp = TempDir::new().unwrap();
    // A directory squatting on the archive path makes publication fail.
    temp.child("Aether-Release-v1.0.zip").create_dir_all().unwrap();

    let err = Packager::new(scenario_config())
        .with_base_dir(temp.path())
        .run()
        .unwrap_err();

    assert_eq!(err.step(), Some(PackageStep::PublishArchive));
    assert!(err.to_string().contains("publishing archive"));
    temp.child("release/README.txt").assert(DEFAULT_README);
    assert!(temp.path().join("Aether-Release-v1.0.zip").is_dir());
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[test]
fn test_failed_run_keeps_previous_archive() {
    let temp = TempDir::new().unwrap();
    let good = Packager::new(scenario_config())
        .with_base_dir(temp.path())
        .run()
        .unwrap();
    let before = std::fs::read(&good.archive_path).unwrap();

    let broken = scenario_config()
        .with_source("B.bin", "build/missing.bin")
        .unwrap();
    let err = Packager::new(broken)
        .with_base_dir(temp.path())
        .run()
        .unwrap_err();

    assert_eq!(err.step(), Some(PackageStep::ReadSource));
    assert_eq!(std::fs::read(&good.archive_path).unwrap(), before);
    assert!(leftover_temp_files(temp.path()).is_empty());
}

#[test]
fn test_release_dir_blocked_by_file() {
    let temp = TempDir::new().unwrap();
    temp.child("release").write_str("not a directory").unwrap();

    let err = Packager::new(scenario_config())
        .with_base_dir(temp.path())
        .run()
        .unwrap_err();

    assert_eq!(err.step(), Some(PackageStep::CreateReleaseDir));
    assert_eq!(err.exit_code(), 1);
    assert!(!temp.path().join("Aether-Release-v1.0.zip").exists());
}

#[test]
fn test_invalid_manifest_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let manifest = ReleaseManifest::from_pairs([("README.txt", "collides with the readme")]).unwrap();

    let err = Packager::new(ReleaseConfig::with_manifest(manifest))
        .with_base_dir(temp.path())
        .run()
        .unwrap_err();

    assert!(err.is_config());
    assert!(!temp.path().join("release").exists());
    assert!(!temp.path().join("Aether-Release-v1.0.zip").exists());
}

#[test]
fn test_nested_entry_names_kept_literally() {
    let temp = TempDir::new().unwrap();
    let manifest =
        ReleaseManifest::from_pairs([("bin/AetherGUI.dll", "GUI"), ("symbols/AetherGUI.pdb", "PDB")])
            .unwrap();

    let report = Packager::new(ReleaseConfig::with_manifest(manifest))
        .with_base_dir(temp.path())
        .run()
        .unwrap();

    let names: Vec<_> = inspect_archive(&report.archive_path)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["README.txt", "bin/AetherGUI.dll", "symbols/AetherGUI.pdb"]);
}

#[test]
fn test_report_serializes_to_json() {
    let temp = TempDir::new().unwrap();
    let report = Packager::new(scenario_config())
        .with_base_dir(temp.path())
        .run()
        .unwrap();

    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["entry_count"], 3);
    assert_eq!(v["placeholders"], serde_json::json!(["A.bin", "B.bin"]));
    assert!(v["created_at"].as_str().unwrap().contains('T'));
}
