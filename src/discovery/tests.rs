use super::*;
use crate::config::SearchConfig;
use std::fs;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn linux_config(dirs: &[&Path], snap: bool) -> Config {
    let mut config = Config::default();
    config.search = SearchConfig {
        snap,
        linux_dirs: dirs.iter().map(|d| d.display().to_string()).collect(),
        ..SearchConfig::default()
    };
    config
}

fn paths(discovery: &Discovery) -> Vec<PathBuf> {
    discovery
        .installations()
        .map(|i| i.path().to_path_buf())
        .collect()
}

#[test]
fn test_windows_search_locations_order() {
    let folders = KnownFolders {
        local_app_data: Some(PathBuf::from("/local")),
        program_files: Some(PathBuf::from("/pf")),
        program_files_x86: Some(PathBuf::from("/pf86")),
        ..KnownFolders::default()
    };
    let config = Config::default();
    let locations = search_locations(HostPlatform::Windows, &config.editor, &config.search, &folders);
    let expected: Vec<SearchLocation> = [
        "/local/Programs/Antigravity/Antigravity.exe",
        "/local/Antigravity/Antigravity.exe",
        "/pf/Antigravity/Antigravity.exe",
        "/pf86/Antigravity/Antigravity.exe",
    ]
    .into_iter()
    .map(|p| SearchLocation::File(PathBuf::from(p)))
    .collect();
    assert_eq!(locations, expected);
}

#[test]
fn test_windows_program_files_optional() {
    let folders = KnownFolders {
        local_app_data: Some(PathBuf::from("/local")),
        program_files: Some(PathBuf::from("/pf")),
        ..KnownFolders::default()
    };
    let mut config = Config::default();
    config.search.program_files = false;
    let locations = search_locations(HostPlatform::Windows, &config.editor, &config.search, &folders);
    assert_eq!(locations.len(), 2);
}

#[test]
fn test_macos_search_locations() {
    let folders = KnownFolders {
        applications: Some(PathBuf::from("/Applications")),
        home: Some(PathBuf::from("/Users/dev")),
        ..KnownFolders::default()
    };
    let mut config = Config::default();
    let locations = search_locations(HostPlatform::MacOs, &config.editor, &config.search, &folders);
    assert_eq!(
        locations,
        vec![
            SearchLocation::Bundles { dir: PathBuf::from("/Applications"), prefix: "Antigravity".into() },
            SearchLocation::Bundles { dir: PathBuf::from("/Users/dev/Applications"), prefix: "Antigravity".into() },
        ]
    );

    config.search.user_applications = false;
    let locations = search_locations(HostPlatform::MacOs, &config.editor, &config.search, &folders);
    assert_eq!(locations.len(), 1);
}

#[test]
fn test_linux_search_locations() {
    let config = Config::default();
    let locations = search_locations(HostPlatform::Linux, &config.editor, &config.search, &KnownFolders::default());
    let expected: Vec<SearchLocation> = [
        "/usr/bin/antigravity",
        "/bin/antigravity",
        "/usr/local/bin/antigravity",
        "/snap/bin/antigravity",
    ]
    .into_iter()
    .map(|p| SearchLocation::File(PathBuf::from(p)))
    .collect();
    assert_eq!(locations, expected);
}

#[test]
fn test_linux_finds_existing_binaries_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let usr_bin = tmp.path().join("usr/bin");
    let local_bin = tmp.path().join("usr/local/bin");
    let missing = tmp.path().join("bin");
    touch(&usr_bin.join("antigravity"));
    touch(&local_bin.join("antigravity"));

    let config = linux_config(&[usr_bin.as_path(), missing.as_path(), local_bin.as_path()], false);
    let discovery = Discovery::with_environment(config, HostPlatform::Linux, KnownFolders::default());

    assert_eq!(
        paths(&discovery),
        vec![usr_bin.join("antigravity"), local_bin.join("antigravity")]
    );
    let first = discovery.installations().next().unwrap();
    assert_eq!(first.name(), "Antigravity");
    assert_eq!(first.version().to_string(), "1.0.0");
    assert!(!first.is_prerelease());
}

#[test]
fn test_overlapping_locations_are_deduplicated() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = tmp.path().join("bin");
    touch(&bin.join("antigravity"));

    let config = linux_config(&[bin.as_path(), bin.as_path()], false);
    let discovery = Discovery::with_environment(config, HostPlatform::Linux, KnownFolders::default());

    assert_eq!(discovery.candidates().count(), 1);
    assert_eq!(paths(&discovery), vec![bin.join("antigravity")]);
}

#[test]
fn test_windows_program_files_overlap_deduplicated() {
    let tmp = tempfile::tempdir().unwrap();
    let local = tmp.path().join("local");
    let exe = local.join("Programs/Antigravity/Antigravity.exe");
    touch(&exe);

    let folders = KnownFolders {
        local_app_data: Some(local.clone()),
        program_files: Some(local.join("Programs")),
        ..KnownFolders::default()
    };
    let discovery = Discovery::with_environment(Config::default(), HostPlatform::Windows, folders);
    assert_eq!(paths(&discovery), vec![exe]);
}

#[test]
fn test_macos_globs_bundles() {
    let tmp = tempfile::tempdir().unwrap();
    let apps = tmp.path().join("Applications");
    let home = tmp.path().join("home");
    for bundle in ["Antigravity.app", "Antigravity Insiders.app", "antigravity-lower.app", "Other.app"] {
        fs::create_dir_all(apps.join(bundle)).unwrap();
    }
    // A plain file is not a bundle
    touch(&apps.join("AntigravityStub.app"));
    fs::create_dir_all(home.join("Applications/Antigravity.app")).unwrap();

    let folders = KnownFolders {
        applications: Some(apps.clone()),
        home: Some(home.clone()),
        ..KnownFolders::default()
    };
    let discovery = Discovery::with_environment(Config::default(), HostPlatform::MacOs, folders);

    assert_eq!(
        paths(&discovery),
        vec![
            apps.join("Antigravity Insiders.app"),
            apps.join("Antigravity.app"),
            home.join("Applications/Antigravity.app"),
        ]
    );
}

#[test]
fn test_missing_bundle_directory_yields_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let folders = KnownFolders {
        applications: Some(tmp.path().join("does-not-exist")),
        ..KnownFolders::default()
    };
    let discovery = Discovery::with_environment(Config::default(), HostPlatform::MacOs, folders);
    assert_eq!(discovery.installations().count(), 0);
}

#[test]
fn test_is_candidate_rejects_missing_paths() {
    let editor = Config::default().editor;
    let tmp = tempfile::tempdir().unwrap();
    assert!(!is_candidate(HostPlatform::Linux, &editor, &tmp.path().join("antigravity")));
    assert!(!is_candidate(HostPlatform::Windows, &editor, &tmp.path().join("Antigravity.exe")));
    assert!(!is_candidate(HostPlatform::MacOs, &editor, &tmp.path().join("Antigravity.app")));
}

#[test]
fn test_is_candidate_requires_product_name() {
    let editor = Config::default().editor;
    let tmp = tempfile::tempdir().unwrap();

    let helper = tmp.path().join("antigravity-helper");
    let code = tmp.path().join("Code.exe");
    let no_ext = tmp.path().join("Antigravity");
    let code_app = tmp.path().join("Code.app");
    touch(&helper);
    touch(&code);
    touch(&no_ext);
    fs::create_dir_all(&code_app).unwrap();

    assert!(!is_candidate(HostPlatform::Linux, &editor, &helper));
    assert!(!is_candidate(HostPlatform::Windows, &editor, &code));
    assert!(!is_candidate(HostPlatform::Windows, &editor, &no_ext));
    assert!(!is_candidate(HostPlatform::MacOs, &editor, &code_app));
}

#[test]
fn test_is_candidate_matches_case_insensitively() {
    let editor = Config::default().editor;
    let tmp = tempfile::tempdir().unwrap();

    let exe = tmp.path().join("ANTIGRAVITY.EXE");
    let bin = tmp.path().join("AntiGravity");
    let app = tmp.path().join("antigravity.app");
    touch(&exe);
    touch(&bin);
    fs::create_dir_all(&app).unwrap();

    assert!(is_candidate(HostPlatform::Windows, &editor, &exe));
    assert!(is_candidate(HostPlatform::Linux, &editor, &bin));
    assert!(is_candidate(HostPlatform::MacOs, &editor, &app));
}

#[test]
fn test_is_candidate_checks_entry_kind() {
    let editor = Config::default().editor;
    let tmp = tempfile::tempdir().unwrap();

    let dir_bin = tmp.path().join("antigravity");
    let file_app = tmp.path().join("Antigravity.app");
    fs::create_dir_all(&dir_bin).unwrap();
    touch(&file_app);

    assert!(!is_candidate(HostPlatform::Linux, &editor, &dir_bin));
    assert!(!is_candidate(HostPlatform::MacOs, &editor, &file_app));
}

#[test]
fn test_try_discover_rejects_empty_input() {
    let discovery = Discovery::with_environment(Config::default(), HostPlatform::Linux, KnownFolders::default());
    assert!(discovery.try_discover(None).is_none());
    assert!(discovery.try_discover(Some(Path::new(""))).is_none());
}

#[test]
fn test_try_discover_validates_single_path() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = tmp.path().join("opt/antigravity");
    touch(&bin);
    let discovery = Discovery::with_environment(Config::default(), HostPlatform::Linux, KnownFolders::default());

    let found = discovery.try_discover(Some(&bin)).unwrap();
    assert_eq!(found.path(), bin);
    assert!(discovery.try_discover(Some(&tmp.path().join("opt/missing"))).is_none());
}

#[test]
fn test_resolve_prefers_remembered_path() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = tmp.path().join("bin");
    let custom = tmp.path().join("custom/antigravity");
    touch(&bin.join("antigravity"));
    touch(&custom);

    let mut config = linux_config(&[bin.as_path()], false);
    config.editor.path = Some(custom.display().to_string());
    let discovery = Discovery::with_environment(config, HostPlatform::Linux, KnownFolders::default());
    assert_eq!(discovery.resolve().unwrap().path(), custom);
}

#[test]
fn test_resolve_falls_back_to_scan() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = tmp.path().join("bin");
    touch(&bin.join("antigravity"));

    let mut config = linux_config(&[bin.as_path()], false);
    config.editor.path = Some(tmp.path().join("gone/antigravity").display().to_string());
    let discovery = Discovery::with_environment(config, HostPlatform::Linux, KnownFolders::default());
    assert_eq!(discovery.resolve().unwrap().path(), bin.join("antigravity"));
}

#[test]
fn test_resolve_none_when_nothing_installed() {
    let tmp = tempfile::tempdir().unwrap();
    let config = linux_config(&[tmp.path()], false);
    let discovery = Discovery::with_environment(config, HostPlatform::Linux, KnownFolders::default());
    assert!(discovery.resolve().is_none());
}
