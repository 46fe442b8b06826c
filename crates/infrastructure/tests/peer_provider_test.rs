use erlide_application::ports::PeerProvider;
use erlide_domain::config::{ProbeConfig, RuntimeConfig};
use erlide_infrastructure::erlang::ConfiguredPeerProvider;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

fn erl_name() -> &'static str {
    if cfg!(windows) {
        "erl.exe"
    } else {
        "erl"
    }
}

fn touch_erl(bin: &Path) -> PathBuf {
    std::fs::create_dir_all(bin).unwrap();
    let erl = bin.join(erl_name());
    std::fs::write(&erl, "").unwrap();
    erl
}

fn provider(runtime: RuntimeConfig, search_path: Option<OsString>) -> ConfiguredPeerProvider {
    ConfiguredPeerProvider::new(runtime, ProbeConfig::default()).with_search_path(search_path)
}

#[test]
fn test_explicit_erl_path_wins() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = touch_erl(&dir.path().join("explicit"));
    let home = dir.path().join("home");
    touch_erl(&home.join("bin"));

    let runtime = RuntimeConfig {
        erl_path: Some(explicit.to_string_lossy().into_owned()),
        home: Some(home.to_string_lossy().into_owned()),
    };

    assert_eq!(provider(runtime, None).locate_erl(), Some(explicit));
}

#[test]
fn test_missing_explicit_erl_path_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let on_path = dir.path().join("path-bin");
    touch_erl(&on_path);

    let runtime = RuntimeConfig {
        erl_path: Some(dir.path().join("missing").to_string_lossy().into_owned()),
        home: None,
    };
    let provider = provider(runtime, Some(on_path.into_os_string()));

    assert_eq!(provider.locate_erl(), None);
    assert!(provider.default_peer().is_none());
}

#[test]
fn test_runtime_home_is_searched_under_bin() {
    let dir = tempfile::tempdir().unwrap();
    let erl = touch_erl(&dir.path().join("bin"));

    let runtime = RuntimeConfig {
        erl_path: None,
        home: Some(dir.path().to_string_lossy().into_owned()),
    };

    assert_eq!(provider(runtime, None).locate_erl(), Some(erl));
}

#[test]
fn test_search_path_is_used_without_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty");
    std::fs::create_dir_all(&empty).unwrap();
    let erl = touch_erl(&dir.path().join("otp").join("bin"));

    let search = std::env::join_paths([empty, dir.path().join("otp").join("bin")]).unwrap();
    let provider = provider(RuntimeConfig::default(), Some(search));

    assert_eq!(provider.locate_erl(), Some(erl));
    assert!(provider.default_peer().is_some());
}

#[test]
fn test_nothing_configured_and_empty_search_path() {
    let provider = provider(RuntimeConfig::default(), None);

    assert_eq!(provider.locate_erl(), None);
    assert!(provider.default_peer().is_none());
}
