//! Integration tests for script cache path resolution.
//!
//! Drives the public API the way a host does: resolve a root once, then
//! share the path builder and query it repeatedly.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use luaview_core::paths::POSTFIX_SIGN;
use luaview_core::{
    ArtifactKind, ContentAddress, DEFAULT_NAMESPACE, FOLDER_SCRIPT, FsPrivateDirs, ScriptPaths,
    StorageEnvironment, StorageRoot, StorageTier, change_suffix, is_lua_script_bundle,
    is_lua_sign_file,
};
use tempfile::tempdir;

const URIS: [&str; 5] = [
    "http://x/y.lua",
    "http://x/y.lua?v=2",
    "https://x/y.lua",
    "http://x/Y.lua",
    "bundle://main",
];

#[test]
fn test_host_startup_with_private_dirs() {
    let temp = tempdir().unwrap();
    let env = StorageEnvironment::new("com.example.host", temp.path().join("cache"));
    let dirs = FsPrivateDirs::new(temp.path().join("data"));

    let paths = ScriptPaths::new(StorageRoot::resolve(&env, &dirs));

    assert_eq!(paths.root().tier(), StorageTier::Private);
    assert_eq!(paths.root().namespace(), DEFAULT_NAMESPACE);
    assert_eq!(
        paths.base_file_path(),
        temp.path().join("data").join("app_luaview").join("luaview")
    );
    assert!(
        paths
            .script_bundle_folder_path("http://x/y.lua")
            .starts_with(paths.base_file_path().join(FOLDER_SCRIPT))
    );
}

#[test]
fn test_distinct_uris_get_distinct_paths() {
    let paths = ScriptPaths::new(StorageRoot::new(
        "/data/luaview",
        DEFAULT_NAMESPACE,
        StorageTier::Private,
    ));

    let files: HashSet<PathBuf> = URIS
        .iter()
        .map(|uri| paths.script_bundle_file_path(uri))
        .collect();
    let folders: HashSet<PathBuf> = URIS
        .iter()
        .map(|uri| paths.script_bundle_folder_path(uri))
        .collect();

    assert_eq!(files.len(), URIS.len());
    assert_eq!(folders.len(), URIS.len());
}

#[test]
fn test_paths_are_deterministic_and_order_independent() {
    let env = StorageEnvironment::new("com.example.host", "/data/cache")
        .with_debug_build(true)
        .with_external_cache_dir("/sdcard/cache");

    let first = ScriptPaths::new(StorageRoot::resolve(&env, &None::<PathBuf>));
    let forward: Vec<PathBuf> = URIS
        .iter()
        .map(|uri| first.script_bundle_file_path(uri))
        .collect();

    // A second "process" resolving from the same inputs, queried in reverse
    let second = ScriptPaths::new(StorageRoot::resolve(&env, &None::<PathBuf>));
    let mut backward: Vec<PathBuf> = URIS
        .iter()
        .rev()
        .map(|uri| second.script_bundle_file_path(uri))
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
    for path in &forward {
        assert!(path.to_string_lossy().starts_with("/sdcard/cache/com.example.host/script/"));
    }
}

#[test]
fn test_shared_across_threads() {
    let paths = Arc::new(ScriptPaths::new(StorageRoot::new(
        "/data/luaview",
        DEFAULT_NAMESPACE,
        StorageTier::Fallback,
    )));
    let expected = paths.script_bundle_file_path("http://x/y.lua");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let paths = Arc::clone(&paths);
            thread::spawn(move || paths.script_bundle_file_path("http://x/y.lua"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_cached_folder_contents_are_classified() {
    let temp = tempdir().unwrap();
    let paths = ScriptPaths::new(StorageRoot::new(
        temp.path(),
        DEFAULT_NAMESPACE,
        StorageTier::Private,
    ));
    let uri = "https://cdn.example.com/app/main.lvbundle";

    assert!(!paths.exists_script_bundle(uri));

    let bundle = paths.script_bundle_file_path(uri);
    fs::create_dir_all(paths.script_bundle_folder_path(uri)).unwrap();
    fs::write(&bundle, b"bundle").unwrap();
    fs::write(paths.script_artifact_path(uri, ArtifactKind::Signature), b"sig").unwrap();
    assert!(paths.exists_script_bundle(uri));

    let mut kinds: Vec<ArtifactKind> = fs::read_dir(paths.script_bundle_folder_path(uri))
        .unwrap()
        .filter_map(|entry| {
            let name = entry.unwrap().file_name().into_string().unwrap();
            ArtifactKind::classify(&name)
        })
        .collect();
    kinds.sort_by_key(|kind| kind.suffix());
    assert_eq!(kinds, vec![ArtifactKind::ScriptBundle, ArtifactKind::Signature]);

    // The signature sits next to the bundle under the swapped suffix
    let bundle_name = bundle.file_name().unwrap().to_str().unwrap();
    assert!(is_lua_script_bundle(bundle_name));
    let sign_name = change_suffix(bundle_name, POSTFIX_SIGN);
    assert!(is_lua_sign_file(&sign_name));
    assert!(bundle.with_file_name(&sign_name).is_file());

    // Folder names parse back into the address they came from
    let folder_name = paths
        .script_bundle_folder_path(uri)
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .parse::<ContentAddress>()
        .unwrap();
    assert_eq!(folder_name, ContentAddress::for_uri(uri));
}
