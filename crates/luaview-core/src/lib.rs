#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    ArtifactKind, ContentAddress, DEFAULT_NAMESPACE, FOLDER_SCRIPT, FsPrivateDirs, PathError,
    PrivateDirProvider, ScriptPaths, StorageEnvironment, StorageRoot, StorageTier,
    build_file_name, build_script_bundle_file_name, change_suffix, is_lua_encrypt_script,
    is_lua_script, is_lua_script_bundle, is_lua_sign_file,
};

// Dev-dependencies only referenced from some test modules
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
