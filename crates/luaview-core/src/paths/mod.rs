//! Cache path resolution for downloaded LuaView scripts.
//!
//! This module provides the canonical on-disk layout for script artifacts:
//! - Storage root selection (external, private sandbox, fallback cache)
//! - Content addresses derived from script URIs
//! - Per-resource bundle folders and file paths
//! - Suffix-based classification of artifact files
//!
//! # Layout
//!
//! ```text
//! <root>/<namespace>/script/<address>/<address>.lvbundle
//! ```
//!
//! # Design
//!
//! - The resolved root is an explicit value (`ScriptPaths`), never global state
//! - Path computation is pure and infallible; only existence checks touch the disk
//! - The hash primitive is kept private in `address`

mod address;
mod error;
mod root;
mod script;
mod suffix;

// Error type
pub use error::PathError;

// Content addressing
pub use address::{ADDRESS_LEN, ContentAddress};

// Storage root selection
pub use root::{
    DEFAULT_NAMESPACE, FsPrivateDirs, PrivateDirProvider, StorageEnvironment, StorageRoot,
    StorageTier,
};

// Script cache paths
pub use script::{FOLDER_SCRIPT, ScriptPaths, build_script_bundle_file_name};

// Suffix taxonomy
pub use suffix::{
    ArtifactKind, POSTFIX_APK, POSTFIX_DEFAULT, POSTFIX_JPG, POSTFIX_LOG, POSTFIX_LUA,
    POSTFIX_LV, POSTFIX_PNG, POSTFIX_SCRIPT_BUNDLE, POSTFIX_SIGN, build_file_name,
    change_suffix, is_lua_encrypt_script, is_lua_script, is_lua_script_bundle, is_lua_sign_file,
};
