//! Script cache paths.
//!
//! Every script URI owns one directory named after its content address. The
//! bundle and its sibling files (signature, encrypted or plain script) all
//! live in that directory.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::address::ContentAddress;
use super::root::StorageRoot;
use super::suffix::{ArtifactKind, POSTFIX_SCRIPT_BUNDLE, build_file_name};

/// Sub-folder holding per-script directories.
pub const FOLDER_SCRIPT: &str = "script";

/// File name of the bundle for `uri`: `<address>.lvbundle`.
pub fn build_script_bundle_file_name(uri: &str) -> String {
    build_file_name(
        ContentAddress::for_uri(uri).as_str(),
        POSTFIX_SCRIPT_BUNDLE,
    )
}

/// Path builder bound to a resolved [`StorageRoot`].
///
/// Folder paths end with a separator; file paths do not. All methods are
/// pure except [`ScriptPaths::exists_script_bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPaths {
    root: StorageRoot,
}

impl ScriptPaths {
    pub const fn new(root: StorageRoot) -> Self {
        Self { root }
    }

    pub const fn root(&self) -> &StorageRoot {
        &self.root
    }

    /// The resolved root directory followed by a separator.
    pub fn root_dir(&self) -> PathBuf {
        self.root.root_dir()
    }

    /// `<root>/<namespace>/`
    pub fn base_file_path(&self) -> PathBuf {
        let mut path = self.root.dir().to_path_buf();
        push_relative(&mut path, Path::new(self.root.namespace()));
        path.join("")
    }

    /// `<root>/<namespace>/<sub_folder>/`
    ///
    /// `sub_folder` is always appended below the base, even when it is
    /// absolute. Root, `.` and `..` components are dropped.
    pub fn folder_path(&self, sub_folder: impl AsRef<Path>) -> PathBuf {
        let mut path = self.base_file_path();
        push_relative(&mut path, sub_folder.as_ref());
        path.join("")
    }

    /// `<root>/<namespace>/<sub_folder>/<file_name>`
    ///
    /// Like [`ScriptPaths::folder_path`], `file_name` cannot escape the folder.
    pub fn file_path(&self, sub_folder: impl AsRef<Path>, file_name: &str) -> PathBuf {
        let mut path = self.folder_path(sub_folder);
        push_relative(&mut path, Path::new(file_name));
        path
    }

    /// `<root>/<namespace>/script/<address>/`
    pub fn script_bundle_folder_path(&self, uri: &str) -> PathBuf {
        self.folder_path(script_sub_folder(&ContentAddress::for_uri(uri)))
    }

    /// `<root>/<namespace>/script/<address>/<address>.lvbundle`
    ///
    /// Byte-identical for the same URI across calls and restarts.
    pub fn script_bundle_file_path(&self, uri: &str) -> PathBuf {
        self.script_artifact_path(uri, ArtifactKind::ScriptBundle)
    }

    /// Path of a file of `kind` inside the bundle's directory.
    pub fn script_artifact_path(&self, uri: &str, kind: ArtifactKind) -> PathBuf {
        let address = ContentAddress::for_uri(uri);
        self.file_path(
            script_sub_folder(&address),
            &build_file_name(address.as_str(), kind.suffix()),
        )
    }

    /// Whether a bundle for `uri` is present.
    ///
    /// Only the per-script directory is checked, not the bundle file: an
    /// empty directory counts as present. Empty or missing URIs return
    /// `false` without touching the disk, and I/O errors count as absent.
    ///
    /// The folder path keeps its trailing separator, so a regular file at
    /// that location fails with `ENOTDIR` and is reported as absent.
    pub fn exists_script_bundle<'a>(&self, uri: impl Into<Option<&'a str>>) -> bool {
        let Some(uri) = uri.into().filter(|uri| !uri.is_empty()) else {
            return false;
        };

        let folder = self.script_bundle_folder_path(uri);
        match fs::metadata(&folder) {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                tracing::debug!(
                    path = %folder.display(),
                    error = %e,
                    "Treating unreadable script folder as missing"
                );
                false
            }
        }
    }
}

/// Append only the normal components of `relative` to `path`.
fn push_relative(path: &mut PathBuf, relative: &Path) {
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            path.push(segment);
        }
    }
}

fn script_sub_folder(address: &ContentAddress) -> PathBuf {
    Path::new(FOLDER_SCRIPT).join(address.as_str())
}
