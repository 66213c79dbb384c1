//! Storage root selection.
//!
//! Picks one base directory from the candidate tiers according to build mode
//! and external storage availability. Resolution never fails: when every
//! candidate is unusable the fallback cache directory is used verbatim, even
//! if it does not exist yet.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Namespace segment used for every tier except external storage.
pub const DEFAULT_NAMESPACE: &str = "luaview";

/// Factory for app-private, sandboxed directories.
///
/// Returns `None` when the directory cannot be obtained.
#[cfg_attr(test, mockall::automock)]
pub trait PrivateDirProvider {
    /// Obtain the private directory scoped to `namespace`.
    fn private_dir(&self, namespace: &str) -> Option<PathBuf>;
}

/// A private directory that was already computed by the host (or is absent).
impl PrivateDirProvider for Option<PathBuf> {
    fn private_dir(&self, _namespace: &str) -> Option<PathBuf> {
        self.clone()
    }
}

/// Filesystem-backed private directories under a fixed base.
///
/// `private_dir("luaview")` creates and returns `<base>/app_luaview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsPrivateDirs {
    base: PathBuf,
}

impl FsPrivateDirs {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl PrivateDirProvider for FsPrivateDirs {
    fn private_dir(&self, namespace: &str) -> Option<PathBuf> {
        let dir = self.base.join(format!("app_{namespace}"));
        match fs::create_dir_all(&dir) {
            Ok(()) => Some(dir),
            Err(e) => {
                tracing::warn!(
                    path = %dir.display(),
                    error = %e,
                    "Cannot create private script directory"
                );
                None
            }
        }
    }
}

/// Host-provided inputs for storage root selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEnvironment {
    /// Whether the host runs a debug build.
    #[serde(default)]
    pub debug_build: bool,

    /// Whether removable/external storage is currently mounted.
    #[serde(default)]
    pub external_storage_mounted: bool,

    /// Cache directory on external storage, if the host has one.
    #[serde(default)]
    pub external_cache_dir: Option<PathBuf>,

    /// Last-resort cache directory. Used verbatim.
    pub fallback_cache_dir: PathBuf,

    /// The real application identifier, used as namespace on external storage.
    pub package_name: String,
}

impl StorageEnvironment {
    /// Release build without external storage.
    pub fn new(package_name: impl Into<String>, fallback_cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            debug_build: false,
            external_storage_mounted: false,
            external_cache_dir: None,
            fallback_cache_dir: fallback_cache_dir.into(),
            package_name: package_name.into(),
        }
    }

    #[must_use]
    pub fn with_debug_build(mut self, debug_build: bool) -> Self {
        self.debug_build = debug_build;
        self
    }

    /// Mark external storage as mounted with the given cache directory.
    #[must_use]
    pub fn with_external_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.external_storage_mounted = true;
        self.external_cache_dir = Some(dir.into());
        self
    }
}

/// Which candidate tier a root was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    /// External storage cache directory (debug builds only).
    External,
    /// App-private sandboxed directory.
    Private,
    /// Generic fallback cache directory.
    Fallback,
}

/// The resolved storage root: a directory plus a namespace segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRoot {
    dir: PathBuf,
    namespace: String,
    tier: StorageTier,
}

impl StorageRoot {
    pub fn new(dir: impl Into<PathBuf>, namespace: impl Into<String>, tier: StorageTier) -> Self {
        Self {
            dir: dir.into(),
            namespace: namespace.into(),
            tier,
        }
    }

    /// Select a root for `env`.
    ///
    /// Resolution order:
    /// 1. Debug build with external storage mounted: external cache dir,
    ///    namespaced by the real package name
    /// 2. Private directory for [`DEFAULT_NAMESPACE`]
    /// 3. Fallback cache dir, namespaced by [`DEFAULT_NAMESPACE`]
    pub fn resolve<P>(env: &StorageEnvironment, private_dirs: &P) -> Self
    where
        P: PrivateDirProvider + ?Sized,
    {
        let root = if env.debug_build && env.external_storage_mounted {
            if let Some(dir) = &env.external_cache_dir {
                Self::new(dir.clone(), env.package_name.clone(), StorageTier::External)
            } else {
                tracing::warn!("External storage is mounted but has no cache directory");
                Self::internal(env, private_dirs)
            }
        } else {
            Self::internal(env, private_dirs)
        };

        tracing::info!(
            tier = ?root.tier,
            root = %root.dir.display(),
            namespace = %root.namespace,
            "Resolved script storage root"
        );
        root
    }

    fn internal<P>(env: &StorageEnvironment, private_dirs: &P) -> Self
    where
        P: PrivateDirProvider + ?Sized,
    {
        private_dirs.private_dir(DEFAULT_NAMESPACE).map_or_else(
            || {
                Self::new(
                    env.fallback_cache_dir.clone(),
                    DEFAULT_NAMESPACE,
                    StorageTier::Fallback,
                )
            },
            |dir| Self::new(dir, DEFAULT_NAMESPACE, StorageTier::Private),
        )
    }

    /// The selected directory, as given.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The selected directory followed by a separator.
    pub fn root_dir(&self) -> PathBuf {
        self.dir.join("")
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub const fn tier(&self) -> StorageTier {
        self.tier
    }
}

impl fmt::Display for StorageRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root = {}", self.root_dir().display())?;
        writeln!(f, "namespace = {}", self.namespace)?;
        write!(f, "tier = {:?}", self.tier)
    }
}
