//! Source handles and revocable object URLs.
//!
//! An uploaded file is exposed to the media element through a transient
//! `blob:` URL created in an [`ObjectUrlRegistry`]. The URL is owned by an
//! [`ObjectUrl`] guard and revoked when the guard drops, so replacing a
//! source or tearing down the session always releases it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// URL prefix for transient object URLs.
const BLOB_PREFIX: &str = "blob:vtb/";

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    live: BTreeMap<u64, PathBuf>,
}

/// Session-local table of live object URLs.
///
/// Cloning shares the same table. Single-threaded by construction.
#[derive(Debug, Clone, Default)]
pub struct ObjectUrlRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new object URL referring to `path`.
    pub fn create(&self, path: &Path) -> ObjectUrl {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.live.insert(id, path.to_path_buf());
        let url = format!("{}{}", BLOB_PREFIX, id);
        tracing::debug!(%url, path = %path.display(), "Created object URL");
        ObjectUrl {
            id,
            url,
            registry: self.clone(),
        }
    }

    /// Path behind a live URL.
    pub fn resolve(&self, url: &str) -> Option<PathBuf> {
        let id: u64 = url.strip_prefix(BLOB_PREFIX)?.parse().ok()?;
        self.inner.borrow().live.get(&id).cloned()
    }

    /// Number of URLs not yet revoked.
    pub fn live_count(&self) -> usize {
        self.inner.borrow().live.len()
    }

    fn revoke(&self, id: u64) {
        if self.inner.borrow_mut().live.remove(&id).is_some() {
            tracing::debug!(url = %format!("{}{}", BLOB_PREFIX, id), "Revoked object URL");
        }
    }
}

/// A live object URL. Revoked on drop.
pub struct ObjectUrl {
    id: u64,
    url: String,
    registry: ObjectUrlRegistry,
}

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.registry.revoke(self.id);
    }
}

/// Opaque reference to playable media.
#[derive(Debug)]
pub enum SourceHandle {
    /// A user-provided file, reachable through a transient URL
    Upload {
        url: ObjectUrl,
        path: PathBuf,
        content_type: &'static str,
    },
    /// The fixed, well-known sample reference
    Sample { url: String },
}

impl SourceHandle {
    pub fn url(&self) -> &str {
        match self {
            Self::Upload { url, .. } => url.as_str(),
            Self::Sample { url } => url,
        }
    }

    /// Filesystem path for uploaded files.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Upload { path, .. } => Some(path),
            Self::Sample { .. } => None,
        }
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }

    /// Short name for the player bar.
    pub fn label(&self) -> String {
        match self {
            Self::Upload { path, .. } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Sample { .. } => "Sample video".to_string(),
        }
    }
}
