//! The hosting API capability used by release operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::ReleaseResult;

/// A published release as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRelease {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Templated upload endpoint, e.g. `https://uploads.../assets{?name,label}`
    #[serde(default)]
    pub upload_url: String,
    #[serde(default)]
    pub html_url: String,
}

/// Request body for creating a release
#[derive(Debug, Clone, Serialize)]
pub struct NewRelease {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

/// Operations release tooling needs from a code host.
///
/// Implementations map "release already exists" responses to
/// [`ReleaseError::AlreadyExists`](super::ReleaseError::AlreadyExists) and
/// "not found" responses to [`ReleaseError::NotFound`](super::ReleaseError::NotFound).
#[async_trait]
pub trait ReleaseApi: Send + Sync {
    /// Names of every tag in the repository
    async fn list_tags(&self) -> ReleaseResult<Vec<String>>;

    async fn create_release(&self, release: &NewRelease) -> ReleaseResult<RemoteRelease>;

    /// Attach a local file to `release`
    async fn upload_asset(&self, release: &RemoteRelease, path: &Path) -> ReleaseResult<()>;

    async fn find_release(&self, tag: &str) -> ReleaseResult<RemoteRelease>;

    async fn delete_release(&self, release: &RemoteRelease) -> ReleaseResult<()>;
}
