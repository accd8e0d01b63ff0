//! Release workflows: build, publish and remove.

use std::path::PathBuf;

use super::api::{NewRelease, ReleaseApi, RemoteRelease};
use super::build::{build_all, Compiler};
use super::config::ReleaseConfig;
use super::error::ReleaseResult;
use super::tag::{is_prerelease, validate_tag};

/// Compile all targets into the release directory
pub async fn build_release<C: Compiler + ?Sized>(
    compiler: &C,
    config: &ReleaseConfig,
) -> ReleaseResult<Vec<PathBuf>> {
    build_all(compiler, config).await
}

/// Validate `tag`, build every target, publish a release and attach the
/// binaries.
///
/// Nothing is built or published when the tag is rejected.
pub async fn new_release<A, C>(
    api: &A,
    compiler: &C,
    config: &ReleaseConfig,
    tag: &str,
) -> ReleaseResult<RemoteRelease>
where
    A: ReleaseApi + ?Sized,
    C: Compiler + ?Sized,
{
    let existing = api.list_tags().await?;
    validate_tag(tag, &existing)?;

    let artifacts = build_all(compiler, config).await?;

    let release = api
        .create_release(&NewRelease {
            tag_name: tag.to_string(),
            name: format!("{} {}", config.binary_name, tag),
            body: format!("Release {}", tag),
            draft: false,
            prerelease: is_prerelease(tag),
        })
        .await?;
    tracing::info!(tag, id = release.id, "release created");

    for artifact in &artifacts {
        api.upload_asset(&release, artifact).await?;
    }

    Ok(release)
}

/// Delete the release published for `tag`
pub async fn remove_release<A: ReleaseApi + ?Sized>(api: &A, tag: &str) -> ReleaseResult<()> {
    let release = api.find_release(tag).await?;
    api.delete_release(&release).await?;
    tracing::info!(tag, id = release.id, "release removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::build::Target;
    use crate::release::error::ReleaseError;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct MemoryApi {
        tags: Vec<String>,
        releases: Mutex<Vec<RemoteRelease>>,
        uploads: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ReleaseApi for MemoryApi {
        async fn list_tags(&self) -> ReleaseResult<Vec<String>> {
            Ok(self.tags.clone())
        }

        async fn create_release(&self, release: &NewRelease) -> ReleaseResult<RemoteRelease> {
            let mut releases = self.releases.lock().unwrap();
            if releases.iter().any(|r| r.tag_name == release.tag_name) {
                return Err(ReleaseError::AlreadyExists {
                    tag: release.tag_name.clone(),
                });
            }
            let created = RemoteRelease {
                id: releases.len() as u64 + 1,
                tag_name: release.tag_name.clone(),
                name: Some(release.name.clone()),
                upload_url: String::new(),
                html_url: String::new(),
            };
            releases.push(created.clone());
            Ok(created)
        }

        async fn upload_asset(&self, _release: &RemoteRelease, path: &Path) -> ReleaseResult<()> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            self.uploads.lock().unwrap().push(name);
            Ok(())
        }

        async fn find_release(&self, tag: &str) -> ReleaseResult<RemoteRelease> {
            self.releases
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.tag_name == tag)
                .cloned()
                .ok_or_else(|| ReleaseError::NotFound {
                    tag: tag.to_string(),
                })
        }

        async fn delete_release(&self, release: &RemoteRelease) -> ReleaseResult<()> {
            self.releases.lock().unwrap().retain(|r| r.id != release.id);
            Ok(())
        }
    }

    struct TouchCompiler(PathBuf);

    #[async_trait]
    impl Compiler for TouchCompiler {
        async fn compile(
            &self,
            target: &Target,
            _config: &ReleaseConfig,
        ) -> ReleaseResult<PathBuf> {
            let path = self.0.join(target.triple);
            std::fs::write(&path, b"bin")?;
            Ok(path)
        }
    }

    #[tokio::test]
    async fn test_new_release_uploads_every_target() {
        let work = tempdir().unwrap();
        let config = ReleaseConfig::new("harry/pizza", work.path().join("release"), "t").unwrap();
        let api = MemoryApi::default();
        let compiler = TouchCompiler(work.path().to_path_buf());

        let release = new_release(&api, &compiler, &config, "v1.0.0").await.unwrap();

        assert_eq!(release.tag_name, "v1.0.0");
        assert_eq!(release.name.as_deref(), Some("pizza v1.0.0"));
        assert_eq!(
            *api.uploads.lock().unwrap(),
            vec!["pizza-linux-amd64", "pizza-darwin-amd64", "pizza-windows-amd64.exe"]
        );
    }

    #[tokio::test]
    async fn test_new_release_rejects_existing_tag_before_building() {
        let work = tempdir().unwrap();
        let release_dir = work.path().join("release");
        let config = ReleaseConfig::new("harry/pizza", &release_dir, "t").unwrap();
        let api = MemoryApi {
            tags: vec!["v1.0.0".to_string()],
            ..Default::default()
        };
        let compiler = TouchCompiler(work.path().to_path_buf());

        let err = new_release(&api, &compiler, &config, "v1.0.0").await.unwrap_err();

        assert!(matches!(err, ReleaseError::InvalidTag { .. }));
        assert!(!release_dir.exists());
        assert!(api.releases.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_release() {
        let api = MemoryApi::default();
        api.create_release(&NewRelease {
            tag_name: "v0.2.0".to_string(),
            name: "pizza v0.2.0".to_string(),
            body: String::new(),
            draft: false,
            prerelease: false,
        })
        .await
        .unwrap();

        remove_release(&api, "v0.2.0").await.unwrap();
        assert!(api.releases.lock().unwrap().is_empty());

        let err = remove_release(&api, "v0.2.0").await.unwrap_err();
        assert!(matches!(err, ReleaseError::NotFound { .. }));
        assert!(err.user_message().is_some());
    }
}
