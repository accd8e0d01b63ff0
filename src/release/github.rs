//! GitHub REST implementation of [`ReleaseApi`].

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::path::Path;

use super::api::{NewRelease, ReleaseApi, RemoteRelease};
use super::config::ReleaseConfig;
use super::error::{ReleaseError, ReleaseResult};

const USER_AGENT: &str = concat!("cmdkit-release/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Deserialize)]
struct TagResponse {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: String,
}

/// Client for the GitHub releases API.
pub struct GithubApi {
    http_client: reqwest::Client,
    api_base: String,
    repo: String,
    token: String,
}

impl GithubApi {
    /// Create a client for `config.repo`; fails when no token is configured
    pub fn new(config: &ReleaseConfig) -> ReleaseResult<Self> {
        Ok(Self {
            http_client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            repo: config.repo.clone(),
            token: config.require_token()?.to_string(),
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}", self.api_base, self.repo, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
    }

    /// Turn a non-success response into a classified error
    async fn failure(response: Response, tag: &str) -> ReleaseError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        classify(status, &body, tag)
    }
}

/// Map an error status and body from the API onto [`ReleaseError`].
pub fn classify(status: StatusCode, body: &str, tag: &str) -> ReleaseError {
    let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();

    match status {
        StatusCode::NOT_FOUND => ReleaseError::NotFound {
            tag: tag.to_string(),
        },
        StatusCode::UNPROCESSABLE_ENTITY
            if parsed.errors.iter().any(|e| e.code == "already_exists") =>
        {
            ReleaseError::AlreadyExists {
                tag: tag.to_string(),
            }
        }
        _ => ReleaseError::Api {
            status: status.as_u16(),
            message: if parsed.message.is_empty() {
                body.to_string()
            } else {
                parsed.message
            },
        },
    }
}

/// Strip the `{?name,label}` template off an upload URL
fn upload_endpoint(upload_url: &str) -> &str {
    upload_url.split('{').next().unwrap_or(upload_url)
}

#[async_trait]
impl ReleaseApi for GithubApi {
    async fn list_tags(&self) -> ReleaseResult<Vec<String>> {
        let mut tags = Vec::new();
        let mut page = 1u32;

        loop {
            let page_param = page.to_string();
            let response = self
                .authorized(self.http_client.get(self.repo_url("tags")))
                .query(&[("per_page", "100"), ("page", page_param.as_str())])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(ReleaseError::Api {
                    status: status.as_u16(),
                    message: response.text().await.unwrap_or_default(),
                });
            }

            let batch: Vec<TagResponse> = response.json().await?;
            let done = batch.len() < 100;
            tags.extend(batch.into_iter().map(|t| t.name));
            if done {
                break;
            }
            page += 1;
        }

        tracing::debug!(repo = %self.repo, count = tags.len(), "listed tags");
        Ok(tags)
    }

    async fn create_release(&self, release: &NewRelease) -> ReleaseResult<RemoteRelease> {
        let response = self
            .authorized(self.http_client.post(self.repo_url("releases")))
            .json(release)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response, &release.tag_name).await);
        }

        Ok(response.json().await?)
    }

    async fn upload_asset(&self, release: &RemoteRelease, path: &Path) -> ReleaseResult<()> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ReleaseError::MissingArtifact {
                path: path.to_path_buf(),
            })?;
        let content = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReleaseError::MissingArtifact {
                path: path.to_path_buf(),
            },
            _ => ReleaseError::Io(e),
        })?;

        let response = self
            .authorized(self.http_client.post(upload_endpoint(&release.upload_url)))
            .query(&[("name", file_name.as_str())])
            .header("Content-Type", "application/octet-stream")
            .body(content)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response, &release.tag_name).await);
        }

        tracing::info!(tag = %release.tag_name, asset = %file_name, "uploaded asset");
        Ok(())
    }

    async fn find_release(&self, tag: &str) -> ReleaseResult<RemoteRelease> {
        let response = self
            .authorized(
                self.http_client
                    .get(self.repo_url(&format!("releases/tags/{}", tag))),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response, tag).await);
        }

        Ok(response.json().await?)
    }

    async fn delete_release(&self, release: &RemoteRelease) -> ReleaseResult<()> {
        let response = self
            .authorized(
                self.http_client
                    .delete(self.repo_url(&format!("releases/{}", release.id))),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response, &release.tag_name).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_already_exists() {
        let body = r#"{"message":"Validation Failed",
            "errors":[{"resource":"Release","code":"already_exists","field":"tag_name"}]}"#;
        let err = classify(StatusCode::UNPROCESSABLE_ENTITY, body, "v1.0.0");
        assert!(matches!(err, ReleaseError::AlreadyExists { ref tag } if tag == "v1.0.0"));
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify(StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#, "v2.0.0");
        assert!(matches!(err, ReleaseError::NotFound { .. }));
    }

    #[test]
    fn test_classify_other_validation_is_unclassified() {
        let body = r#"{"message":"Validation Failed","errors":[{"code":"invalid"}]}"#;
        match classify(StatusCode::UNPROCESSABLE_ENTITY, body, "v1.0.0") {
            ReleaseError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Validation Failed");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_classify_non_json_body() {
        match classify(StatusCode::BAD_GATEWAY, "upstream down", "v1.0.0") {
            ReleaseError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_upload_endpoint_strips_template() {
        assert_eq!(
            upload_endpoint("https://uploads.github.com/repos/o/r/releases/1/assets{?name,label}"),
            "https://uploads.github.com/repos/o/r/releases/1/assets"
        );
        assert_eq!(upload_endpoint("http://plain/assets"), "http://plain/assets");
    }

    #[test]
    fn test_new_requires_token() {
        let config = ReleaseConfig::new("harry/pizza", "out", "").unwrap();
        assert!(matches!(GithubApi::new(&config), Err(ReleaseError::Config(_))));
    }

    #[test]
    fn test_repo_url() {
        let config = ReleaseConfig::new("harry/pizza", "out", "t")
            .unwrap()
            .with_api_base("http://localhost:1234");
        let api = GithubApi::new(&config).unwrap();
        assert_eq!(
            api.repo_url("releases/tags/v1.0.0"),
            "http://localhost:1234/repos/harry/pizza/releases/tags/v1.0.0"
        );
    }
}
