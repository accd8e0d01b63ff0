//! Release settings

use std::env;
use std::path::PathBuf;

use super::error::{ReleaseError, ReleaseResult};

/// Token for the hosting API
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Repository as `owner/name`
pub const REPO_ENV: &str = "CMDKIT_RELEASE_REPO";
/// Directory receiving built binaries
pub const DIR_ENV: &str = "CMDKIT_RELEASE_DIR";

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_RELEASE_DIR: &str = "release";

/// Inputs shared by every release operation
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Repository as `owner/name`
    pub repo: String,
    pub release_dir: PathBuf,
    pub token: String,
    /// Cargo binary target to compile
    pub binary_name: String,
    pub api_base: String,
}

impl ReleaseConfig {
    pub fn new(
        repo: impl Into<String>,
        release_dir: impl Into<PathBuf>,
        token: impl Into<String>,
    ) -> ReleaseResult<Self> {
        let repo = repo.into();
        let binary_name = Self::repo_name(&repo)?.to_string();

        Ok(Self {
            repo,
            release_dir: release_dir.into(),
            token: token.into(),
            binary_name,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Read settings from the environment (after loading `.env` if present).
    ///
    /// `repo` and `release_dir` override the environment when given. A
    /// missing token is only reported once something needs it.
    pub fn from_env(repo: Option<String>, release_dir: Option<PathBuf>) -> ReleaseResult<Self> {
        dotenv::dotenv().ok();

        let token = env::var(TOKEN_ENV).unwrap_or_default();
        let repo = repo
            .or_else(|| env::var(REPO_ENV).ok())
            .ok_or_else(|| {
                ReleaseError::Config(format!("no repository given and {} is not set", REPO_ENV))
            })?;
        let release_dir = release_dir
            .or_else(|| env::var(DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RELEASE_DIR));

        Self::new(repo, release_dir, token)
    }

    /// The hosting token, or a configuration error when it is unset
    pub fn require_token(&self) -> ReleaseResult<&str> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(ReleaseError::Config(format!("{} is not set", TOKEN_ENV)));
        }
        Ok(token)
    }

    /// Override the binary to compile
    pub fn with_binary(mut self, binary_name: impl Into<String>) -> Self {
        self.binary_name = binary_name.into();
        self
    }

    /// Point at a different API host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn repo_name(repo: &str) -> ReleaseResult<&str> {
        match repo.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(name)
            }
            _ => Err(ReleaseError::Config(format!(
                "repository must look like owner/name, got '{}'",
                repo
            ))),
        }
    }
}
