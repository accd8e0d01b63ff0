//! Cross-compilation of release binaries.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use super::config::ReleaseConfig;
use super::error::{ReleaseError, ReleaseResult};

/// A platform a release ships binaries for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub os: &'static str,
    pub arch: &'static str,
    /// Rust target triple
    pub triple: &'static str,
}

/// Every platform built for a release
pub const TARGETS: &[Target] = &[
    Target {
        os: "linux",
        arch: "amd64",
        triple: "x86_64-unknown-linux-gnu",
    },
    Target {
        os: "darwin",
        arch: "amd64",
        triple: "x86_64-apple-darwin",
    },
    Target {
        os: "windows",
        arch: "amd64",
        triple: "x86_64-pc-windows-gnu",
    },
];

impl Target {
    pub fn exe_suffix(&self) -> &'static str {
        if self.os == "windows" {
            ".exe"
        } else {
            ""
        }
    }

    /// File name of the published asset, e.g. `pizza-linux-amd64`
    pub fn artifact_name(&self, binary: &str) -> String {
        format!("{}-{}-{}{}", binary, self.os, self.arch, self.exe_suffix())
    }

    /// Where cargo leaves the binary for this target
    pub fn cargo_output(&self, target_dir: &Path, binary: &str) -> PathBuf {
        target_dir
            .join(self.triple)
            .join("release")
            .join(format!("{}{}", binary, self.exe_suffix()))
    }
}

/// Produces a binary for one target.
#[async_trait]
pub trait Compiler: Send + Sync {
    /// Compile `config.binary_name` for `target`, returning the built file
    async fn compile(&self, target: &Target, config: &ReleaseConfig) -> ReleaseResult<PathBuf>;
}

/// Compiles with `cargo build --release --target <triple>`.
#[derive(Debug, Clone)]
pub struct CargoCompiler {
    target_dir: PathBuf,
}

impl CargoCompiler {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }
}

impl Default for CargoCompiler {
    fn default() -> Self {
        Self::new(std::env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "target".to_string()))
    }
}

#[async_trait]
impl Compiler for CargoCompiler {
    async fn compile(&self, target: &Target, config: &ReleaseConfig) -> ReleaseResult<PathBuf> {
        tracing::info!(target = target.triple, binary = %config.binary_name, "compiling");

        let output = Command::new("cargo")
            .args(["build", "--release", "--target", target.triple, "--bin"])
            .arg(&config.binary_name)
            .arg("--target-dir")
            .arg(&self.target_dir)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReleaseError::Build {
                target: target.triple.to_string(),
                message: stderr.lines().last().unwrap_or("cargo build failed").to_string(),
            });
        }

        let built = target.cargo_output(&self.target_dir, &config.binary_name);
        if !built.exists() {
            return Err(ReleaseError::MissingArtifact { path: built });
        }
        Ok(built)
    }
}

/// Build every target and copy the binaries into `config.release_dir`.
///
/// Returns the artifact paths in [`TARGETS`] order.
pub async fn build_all<C: Compiler + ?Sized>(
    compiler: &C,
    config: &ReleaseConfig,
) -> ReleaseResult<Vec<PathBuf>> {
    tokio::fs::create_dir_all(&config.release_dir).await?;

    let mut artifacts = Vec::with_capacity(TARGETS.len());
    for target in TARGETS {
        let built = compiler.compile(target, config).await?;
        let artifact = config
            .release_dir
            .join(target.artifact_name(&config.binary_name));
        tokio::fs::copy(&built, &artifact).await?;
        tracing::debug!(artifact = %artifact.display(), "artifact ready");
        artifacts.push(artifact);
    }

    Ok(artifacts)
}
