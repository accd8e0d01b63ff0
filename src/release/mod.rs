//! Release tooling.
//!
//! Cross-compiles the application for a fixed set of platforms and
//! publishes the binaries as a tagged release on the code host.
//!
//! # Example
//!
//! ```no_run
//! use cmdkit::release::{new_release, CargoCompiler, GithubApi, ReleaseConfig};
//!
//! # async fn run() -> cmdkit::release::ReleaseResult<()> {
//! let config = ReleaseConfig::from_env(None, None)?;
//! let api = GithubApi::new(&config)?;
//! new_release(&api, &CargoCompiler::default(), &config, "v1.2.0").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod build;
pub mod config;
pub mod error;
pub mod github;
pub mod ops;
pub mod tag;

pub use api::{NewRelease, ReleaseApi, RemoteRelease};
pub use build::{build_all, CargoCompiler, Compiler, Target, TARGETS};
pub use config::ReleaseConfig;
pub use error::{ReleaseError, ReleaseResult};
pub use github::GithubApi;
pub use ops::{build_release, new_release, remove_release};
pub use tag::validate_tag;
