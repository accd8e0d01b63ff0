//! Persistent cache for command-line applications.
//!
//! Commands receive the cache through the [`DataBase`] capability and must
//! treat an absent handle as "persistence unavailable".
//!
//! # Example
//!
//! ```no_run
//! use cmdkit::cache::{DataBase, FileDataBase};
//!
//! let db = FileDataBase::open("/tmp/cmdkit-cache.json").unwrap();
//! db.put("store", "4336").unwrap();
//! assert_eq!(db.get("store").unwrap().as_deref(), Some("4336"));
//! ```

pub mod atomic;
pub mod errors;
pub mod file_db;
pub mod traits;

pub use errors::{CacheError, CacheResult};
pub use file_db::{CacheEntry, FileDataBase};
pub use traits::DataBase;
