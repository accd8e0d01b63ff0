//! Mock implementations of the runner and resource capabilities

use crate::cache::{CacheResult, DataBase};
use crate::cli::command::Command;
use crate::cli::error::{CliError, CliResult};
use crate::cli::runner::Runner;
use crate::config::Config;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Runner that records every invocation and returns a canned result
#[derive(Clone)]
pub struct MockRunner {
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    failure: Option<String>,
}

impl MockRunner {
    pub fn ok() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Runner for MockRunner {
    fn run(&self, cmd: &Command, args: &[String]) -> CliResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((cmd.name().to_string(), args.to_vec()));
        match &self.failure {
            Some(message) => Err(CliError::execution(message.clone())),
            None => Ok(()),
        }
    }
}

/// In-memory configuration that counts lookups
#[derive(Default)]
pub struct MockConfig {
    values: BTreeMap<String, String>,
    accesses: AtomicUsize,
}

impl MockConfig {
    pub fn with_values(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            accesses: AtomicUsize::new(0),
        }
    }

    pub fn access_count(&self) -> usize {
        self.accesses.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.accesses.fetch_add(1, Ordering::SeqCst);
    }
}

impl Config for MockConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.touch();
        self.values.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.touch();
        self.values.keys().cloned().collect()
    }

    fn file(&self) -> Option<&Path> {
        None
    }
}

/// In-memory cache that counts operations
#[derive(Default)]
pub struct MockDataBase {
    entries: Mutex<BTreeMap<String, (String, DateTime<Utc>)>>,
    accesses: AtomicUsize,
}

impl MockDataBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_count(&self) -> usize {
        self.accesses.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.accesses.fetch_add(1, Ordering::SeqCst);
    }
}

impl DataBase for MockDataBase {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.touch();
        Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
    }

    fn put(&self, key: &str, value: &str) -> CacheResult<()> {
        self.touch();
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Utc::now()));
        Ok(())
    }

    fn delete(&self, key: &str) -> CacheResult<()> {
        self.touch();
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    fn keys(&self) -> CacheResult<Vec<String>> {
        self.touch();
        Ok(self.entries.lock().unwrap().keys().cloned().collect())
    }

    fn timestamp(&self, key: &str) -> CacheResult<Option<DateTime<Utc>>> {
        self.touch();
        Ok(self.entries.lock().unwrap().get(key).map(|(_, t)| *t))
    }

    fn clear(&self) -> CacheResult<()> {
        self.touch();
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}
