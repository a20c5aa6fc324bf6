// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment resolution for git child processes.
//!
//! Authentication helpers (askpass trampolines, credential sockets) need
//! extra variables in git's environment and sometimes need to stay alive
//! while git runs. A provider returns those variables in an
//! [`EnvironmentLease`]; the lease is held until the child exits.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Value `TERM` is pinned to so git never treats the pipe as a terminal.
pub const FORCED_TERM: &str = "dumb";

/// Errors from environment providers
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("cancelled by the user")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

/// Variables for one execution plus whatever must outlive the child.
pub struct EnvironmentLease {
    pub vars: HashMap<String, String>,
    guard: Option<Box<dyn Any + Send>>,
}

impl EnvironmentLease {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars, guard: None }
    }

    /// Keep `guard` alive until the git process has exited.
    pub fn with_guard(vars: HashMap<String, String>, guard: impl Any + Send) -> Self {
        Self { vars, guard: Some(Box::new(guard)) }
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }
}

impl fmt::Debug for EnvironmentLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentLease")
            .field("vars", &self.vars.keys().collect::<Vec<_>>())
            .field("guard", &self.guard.is_some())
            .finish()
    }
}

/// Supplies extra environment for git, e.g. credential helpers.
#[async_trait]
pub trait EnvironmentProvider: Send + Sync + 'static {
    /// Resolve variables for a command about to run in `path`.
    ///
    /// May suspend (waiting on a credential prompt, say). The returned
    /// variables are layered over `caller_env`.
    async fn resolve(
        &self,
        path: &Path,
        is_background_task: bool,
        caller_env: &HashMap<String, String>,
    ) -> Result<EnvironmentLease, EnvironmentError>;
}

/// Provider that adds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughEnvironment;

#[async_trait]
impl EnvironmentProvider for PassthroughEnvironment {
    async fn resolve(
        &self,
        _path: &Path,
        _is_background_task: bool,
        _caller_env: &HashMap<String, String>,
    ) -> Result<EnvironmentLease, EnvironmentError> {
        Ok(EnvironmentLease::new(HashMap::new()))
    }
}

/// Final child environment: caller vars, then provider vars, then `TERM`.
pub fn merge_env(
    caller_env: &HashMap<String, String>,
    provided: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut env = caller_env.clone();
    env.extend(provided.iter().map(|(k, v)| (k.clone(), v.clone())));
    env.insert("TERM".to_string(), FORCED_TERM.to_string());
    env
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{EnvironmentError, EnvironmentLease, EnvironmentProvider};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    /// Recorded resolution request
    #[derive(Debug, Clone)]
    pub struct EnvironmentCall {
        pub path: PathBuf,
        pub is_background_task: bool,
        pub caller_env: HashMap<String, String>,
    }

    struct FakeEnvironmentState {
        calls: Vec<EnvironmentCall>,
        vars: HashMap<String, String>,
        fail_with: Option<String>,
    }

    /// Fake environment provider for testing
    #[derive(Clone)]
    pub struct FakeEnvironment {
        inner: Arc<Mutex<FakeEnvironmentState>>,
    }

    impl Default for FakeEnvironment {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeEnvironmentState {
                    calls: Vec::new(),
                    vars: HashMap::new(),
                    fail_with: None,
                })),
            }
        }
    }

    impl FakeEnvironment {
        pub fn new() -> Self {
            Self::default()
        }

        /// Supply `key=value` on every resolution.
        pub fn with_var(self, key: &str, value: &str) -> Self {
            self.inner.lock().vars.insert(key.to_string(), value.to_string());
            self
        }

        /// Fail every resolution with `message`.
        pub fn failing(self, message: &str) -> Self {
            self.inner.lock().fail_with = Some(message.to_string());
            self
        }

        /// Get all recorded resolutions
        pub fn calls(&self) -> Vec<EnvironmentCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl EnvironmentProvider for FakeEnvironment {
        async fn resolve(
            &self,
            path: &Path,
            is_background_task: bool,
            caller_env: &HashMap<String, String>,
        ) -> Result<EnvironmentLease, EnvironmentError> {
            let mut state = self.inner.lock();
            state.calls.push(EnvironmentCall {
                path: path.to_path_buf(),
                is_background_task,
                caller_env: caller_env.clone(),
            });
            match &state.fail_with {
                Some(message) => Err(EnvironmentError::Failed(message.clone())),
                None => Ok(EnvironmentLease::new(state.vars.clone())),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{EnvironmentCall, FakeEnvironment};

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
