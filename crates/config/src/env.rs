//! Environment variable interpolation.
//!
//! Responsibilities:
//! - Replace `${NAME}` tokens in a string with values from an environment lookup.
//! - Abstract the environment behind [`EnvSource`] so tests can inject a fixed mapping.
//!
//! Does NOT handle:
//! - Remembering the pre-interpolation text (see `raw.rs`).
//! - Deciding which document fields are interpolated (see `loader.rs`).
//!
//! Invariants:
//! - Only `${` + one or more of `[A-Z0-9_]` + `}` is a token. Anything else is literal text.
//! - An unset variable resolves to the empty string, never to an error or the literal token.
//! - Substituted values are not scanned again (no recursive interpolation).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

static ENV_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Z0-9_]+)\}").expect("env token pattern is valid"));

/// A source of environment variable values.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when it is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Shared handle to the environment a document was loaded with.
///
/// Save and reload re-interpolate through the same handle, so a document loaded
/// with an injected mapping never silently switches to the process environment.
#[derive(Clone)]
pub struct EnvHandle(Arc<dyn EnvSource + Send + Sync>);

impl EnvHandle {
    pub fn new(source: impl EnvSource + Send + Sync + 'static) -> Self {
        Self(Arc::new(source))
    }

    /// Handle backed by the process environment.
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }

    /// Interpolates `text` against this handle's environment.
    pub fn interpolate(&self, text: &str) -> String {
        interpolate_with(text, self.0.as_ref())
    }
}

impl Default for EnvHandle {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for EnvHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EnvHandle(..)")
    }
}

impl EnvSource for EnvHandle {
    fn var(&self, name: &str) -> Option<String> {
        self.0.var(name)
    }
}

/// Interpolates `text` against the process environment.
pub fn interpolate(text: &str) -> String {
    interpolate_with(text, &ProcessEnv)
}

/// Interpolates `text` against `env`.
///
/// ```
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("HOST".to_string(), "db.local".to_string())]);
/// assert_eq!(
///     appcfg::interpolate_with("Server=${HOST};User=${MISSING};", &env),
///     "Server=db.local;User=;"
/// );
/// ```
pub fn interpolate_with(text: &str, env: &dyn EnvSource) -> String {
    if text.is_empty() {
        return String::new();
    }

    ENV_TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            env.var(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}
