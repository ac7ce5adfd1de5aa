//! Configuration source boundary.
//!
//! The orchestrator owns configuration and the build context; this subsystem
//! only reads them through [`ConfigSource`]. `Ok(None)` from either method
//! means "no value here" (a failed expression evaluation included), while
//! `Err` means the source itself is inaccessible, which is fatal and
//! propagated unchanged. [`InMemoryConfigSource`] is the bundled
//! implementation used by tests and the CLI harness.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::expression::PropertyExpression;

/// Failure of the configuration source itself, as opposed to a missing value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigSourceError {
    /// The source cannot be read at all. This subsystem does not retry it.
    #[error("configuration source unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ConfigSourceError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Read-only view of a step's explicit configuration and the build context.
///
/// Supplied per validation call by the orchestrator; implementations must not
/// require mutable shared state, so one source handle per concurrent worker is
/// enough.
#[mockall::automock]
pub trait ConfigSource {
    /// Explicit configuration value under `key`, if any.
    fn lookup(&self, key: &str) -> Result<Option<Value>, ConfigSourceError>;

    /// Evaluates a fallback expression against the build context. Malformed
    /// expressions and evaluation misses are `Ok(None)`, never errors.
    fn evaluate_expression(&self, expr: &str) -> Result<Option<Value>, ConfigSourceError>;
}

/// Map-backed [`ConfigSource`]: a flat `key -> value` configuration object
/// plus a nested property tree the `${dotted.path}` expressions walk.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    configuration: serde_json::Map<String, Value>,
    properties: Value,
}

impl InMemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one explicit configuration entry.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.configuration.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole explicit configuration object.
    pub fn with_configuration(mut self, configuration: serde_json::Map<String, Value>) -> Self {
        self.configuration = configuration;
        self
    }

    /// Replaces the build-context property tree.
    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = properties;
        self
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn lookup(&self, key: &str) -> Result<Option<Value>, ConfigSourceError> {
        // JSON null counts as absent so a nulled key still falls through to
        // the alias and expression steps.
        Ok(self
            .configuration
            .get(key)
            .filter(|value| !value.is_null())
            .cloned())
    }

    fn evaluate_expression(&self, expr: &str) -> Result<Option<Value>, ConfigSourceError> {
        let parsed = match PropertyExpression::parse(expr) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!("unresolvable expression: {}", err);
                return Ok(None);
            }
        };
        Ok(parsed
            .lookup_in(&self.properties)
            .filter(|value| !value.is_null())
            .cloned())
    }
}
