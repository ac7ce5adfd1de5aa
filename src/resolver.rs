//! Effective-value resolution for step parameters.
//!
//! One parameter, one source, one answer: the resolver applies the lookup
//! precedence (canonical name, then alias, then fallback expression) and
//! reports either a resolved value with its origin or [`Resolution::Unresolved`].
//! Resolution is a pure read: an unsatisfied parameter is data for the
//! validator, never an error. Only an inaccessible source escapes as
//! [`ConfigSourceError`].

use serde_json::Value;
use tracing::debug;

use crate::descriptor::ParameterDescriptor;
use crate::source::{ConfigSource, ConfigSourceError};

/// Which lookup step satisfied a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueOrigin {
    /// Explicit configuration under the canonical name.
    Name,
    /// Explicit configuration under the alias.
    Alias,
    /// Fallback expression evaluated against the build context.
    Expression,
}

/// Outcome of resolving one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved { value: Value, origin: ValueOrigin },
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Resolved { value, .. } => Some(value),
            Self::Unresolved => None,
        }
    }
}

/// Stateless application of the lookup precedence. Holds nothing across
/// calls, so one instance may serve any number of concurrent validations.
#[derive(Debug, Default)]
pub struct ParameterResolver;

impl ParameterResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolves one parameter against a configuration source.
    ///
    /// Order: explicit configuration under `name`; if absent, under the
    /// effective alias; if still absent and an expression is set (editability
    /// is irrelevant here), the expression against the build context;
    /// otherwise `Unresolved`.
    pub fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        source: &dyn ConfigSource,
    ) -> Result<Resolution, ConfigSourceError> {
        if let Some(value) = source.lookup(&parameter.name)? {
            return Ok(self.resolved(parameter, value, ValueOrigin::Name));
        }

        if let Some(alias) = parameter.effective_alias() {
            if let Some(value) = source.lookup(alias)? {
                return Ok(self.resolved(parameter, value, ValueOrigin::Alias));
            }
        }

        if let Some(expression) = parameter.fallback_expression() {
            if let Some(value) = source.evaluate_expression(expression)? {
                return Ok(self.resolved(parameter, value, ValueOrigin::Expression));
            }
        }

        debug!("parameter '{}' unresolved", parameter.name);
        Ok(Resolution::Unresolved)
    }

    fn resolved(
        &self,
        parameter: &ParameterDescriptor,
        value: Value,
        origin: ValueOrigin,
    ) -> Resolution {
        debug!("parameter '{}' resolved from {}", parameter.name, origin);
        Resolution::Resolved { value, origin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{InMemoryConfigSource, MockConfigSource};
    use mockall::predicate::eq;
    use serde_json::json;

    #[test]
    fn test_name_takes_precedence_over_alias() {
        let resolver = ParameterResolver::new();
        let param = ParameterDescriptor::new("source").with_alias("src");
        let source = InMemoryConfigSource::new()
            .with_value("source", "17")
            .with_value("src", "11");

        let resolution = resolver.resolve(&param, &source).unwrap();
        assert_eq!(
            resolution,
            Resolution::Resolved {
                value: json!("17"),
                origin: ValueOrigin::Name,
            }
        );
    }

    #[test]
    fn test_alias_used_when_name_absent() {
        let resolver = ParameterResolver::new();
        let param = ParameterDescriptor::new("source").with_alias("src");
        let source = InMemoryConfigSource::new().with_value("src", "11");

        let resolution = resolver.resolve(&param, &source).unwrap();
        assert_eq!(
            resolution,
            Resolution::Resolved {
                value: json!("11"),
                origin: ValueOrigin::Alias,
            }
        );
    }

    #[test]
    fn test_expression_is_last_resort() {
        let resolver = ParameterResolver::new();
        let param = ParameterDescriptor::new("target")
            .with_alias("tgt")
            .with_expression("${build.target}");
        let source = InMemoryConfigSource::new()
            .with_properties(json!({ "build": { "target": "1.8" } }));

        let resolution = resolver.resolve(&param, &source).unwrap();
        assert_eq!(
            resolution,
            Resolution::Resolved {
                value: json!("1.8"),
                origin: ValueOrigin::Expression,
            }
        );
    }

    #[test]
    fn test_expression_applies_to_non_editable_parameters() {
        let resolver = ParameterResolver::new();
        let param = ParameterDescriptor::new("target")
            .editable(false)
            .with_expression("${build.target}");
        let source = InMemoryConfigSource::new()
            .with_properties(json!({ "build": { "target": "1.8" } }));

        assert!(resolver.resolve(&param, &source).unwrap().is_resolved());
    }

    #[test]
    fn test_unresolved_when_nothing_matches() {
        let resolver = ParameterResolver::new();
        let param = ParameterDescriptor::new("target").with_expression("${build.target}");
        let source = InMemoryConfigSource::new();

        assert_eq!(
            resolver.resolve(&param, &source).unwrap(),
            Resolution::Unresolved
        );
    }

    #[test]
    fn test_alias_equal_to_name_is_not_consulted() {
        let resolver = ParameterResolver::new();
        let param = ParameterDescriptor::new("x").with_alias("x");

        let mut mock = MockConfigSource::new();
        mock.expect_lookup()
            .with(eq("x"))
            .times(1)
            .returning(|_| Ok(None));

        assert_eq!(
            resolver.resolve(&param, &mock).unwrap(),
            Resolution::Unresolved
        );
    }

    #[test]
    fn test_source_error_propagates() {
        let resolver = ParameterResolver::new();
        let param = ParameterDescriptor::new("source");

        let mut mock = MockConfigSource::new();
        mock.expect_lookup()
            .returning(|_| Err(ConfigSourceError::unavailable("store offline")));

        assert!(resolver.resolve(&param, &mock).is_err());
    }
}
