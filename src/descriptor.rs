//! Static descriptors for build steps and their parameters.
//!
//! Descriptors are produced by the plugin loading layer and handed to this
//! subsystem already resolved. A [`StepDescriptor`] owns the ordered parameter
//! list of one goal; declaration order is significant because it drives the
//! numbering of diagnostics. Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Metadata for one configurable parameter of a build step.
///
/// `alias` and `expression` are optional alternate value sources; empty
/// strings are treated as absent everywhere, so descriptor producers do not
/// need to normalize. A parameter that is neither editable nor backed by an
/// expression can never be satisfied by user input; see
/// [`ParameterDescriptor::user_satisfiable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Canonical configuration key, unique within a step.
    pub name: String,
    /// Alternate accepted key; meaningful only when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Fallback lookup expression against the build context,
    /// e.g. `${build.target}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Whether the user may supply this value directly in configuration.
    /// `false` marks computed-only parameters.
    #[serde(default = "default_true")]
    pub editable: bool,
}

impl ParameterDescriptor {
    /// Creates a descriptor with the given canonical key: optional, editable,
    /// no alias, no expression.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            expression: None,
            required: false,
            editable: true,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// The alias, if it is non-empty and differs from the canonical name.
    /// Both the resolver and the diagnostic formatter go through this filter
    /// so the two layers agree on what counts as an alias.
    pub fn effective_alias(&self) -> Option<&str> {
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() && alias != self.name => Some(alias),
            _ => None,
        }
    }

    /// The fallback expression, if non-empty.
    pub fn fallback_expression(&self) -> Option<&str> {
        match self.expression.as_deref() {
            Some(expr) if !expr.is_empty() => Some(expr),
            _ => None,
        }
    }

    /// Whether any user action can satisfy this parameter. A parameter that is
    /// not editable and carries no expression is a descriptor defect: required
    /// instances of it fail validation no matter what the user configures.
    pub fn user_satisfiable(&self) -> bool {
        self.editable || self.fallback_expression().is_some()
    }
}

/// Metadata for one build step (goal) and its ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub goal: String,
    pub goal_prefix: String,
    /// Artifact id of the plugin that owns this goal, referenced by
    /// remediation instructions.
    pub plugin_artifact_id: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl StepDescriptor {
    pub fn new(
        goal_prefix: impl Into<String>,
        goal: impl Into<String>,
        plugin_artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            goal: goal.into(),
            goal_prefix: goal_prefix.into(),
            plugin_artifact_id: plugin_artifact_id.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// `<goal_prefix>:<goal>`, the form users invoke and diagnostics cite.
    pub fn qualified_goal(&self) -> String {
        format!("{}:{}", self.goal_prefix, self.goal)
    }
}
