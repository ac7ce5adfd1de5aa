//! Collect-all validation of a step's required parameters.
//!
//! The validator runs the resolver over every required parameter of a step,
//! never short-circuiting, so one pass yields the complete failure list
//! aggregated into a single [`ValidationFailure`]. Per validation call the
//! caller sees at most one error; individual parameter misses are data inside
//! it, not errors of their own.

use tracing::{debug, warn};

use crate::descriptor::{ParameterDescriptor, StepDescriptor};
use crate::error::{ValidationError, ValidationResult};
use crate::resolver::{ParameterResolver, Resolution};
use crate::source::ConfigSource;

/// Outcome record of one failed validation pass.
///
/// Borrows the step and the failed subset of its parameters, so identity is
/// preserved for diagnostics and nothing is copied. Order matches declaration
/// order. Created by [`StepValidator::validate`] and consumed by the
/// diagnostics layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure<'a> {
    step: &'a StepDescriptor,
    failed_parameters: Vec<&'a ParameterDescriptor>,
}

impl<'a> ValidationFailure<'a> {
    pub fn new(step: &'a StepDescriptor, failed_parameters: Vec<&'a ParameterDescriptor>) -> Self {
        Self {
            step,
            failed_parameters,
        }
    }

    pub fn step(&self) -> &'a StepDescriptor {
        self.step
    }

    pub fn failed_parameters(&self) -> &[&'a ParameterDescriptor] {
        &self.failed_parameters
    }

    pub fn is_empty(&self) -> bool {
        self.failed_parameters.is_empty()
    }

    /// One-line form used as the error's `Display`, e.g.
    /// `The parameters 'source', 'target' for goal 'compile:testCompile' are missing or invalid`.
    pub fn summary(&self) -> String {
        format!(
            "The parameters {} for goal '{}' are missing or invalid",
            quoted_names(&self.failed_parameters),
            self.step.qualified_goal()
        )
    }
}

fn quoted_names(parameters: &[&ParameterDescriptor]) -> String {
    let mut buffer = String::with_capacity(parameters.len() * 16);
    for parameter in parameters {
        if !buffer.is_empty() {
            buffer.push_str(", ");
        }
        buffer.push('\'');
        buffer.push_str(&parameter.name);
        buffer.push('\'');
    }
    buffer
}

/// Validates a step's parameters against a configuration source before the
/// step executes. Stateless; share or recreate freely across workers.
#[derive(Debug, Default)]
pub struct StepValidator {
    resolver: ParameterResolver,
}

impl StepValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves every required parameter of `step`, in declaration order.
    ///
    /// Returns `Ok(())` when all required parameters resolve. Otherwise
    /// returns [`ValidationError::MissingOrInvalidParameters`] carrying every
    /// unresolved required parameter, order preserved. A
    /// [`crate::source::ConfigSourceError`] aborts the pass and propagates
    /// unchanged.
    pub fn validate<'a>(
        &self,
        step: &'a StepDescriptor,
        source: &dyn ConfigSource,
    ) -> ValidationResult<'a> {
        let mut failed: Vec<&'a ParameterDescriptor> = Vec::new();

        for parameter in &step.parameters {
            if !parameter.required {
                continue;
            }
            match self.resolver.resolve(parameter, source)? {
                Resolution::Resolved { .. } => {}
                Resolution::Unresolved => {
                    if !parameter.user_satisfiable() {
                        // Descriptor defect, not a configuration mistake: the
                        // parameter is computed-only yet has no expression.
                        warn!(
                            "parameter '{}' of '{}' can never be satisfied: not editable and no fallback expression",
                            parameter.name,
                            step.qualified_goal()
                        );
                    }
                    failed.push(parameter);
                }
            }
        }

        if failed.is_empty() {
            debug!(
                "all required parameters of '{}' resolved",
                step.qualified_goal()
            );
            return Ok(());
        }

        Err(ValidationError::MissingOrInvalidParameters(
            ValidationFailure::new(step, failed),
        ))
    }
}
