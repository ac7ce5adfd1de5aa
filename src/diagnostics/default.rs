//! Default diagnostic formatter.
//!
//! Renders the header line, then one numbered block per failed parameter.
//! Editable parameters get configuration instructions, with an `-OR-` block
//! when a distinct alias exists. A parameter without a fallback expression
//! ends in a period; one with an expression gets the `-OR-` separator toward
//! the expression alternative instead.

use std::fmt::Write;

use super::{DiagnosticFormatter, FormatOptions};
use crate::descriptor::{ParameterDescriptor, StepDescriptor};
use crate::expression::PropertyExpression;
use crate::validator::ValidationFailure;

/// Default formatter. Stateless.
#[derive(Debug, Default)]
pub struct DefaultDiagnosticFormatter;

impl DiagnosticFormatter for DefaultDiagnosticFormatter {
    fn format_failure(&self, failure: &ValidationFailure<'_>, options: &FormatOptions) -> String {
        let step = failure.step();
        let mut output = String::with_capacity(256);

        let header = format!(
            "One or more required plugin parameters are invalid/missing for '{}'",
            step.qualified_goal()
        );
        if options.use_color {
            write!(output, "\x1b[31m{}\x1b[0m", header).unwrap();
        } else {
            output.push_str(&header);
        }
        output.push('\n');

        for (idx, parameter) in failure.failed_parameters().iter().enumerate() {
            output.push('\n');
            if options.use_color {
                write!(output, "\x1b[90m[{}]\x1b[0m ", idx).unwrap();
            } else {
                write!(output, "[{}] ", idx).unwrap();
            }
            self.append_parameter_instructions(step, parameter, options, &mut output);
            output.push('\n');
        }

        output
    }
}

impl DefaultDiagnosticFormatter {
    fn append_parameter_instructions(
        &self,
        step: &StepDescriptor,
        parameter: &ParameterDescriptor,
        options: &FormatOptions,
        output: &mut String,
    ) {
        if parameter.editable {
            write!(
                output,
                "Inside the definition for plugin '{}', specify the following:\n\n{}",
                step.plugin_artifact_id,
                configuration_block(&parameter.name)
            )
            .unwrap();

            if let Some(alias) = parameter.effective_alias() {
                write!(output, "\n\n-OR-\n\n{}\n", configuration_block(alias)).unwrap();
            }
        }

        match parameter.fallback_expression() {
            None => output.push('.'),
            Some(expression) => {
                if parameter.editable {
                    output.push_str("\n\n-OR-\n\n");
                }
                if options.include_expressions {
                    self.append_expression_usage(expression, output);
                }
            }
        }
    }

    /// Expression-side remediation. The parsed form lets us name the build
    /// property directly; anything else is quoted verbatim.
    fn append_expression_usage(&self, expression: &str, output: &mut String) {
        match PropertyExpression::parse(expression) {
            Ok(parsed) => write!(
                output,
                "Define the build property '{}' so the expression '{}' can resolve it",
                parsed.dotted_path(),
                parsed
            )
            .unwrap(),
            Err(_) => write!(
                output,
                "Satisfy it from the build context via its expression '{}'",
                expression
            )
            .unwrap(),
        }
    }
}

fn configuration_block(key: &str) -> String {
    format!(
        "<configuration>\n  ...\n  <{}>VALUE</{}>\n</configuration>",
        key, key
    )
}
