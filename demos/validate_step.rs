use gantry_params::{
    DefaultDiagnosticFormatter, DiagnosticFormatter, FormatOptions, InMemoryConfigSource,
    ParameterDescriptor, StepDescriptor, StepValidator, ValidationError,
};
use serde_json::json;

// A deploy step with one satisfied and two unsatisfied required parameters.
fn main() {
    let step = StepDescriptor::new("deploy", "deploy", "gantry-deploy-plugin")
        .with_parameter(ParameterDescriptor::new("repositoryId").required(true))
        .with_parameter(
            ParameterDescriptor::new("url")
                .with_alias("repositoryUrl")
                .required(true),
        )
        .with_parameter(
            ParameterDescriptor::new("localRepository")
                .with_expression("${settings.localRepository}")
                .required(true)
                .editable(false),
        );

    let source = InMemoryConfigSource::new()
        .with_value("repositoryId", json!("releases"))
        .with_properties(json!({ "settings": {} }));

    match StepValidator::new().validate(&step, &source) {
        Ok(()) => println!("'{}' is ready to execute", step.qualified_goal()),
        Err(ValidationError::MissingOrInvalidParameters(failure)) => {
            let options = FormatOptions {
                include_expressions: true,
                use_color: false,
            };
            print!(
                "{}",
                DefaultDiagnosticFormatter.format_failure(&failure, &options)
            );
        }
        Err(fatal) => eprintln!("{}", fatal),
    }
}
