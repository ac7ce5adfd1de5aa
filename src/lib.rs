//! # gantry-params: plugin parameter validation for the Gantry build orchestrator
//!
//! Before the orchestrator executes a build step (goal), every parameter the
//! step's plugin declares as required must be satisfiable from explicit
//! configuration under its canonical name, under its alias, or through a
//! fallback expression against the build context. This crate verifies that,
//! and when it cannot, produces one complete, numbered diagnostic telling the
//! user exactly what to add where.
//!
//! ## Components
//!
//! - Descriptors ([`descriptor`]): static metadata for steps and their
//!   parameters, produced by the plugin loading layer.
//! - Source boundary ([`source`]): the read-only configuration view the
//!   orchestrator supplies per validation call.
//! - Resolution ([`resolver`]): name, alias, expression precedence for one
//!   parameter.
//! - Validation ([`validator`]): the collect-all pass over a step's required
//!   parameters.
//! - Diagnostics ([`diagnostics`]): deterministic rendering of a failure into
//!   remediation text.
//! - Expression syntax ([`expression`]): the `${dotted.path}` build-context
//!   reference form.
//!
//! ## Flow
//!
//! ```text
//! StepDescriptor + ConfigSource -> StepValidator -> ValidationFailure -> DiagnosticFormatter
//! ```
//!
//! Everything is synchronous and pure over immutable descriptors; concurrent
//! orchestrator workers may validate different steps in parallel as long as
//! each call gets its own source handle. The library never prints and never
//! exits. Rendering and presentation belong to the caller.
//!
//! ```
//! use gantry_params::{
//!     DefaultDiagnosticFormatter, DiagnosticFormatter, InMemoryConfigSource,
//!     ParameterDescriptor, StepDescriptor, StepValidator, ValidationError,
//! };
//!
//! let step = StepDescriptor::new("compile", "testCompile", "gantry-compiler-plugin")
//!     .with_parameter(ParameterDescriptor::new("source").required(true).with_alias("src"));
//!
//! let source = InMemoryConfigSource::new(); // nothing configured
//!
//! match StepValidator::new().validate(&step, &source) {
//!     Ok(()) => println!("ready to execute"),
//!     Err(ValidationError::MissingOrInvalidParameters(failure)) => {
//!         eprint!("{}", DefaultDiagnosticFormatter.format(&failure));
//!     }
//!     Err(fatal) => eprintln!("{}", fatal),
//! }
//! ```

pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod expression;
pub mod resolver;
pub mod source;
pub mod validator;

// Re-exports
pub use descriptor::{ParameterDescriptor, StepDescriptor};
pub use diagnostics::{DefaultDiagnosticFormatter, DiagnosticFormatter, FormatOptions};
pub use error::{ValidationError, ValidationResult};
pub use resolver::{ParameterResolver, Resolution, ValueOrigin};
pub use source::{ConfigSource, ConfigSourceError, InMemoryConfigSource};
pub use validator::{StepValidator, ValidationFailure};
