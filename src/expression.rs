//! Property expression syntax for build-context lookups.
//!
//! A parameter that cannot be satisfied from explicit configuration may carry a
//! fallback expression referencing the build context, written as
//! `${dotted.property.path}`. This module owns that syntax: parsing an
//! expression string into a [`PropertyExpression`] and navigating a property
//! tree with it. Evaluation policy (what a miss means) stays with the
//! configuration source; a malformed expression is never a hard fault there.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::all_consuming,
    error::{context, VerboseError},
    multi::separated_list1,
    sequence::delimited,
    IResult,
};
use serde_json::Value;
use thiserror::Error;

type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Error for expression strings that do not follow the `${seg(.seg)*}` form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("malformed property expression: '{0}'")]
    Malformed(String),
}

/// A parsed `${dotted.property.path}` reference into the build context.
///
/// Segments are non-empty runs of alphanumerics, `_` or `-`, separated by `.`
/// and wrapped in `${` / `}`. Nothing may precede or follow the braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyExpression {
    path: Vec<String>,
}

fn parse_segment(input: &str) -> ParserResult<&str> {
    context(
        "property segment",
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
fn parse_property_expression(input: &str) -> ParserResult<Vec<&str>> {
    context(
        "property expression",
        delimited(
            tag("${"),
            separated_list1(char('.'), parse_segment),
            tag("}"),
        ),
    )(input)
}

impl PropertyExpression {
    /// Parses a full expression string. The whole input must be one
    /// expression; leading or trailing text is rejected.
    pub fn parse(input: &str) -> Result<Self, ExpressionError> {
        match all_consuming(parse_property_expression)(input) {
            Ok((_, segments)) => Ok(Self {
                path: segments.into_iter().map(str::to_string).collect(),
            }),
            Err(_) => Err(ExpressionError::Malformed(input.to_string())),
        }
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// The dotted path without the `${}` wrapper, e.g. `build.target`.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// Walks a property tree along this path. Only object nodes are entered;
    /// a missing key or a non-object mid-path yields `None`.
    pub fn lookup_in<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        let mut current = root;
        for segment in &self.path {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl std::fmt::Display for PropertyExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${{{}}}", self.dotted_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_segment() {
        let expr = PropertyExpression::parse("${target}").unwrap();
        assert_eq!(expr.segments(), &["target".to_string()]);
    }

    #[test]
    fn test_parse_dotted_path() {
        let expr = PropertyExpression::parse("${build.output.dir}").unwrap();
        assert_eq!(expr.dotted_path(), "build.output.dir");
        assert_eq!(expr.to_string(), "${build.output.dir}");
    }

    #[test]
    fn test_parse_allows_underscore_and_dash() {
        let expr = PropertyExpression::parse("${build_root.cache-dir}").unwrap();
        assert_eq!(expr.dotted_path(), "build_root.cache-dir");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "build.target",
            "${}",
            "${build.}",
            "${.target}",
            "${build.target",
            "${build.target} ",
            "x${build.target}",
            "${build target}",
        ] {
            assert!(
                PropertyExpression::parse(input).is_err(),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_lookup_in_navigates_objects() {
        let tree = json!({
            "build": {
                "target": "1.8",
                "output": { "dir": "target/classes" }
            }
        });

        let expr = PropertyExpression::parse("${build.target}").unwrap();
        assert_eq!(expr.lookup_in(&tree), Some(&json!("1.8")));

        let expr = PropertyExpression::parse("${build.output.dir}").unwrap();
        assert_eq!(expr.lookup_in(&tree), Some(&json!("target/classes")));
    }

    #[test]
    fn test_lookup_in_misses() {
        let tree = json!({ "build": { "target": "1.8" } });

        let missing = PropertyExpression::parse("${build.nothing}").unwrap();
        assert_eq!(missing.lookup_in(&tree), None);

        // mid-path node is a string, not an object
        let too_deep = PropertyExpression::parse("${build.target.more}").unwrap();
        assert_eq!(too_deep.lookup_in(&tree), None);
    }
}
