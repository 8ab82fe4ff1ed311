//! Schema validation for external input.
//!
//! External values are checked in two passes: serde gives the typed shape
//! (missing fields, wrong primitive types), then declared `validator`
//! constraints run over the typed value with every violation collected
//! per field. Nothing in here panics on bad input.

use serde::de::DeserializeOwned;
use std::fmt;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// A single constraint violation, addressed by field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

#[derive(Debug)]
pub enum SchemaError {
    /// The value does not deserialize into the expected shape at all:
    /// a required field is missing, a primitive has the wrong type, or the
    /// value is not an object.
    Structure(String),
    /// The shape matched, but one or more fields violate their declared
    /// constraints. Violations for every offending field are collected, not
    /// just the first.
    Fields(Vec<FieldViolation>),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Structure(message) => write!(f, "{message}"),
            SchemaError::Fields(violations) => {
                let rendered: Vec<String> = violations
                    .iter()
                    .map(|v| format!("{} ({})", v.field, v.reason))
                    .collect();
                write!(f, "{}", rendered.join(", "))
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Validates an arbitrary JSON value against the declared shape and
/// constraints of `T`, returning the typed value or a structured error.
pub fn parse_validated<T>(value: &serde_json::Value) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let typed: T = serde_json::from_value(value.clone())
        .map_err(|e| SchemaError::Structure(e.to_string()))?;
    typed
        .validate()
        .map_err(|e| SchemaError::Fields(flatten_violations("", &e)))?;
    Ok(typed)
}

/// Flattens `validator`'s nested error tree into dotted field paths, sorted
/// by path so the rendered message is deterministic.
fn flatten_violations(prefix: &str, errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by_key(|(field, _)| **field);

    for (field, kind) in fields {
        let path = if prefix.is_empty() {
            (*field).to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let reason = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    violations.push(FieldViolation { field: path.clone(), reason });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                violations.extend(flatten_violations(&path, nested));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    violations.extend(flatten_violations(&format!("{path}[{index}]"), nested));
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must be non-empty"))]
        name: String,
        #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
        count: u32,
    }

    #[test]
    fn valid_input_parses_to_the_typed_value() {
        let probe: Probe = parse_validated(&json!({"name": "ND", "count": 4})).unwrap();
        assert_eq!(probe.name, "ND");
        assert_eq!(probe.count, 4);
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let err = parse_validated::<Probe>(&json!({"count": 4})).unwrap_err();
        assert!(matches!(err, SchemaError::Structure(_)));
        assert!(err.to_string().contains("name"), "message should name the field: {err}");
    }

    #[test]
    fn wrong_primitive_type_is_a_structure_error() {
        let err = parse_validated::<Probe>(&json!({"name": "ND", "count": "four"})).unwrap_err();
        assert!(matches!(err, SchemaError::Structure(_)));
    }

    #[test]
    fn constraint_violations_aggregate_per_field() {
        let err = parse_validated::<Probe>(&json!({"name": "", "count": 500})).unwrap_err();
        let SchemaError::Fields(violations) = &err else {
            panic!("expected per-field violations, got {err:?}");
        };
        assert_eq!(violations.len(), 2);
        assert_eq!(
            err.to_string(),
            "count (must be between 1 and 100), name (must be non-empty)"
        );
    }

    #[test]
    fn non_object_input_is_a_structure_error() {
        let err = parse_validated::<Probe>(&json!("not an object")).unwrap_err();
        assert!(matches!(err, SchemaError::Structure(_)));
    }
}
