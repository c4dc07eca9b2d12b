use std::{
    collections::HashMap,
    fmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Missing,
    NotNumeric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Missing => write!(f, "{} is required", self.field),
            FieldErrorKind::NotNumeric => write!(f, "{} must be a number", self.field),
        }
    }
}

/// Checks every rendered field. Values themselves are never rewritten.
pub fn validate_fields(
    fields: &[&'static str],
    values: &HashMap<String, String>,
    strict_numeric: bool,
) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(|&field| {
            let value = values.get(field).map(|v| v.trim()).unwrap_or_default();

            if value.is_empty() {
                return Some(FieldError { field, kind: FieldErrorKind::Missing });
            }

            if strict_numeric && !is_finite_number(value) {
                return Some(FieldError { field, kind: FieldErrorKind::NotNumeric });
            }

            None
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_finite_number(value: &str) -> bool {
    value.parse::<f64>().map(|n| n.is_finite()).unwrap_or(false)
}
