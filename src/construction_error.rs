use std::fmt;

use crate::field::Field;

/// Why a sequence-shaped field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMismatch {
    /// The value is present but is not a sequence.
    NotASequence,
    /// The sequence does not have the required number of elements.
    WrongLength { expected: usize, actual: usize },
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeMismatch::NotASequence => f.write_str("not a sequence"),
            ShapeMismatch::WrongLength { expected, actual } => f.write_fmt(
                format_args!("expected {} elements, got {}", expected, actual)
            ),
        }
    }
}

/// Error raised when a `Channel` or `BlendingInformation` cannot be built.
///
/// `MissingField` and `Shape` are the two failures of the typed constructors.
/// `UnexpectedType` and `NotAnObject` only come from the untyped JSON entry
/// points, where a value may be of a type the field cannot hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    MissingField { field: Field },
    Shape { field: Field, mismatch: ShapeMismatch },
    UnexpectedType { field: Field, expected: &'static str },
    NotAnObject,
}

impl ConstructionError {
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ConstructionError::MissingField { .. })
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, ConstructionError::Shape { .. })
    }

    /// The offending field, if the error concerns one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ConstructionError::MissingField { field } => Some(*field),
            ConstructionError::Shape { field, .. } => Some(*field),
            ConstructionError::UnexpectedType { field, .. } => Some(*field),
            ConstructionError::NotAnObject => None,
        }
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::MissingField { field } => f.write_fmt(
                format_args!("Option \"{}\" is required.", field)
            ),
            ConstructionError::Shape { field, mismatch } => f.write_fmt(
                format_args!("Option \"{}\" has an invalid shape: {}.", field, mismatch)
            ),
            ConstructionError::UnexpectedType { field, expected } => f.write_fmt(
                format_args!("Option \"{}\" should be {}.", field, expected)
            ),
            ConstructionError::NotAnObject => f.write_str("Options should be an object."),
        }
    }
}

impl std::error::Error for ConstructionError {}
