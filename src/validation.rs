use error_stack::Report;
use serde_json::{Map, Value};

use crate::construction_error::{ConstructionError, ShapeMismatch};
use crate::field::Field;

pub(crate) type Options = Map<String, Value>;

pub(crate) fn reject(err: ConstructionError) -> Report<ConstructionError> {
    Report::new(err)
}

pub(crate) fn require<T>(field: Field, value: Option<T>) -> Result<T, Report<ConstructionError>> {
    value.ok_or_else(|| reject(ConstructionError::MissingField { field }))
}

pub(crate) fn fixed_length<T, const N: usize>(field: Field, values: Vec<T>) -> Result<[T; N], Report<ConstructionError>> {
    <[T; N]>::try_from(values).map_err(|values: Vec<T>| reject(ConstructionError::Shape {
        field,
        mismatch: ShapeMismatch::WrongLength { expected: N, actual: values.len() },
    }))
}

/// Presence check followed by the element count check.
pub(crate) fn sequence<const N: usize>(field: Field, values: Option<Vec<f64>>) -> Result<[f64; N], Report<ConstructionError>> {
    fixed_length(field, require(field, values)?)
}

pub(crate) fn object(value: &Value) -> Result<&Options, Report<ConstructionError>> {
    value.as_object().ok_or_else(|| reject(ConstructionError::NotAnObject))
}

// null counts as not provided.
fn present(options: &Options, field: Field) -> Option<&Value> {
    options.get(field.key()).filter(|value| !value.is_null())
}

fn unexpected_type(field: Field, expected: &'static str) -> Report<ConstructionError> {
    reject(ConstructionError::UnexpectedType { field, expected })
}

pub(crate) fn json_string(options: &Options, field: Field) -> Result<String, Report<ConstructionError>> {
    require(field, present(options, field))?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| unexpected_type(field, "a string"))
}

pub(crate) fn json_strings(options: &Options, field: Field) -> Result<Vec<String>, Report<ConstructionError>> {
    let values = require(field, present(options, field))?
        .as_array()
        .ok_or_else(|| unexpected_type(field, "an array of strings"))?;
    values.iter()
        .map(|value| value.as_str().map(str::to_owned).ok_or_else(|| unexpected_type(field, "an array of strings")))
        .collect()
}

pub(crate) fn json_numbers<const N: usize>(options: &Options, field: Field) -> Result<[f64; N], Report<ConstructionError>> {
    let values = require(field, present(options, field))?
        .as_array()
        .ok_or_else(|| reject(ConstructionError::Shape { field, mismatch: ShapeMismatch::NotASequence }))?;
    let values: [&Value; N] = fixed_length(field, values.iter().collect())?;

    let mut numbers = [0.0; N];
    for (number, value) in numbers.iter_mut().zip(values) {
        *number = value.as_f64().ok_or_else(|| unexpected_type(field, "an array of numbers"))?;
    }
    Ok(numbers)
}

pub(crate) fn json_optional_string(options: &Options, field: Field) -> Result<Option<String>, Report<ConstructionError>> {
    present(options, field)
        .map(|value| value.as_str().map(str::to_owned).ok_or_else(|| unexpected_type(field, "a string")))
        .transpose()
}

pub(crate) fn json_optional_number(options: &Options, field: Field) -> Result<Option<f64>, Report<ConstructionError>> {
    present(options, field)
        .map(|value| value.as_f64().ok_or_else(|| unexpected_type(field, "a number")))
        .transpose()
}

pub(crate) fn json_optional_bool(options: &Options, field: Field) -> Result<Option<bool>, Report<ConstructionError>> {
    present(options, field)
        .map(|value| value.as_bool().ok_or_else(|| unexpected_type(field, "a boolean")))
        .transpose()
}
