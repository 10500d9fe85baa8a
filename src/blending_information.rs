use derive_builder::Builder;
use error_stack::{Report, ResultExt};
use serde_json::Value;

use crate::construction_error::ConstructionError;
use crate::field::Field;
use crate::validation::{
    json_numbers, json_optional_bool, json_optional_number, json_optional_string, object, sequence,
};

/// Number of elements of `color` (red, green, blue).
pub const COLOR_LEN: usize = 3;
/// Number of elements of `threshold_values` and `limit_values` (lower, upper).
pub const RANGE_LEN: usize = 2;

/// Options for creating a `BlendingInformation`.
///
/// `color`, `threshold_values` and `limit_values` are required. The other
/// fields are taken as they are.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct BlendingInformationOptions {
    pub optical_path_identifier: Option<String>,
    pub color: Option<Vec<f64>>,
    pub opacity: Option<f64>,
    pub threshold_values: Option<Vec<f64>>,
    pub limit_values: Option<Vec<f64>>,
    pub visible: Option<bool>,
}

/// Parameters for blending the image of one channel into a color image.
///
/// Associated with a `Channel` through the optical path identifier. A new
/// instance is created for every change of presentation; the `with_*`
/// methods return such a copy and leave the receiver untouched.
///
/// # Examples
///
/// ```
/// # use microscopy_channel_core::blending_information::{BlendingInformation, BlendingInformationOptionsBuilder};
/// let blending = BlendingInformation::new(
///     BlendingInformationOptionsBuilder::default()
///         .optical_path_identifier("Cy5")
///         .color([255., 0., 0.])
///         .opacity(1.)
///         .threshold_values([0., 1.])
///         .limit_values([0., 65535.])
///         .visible(true)
///         .build().unwrap()
/// ).unwrap();
/// assert_eq!(blending.color(), [255., 0., 0.]);
/// ```
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "serde_json::Value", rename_all = "camelCase")]
#[derive(Debug, Clone, PartialEq)]
pub struct BlendingInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    optical_path_identifier: Option<String>,
    color: [f64; COLOR_LEN],
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
    threshold_values: [f64; RANGE_LEN],
    limit_values: [f64; RANGE_LEN],
    #[serde(skip_serializing_if = "Option::is_none")]
    visible: Option<bool>,
}

impl BlendingInformation {
    /// Creates blending information.
    ///
    /// Checks color, then threshold values, then limit values, and reports
    /// the first failure.
    ///
    /// # Errors
    ///
    /// - `ConstructionError::MissingField` if color, threshold values or limit values is `None`.
    /// - `ConstructionError::Shape` if color does not have 3 elements, or threshold values or
    ///   limit values does not have 2.
    pub fn new(options: BlendingInformationOptions) -> Result<Self, Report<ConstructionError>> {
        Self::checked(options).attach_printable("Cannot create a BlendingInformation.")
    }

    /// Creates blending information from an untyped options document.
    ///
    /// Same order as `new`, with an additional sequence check on each of
    /// the array fields right after its presence check.
    ///
    /// `opticalPathIdentifier`, `opacity` and `visible` are not validated, but a
    /// value of a JSON type the field cannot hold (not a string, number or
    /// boolean respectively) fails with `ConstructionError::UnexpectedType`.
    pub fn from_json(value: &Value) -> Result<Self, Report<ConstructionError>> {
        Self::read_json(value).attach_printable("Cannot create a BlendingInformation from JSON.")
    }

    fn checked(options: BlendingInformationOptions) -> Result<Self, Report<ConstructionError>> {
        Ok(Self {
            color: sequence(Field::Color, options.color)?,
            threshold_values: sequence(Field::ThresholdValues, options.threshold_values)?,
            limit_values: sequence(Field::LimitValues, options.limit_values)?,
            optical_path_identifier: options.optical_path_identifier,
            opacity: options.opacity,
            visible: options.visible,
        })
    }

    fn read_json(value: &Value) -> Result<Self, Report<ConstructionError>> {
        let options = object(value)?;
        let color = json_numbers::<COLOR_LEN>(options, Field::Color)?;
        let opacity = json_optional_number(options, Field::Opacity)?;
        let threshold_values = json_numbers::<RANGE_LEN>(options, Field::ThresholdValues)?;
        let limit_values = json_numbers::<RANGE_LEN>(options, Field::LimitValues)?;
        let visible = json_optional_bool(options, Field::Visible)?;
        let optical_path_identifier = json_optional_string(options, Field::OpticalPathIdentifier)?;

        Ok(Self { optical_path_identifier, color, opacity, threshold_values, limit_values, visible })
    }

    pub fn optical_path_identifier(&self) -> Option<&str> {
        self.optical_path_identifier.as_deref()
    }

    /// RGB color, each component conventionally 0-255.
    pub fn color(&self) -> [f64; COLOR_LEN] {
        self.color
    }

    /// Conventionally 0-1.
    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    /// Normalized lower and upper clip points, conventionally 0-1.
    pub fn threshold_values(&self) -> [f64; RANGE_LEN] {
        self.threshold_values
    }

    /// Lower and upper windowing bounds in raw intensity units,
    /// conventionally 0 to 2^bit depth.
    pub fn limit_values(&self) -> [f64; RANGE_LEN] {
        self.limit_values
    }

    pub fn visible(&self) -> Option<bool> {
        self.visible
    }

    pub fn with_color(&self, color: [f64; COLOR_LEN]) -> Self {
        Self { color, ..self.clone() }
    }

    pub fn with_opacity(&self, opacity: f64) -> Self {
        Self { opacity: Some(opacity), ..self.clone() }
    }

    pub fn with_threshold_values(&self, threshold_values: [f64; RANGE_LEN]) -> Self {
        Self { threshold_values, ..self.clone() }
    }

    pub fn with_limit_values(&self, limit_values: [f64; RANGE_LEN]) -> Self {
        Self { limit_values, ..self.clone() }
    }

    pub fn with_visible(&self, visible: bool) -> Self {
        Self { visible: Some(visible), ..self.clone() }
    }
}

impl TryFrom<BlendingInformationOptions> for BlendingInformation {
    type Error = Report<ConstructionError>;

    fn try_from(options: BlendingInformationOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl TryFrom<Value> for BlendingInformation {
    type Error = Report<ConstructionError>;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}
