use derive_builder::Builder;
use error_stack::{Report, ResultExt};
use serde_json::Value;

use crate::construction_error::ConstructionError;
use crate::field::Field;
use crate::validation::{json_string, json_strings, object, require};

/// Options for creating a `Channel`. Every field is required.
///
/// # Examples
///
/// ```
/// # use microscopy_channel_core::channel::{Channel, ChannelOptionsBuilder};
/// let options = ChannelOptionsBuilder::default()
///     .optical_path_identifier("Cy5")
///     .study_instance_uid("1.2.3")
///     .series_instance_uid("1.2.3.4")
///     .sop_instance_uids(vec!["1.2.3.4.5".to_owned()])
///     .build().unwrap();
/// let channel = Channel::new(options).unwrap();
/// assert_eq!(channel.optical_path_identifier(), "Cy5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct ChannelOptions {
    pub optical_path_identifier: Option<String>,
    pub study_instance_uid: Option<String>,
    pub series_instance_uid: Option<String>,
    pub sop_instance_uids: Option<Vec<String>>,
}

/// Monochrome image stream acquired through one optical path.
///
/// Identifies the study and series the stream belongs to and the image
/// instances it is made of. A `Channel` cannot be changed once created.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "serde_json::Value")]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Channel {
    #[serde(rename = "opticalPathIdentifier")]
    optical_path_identifier: String,
    #[serde(rename = "studyInstanceUID")]
    study_instance_uid: String,
    #[serde(rename = "seriesInstanceUID")]
    series_instance_uid: String,
    #[serde(rename = "sopInstanceUIDs")]
    sop_instance_uids: Vec<String>,
}

impl Channel {
    /// Creates a channel.
    ///
    /// # Errors
    ///
    /// `ConstructionError::MissingField` if any option is `None`. Empty
    /// strings and an empty instance list are accepted.
    pub fn new(options: ChannelOptions) -> Result<Self, Report<ConstructionError>> {
        Self::checked(options).attach_printable("Cannot create a Channel.")
    }

    /// Creates a channel from an untyped options document such as
    /// `{"opticalPathIdentifier": "Cy5", "studyInstanceUID": "1.2.3", ...}`.
    pub fn from_json(value: &Value) -> Result<Self, Report<ConstructionError>> {
        Self::read_json(value).attach_printable("Cannot create a Channel from JSON.")
    }

    fn checked(options: ChannelOptions) -> Result<Self, Report<ConstructionError>> {
        Ok(Self {
            optical_path_identifier: require(Field::OpticalPathIdentifier, options.optical_path_identifier)?,
            study_instance_uid: require(Field::StudyInstanceUid, options.study_instance_uid)?,
            series_instance_uid: require(Field::SeriesInstanceUid, options.series_instance_uid)?,
            sop_instance_uids: require(Field::SopInstanceUids, options.sop_instance_uids)?,
        })
    }

    fn read_json(value: &Value) -> Result<Self, Report<ConstructionError>> {
        let options = object(value)?;
        Ok(Self {
            optical_path_identifier: json_string(options, Field::OpticalPathIdentifier)?,
            study_instance_uid: json_string(options, Field::StudyInstanceUid)?,
            series_instance_uid: json_string(options, Field::SeriesInstanceUid)?,
            sop_instance_uids: json_strings(options, Field::SopInstanceUids)?,
        })
    }

    pub fn optical_path_identifier(&self) -> &str {
        &self.optical_path_identifier
    }

    pub fn study_instance_uid(&self) -> &str {
        &self.study_instance_uid
    }

    pub fn series_instance_uid(&self) -> &str {
        &self.series_instance_uid
    }

    /// SOP instance UIDs of the images that make up this channel, in the
    /// order they were given.
    pub fn sop_instance_uids(&self) -> &[String] {
        &self.sop_instance_uids
    }
}

impl TryFrom<ChannelOptions> for Channel {
    type Error = Report<ConstructionError>;

    fn try_from(options: ChannelOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl TryFrom<Value> for Channel {
    type Error = Report<ConstructionError>;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::channel::{Channel, ChannelOptions, ChannelOptionsBuilder};
    use crate::construction_error::ConstructionError;
    use crate::field::Field;

    fn cy5() -> ChannelOptions {
        ChannelOptionsBuilder::default()
            .optical_path_identifier("Cy5")
            .study_instance_uid("1.2.3")
            .series_instance_uid("1.2.3.4")
            .sop_instance_uids(vec!["1.2.3.4.5".to_owned()])
            .build().unwrap()
    }

    #[test]
    fn create() {
        let channel = Channel::new(cy5()).unwrap();
        assert_eq!(channel.optical_path_identifier(), "Cy5");
        assert_eq!(channel.study_instance_uid(), "1.2.3");
        assert_eq!(channel.series_instance_uid(), "1.2.3.4");
        assert_eq!(channel.sop_instance_uids(), &["1.2.3.4.5".to_owned()]);
    }

    #[test]
    fn sop_instance_uid_order_is_kept() {
        let uids = vec!["1.2.3.4.7".to_owned(), "1.2.3.4.5".to_owned(), "1.2.3.4.6".to_owned()];
        let channel = Channel::new(ChannelOptions {
            sop_instance_uids: Some(uids.clone()),
            ..cy5()
        }).unwrap();
        assert_eq!(channel.sop_instance_uids(), uids.as_slice());
    }

    #[test]
    fn empty_values_are_accepted() {
        let channel = Channel::new(ChannelOptions {
            optical_path_identifier: Some(String::new()),
            sop_instance_uids: Some(vec![]),
            ..cy5()
        }).unwrap();
        assert_eq!(channel.optical_path_identifier(), "");
        assert!(channel.sop_instance_uids().is_empty());
    }

    #[test]
    fn missing_sop_instance_uids() {
        let options = ChannelOptionsBuilder::default()
            .optical_path_identifier("Cy5")
            .study_instance_uid("1.2.3")
            .series_instance_uid("1.2.3.4")
            .build().unwrap();
        let err = Channel::new(options).unwrap_err();
        assert_eq!(*err.current_context(), ConstructionError::MissingField { field: Field::SopInstanceUids });
    }

    #[test]
    fn each_field_is_required() {
        let cases = [
            (ChannelOptions { optical_path_identifier: None, ..cy5() }, Field::OpticalPathIdentifier),
            (ChannelOptions { study_instance_uid: None, ..cy5() }, Field::StudyInstanceUid),
            (ChannelOptions { series_instance_uid: None, ..cy5() }, Field::SeriesInstanceUid),
            (ChannelOptions { sop_instance_uids: None, ..cy5() }, Field::SopInstanceUids),
        ];
        for (options, field) in cases {
            let err = Channel::try_from(options).unwrap_err();
            assert_eq!(*err.current_context(), ConstructionError::MissingField { field });
        }
    }

    #[test]
    fn first_missing_field_is_reported() {
        let err = Channel::new(ChannelOptions::default()).unwrap_err();
        assert_eq!(err.current_context().field(), Some(Field::OpticalPathIdentifier));
    }

    #[test]
    fn caller_vector_is_not_shared() {
        let mut uids = vec!["1.2.3.4.5".to_owned()];
        let channel = Channel::new(ChannelOptions { sop_instance_uids: Some(uids.clone()), ..cy5() }).unwrap();
        uids.push("1.2.3.4.6".to_owned());
        uids[0] = "9.9.9".to_owned();
        assert_eq!(channel.sop_instance_uids(), &["1.2.3.4.5".to_owned()]);
    }

    #[test]
    fn from_json() {
        let channel = Channel::from_json(&json!({
            "opticalPathIdentifier": "Cy5",
            "studyInstanceUID": "1.2.3",
            "seriesInstanceUID": "1.2.3.4",
            "sopInstanceUIDs": ["1.2.3.4.5", "1.2.3.4.6"]
        })).unwrap();
        assert_eq!(channel, Channel::new(ChannelOptions {
            sop_instance_uids: Some(vec!["1.2.3.4.5".to_owned(), "1.2.3.4.6".to_owned()]),
            ..cy5()
        }).unwrap());
    }

    #[test]
    fn from_json_missing_or_null() {
        let err = Channel::from_json(&json!({
            "opticalPathIdentifier": "Cy5",
            "studyInstanceUID": "1.2.3",
            "seriesInstanceUID": "1.2.3.4"
        })).unwrap_err();
        assert_eq!(*err.current_context(), ConstructionError::MissingField { field: Field::SopInstanceUids });

        let err = Channel::from_json(&json!({
            "opticalPathIdentifier": "Cy5",
            "studyInstanceUID": null,
            "seriesInstanceUID": "1.2.3.4",
            "sopInstanceUIDs": []
        })).unwrap_err();
        assert_eq!(*err.current_context(), ConstructionError::MissingField { field: Field::StudyInstanceUid });
    }

    #[test]
    fn from_json_wrong_types() {
        let err = Channel::from_json(&json!({
            "opticalPathIdentifier": 5,
            "studyInstanceUID": "1.2.3",
            "seriesInstanceUID": "1.2.3.4",
            "sopInstanceUIDs": []
        })).unwrap_err();
        assert_eq!(
            *err.current_context(),
            ConstructionError::UnexpectedType { field: Field::OpticalPathIdentifier, expected: "a string" }
        );

        let err = Channel::from_json(&json!({
            "opticalPathIdentifier": "Cy5",
            "studyInstanceUID": "1.2.3",
            "seriesInstanceUID": "1.2.3.4",
            "sopInstanceUIDs": ["1.2.3.4.5", 6]
        })).unwrap_err();
        assert_eq!(
            *err.current_context(),
            ConstructionError::UnexpectedType { field: Field::SopInstanceUids, expected: "an array of strings" }
        );

        let err = Channel::from_json(&json!("Cy5")).unwrap_err();
        assert_eq!(*err.current_context(), ConstructionError::NotAnObject);
    }

    #[test]
    fn can_serialize_channel() {
        let json_str = serde_json::to_string(&Channel::new(cy5()).unwrap()).unwrap();
        let json: Value = serde_json::from_str(&json_str).unwrap();
        assert_eq!(
            json,
            json!({
                "opticalPathIdentifier": "Cy5",
                "studyInstanceUID": "1.2.3",
                "seriesInstanceUID": "1.2.3.4",
                "sopInstanceUIDs": ["1.2.3.4.5"]
            })
        );
    }

    #[test]
    fn can_deserialize_channel() {
        let channel: Channel = serde_json::from_str(r#"
            {
                "opticalPathIdentifier": "Cy5",
                "studyInstanceUID": "1.2.3",
                "seriesInstanceUID": "1.2.3.4",
                "sopInstanceUIDs": ["1.2.3.4.5"]
            }
        "#).unwrap();
        assert_eq!(channel, Channel::new(cy5()).unwrap());
    }

    #[test]
    fn deserialize_validates() {
        let result: Result<Channel, _> = serde_json::from_str(r#"
            { "opticalPathIdentifier": "Cy5", "studyInstanceUID": "1.2.3", "seriesInstanceUID": "1.2.3.4" }
        "#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("sopInstanceUIDs"));
    }
}
