use std::fmt;

/// Names of the option keys accepted by `Channel` and `BlendingInformation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OpticalPathIdentifier,
    StudyInstanceUid,
    SeriesInstanceUid,
    SopInstanceUids,
    Color,
    Opacity,
    ThresholdValues,
    LimitValues,
    Visible,
}

impl Field {
    /// Key used in options documents and in the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            Field::OpticalPathIdentifier => "opticalPathIdentifier",
            Field::StudyInstanceUid => "studyInstanceUID",
            Field::SeriesInstanceUid => "seriesInstanceUID",
            Field::SopInstanceUids => "sopInstanceUIDs",
            Field::Color => "color",
            Field::Opacity => "opacity",
            Field::ThresholdValues => "thresholdValues",
            Field::LimitValues => "limitValues",
            Field::Visible => "visible",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use crate::field::Field;

    #[test]
    fn uid_keys_keep_upper_case_suffix() {
        assert_eq!(Field::StudyInstanceUid.key(), "studyInstanceUID");
        assert_eq!(Field::SeriesInstanceUid.key(), "seriesInstanceUID");
        assert_eq!(Field::SopInstanceUids.key(), "sopInstanceUIDs");
    }

    #[test]
    fn display() {
        assert_eq!(Field::ThresholdValues.to_string(), "thresholdValues");
    }
}
