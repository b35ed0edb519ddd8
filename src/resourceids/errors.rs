//! Resource ID parsing errors.

use thiserror::Error;

/// Errors returned when a string is not a valid Resource ID of a given type.
///
/// Messages spell out the expected shape with an example ID so they can be
/// shown to users as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// The input was empty.
    #[error("parsing {display_name}: the Resource ID was empty")]
    Empty {
        /// The Resource ID type being parsed.
        display_name: &'static str,
    },

    /// A segment was missing, empty or did not match its literal value.
    #[error(
        "parsing {input:?}: the segment {segment:?} was not specified in the Resource ID\n\n\
         Expected a {display_name} that matched:\n\n> {example}\n\n\
         The segment {segment:?} {description}"
    )]
    SegmentNotSpecified {
        /// The Resource ID type being parsed.
        display_name: &'static str,
        /// The input string.
        input: String,
        /// The name of the missing segment.
        segment: &'static str,
        /// What the segment should contain.
        description: String,
        /// An example ID of the expected type.
        example: String,
    },

    /// The input had more components than the template allows.
    #[error(
        "parsing {input:?}: the number of segments didn't match\n\n\
         Expected a {display_name} that matched (containing {expected} segments):\n\n> {example}\n\n\
         However this value was provided (which was parsed into {actual} segments):\n\n> {input}\n\n\
         The following Segments are expected:\n\n{segments}"
    )]
    NumberOfSegmentsDidntMatch {
        /// The Resource ID type being parsed.
        display_name: &'static str,
        /// The input string.
        input: String,
        /// Number of segments in the template.
        expected: usize,
        /// Number of components in the input.
        actual: usize,
        /// An example ID of the expected type.
        example: String,
        /// One line per expected segment.
        segments: String,
    },

    /// A constant segment held a value outside its allowed set.
    #[error(
        "parsing {input:?}: the segment {segment:?} should be one of {possible_values:?} but got {value:?}"
    )]
    InvalidConstant {
        /// The Resource ID type being parsed.
        display_name: &'static str,
        /// The input string.
        input: String,
        /// The name of the constant segment.
        segment: &'static str,
        /// The value found.
        value: String,
        /// The accepted values.
        possible_values: &'static [&'static str],
    },

    /// A parse result lacked a value the ID type requires.
    #[error("parsing {display_name}: the segment {segment:?} was not found in the parse result")]
    MissingValue {
        /// The Resource ID type being parsed.
        display_name: &'static str,
        /// The missing key.
        segment: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_not_specified_message() {
        let error = ResourceIdError::SegmentNotSpecified {
            display_name: "Resource Group",
            input: "/subscriptions/1".to_string(),
            segment: "resourceGroupName",
            description: "should be the name of the Resource Group".to_string(),
            example: "/subscriptions/1/resourceGroups/example-resource-group".to_string(),
        };
        let message = error.to_string();
        assert!(message.starts_with(
            "parsing \"/subscriptions/1\": the segment \"resourceGroupName\" was not specified"
        ));
        assert!(message.contains("> /subscriptions/1/resourceGroups/example-resource-group"));
    }

    #[test]
    fn test_empty_message() {
        let error = ResourceIdError::Empty {
            display_name: "Subscription",
        };
        assert_eq!(error.to_string(), "parsing Subscription: the Resource ID was empty");
    }
}
