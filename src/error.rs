//! Error types for reign parsing and aggregation.

use thiserror::Error;

/// Errors produced while deriving reign durations or aggregating records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    /// A reign range did not split into one or two segments.
    #[error("malformed reign range {years:?}: expected \"start\", \"start-\" or \"start-end\"")]
    MalformedReign { years: String },

    /// A reign range segment is not an integer year.
    #[error("invalid year {value:?} in reign range {years:?}")]
    YearParse { years: String, value: String },

    /// An aggregate query was invoked on zero records.
    #[error("no monarch records to aggregate")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_malformed_reign() {
        let err = StatError::MalformedReign {
            years: "1066-1087-1100".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed reign range"));
        assert!(msg.contains("1066-1087-1100"));
    }

    #[test]
    fn test_error_display_year_parse() {
        let err = StatError::YearParse {
            years: "abc-1100".to_string(),
            value: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid year"));
        assert!(msg.contains("\"abc\""));
        assert!(msg.contains("abc-1100"));
    }

    #[test]
    fn test_error_display_empty_input() {
        let err = StatError::EmptyInput;
        assert_eq!(err.to_string(), "no monarch records to aggregate");
    }
}
