// crates/feed-parser/src/error.rs
//! Error types for feed normalization

use thiserror::Error;

/// Result type for feed parser operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while normalizing a feed document
#[derive(Debug, Error)]
pub enum FeedError {
    /// The document is not well-formed, could not be transcoded, or lacks a
    /// required structural field
    #[error("Malformed document: {0}")]
    DocumentMalformed(String),

    /// A date-bearing field matched none of the known layouts
    #[error("Unrecognized date format {input:?} (tried {attempted} layouts)")]
    DateFormatUnrecognized {
        /// The raw field value, verbatim
        input: String,
        /// Number of layouts attempted before giving up
        attempted: usize,
    },

    /// Every configured adapter rejected the document
    #[error("Unknown feed format")]
    UnknownFeedFormat {
        /// The error reported by the last adapter tried, if any adapter ran
        #[source]
        last: Option<Box<FeedError>>,
    },

    /// Reading the document from its source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// Shorthand for a `DocumentMalformed` error
    pub fn malformed(reason: impl Into<String>) -> Self {
        FeedError::DocumentMalformed(reason.into())
    }

    /// Returns true for `DocumentMalformed`
    pub fn is_malformed(&self) -> bool {
        matches!(self, FeedError::DocumentMalformed(_))
    }

    /// Returns true for `DateFormatUnrecognized`
    pub fn is_date_error(&self) -> bool {
        matches!(self, FeedError::DateFormatUnrecognized { .. })
    }

    /// Returns true for `UnknownFeedFormat`
    pub fn is_unknown_format(&self) -> bool {
        matches!(self, FeedError::UnknownFeedFormat { .. })
    }

    /// The last adapter error wrapped by `UnknownFeedFormat`
    pub fn last_attempt(&self) -> Option<&FeedError> {
        match self {
            FeedError::UnknownFeedFormat { last } => last.as_deref(),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for FeedError {
    fn from(err: quick_xml::Error) -> Self {
        FeedError::DocumentMalformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = FeedError::malformed("missing <channel>");
        assert!(format!("{}", err).contains("Malformed document"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_date_error_carries_input() {
        let err = FeedError::DateFormatUnrecognized {
            input: "yesterday".to_string(),
            attempted: 12,
        };
        let text = err.to_string();
        assert!(text.contains("\"yesterday\""));
        assert!(text.contains("12 layouts"));
        assert!(err.is_date_error());
    }

    #[test]
    fn test_unknown_format_exposes_last_attempt() {
        let err = FeedError::UnknownFeedFormat {
            last: Some(Box::new(FeedError::malformed("no root element"))),
        };
        assert!(err.is_unknown_format());
        assert!(err.last_attempt().is_some_and(FeedError::is_malformed));
        assert!(err.source().is_some());
        // The outer message never names a format
        assert_eq!(err.to_string(), "Unknown feed format");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let feed_err = FeedError::from(io_err);
        assert!(matches!(feed_err, FeedError::Io(_)));
    }
}
