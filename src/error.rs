// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decode error types.
//!
//! Every failure carries enough context (element, field, raw text) to point
//! at the offending part of the document. The decoder never returns a
//! partially built activity.

use std::io;

/// Errors produced while decoding a GPX document.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed XML: {0}")]
    Malformed(String),

    /// `found == 0` means the child is absent, anything above one is a duplicate.
    #[error("Expected exactly one <{child}> in <{parent}>, found {found}")]
    Structure {
        parent: &'static str,
        child: &'static str,
        found: usize,
    },

    #[error("Missing required field '{field}' in <{element}>")]
    MissingField {
        element: &'static str,
        field: &'static str,
    },

    #[error("Invalid number for '{field}': {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("Invalid timestamp for '{field}': {value:?} (expected format {format})")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        format: &'static str,
    },
}

/// Coarse failure category, for callers that only need to branch on the
/// kind of problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    Io,
    MalformedXml,
    StructuralMismatch,
    MissingRequiredField,
    FormatMismatch,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::Io(_) => DecodeErrorKind::Io,
            DecodeError::Xml(_) | DecodeError::Malformed(_) => DecodeErrorKind::MalformedXml,
            DecodeError::Structure { .. } => DecodeErrorKind::StructuralMismatch,
            DecodeError::MissingField { .. } => DecodeErrorKind::MissingRequiredField,
            DecodeError::InvalidNumber { .. } | DecodeError::InvalidTimestamp { .. } => {
                DecodeErrorKind::FormatMismatch
            }
        }
    }
}

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_message() {
        let err = DecodeError::Structure {
            parent: "gpx",
            child: "metadata",
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected exactly one <metadata> in <gpx>, found 2"
        );
        assert_eq!(err.kind(), DecodeErrorKind::StructuralMismatch);
    }

    #[test]
    fn test_invalid_number_carries_raw_text() {
        let err = DecodeError::InvalidNumber {
            field: "hr".to_string(),
            value: "fast".to_string(),
        };
        assert!(err.to_string().contains("\"fast\""));
        assert_eq!(err.kind(), DecodeErrorKind::FormatMismatch);
    }
}
