//! Error types for the trainer client.

use thiserror::Error;

/// Everything that can go wrong between a click and a request leaving the page.
///
/// HTTP failures are not errors here: the transport reports them to the user
/// directly and never hands them back to the caller.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The clicked element and its parent carry no `prefix_index` id.
    #[error("cannot derive a row index from element id '{id}'")]
    RowIndex {
        /// The id that was tried.
        id: String,
    },

    /// An input the handler needs is not in the document.
    #[error("input '{id}' is not on the page")]
    MissingField {
        /// Element id of the missing input.
        id: String,
    },

    /// The age input does not start with a whole number.
    #[error("age '{value}' is not a whole number")]
    InvalidAge {
        /// The raw input text.
        value: String,
    },

    /// An update was requested for a row the last list did not contain.
    #[error("no listed record for row {index}")]
    MissingOriginal {
        /// Row index that had no original.
        index: usize,
    },

    /// A request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A list response was not a JSON array of trainers.
    #[error("failed to decode trainer list: {0}")]
    Decode(#[source] serde_json::Error),

    /// The inline configuration block is not valid JSON for `ClientConfig`.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// Configuration parsed but failed validation.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for trainer client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    #[must_use]
    pub fn row_index(id: impl Into<String>) -> Self {
        Self::RowIndex { id: id.into() }
    }

    #[must_use]
    pub fn missing_field(id: impl Into<String>) -> Self {
        Self::MissingField { id: id.into() }
    }

    #[must_use]
    pub fn invalid_age(value: impl Into<String>) -> Self {
        Self::InvalidAge { value: value.into() }
    }

    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
