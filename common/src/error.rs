use thiserror::Error;

/// Pre-submission validation failure.
///
/// The checks in [`crate::session::QuerySession::validate`] run in a fixed
/// order and the first failing one wins, so the UI surfaces exactly one of
/// these messages at a time. A validation failure blocks the network call
/// entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select a table name.")]
    TableNotSelected,
    #[error("Group columns must not be blank.")]
    BlankGroupColumn,
    #[error("Select columns must not be blank.")]
    BlankSelectColumn,
    #[error("At least one group column is required.")]
    MissingGroupColumns,
    #[error("At least one select column is required.")]
    MissingSelectColumns,
    #[error("Duplicate group column: {0}.")]
    DuplicateGroupColumn(String),
    #[error("Select column \"{0}\" cannot be the same as a group column.")]
    SelectConflictsWithGroup(String),
}

/// Failure of a query or table-metadata request.
///
/// `message` is always present; `inner_message` carries the underlying
/// transport error when there is one. Both are shown in the error panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QueryError {
    pub message: String,
    pub inner_message: Option<String>,
}

impl QueryError {
    /// The request never produced an HTTP response (network failure,
    /// CORS rejection, aborted connection).
    pub fn transport(inner: impl ToString) -> Self {
        Self {
            message: "Failed to fetch data".to_string(),
            inner_message: Some(inner.to_string()),
        }
    }

    /// The backend answered with a non-success status; `body` is its
    /// plain-text error body.
    pub fn backend(body: impl Into<String>) -> Self {
        Self {
            message: body.into(),
            inner_message: None,
        }
    }

    /// The response arrived with a success status but did not match the
    /// documented shape.
    pub fn malformed(inner: impl ToString) -> Self {
        Self {
            message: "Malformed response from backend".to_string(),
            inner_message: Some(inner.to_string()),
        }
    }
}

/// Failure of the file-upload flow, client-side or backend-reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Table name is required.")]
    MissingTableName,
    #[error("Select a file to upload.")]
    MissingFile,
    #[error("{0}")]
    Backend(String),
    #[error("Upload failed: {0}")]
    Transport(String),
}
