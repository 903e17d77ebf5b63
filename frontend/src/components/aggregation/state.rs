//! State container for the aggregation query form.
//!
//! Everything the view reads lives here. The pure form state (the in-progress
//! query specification) is a [`QuerySession`] from `common`, so the
//! validation and submission rules are exercised without this component;
//! the fields around it hold fetched metadata, request bookkeeping, and the
//! upload dialog state.

use common::error::{QueryError, ValidationError};
use common::model::column::ColumnOption;
use common::model::query::QuerySpec;
use common::model::result::ResultRow;
use common::session::{QuerySession, RequestToken, UploadForm};
use yew::prelude::*;

/// Error currently shown in the inline error panel. Validation failures carry
/// a single message; query failures carry a message plus the optional
/// transport detail.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    Validation(ValidationError),
    Query(QueryError),
}

pub struct AggregationQueryComponent {
    /// In-progress query specification (pure core, lives in `common`).
    pub session: QuerySession,

    /// Table names fetched on first render. Stays empty when the fetch fails.
    pub tables: Vec<String>,

    /// Group-eligible column options for the selected table.
    pub group_options: Vec<ColumnOption>,

    /// Aggregation-eligible column options for the selected table. Fetched
    /// from its own endpoint; not necessarily the same set as `group_options`.
    pub select_options: Vec<ColumnOption>,

    /// Busy flag: a query is in flight. Set on submit, cleared exactly once
    /// when the matching completion arrives.
    pub loading: bool,

    /// Rows of the last successful query, paired with the spec that produced
    /// them so the renderer keeps the submitted column ordering.
    pub result: Option<(QuerySpec, Vec<ResultRow>)>,

    /// Error shown in the panel; mutually exclusive with `result`.
    pub error: Option<FormError>,

    /// Sequence tokens guarding against stale completions.
    pub query_token: RequestToken,
    pub columns_token: RequestToken,

    /// Upload dialog state.
    pub upload: UploadForm,
    pub upload_file: Option<web_sys::File>,
    pub uploading: bool,
    pub upload_dialog_ref: NodeRef,
    pub file_input_ref: NodeRef,

    /// Guard so the first-render table fetch runs once.
    pub loaded: bool,
}

impl AggregationQueryComponent {
    pub fn new() -> Self {
        Self {
            session: QuerySession::new(),
            tables: Vec::new(),
            group_options: Vec::new(),
            select_options: Vec::new(),
            loading: false,
            result: None,
            error: None,
            query_token: RequestToken::default(),
            columns_token: RequestToken::default(),
            upload: UploadForm::default(),
            upload_file: None,
            uploading: false,
            upload_dialog_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
