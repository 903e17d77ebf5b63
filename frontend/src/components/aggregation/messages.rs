use common::error::{QueryError, UploadError};
use common::model::column::ColumnOption;
use common::model::query::{AggregateFunction, QuerySpec};
use common::model::result::ResultRow;

pub enum Msg {
    TablesLoaded(Result<Vec<String>, QueryError>),
    TableSelected(String),
    GroupOptionsLoaded {
        token: u64,
        outcome: Result<Vec<ColumnOption>, QueryError>,
    },
    SelectOptionsLoaded {
        token: u64,
        outcome: Result<Vec<ColumnOption>, QueryError>,
    },
    AddGroupColumn,
    RemoveGroupColumn(usize),
    GroupColumnChanged(usize, String),
    AddSelectColumn,
    RemoveSelectColumn(usize),
    SelectColumnChanged(usize, String),
    SelectFunctionChanged(usize, AggregateFunction),
    Submit,
    QueryFinished {
        token: u64,
        spec: QuerySpec,
        outcome: Result<Vec<ResultRow>, QueryError>,
    },
    OpenUploadDialog,
    CloseUploadDialog,
    UploadTableChanged(String),
    UploadFileChanged(Option<web_sys::File>),
    StartUpload,
    UploadFinished(Result<String, UploadError>),
}
