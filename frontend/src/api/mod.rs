//! Backend Gateway: the HTTP/JSON contract with the aggregation service.
//!
//! All calls go against `/api/v1`, are issued once, and propagate failures to
//! the caller without any retry. Failure detection for `/query` is by
//! transport result and HTTP status only; a success body is expected to be
//! exactly the `{result:{values:[...]}}` envelope and is never inspected for
//! embedded error fields.

use common::error::{QueryError, UploadError};
use common::model::column::{ColumnInfo, ColumnOption};
use common::model::query::QuerySpec;
use common::model::result::{QueryResponse, ResultRow};
use gloo_net::http::Request;
use web_sys::{File, FormData};

const API_BASE: &str = "/api/v1";

/// `GET /tables` — names of all tables known to the backend.
pub async fn list_tables() -> Result<Vec<String>, QueryError> {
    let response = Request::get(&format!("{API_BASE}/tables"))
        .send()
        .await
        .map_err(QueryError::transport)?;
    if response.status() != 200 {
        return Err(QueryError::backend(
            response.text().await.unwrap_or_default(),
        ));
    }
    response
        .json::<Vec<String>>()
        .await
        .map_err(QueryError::malformed)
}

/// `GET /tables/columns?name=<table>` — columns eligible for grouping.
pub async fn list_group_columns(table: &str) -> Result<Vec<ColumnOption>, QueryError> {
    fetch_column_options("/tables/columns", table).await
}

/// `GET /tables/select-columns?name=<table>` — columns eligible for
/// aggregation. A separate endpoint from the grouping one: the backend may
/// exclude non-numeric columns here.
pub async fn list_select_columns(table: &str) -> Result<Vec<ColumnOption>, QueryError> {
    fetch_column_options("/tables/select-columns", table).await
}

async fn fetch_column_options(path: &str, table: &str) -> Result<Vec<ColumnOption>, QueryError> {
    let response = Request::get(&format!("{API_BASE}{path}"))
        .query([("name", table)])
        .send()
        .await
        .map_err(QueryError::transport)?;
    if response.status() != 200 {
        return Err(QueryError::backend(
            response.text().await.unwrap_or_default(),
        ));
    }
    let infos = response
        .json::<Vec<ColumnInfo>>()
        .await
        .map_err(QueryError::malformed)?;
    Ok(infos.into_iter().map(ColumnOption::from).collect())
}

/// `POST /query` — runs the grouped aggregation and returns the bucket rows.
pub async fn run_query(spec: &QuerySpec) -> Result<Vec<ResultRow>, QueryError> {
    let response = Request::post(&format!("{API_BASE}/query"))
        .json(spec)
        .map_err(QueryError::transport)?
        .send()
        .await
        .map_err(QueryError::transport)?;
    if response.status() != 200 {
        return Err(QueryError::backend(
            response.text().await.unwrap_or_default(),
        ));
    }
    let parsed = response
        .json::<QueryResponse>()
        .await
        .map_err(QueryError::malformed)?;
    Ok(parsed.result.values)
}

/// `POST /tables/upload?name=<table>` — multipart upload of a columnar data
/// file into `table`. The file travels in a form field named `file`; the
/// success body is the backend's plain-text confirmation.
pub async fn upload_file(table: &str, file: File) -> Result<String, UploadError> {
    let form = FormData::new().map_err(|err| UploadError::Transport(format!("{err:?}")))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|err| UploadError::Transport(format!("{err:?}")))?;

    let response = Request::post(&format!("{API_BASE}/tables/upload"))
        .query([("name", table)])
        .body(form)
        .map_err(|err| UploadError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| UploadError::Transport(err.to_string()))?;

    let body = response.text().await.unwrap_or_default();
    if response.status() == 200 {
        Ok(body)
    } else {
        Err(UploadError::Backend(body))
    }
}
