//! Pure form-state core of the query client.
//!
//! The frontend component owns a [`QuerySession`] and maps every user action
//! to one of the transition methods here; the view only reads the fields.
//! Keeping the transitions free of any rendering or browser types is what
//! lets validation and submission logic be tested on the host.

use crate::error::{UploadError, ValidationError};
use crate::model::query::{AggregateFunction, QuerySpec, SelectColumn};

/// In-progress query specification for one browser session.
///
/// Both column lists are ordered and may hold blank entries while the user is
/// still editing; [`QuerySession::validate`] decides when the state is
/// submittable and [`QuerySession::build_spec`] turns it into a [`QuerySpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySession {
    pub table_name: String,
    pub group_columns: Vec<String>,
    pub select_columns: Vec<SelectColumn>,
}

impl Default for QuerySession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuerySession {
    /// A fresh session starts with no table and one empty row in each list,
    /// so the form always shows something to edit.
    pub fn new() -> Self {
        Self {
            table_name: String::new(),
            group_columns: vec![String::new()],
            select_columns: vec![SelectColumn::default()],
        }
    }

    /// Switches the active table. Column selections made against the previous
    /// table are meaningless for the new one, so both lists reset to a single
    /// empty row; the caller is expected to refetch column metadata.
    pub fn set_table(&mut self, name: impl Into<String>) {
        self.table_name = name.into();
        self.group_columns = vec![String::new()];
        self.select_columns = vec![SelectColumn::default()];
    }

    pub fn add_group_column(&mut self) {
        self.group_columns.push(String::new());
    }

    /// Removes the group column at `index`; later entries shift down.
    /// Out-of-range indices are ignored.
    pub fn remove_group_column(&mut self, index: usize) {
        if index < self.group_columns.len() {
            self.group_columns.remove(index);
        }
    }

    pub fn set_group_column(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.group_columns.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Appends a select column; the function defaults to `Minimum`.
    pub fn add_select_column(&mut self) {
        self.select_columns.push(SelectColumn::default());
    }

    pub fn remove_select_column(&mut self, index: usize) {
        if index < self.select_columns.len() {
            self.select_columns.remove(index);
        }
    }

    pub fn set_select_column(&mut self, index: usize, column: impl Into<String>) {
        if let Some(slot) = self.select_columns.get_mut(index) {
            slot.column = column.into();
        }
    }

    pub fn set_select_function(&mut self, index: usize, function: AggregateFunction) {
        if let Some(slot) = self.select_columns.get_mut(index) {
            slot.function = function;
        }
    }

    /// Checks the session against the submission rules, in order; the first
    /// failing rule is returned and nothing further is checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.table_name.trim().is_empty() {
            return Err(ValidationError::TableNotSelected);
        }
        if self.group_columns.iter().any(|col| col.trim().is_empty()) {
            return Err(ValidationError::BlankGroupColumn);
        }
        if self
            .select_columns
            .iter()
            .any(|sel| sel.column.trim().is_empty())
        {
            return Err(ValidationError::BlankSelectColumn);
        }
        let groups: Vec<&str> = self
            .group_columns
            .iter()
            .map(|col| col.trim())
            .filter(|col| !col.is_empty())
            .collect();
        if groups.is_empty() {
            return Err(ValidationError::MissingGroupColumns);
        }
        let selects: Vec<&str> = self
            .select_columns
            .iter()
            .map(|sel| sel.column.trim())
            .filter(|col| !col.is_empty())
            .collect();
        if selects.is_empty() {
            return Err(ValidationError::MissingSelectColumns);
        }
        for (i, col) in groups.iter().enumerate() {
            if groups[..i].contains(col) {
                return Err(ValidationError::DuplicateGroupColumn(col.to_string()));
            }
        }
        if let Some(conflict) = selects.iter().find(|col| groups.contains(col)) {
            return Err(ValidationError::SelectConflictsWithGroup(
                conflict.to_string(),
            ));
        }
        Ok(())
    }

    /// Validates and, on success, builds the wire [`QuerySpec`] with blank
    /// rows stripped and surviving values trimmed.
    pub fn build_spec(&self) -> Result<QuerySpec, ValidationError> {
        self.validate()?;
        Ok(QuerySpec {
            table_name: self.table_name.trim().to_string(),
            group_columns: self
                .group_columns
                .iter()
                .map(|col| col.trim())
                .filter(|col| !col.is_empty())
                .map(str::to_string)
                .collect(),
            select: self
                .select_columns
                .iter()
                .filter(|sel| !sel.column.trim().is_empty())
                .map(|sel| SelectColumn::new(sel.column.trim(), sel.function))
                .collect(),
        })
    }
}

/// In-progress upload specification: target table plus whether a file has
/// been picked. The file handle itself is a browser type and stays in the
/// frontend; only its presence matters for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub table_name: String,
    pub has_file: bool,
}

impl UploadForm {
    /// Client-side checks run before any network call: the table name is
    /// checked first, then the file.
    pub fn validate(&self) -> Result<(), UploadError> {
        if self.table_name.trim().is_empty() {
            return Err(UploadError::MissingTableName);
        }
        if !self.has_file {
            return Err(UploadError::MissingFile);
        }
        Ok(())
    }
}

/// Monotonic sequence guarding against stale async completions.
///
/// Every dispatched request takes a token from [`RequestToken::next`]; the
/// completion handler calls [`RequestToken::is_current`] and drops the result
/// if a newer request has been issued in the meantime. A slow response from
/// an old submission can therefore never overwrite fresher state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestToken {
    current: u64,
}

impl RequestToken {
    pub fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.current == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> QuerySession {
        let mut session = QuerySession::new();
        session.table_name = "sales".to_string();
        session.set_group_column(0, "region");
        session.add_group_column();
        session.set_group_column(1, "year");
        session.set_select_column(0, "amount");
        session.set_select_function(0, AggregateFunction::Sum);
        session
    }

    #[test]
    fn complete_session_validates() {
        assert_eq!(filled_session().validate(), Ok(()));
    }

    #[test]
    fn empty_table_fails_first() {
        // Everything else invalid too; the table check still wins.
        let session = QuerySession::new();
        assert_eq!(session.validate(), Err(ValidationError::TableNotSelected));
    }

    #[test]
    fn blank_group_column_is_reported() {
        let mut session = filled_session();
        session.add_group_column();
        assert_eq!(session.validate(), Err(ValidationError::BlankGroupColumn));
    }

    #[test]
    fn blank_select_column_is_reported() {
        let mut session = filled_session();
        session.add_select_column();
        assert_eq!(session.validate(), Err(ValidationError::BlankSelectColumn));
    }

    #[test]
    fn emptied_group_list_needs_at_least_one() {
        let mut session = filled_session();
        session.remove_group_column(1);
        session.remove_group_column(0);
        assert_eq!(
            session.validate(),
            Err(ValidationError::MissingGroupColumns)
        );
    }

    #[test]
    fn emptied_select_list_needs_at_least_one() {
        let mut session = filled_session();
        session.remove_select_column(0);
        assert_eq!(
            session.validate(),
            Err(ValidationError::MissingSelectColumns)
        );
    }

    #[test]
    fn duplicate_group_columns_are_rejected() {
        let mut session = filled_session();
        session.add_group_column();
        session.set_group_column(2, "region");
        assert_eq!(
            session.validate(),
            Err(ValidationError::DuplicateGroupColumn("region".to_string()))
        );
    }

    #[test]
    fn select_column_may_not_repeat_a_group_column() {
        let mut session = filled_session();
        session.set_select_column(0, "region");
        assert_eq!(
            session.validate(),
            Err(ValidationError::SelectConflictsWithGroup(
                "region".to_string()
            ))
        );
        assert!(session
            .validate()
            .unwrap_err()
            .to_string()
            .contains("cannot be the same"));
    }

    #[test]
    fn build_spec_trims_values() {
        let mut session = filled_session();
        session.set_group_column(0, " region ");
        let spec = session.build_spec().unwrap();
        assert_eq!(spec.table_name, "sales");
        assert_eq!(spec.group_columns, vec!["region", "year"]);
        assert_eq!(spec.select.len(), 1);
        assert_eq!(spec.select[0].column, "amount");
        assert_eq!(spec.select[0].function, AggregateFunction::Sum);
    }

    #[test]
    fn set_table_resets_column_lists() {
        let mut session = filled_session();
        session.set_table("inventory");
        assert_eq!(session.table_name, "inventory");
        assert_eq!(session.group_columns, vec![String::new()]);
        assert_eq!(session.select_columns, vec![SelectColumn::default()]);
    }

    #[test]
    fn removal_reindexes_and_ignores_out_of_range() {
        let mut session = filled_session();
        session.remove_group_column(0);
        assert_eq!(session.group_columns, vec!["year".to_string()]);
        session.remove_group_column(5);
        assert_eq!(session.group_columns.len(), 1);
    }

    #[test]
    fn upload_checks_table_name_before_file() {
        let form = UploadForm::default();
        assert_eq!(form.validate(), Err(UploadError::MissingTableName));

        // A picked file with an empty table name still fails on the table
        // name, before any network call would happen.
        let form = UploadForm {
            table_name: String::new(),
            has_file: true,
        };
        assert_eq!(form.validate(), Err(UploadError::MissingTableName));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Table name is required."
        );

        let form = UploadForm {
            table_name: "sales".to_string(),
            has_file: false,
        };
        assert_eq!(form.validate(), Err(UploadError::MissingFile));

        let form = UploadForm {
            table_name: "sales".to_string(),
            has_file: true,
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn stale_tokens_are_rejected() {
        let mut token = RequestToken::default();
        let first = token.next();
        let second = token.next();
        assert!(!token.is_current(first));
        assert!(token.is_current(second));
    }
}
