use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation function applied to a select column within each group bucket.
///
/// The serialized form is the exact literal the backend expects in the
/// `function` field of a query request (`Minimum`, `Maximum`, `Average`,
/// `Sum`, `Count`). `Display` produces the same literal, which is also what
/// result-table headers use (e.g. `Sum(sales)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunction {
    Minimum,
    Maximum,
    Average,
    Sum,
    Count,
}

impl AggregateFunction {
    /// All functions, in the order they are offered in the function dropdown.
    pub const ALL: [AggregateFunction; 5] = [
        AggregateFunction::Minimum,
        AggregateFunction::Maximum,
        AggregateFunction::Average,
        AggregateFunction::Sum,
        AggregateFunction::Count,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Minimum => "Minimum",
            AggregateFunction::Maximum => "Maximum",
            AggregateFunction::Average => "Average",
            AggregateFunction::Sum => "Sum",
            AggregateFunction::Count => "Count",
        }
    }
}

impl Default for AggregateFunction {
    /// A freshly added select column starts out as `Minimum`.
    fn default() -> Self {
        AggregateFunction::Minimum
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateFunction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AggregateFunction::ALL
            .into_iter()
            .find(|func| func.as_str() == s)
            .ok_or(())
    }
}

/// One aggregated output column: the source column plus the reducing function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectColumn {
    pub column: String,
    pub function: AggregateFunction,
}

impl SelectColumn {
    pub fn new(column: impl Into<String>, function: AggregateFunction) -> Self {
        Self {
            column: column.into(),
            function,
        }
    }

    /// Header label for this column in a rendered result table.
    pub fn header_label(&self) -> String {
        format!("{}({})", self.function, self.column)
    }
}

/// A complete, validated query specification.
///
/// This struct serializes directly into the body of `POST /api/v1/query`:
/// `{ "table_name": ..., "group_columns": [...], "select": [{"column": ...,
/// "function": ...}] }`. Instances are produced by
/// [`crate::session::QuerySession::build_spec`] and are transient; they live
/// only for the duration of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub table_name: String,
    pub group_columns: Vec<String>,
    pub select: Vec<SelectColumn>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn function_serializes_to_backend_literals() {
        for (func, literal) in [
            (AggregateFunction::Minimum, "Minimum"),
            (AggregateFunction::Maximum, "Maximum"),
            (AggregateFunction::Average, "Average"),
            (AggregateFunction::Sum, "Sum"),
            (AggregateFunction::Count, "Count"),
        ] {
            assert_eq!(serde_json::to_value(func).unwrap(), json!(literal));
            assert_eq!(literal.parse::<AggregateFunction>().unwrap(), func);
        }
        assert!("Median".parse::<AggregateFunction>().is_err());
    }

    #[test]
    fn query_spec_matches_wire_body() {
        let spec = QuerySpec {
            table_name: "sales".into(),
            group_columns: vec!["region".into(), "year".into()],
            select: vec![SelectColumn::new("amount", AggregateFunction::Sum)],
        };
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "table_name": "sales",
                "group_columns": ["region", "year"],
                "select": [{"column": "amount", "function": "Sum"}],
            })
        );
    }

    #[test]
    fn header_label_combines_function_and_column() {
        let col = SelectColumn::new("sales", AggregateFunction::Sum);
        assert_eq!(col.header_label(), "Sum(sales)");
    }
}
