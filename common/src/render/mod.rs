//! Pure transform from a query's column ordering plus backend result rows to
//! a tabular display. No network access and no mutable state; the frontend
//! view only walks the returned structure into HTML.

use crate::model::query::QuerySpec;
use crate::model::result::ResultRow;

/// A fully rendered result table: one header row and the body cells, all as
/// display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Builds the display table for `rows` under the column ordering of `spec`.
///
/// The header lists the group columns first, then one `Function(column)`
/// label per select column. Each body row starts with the parts of the
/// backend's `grouping_value` split on `|`; a well-formed row yields exactly
/// one part per group column, in the same order. Aggregate cells follow the
/// display rules of [`crate::model::result::AggregateResult::display_value`].
pub fn result_table(spec: &QuerySpec, rows: &[ResultRow]) -> ResultTable {
    let header = spec
        .group_columns
        .iter()
        .cloned()
        .chain(spec.select.iter().map(|sel| sel.header_label()))
        .collect();

    let rows = rows
        .iter()
        .map(|row| {
            row.grouping_value
                .split('|')
                .map(str::to_string)
                .chain(row.results.iter().map(|result| result.display_value()))
                .collect()
        })
        .collect();

    ResultTable { header, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::query::{AggregateFunction, SelectColumn};
    use crate::model::result::{AggregateResult, ResultType};

    fn spec() -> QuerySpec {
        QuerySpec {
            table_name: "sales".into(),
            group_columns: vec!["region".into(), "year".into()],
            select: vec![SelectColumn::new("sales", AggregateFunction::Sum)],
        }
    }

    #[test]
    fn renders_round_trip_example() {
        let rows = vec![ResultRow {
            grouping_value: "EU|2023".into(),
            results: vec![AggregateResult {
                is_null: false,
                result_type: ResultType::Int,
                int_value: Some(500),
                ..Default::default()
            }],
        }];

        let table = result_table(&spec(), &rows);
        assert_eq!(table.header, vec!["region", "year", "Sum(sales)"]);
        assert_eq!(table.rows, vec![vec!["EU", "2023", "500"]]);
    }

    #[test]
    fn grouping_value_split_matches_group_column_count() {
        let rows = vec![
            ResultRow {
                grouping_value: "EU|2023".into(),
                results: vec![],
            },
            ResultRow {
                grouping_value: "US|2024".into(),
                results: vec![],
            },
        ];
        let table = result_table(&spec(), &rows);
        for row in &table.rows {
            assert_eq!(row.len(), spec().group_columns.len());
        }
    }

    #[test]
    fn null_results_render_as_null_text() {
        let rows = vec![ResultRow {
            grouping_value: "EU|2023".into(),
            results: vec![AggregateResult {
                is_null: true,
                result_type: ResultType::Double,
                double_value: Some(9.5),
                ..Default::default()
            }],
        }];
        let table = result_table(&spec(), &rows);
        assert_eq!(table.rows[0][2], "NULL");
    }

    #[test]
    fn empty_result_set_keeps_header() {
        let table = result_table(&spec(), &[]);
        assert_eq!(table.header.len(), 3);
        assert!(table.rows.is_empty());
    }
}
