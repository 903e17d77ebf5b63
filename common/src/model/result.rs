use serde::{Deserialize, Serialize};

/// Type tag on a single aggregate result, selecting which numeric field of
/// [`AggregateResult`] is authoritative.
///
/// The backend emits the uppercase literals `INT`, `DOUBLE` and `FLOAT`. Any
/// other tag deserializes as [`ResultType::Unknown`] rather than failing the
/// whole response; unknown-typed results render as `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultType {
    Int,
    Double,
    Float,
    #[serde(other)]
    Unknown,
}

impl Default for ResultType {
    fn default() -> Self {
        ResultType::Unknown
    }
}

/// One aggregated value inside a result row.
///
/// `is_null` is the discriminant: when set, the numeric fields carry no
/// meaning and the value displays as the literal text `NULL`. When clear,
/// `result_type` picks the numeric field holding the value. The fields are
/// optional because the backend omits the ones that do not apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    #[serde(default)]
    pub is_null: bool,
    #[serde(default)]
    pub result_type: ResultType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_value: Option<f32>,
}

impl AggregateResult {
    /// Text shown for this result in the output table.
    ///
    /// Null results, unknown type tags, and a missing numeric field for the
    /// declared type all display as `NULL`; everything else is the plain
    /// numeric text of the authoritative field.
    pub fn display_value(&self) -> String {
        if self.is_null {
            return "NULL".to_string();
        }
        let text = match self.result_type {
            ResultType::Int => self.int_value.map(|v| v.to_string()),
            ResultType::Double => self.double_value.map(|v| v.to_string()),
            ResultType::Float => self.float_value.map(|v| v.to_string()),
            ResultType::Unknown => None,
        };
        text.unwrap_or_else(|| "NULL".to_string())
    }
}

/// One grouped bucket in a query result.
///
/// `grouping_value` is the backend's serialized bucket key: the group-column
/// values joined with `|`, in the same order as the query's group columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub grouping_value: String,
    pub results: Vec<AggregateResult>,
}

/// Payload of a successful query: the list of bucket rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub values: Vec<ResultRow>,
}

/// Envelope of a successful `POST /query` response: `{ "result": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub result: QueryResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_response_envelope() {
        let raw = r#"{
            "result": {
                "values": [
                    {
                        "grouping_value": "EU|2023",
                        "results": [
                            {"is_null": false, "result_type": "INT", "int_value": 500}
                        ]
                    }
                ]
            }
        }"#;
        let resp: QueryResponse = serde_json::from_str(raw).unwrap();
        let row = &resp.result.values[0];
        assert_eq!(row.grouping_value, "EU|2023");
        assert_eq!(row.results[0].result_type, ResultType::Int);
        assert_eq!(row.results[0].display_value(), "500");
    }

    #[test]
    fn null_results_display_as_null_regardless_of_type() {
        for tag in ["INT", "DOUBLE", "FLOAT", "DECIMAL"] {
            let raw = format!(
                r#"{{"is_null": true, "result_type": "{tag}", "int_value": 7, "double_value": 7.5}}"#
            );
            let result: AggregateResult = serde_json::from_str(&raw).unwrap();
            assert_eq!(result.display_value(), "NULL");
        }
    }

    #[test]
    fn unknown_type_tag_is_tolerated_and_displays_null() {
        let result: AggregateResult =
            serde_json::from_str(r#"{"is_null": false, "result_type": "DECIMAL"}"#).unwrap();
        assert_eq!(result.result_type, ResultType::Unknown);
        assert_eq!(result.display_value(), "NULL");
    }

    #[test]
    fn typed_values_render_as_plain_numeric_text() {
        let int = AggregateResult {
            result_type: ResultType::Int,
            int_value: Some(-42),
            ..Default::default()
        };
        assert_eq!(int.display_value(), "-42");

        let double = AggregateResult {
            result_type: ResultType::Double,
            double_value: Some(12.25),
            ..Default::default()
        };
        assert_eq!(double.display_value(), "12.25");

        let float = AggregateResult {
            result_type: ResultType::Float,
            float_value: Some(3.5),
            ..Default::default()
        };
        assert_eq!(float.display_value(), "3.5");
    }

    #[test]
    fn missing_numeric_field_for_declared_type_displays_null() {
        let result: AggregateResult =
            serde_json::from_str(r#"{"is_null": false, "result_type": "DOUBLE"}"#).unwrap();
        assert_eq!(result.display_value(), "NULL");
    }
}
