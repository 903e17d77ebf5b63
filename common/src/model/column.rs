use serde::{Deserialize, Serialize};

/// Column metadata as reported by the table-metadata endpoints:
/// a JSON array of `{ "name": ..., "type": ... }` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// A dropdown entry derived from [`ColumnInfo`]: the label shows the column
/// with its type, the value is the raw column name sent back in queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOption {
    pub label: String,
    pub value: String,
}

impl From<ColumnInfo> for ColumnOption {
    fn from(info: ColumnInfo) -> Self {
        Self {
            label: format!("{} ({})", info.name, info.column_type),
            value: info.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_label_includes_type() {
        let info: ColumnInfo =
            serde_json::from_str(r#"{"name":"price","type":"DOUBLE"}"#).unwrap();
        let opt = ColumnOption::from(info);
        assert_eq!(opt.label, "price (DOUBLE)");
        assert_eq!(opt.value, "price");
    }
}
