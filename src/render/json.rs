//! JSON rendering for tables and conversion reports.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any model value (a table, a list of tables, a report) to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    #[test]
    fn test_to_json_pretty() {
        let tables = vec![Table::from_strings([["Name", "Age"]])];
        let json = to_json(&tables, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"rows\""));
        assert!(json.contains("Name"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let table = Table::from_strings([["a", "b"], ["1", "2"]]);
        let json = to_json(&table, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"rows":[["a","b"],["1","2"]]}"#);
    }
}
