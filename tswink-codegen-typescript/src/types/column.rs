//! Mapping from native schema column types to TypeScript.

use super::descriptor::{ANY, DATE};

/// The TypeScript type of a schema column, or `None` for unsupported types.
///
/// Matching is case-insensitive.
pub fn column_type(native: &str) -> Option<&'static str> {
    let native = native.to_ascii_lowercase();
    let ty = match native.as_str() {
        "binary" | "guid" | "string" | "text" | "blob" | "varchar" | "char" | "uuid"
        | "longtext" | "mediumtext" | "enum" => "string",
        "simple_array" | "json" | "jsonb" | "array" => ANY,
        "bigint" | "integer" | "int" | "smallint" | "tinyint" | "mediumint" | "decimal"
        | "float" | "smallfloat" | "double" | "real" | "numeric" => "number",
        "boolean" | "bool" => "boolean",
        "date" | "datetime" | "datetimetz" | "time" | "timestamp" | "timestamptz"
        | "dateinterval" => DATE,
        other if other.ends_with("_immutable") => DATE,
        _ => return None,
    };
    Some(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(column_type("bigint"), Some("number"));
        assert_eq!(column_type("VARCHAR"), Some("string"));
        assert_eq!(column_type("json"), Some("any"));
        assert_eq!(column_type("bool"), Some("boolean"));
        assert_eq!(column_type("timestamp"), Some("Date"));
        assert_eq!(column_type("datetime_immutable"), Some("Date"));
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(column_type("geometry"), None);
    }
}
