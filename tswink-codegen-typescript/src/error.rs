use miette::Diagnostic;
use thiserror::Error;

/// Result type for entity building and rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions met while turning sources into TypeScript.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("table '{table}' of model '{entity}' is not in the schema")]
    #[diagnostic(
        code(tswink::table_not_found),
        help("declare the table in the schema file configured under [sources].schema")
    )]
    TableNotFound { entity: String, table: String },

    #[error("pivot table '{table}' of relation '{relation}' is not in the schema")]
    #[diagnostic(code(tswink::pivot_table_not_found))]
    PivotTableNotFound { relation: String, table: String },

    #[error("pivot table '{table}' of relation '{relation}' was referenced before it was registered")]
    #[diagnostic(code(tswink::pivot_not_registered))]
    PivotNotRegistered { relation: String, table: String },

    #[error("relation '{relation}' exposes pivot column '{column}', which table '{table}' does not have")]
    #[diagnostic(code(tswink::pivot_column_not_found))]
    PivotColumnNotFound {
        relation: String,
        table: String,
        column: String,
    },

    #[error("column '{column}' of table '{table}' has unsupported type '{ty}'")]
    #[diagnostic(code(tswink::unknown_column_type))]
    UnknownColumnType {
        table: String,
        column: String,
        ty: String,
    },

    #[error("Failed to execute method {method}() for export: {message}")]
    #[diagnostic(code(tswink::service_execution))]
    ServiceExecution { method: String, message: String },

    #[error("Method {method}() must return an array, got {got}")]
    #[diagnostic(code(tswink::service_not_array))]
    ServiceNotArray { method: String, got: String },

    #[error(
        "Method {method}() must return an array of enum cases only. Found {found} at index {index}. Expected cases of {expected}."
    )]
    #[diagnostic(code(tswink::service_non_case))]
    ServiceNonCase {
        method: String,
        found: String,
        index: usize,
        expected: String,
    },

    #[error(
        "Method {method}() returned enum case from wrong enum class. Found {found} at index {index}, expected cases from {expected}."
    )]
    #[diagnostic(code(tswink::service_wrong_enum))]
    ServiceWrongEnum {
        method: String,
        found: String,
        index: usize,
        expected: String,
    },

    #[error("Method {method}() returned unknown case '{case}' at index {index}")]
    #[diagnostic(code(tswink::service_unknown_case))]
    ServiceUnknownCase {
        method: String,
        case: String,
        index: usize,
    },
}
