/// Errors raised by name/cursor style accessors on a [`super::DataCategory`].
///
/// Index-style reads (`get_row`, `get_full_row`) never fail; only the
/// name/cursor accessors surface typed errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    /// The named attribute is not part of the category schema.
    #[error("attribute `{attribute}` not found in category `{category}`")]
    AttributeNotFound {
        /// Category name.
        category: String,
        /// The attribute that was requested.
        attribute: String,
    },

    /// The row index is past the end of the row list.
    #[error("row index {row} out of range for category `{category}` ({rows} rows)")]
    RowOutOfRange {
        /// Category name.
        category: String,
        /// The requested row index.
        row: usize,
        /// Current number of rows.
        rows: usize,
    },

    /// The column index is past the end of the stored row (short rows are
    /// legal; indexed reads into the missing region are not).
    #[error("column index {column} out of range for category `{category}` ({columns} attributes)")]
    ColumnOutOfRange {
        /// Category name.
        category: String,
        /// The requested column index.
        column: usize,
        /// Number of attributes in the schema.
        columns: usize,
    },

    /// An accessor defaulted to the cursor attribute, but none is set.
    #[error("no cursor attribute set for category `{category}`")]
    CursorUnset {
        /// Category name.
        category: String,
    },

    /// JSON serialization or deserialization of a category snapshot failed.
    #[error("category JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CategoryError {
    fn from(err: serde_json::Error) -> Self {
        CategoryError::Json(err.to_string())
    }
}
