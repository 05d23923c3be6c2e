#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    // The type string from the table definition. SQLite treats this as
    // advisory free text; it is empty for columns declared without a type.
    pub declared_type: String,
}

// This allows separating the "Scanning" phase from the "Formatting" phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}
