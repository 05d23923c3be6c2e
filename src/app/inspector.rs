use crate::app::models::{ColumnInfo, TableData};
use anyhow::Result;
use rusqlite::Connection;

// It handles all database interaction.

pub struct Inspector<'a> {
    conn: &'a Connection,
}

impl<'a> Inspector<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn scan(&self) -> Result<Vec<TableData>> {
        let tables = self.list_tables()?;
        tracing::debug!(table_count = tables.len(), "tables listed");

        let mut results = Vec::with_capacity(tables.len());

        for name in tables {
            let columns = self.get_columns(&name)?;
            results.push(TableData { name, columns });
        }

        Ok(results)
    }

    // Catalog-return order: no explicit sort, and no filtering beyond the
    // engine's own "table"-kind listing (internal sqlite_* tables show up
    // here when present, exactly as the catalog yields them).
    fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;

        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(tables)
    }

    // pragma_table_info rows come back in ordinal (definition) order; the
    // table-valued form takes the table name as a bound parameter.
    fn get_columns(&self, table_name: &str) -> Result<Vec<ColumnInfo>> {
        tracing::trace!(table = %table_name, "fetching column information");
        let mut stmt = self
            .conn
            .prepare("SELECT name, type FROM pragma_table_info(?1)")?;

        let columns = stmt
            .query_map([table_name], |row| {
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    declared_type: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(columns)
    }
}
