use crate::app::models::TableData;
use std::fmt::Write;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn generate_plaintext(tables: &[TableData]) -> Result<String, std::fmt::Error> {
        let mut output = String::new();

        writeln!(output, "--- Tables ---")?;
        for table in tables {
            writeln!(output, "{}", table.name)?;
        }

        writeln!(output)?;
        writeln!(output, "--- Schema ---")?;

        for table in tables {
            writeln!(output)?;
            writeln!(output, "Table: {}", table.name)?;
            for col in &table.columns {
                writeln!(output, "  - {} ({})", col.name, col.declared_type)?;
            }
        }

        Ok(output)
    }
}
