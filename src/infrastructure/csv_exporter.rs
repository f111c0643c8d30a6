use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::facts::{FactTable, FactTables};
use crate::error::ExtractError;
use crate::ports::FactExporter;

/// Writes each fact table to `<output_dir>/<table file name>`, truncating
/// previous runs. Empty tables still produce an empty file.
///
/// Tables are written one at a time in `FactTable::ALL` order and the first
/// failure stops the export. Tables after the failing one keep their
/// previous contents.
pub struct CsvFactExporter {
    output_dir: PathBuf,
}

impl CsvFactExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn table_path(&self, table: FactTable) -> PathBuf {
        self.output_dir.join(table.file_name())
    }
}

impl FactExporter for CsvFactExporter {
    fn export(&self, tables: &FactTables) -> Result<(), ExtractError> {
        for table in FactTable::ALL {
            let path = self.table_path(table);
            fs::write(&path, tables.render(table))
                .map_err(|source| ExtractError::Write { path: path.clone(), source })?;
            tracing::info!(table = %table, rows = tables.row_count(table), "wrote fact table");
        }
        Ok(())
    }
}
