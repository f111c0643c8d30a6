// Infrastructure implementations for beanfacts.

pub mod csv_exporter;
pub mod logging;
pub mod xml_source;

pub use csv_exporter::CsvFactExporter;
pub use xml_source::XmlBeanSource;

use std::path::Path;

use crate::api::dto::BeanReportDto;
use crate::domain::bean::ResolvedBean;
use crate::error::ExtractError;

/// Writes the resolved beans as a pretty-printed JSON array.
pub struct JsonReportWriter;

impl JsonReportWriter {
    pub fn write(&self, beans: &[ResolvedBean], path: &Path) -> Result<(), ExtractError> {
        let report: Vec<BeanReportDto> = beans.iter().map(BeanReportDto::from).collect();
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).map_err(|source| ExtractError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), beans = report.len(), "wrote bean report");
        Ok(())
    }
}
