use std::path::Path;

use crate::domain::bean::BeanDefinition;
use crate::domain::facts::FactTables;
use crate::error::ExtractError;

// BeanSource: load the top-level bean definitions of one descriptor, in document order
pub trait BeanSource {
    fn load(&self, path: &Path) -> Result<Vec<BeanDefinition>, ExtractError>;
}

// FactExporter: persist the fact tables, replacing any previous output
pub trait FactExporter {
    fn export(&self, tables: &FactTables) -> Result<(), ExtractError>;
}
