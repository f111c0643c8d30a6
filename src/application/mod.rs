// Application layer: the extraction run, from descriptor files to fact tables.

use std::path::PathBuf;

use crate::domain::bean::{BeanDefinition, ResolvedBean};
use crate::domain::facts::FactTables;
use crate::domain::index::BeanIndex;
use crate::domain::resolver::{BeanResolver, DEFAULT_MAX_PARENT_DEPTH};
use crate::error::ExtractError;
use crate::ports::{BeanSource, FactExporter};

/// Result of one run, kept for reporting after the tables are written.
#[derive(Debug)]
pub struct Extraction {
    pub beans: Vec<ResolvedBean>,
    pub tables: FactTables,
}

/// Load every descriptor, resolve every top-level bean, export the tables.
pub struct ExtractUsecase<'a> {
    pub source: &'a dyn BeanSource,
    pub exporter: &'a dyn FactExporter,
    pub max_parent_depth: usize,
}

impl<'a> ExtractUsecase<'a> {
    pub fn new(source: &'a dyn BeanSource, exporter: &'a dyn FactExporter) -> Self {
        Self {
            source,
            exporter,
            max_parent_depth: DEFAULT_MAX_PARENT_DEPTH,
        }
    }

    pub fn run(&self, inputs: &[PathBuf]) -> Result<Extraction, ExtractError> {
        // All inputs are read before any resolution starts.
        let mut definitions: Vec<BeanDefinition> = Vec::new();
        for path in inputs {
            definitions.extend(self.source.load(path)?);
        }

        let index = BeanIndex::build(&definitions);
        tracing::debug!(beans = definitions.len(), identifiers = index.len(), "built bean index");

        let beans = BeanResolver::new(&index)
            .with_max_parent_depth(self.max_parent_depth)
            .resolve_all(&definitions);

        let tables = FactTables::from_resolved(&beans);
        self.exporter.export(&tables)?;

        Ok(Extraction { beans, tables })
    }
}
