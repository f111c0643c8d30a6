// Command-line entry point for beanfacts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use beanfacts::application::ExtractUsecase;
use beanfacts::domain::resolver::DEFAULT_MAX_PARENT_DEPTH;
use beanfacts::infrastructure::{logging, CsvFactExporter, JsonReportWriter, XmlBeanSource};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bean descriptor XML file(s), processed in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory receiving BeanClasses.csv, BeanReachable.csv, BeanInit.csv and BeanIoCField.csv
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write every resolved bean as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Maximum number of `parent` links followed per bean
    #[arg(long, default_value_t = DEFAULT_MAX_PARENT_DEPTH)]
    max_parent_depth: usize,

    /// Enable debug output
    #[arg(long, short = 'D')]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);
    tracing::debug!(?cli, "starting extraction");

    let source = XmlBeanSource;
    let exporter = CsvFactExporter::new(&cli.output_dir);
    let usecase = ExtractUsecase {
        max_parent_depth: cli.max_parent_depth,
        ..ExtractUsecase::new(&source, &exporter)
    };

    let extraction = usecase
        .run(&cli.files)
        .with_context(|| format!("Bean extraction failed for {} input file(s)", cli.files.len()))?;

    if let Some(path) = &cli.json {
        JsonReportWriter
            .write(&extraction.beans, path)
            .with_context(|| format!("Cannot write bean report {}", path.display()))?;
    }

    tracing::info!(
        beans = extraction.beans.len(),
        classes = extraction.tables.classes.len(),
        output = %exporter.output_dir().display(),
        "extraction complete"
    );
    Ok(())
}
