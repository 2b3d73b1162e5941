//! Extract command handler.

use super::ExtractCommands;
#[cfg(feature = "sqlite")]
use oblique_extract::SqliteExtractor;
use oblique_extract::{run_extractor, CardsExtractor, Extractor, TsvExtractor};
use oblique_error::ObliqueResult;
use oblique_generator::ObliqueConfig;
use oblique_storage::ArchiveStore;
use std::path::PathBuf;

/// Run an extractor and print its counts.
pub fn handle_extract_command(cmd: ExtractCommands) -> ObliqueResult<()> {
    let (extractor, out): (Box<dyn Extractor>, Option<PathBuf>) = match cmd {
        ExtractCommands::Cards { path, out } => (
            Box::new(CardsExtractor::new(path)) as Box<dyn Extractor>,
            out,
        ),
        ExtractCommands::Tsv { path, out } => (
            Box::new(TsvExtractor::new(path)) as Box<dyn Extractor>,
            out,
        ),
        #[cfg(feature = "sqlite")]
        ExtractCommands::Db { path, out } => (
            Box::new(SqliteExtractor::new(path)) as Box<dyn Extractor>,
            out,
        ),
    };

    let out = match out {
        Some(out) => out,
        None => ObliqueConfig::load()?.archive().path().clone(),
    };

    let store = ArchiveStore::new(out);
    let report = run_extractor(extractor.as_ref(), &store)?;

    println!("extracted: {}", report.raw);
    println!("after clean: {}", report.cleaned);
    println!("unique: {}", report.unique);
    println!("wrote: {}", store.path().display());
    Ok(())
}
