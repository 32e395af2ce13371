mod config;
pub mod dedup;
pub mod format;
pub mod jurisdiction;
pub mod manual;
pub mod normalize;
pub mod text;

use log::{debug, info};
use std::error::Error;

pub use crate::config::*;
use crate::dedup::Deduplicator;
use crate::format::{CountySummary, PrecinctDetail, RowFormat};
use crate::jurisdiction::JurisdictionResolver;
use crate::normalize::normalize;

/// The destination of the normalized results.
///
/// It receives exactly one batch per source file, and only if the whole file
/// was processed.
pub trait ResultStore {
    fn insert(&mut self, source: &str, results: Vec<RawResult>) -> Result<(), Box<dyn Error>>;
}

/// Loads the rows of one source file into the store.
///
/// Arguments:
/// * `kind` the kind of the file, which selects the row rules
/// * `context` the attributes shared by all the results of this file
/// * `rows` the rows of the file, in order
/// * `resolver` the jurisdiction codes, used by precinct files
/// * `store` receives the batch once the file is complete
pub fn load_file<I, R, S>(
    kind: FileKind,
    context: &ElectionContext,
    rows: I,
    resolver: &R,
    store: &mut S,
) -> Result<LoadStats, LoadError>
where
    I: IntoIterator<Item = SourceRow>,
    R: JurisdictionResolver,
    S: ResultStore,
{
    match kind {
        FileKind::CountySummary | FileKind::Generic => {
            load_rows(&CountySummary, context, rows, resolver, store)
        }
        FileKind::PrecinctDetail => load_rows(&PrecinctDetail, context, rows, resolver, store),
    }
}

/// Runs classification, extraction, normalization and deduplication over all
/// the rows, then hands the batch to the store.
///
/// An unresolved jurisdiction aborts the file: the store receives nothing.
pub fn load_rows<F, I, R, S>(
    format: &F,
    context: &ElectionContext,
    rows: I,
    resolver: &R,
    store: &mut S,
) -> Result<LoadStats, LoadError>
where
    F: RowFormat,
    I: IntoIterator<Item = SourceRow>,
    R: JurisdictionResolver,
    S: ResultStore,
{
    info!("Loading {} as {}", context.source, format.name());
    let mut stats = LoadStats::default();
    let mut dedup = Deduplicator::new();
    let mut results: Vec<RawResult> = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        stats.rows += 1;
        if format.should_skip(&row) {
            stats.skipped += 1;
            continue;
        }
        let extracted = format.extract(&row);
        debug!("load_rows: row {}: {:?}", idx + 1, extracted);
        let result = normalize(extracted, context, resolver).map_err(|cause| {
            LoadError::UnresolvedJurisdiction {
                source_file: context.source.clone(),
                row: idx + 1,
                cause,
            }
        })?;
        if dedup.admit(&result) {
            results.push(result);
        }
    }

    stats.duplicates = dedup.dropped();
    stats.inserted = results.len();
    store
        .insert(&context.source, results)
        .map_err(|cause| LoadError::Store {
            source_file: context.source.clone(),
            cause,
        })?;
    info!(
        "Loaded {}: {} rows, {} skipped, {} duplicates, {} results",
        context.source, stats.rows, stats.skipped, stats.duplicates, stats.inserted
    );
    Ok(stats)
}
