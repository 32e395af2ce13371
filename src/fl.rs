use log::{debug, info, warn};

use fl_results::jurisdiction::JurisdictionTable;
use fl_results::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use crate::fl::config_reader::*;
use crate::fl::io_tsv::read_source;
use crate::fl::store::{JsonStore, OutputTarget};

mod config_reader;
mod io_common;
mod io_tsv;
mod store;

#[derive(Debug, Snafu)]
pub enum FlError {
    #[snafu(display("Error opening configuration {path}: {source}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing configuration {path}: {source}"))]
    ParsingConfig {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error opening source file {path}: {source}"))]
    OpeningSource {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading source file {path}: {source}"))]
    ReadingSource {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Malformed line in {path}: {source}"))]
    ParsingTsv { source: csv::Error, path: String },
    #[snafu(display("Column {column} is missing from the header of {path}"))]
    MissingColumn { path: String, column: String },
    #[snafu(display("Unknown format {format:?} for {path}"))]
    UnknownFormat { format: String, path: String },
    #[snafu(display("Load of {path} aborted: {source}"))]
    Loading { source: LoadError, path: String },
    #[snafu(display("Error writing {path}: {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading reference {path}: {source}"))]
    OpeningReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error serializing results: {source}"))]
    SerializingOutput { source: serde_json::Error },
    #[snafu(display("Results differ from the reference {path}"))]
    ReferenceMismatch { path: String },
    #[snafu(display("The configuration file has no parent directory"))]
    MissingParentDir {},

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type FlResult<T> = Result<T, FlError>;

fn load_mapping(
    root_path: &Path,
    config: &FlConfig,
    mapping: &FileMapping,
    resolver: &JurisdictionTable,
    store: &mut JsonStore,
) -> FlResult<LoadStats> {
    let p: PathBuf = root_path.join(&mapping.generated_filename);
    let p2 = p.as_path().display().to_string();
    let kind = FileKind::detect(mapping.format.as_deref(), &mapping.generated_filename).context(
        UnknownFormatSnafu {
            format: mapping.format.clone().unwrap_or_default(),
            path: p2.clone(),
        },
    )?;
    info!("Attempting to read results file {:?} as {:?}", p2, kind);
    let rows = read_source(&p, kind)?;
    debug!("load_mapping: {} rows in {:?}", rows.len(), p2);

    let context = mapping.election_context(config);
    load_file(kind, &context, rows, resolver, store).context(LoadingSnafu { path: p2 })
}

/// Loads all the files of a configuration.
///
/// The first file that cannot be loaded stops the run. The files loaded
/// before it have already been written out.
pub fn run_load(
    config_path: &str,
    data_dir: Option<String>,
    out: Option<String>,
    reference: Option<String>,
    only: Option<String>,
) -> FlResult<Vec<(String, LoadStats)>> {
    let config = read_config(config_path)?;
    info!(
        "config: {} jurisdictions, {} files",
        config.jurisdictions.len(),
        config.mappings.len()
    );

    let root_p: PathBuf = match data_dir {
        Some(d) => PathBuf::from(d),
        None => Path::new(config_path)
            .parent()
            .context(MissingParentDirSnafu {})?
            .to_path_buf(),
    };

    let target = match out.as_deref() {
        None | Some("stdout") => OutputTarget::Stdout,
        Some(dir) => {
            fs::create_dir_all(dir).context(WritingOutputSnafu { path: dir })?;
            OutputTarget::Directory(PathBuf::from(dir))
        }
    };
    let mut store = JsonStore::new(target, reference.map(PathBuf::from));
    let resolver = JurisdictionTable::new(config.jurisdictions.clone());

    let selected: Vec<&FileMapping> = config
        .mappings
        .iter()
        .filter(|m| match only.as_deref() {
            Some(name) => m.generated_filename == name,
            None => true,
        })
        .collect();
    if selected.is_empty() {
        match only {
            Some(name) => whatever!("No file named {} in {}", name, config_path),
            None => warn!("No files to load in {}", config_path),
        }
    }

    let mut loaded: Vec<(String, LoadStats)> = Vec::new();
    for mapping in selected {
        let stats = load_mapping(&root_p, &config, mapping, &resolver, &mut store)?;
        loaded.push((mapping.generated_filename.clone(), stats));
    }
    Ok(loaded)
}
