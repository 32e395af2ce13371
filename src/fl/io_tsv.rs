// Primitives for reading the tab-delimited results files.

use log::{debug, warn};
use snafu::{ensure, ResultExt};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use fl_results::format::{CountySummary, PrecinctDetail};
use fl_results::{FileKind, SourceRow};

use crate::fl::*;

/// Reads all the rows of a source file.
///
/// The file is closed before the rows are returned.
pub fn read_source(path: &Path, kind: FileKind) -> FlResult<Vec<SourceRow>> {
    let p = path.display().to_string();
    let bytes = read_bytes(path)?;
    let text = decode_latin1(&bytes);
    parse_rows(&text, kind, &p)
}

fn read_bytes(path: &Path) -> FlResult<Vec<u8>> {
    let p = path.display().to_string();
    let mut file = File::open(path).context(OpeningSourceSnafu { path: p.clone() })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .context(ReadingSourceSnafu { path: p })?;
    Ok(bytes)
}

/// Decodes latin-1 bytes. NUL bytes, found in some precinct files, are dropped.
pub fn decode_latin1(bytes: &[u8]) -> String {
    let cleaned: Vec<u8> = bytes.iter().copied().filter(|b| *b != 0).collect();
    // WHATWG maps the latin-1 labels to windows-1252.
    let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(&cleaned);
    decoded.into_owned()
}

pub fn parse_rows(text: &str, kind: FileKind, path: &str) -> FlResult<Vec<SourceRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = rdr.records();

    let header: Rc<[String]> = if kind.has_header() {
        let first = match records.next() {
            Some(r) => r.context(ParsingTsvSnafu { path })?,
            None => {
                warn!("Empty results file {}", path);
                return Ok(Vec::new());
            }
        };
        let header: Rc<[String]> = first.iter().map(|s| s.trim().to_string()).collect();
        for column in CountySummary::REQUIRED_COLUMNS.iter() {
            ensure!(
                header.iter().any(|h| h == column),
                MissingColumnSnafu {
                    path,
                    column: *column
                }
            );
        }
        header
    } else {
        PrecinctDetail::FIELD_NAMES
            .iter()
            .map(|s| s.to_string())
            .collect()
    };
    debug!("parse_rows: header of {}: {:?}", path, header);

    let mut rows: Vec<SourceRow> = Vec::new();
    for record in records {
        let record = record.context(ParsingTsvSnafu { path })?;
        rows.push(SourceRow::new(
            header.clone(),
            record.iter().map(|s| s.to_string()).collect(),
        ));
    }
    Ok(rows)
}
