// Writing the batches out, and checking them against reference outputs.

use log::{debug, info, warn};
use snafu::ResultExt;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use fl_results::{RawResult, ResultStore};
use text_diff::print_diff;

use crate::fl::io_common::file_stem;
use crate::fl::*;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    /// One JSON file per source file.
    Directory(PathBuf),
}

/// Writes each batch as a pretty-printed JSON array.
///
/// When a reference directory is given, a batch is only written if it is
/// identical to its reference.
#[derive(Debug)]
pub struct JsonStore {
    target: OutputTarget,
    reference: Option<PathBuf>,
}

impl JsonStore {
    pub fn new(target: OutputTarget, reference: Option<PathBuf>) -> JsonStore {
        JsonStore { target, reference }
    }

    fn check_reference(&self, stem: &str, pretty_js: &str) -> FlResult<()> {
        if let Some(ref_dir) = self.reference.as_ref() {
            let ref_p = ref_dir.join(format!("{}.json", stem));
            let ref_p2 = ref_p.display().to_string();
            let pretty_js_ref =
                fs::read_to_string(&ref_p).context(OpeningReferenceSnafu { path: ref_p2.clone() })?;
            if pretty_js_ref.trim_end() != pretty_js.trim_end() {
                warn!("Found differences with the reference {}", ref_p2);
                print_diff(pretty_js_ref.as_str(), pretty_js, "\n");
                return ReferenceMismatchSnafu { path: ref_p2 }.fail();
            }
            debug!("check_reference: {} matches", ref_p2);
        }
        Ok(())
    }

    fn write_batch(&self, source: &str, results: &[RawResult]) -> FlResult<()> {
        let stem = file_stem(source);
        let pretty_js = serde_json::to_string_pretty(results).context(SerializingOutputSnafu {})?;
        self.check_reference(&stem, &pretty_js)?;
        match &self.target {
            OutputTarget::Stdout => {
                println!("{}:{}", source, pretty_js);
            }
            OutputTarget::Directory(dir) => {
                let p = dir.join(format!("{}.json", stem));
                let p2 = p.display().to_string();
                fs::write(&p, pretty_js).context(WritingOutputSnafu { path: p2.clone() })?;
                info!("Wrote {} results to {}", results.len(), p2);
            }
        }
        Ok(())
    }
}

impl ResultStore for JsonStore {
    fn insert(&mut self, source: &str, results: Vec<RawResult>) -> Result<(), Box<dyn Error>> {
        self.write_batch(source, &results)?;
        Ok(())
    }
}
