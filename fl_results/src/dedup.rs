use log::debug;
use std::collections::HashSet;

use crate::config::RawResult;
use crate::text::slugify;

/// The string that identifies a result within one source file.
pub fn dedup_key(result: &RawResult) -> String {
    let mut bits: Vec<String> = vec![
        result.contest_slug.clone(),
        result.candidate_slug.clone(),
        slugify(&result.jurisdiction),
    ];
    if let Some(d) = result.district.as_ref().filter(|d| !d.is_empty()) {
        bits.push(d.clone());
    }
    if let Some(rd) = result.reporting_district.as_ref() {
        bits.push(rd.clone());
    }
    bits.join("-")
}

/// Drops the repeated results of a file. The first result seen for a key wins.
///
/// Some source files list the same result several times, so a repeat is not
/// an error.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
    dropped: usize,
}

impl Deduplicator {
    pub fn new() -> Deduplicator {
        Deduplicator::default()
    }

    /// Returns true if the result has not been seen before.
    pub fn admit(&mut self, result: &RawResult) -> bool {
        let key = dedup_key(result);
        if self.seen.contains(&key) {
            debug!("Dropping duplicate result {}", key);
            self.dropped += 1;
            false
        } else {
            self.seen.insert(key);
            true
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
