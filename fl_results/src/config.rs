// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;
use std::rc::Rc;

use serde::Serialize;

/// The offices whose results are tracked. Rows for any other office are dropped.
pub const TARGET_OFFICES: &[&str] = &[
    "U.S. President by Congressional District",
    "President of the United States",
    "United States Senator",
    "United States Representative",
    "State Representative",
    "State Senate",
    "State Senator",
    "Governor",
    "Governor and Lieutenant Governor",
    "Attorney General",
    "Chief Financial Officer",
    "Commissioner of Agriculture",
];

/// The target offices whose results are further qualified by an electoral district.
pub const DISTRICT_OFFICES: &[&str] = &[
    "United States Representative",
    "State Representative",
    "State Senate",
    "State Senator",
];

/// Presidential results reported by congressional district within each county.
pub const PRESIDENT_BY_CONGRESSIONAL_DISTRICT: &str = "U.S. President by Congressional District";

pub fn is_target_office(office: &str) -> bool {
    TARGET_OFFICES.contains(&office)
}

pub fn is_district_office(office: &str) -> bool {
    DISTRICT_OFFICES.contains(&office)
}

/// One line of a source file.
///
/// The header is shared by all the rows of a file. For county summaries it
/// comes from the first line, for precinct files it is supplied by the caller.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SourceRow {
    header: Rc<[String]>,
    values: Vec<String>,
}

impl SourceRow {
    pub fn new(header: Rc<[String]>, values: Vec<String>) -> SourceRow {
        SourceRow { header, values }
    }

    /// The raw value of a column. Unknown columns and short rows read as empty.
    pub fn get(&self, column: &str) -> &str {
        self.header
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.values.get(idx))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The attributes shared by every record of one source file.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct ElectionContext {
    /// The generated name of the source file.
    pub source: String,
    pub election_id: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub state: String,
    pub election_type: String,
    pub result_type: String,
    pub special: bool,
    /// Prefix of the county jurisdiction codes, usually the state division.
    #[serde(skip)]
    pub ocd_id: String,
}

/// The kind of a source file. It selects the row strategy for the whole file.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum FileKind {
    /// Tab-delimited county totals, with a header row.
    CountySummary,
    /// Tab-delimited precinct results, without a header row.
    PrecinctDetail,
    /// Any other file. Read with the county summary rules.
    Generic,
}

impl FileKind {
    /// Picks the kind of a file from its declared format, falling back on the
    /// file name when nothing is declared.
    pub fn detect(declared: Option<&str>, generated_filename: &str) -> Option<FileKind> {
        match declared {
            Some("county") | Some("county_summary") => Some(FileKind::CountySummary),
            Some("precinct") | Some("precinct_detail") => Some(FileKind::PrecinctDetail),
            Some("generic") => Some(FileKind::Generic),
            Some(_) => None,
            None if generated_filename.contains("precinct") => Some(FileKind::PrecinctDetail),
            None => Some(FileKind::Generic),
        }
    }

    pub fn has_header(&self) -> bool {
        !matches!(self, FileKind::PrecinctDetail)
    }
}

// ******** Output data structures *********

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportingLevel {
    County,
    CongressionalDistrictByCounty,
    Precinct,
}

/// A normalized result, ready for the store.
///
/// Never modified after construction.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct RawResult {
    #[serde(flatten)]
    pub context: ElectionContext,

    pub office: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_slug: Option<String>,
    pub party: String,

    pub jurisdiction: String,
    pub ocd_id: String,
    pub reporting_level: ReportingLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_jurisdiction: Option<String>,
    pub votes: u64,

    pub contest_slug: String,
    pub candidate_slug: String,
}

/// Counters for one loaded file.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct LoadStats {
    pub rows: usize,
    pub skipped: usize,
    pub duplicates: usize,
    pub inserted: usize,
}

/// Errors when looking up a jurisdiction code.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ResolveError {
    Missing { name: String },
    Ambiguous { name: String, count: usize },
}

impl Error for ResolveError {}

impl Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Missing { name } => write!(f, "no jurisdiction named {:?}", name),
            ResolveError::Ambiguous { name, count } => {
                write!(f, "{} jurisdictions named {:?}", count, name)
            }
        }
    }
}

/// Errors that abort the load of a file. Nothing is stored for that file.
#[derive(Debug)]
pub enum LoadError {
    UnresolvedJurisdiction {
        source_file: String,
        row: usize,
        cause: ResolveError,
    },
    Store {
        source_file: String,
        cause: Box<dyn Error>,
    },
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::UnresolvedJurisdiction { cause, .. } => Some(cause),
            LoadError::Store { cause, .. } => Some(cause.as_ref()),
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::UnresolvedJurisdiction {
                source_file,
                row,
                cause,
            } => write!(
                f,
                "{}: row {}: cannot resolve jurisdiction: {}",
                source_file, row, cause
            ),
            LoadError::Store { source_file, cause } => {
                write!(f, "{}: store rejected the batch: {}", source_file, cause)
            }
        }
    }
}
