// The per-format rules: which rows to keep and where the fields live.

use log::{debug, info};

use crate::config::*;
use crate::text::slugify;

/// The candidate, as named in the source.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum CandidateName {
    /// Separate name columns, kept verbatim apart from trimming.
    /// Suffixes ("Braynon,, II") and nicknames ("(Doc)") are not parsed.
    Parts {
        family_name: String,
        given_name: String,
        additional_name: String,
    },
    /// A single name column.
    Full { full_name: String, slug: String },
}

/// Where the result was counted.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Place {
    County {
        /// The Juris1num column, used as reporting district by some offices.
        district_num: String,
    },
    Precinct {
        precinct_id: String,
        county_name: String,
    },
}

/// The fields of a row, mapped to their canonical names but not yet
/// normalized.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Extracted {
    pub office: String,
    pub district: Option<String>,
    pub candidate: CandidateName,
    pub party: String,
    pub jurisdiction: String,
    pub raw_votes: String,
    pub place: Place,
}

/// The rules of one source format.
pub trait RowFormat {
    fn name(&self) -> &'static str;

    /// True if the row does not belong to a tracked contest.
    fn should_skip(&self, row: &SourceRow) -> bool;

    fn extract(&self, row: &SourceRow) -> Extracted;
}

/// County totals published by the Division of Elections.
///
/// Offices are matched exactly against the target offices.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct CountySummary;

impl CountySummary {
    /// The header columns read by this format.
    pub const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "OfficeDesc",
        "Juris1num",
        "CanNameLast",
        "CanNameFirst",
        "CanNameMiddle",
        "PartyName",
        "CountyName",
        "CanVotes",
    ];

    // Longer office descriptions are ballot initiative texts.
    const MAX_LOGGED_OFFICE_LEN: usize = 100;
}

impl RowFormat for CountySummary {
    fn name(&self) -> &'static str {
        "county_summary"
    }

    fn should_skip(&self, row: &SourceRow) -> bool {
        let office = row.get("OfficeDesc").trim();
        if is_target_office(office) {
            return false;
        }
        // Logged in case a new office should be added to the target offices.
        if office.chars().count() < Self::MAX_LOGGED_OFFICE_LEN {
            info!("Skipping result for office '{}'", office);
        }
        true
    }

    fn extract(&self, row: &SourceRow) -> Extracted {
        let office = row.get("OfficeDesc").trim().to_string();
        let district_num = row.get("Juris1num").trim().to_string();
        let district = if is_district_office(&office) {
            Some(district_num.clone())
        } else {
            None
        };
        Extracted {
            office,
            district,
            candidate: CandidateName::Parts {
                family_name: row.get("CanNameLast").trim().to_string(),
                given_name: row.get("CanNameFirst").trim().to_string(),
                additional_name: row.get("CanNameMiddle").trim().to_string(),
            },
            party: row.get("PartyName").trim().to_string(),
            jurisdiction: row.get("CountyName").trim().to_string(),
            raw_votes: row.get("CanVotes").to_string(),
            place: Place::County { district_num },
        }
    }
}

/// Precinct-level results. The files have no header row.
///
/// The contest name carries extra qualifiers, so target offices are matched
/// as substrings.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct PrecinctDetail;

impl PrecinctDetail {
    /// The columns of a precinct file, in order.
    pub const FIELD_NAMES: &'static [&'static str] = &[
        "county_code",
        "county_name",
        "election_number",
        "election_date",
        "election_name",
        "precinct_id",
        "polling_location",
        "registered_voters",
        "registered_republicans",
        "registered_democrats",
        "registered_others",
        "contest_name",
        "district",
        "contest_code",
        "candidate",
        "party",
        "candidate_id",
        "doe_candidate_number",
        "votes",
    ];

    /// Spells out the pseudo-candidates of the precinct files.
    pub fn candidate_name(raw: &str) -> String {
        match raw.trim() {
            "UnderVotes" => "Under Votes".to_string(),
            "OverVotes" => "Over Votes".to_string(),
            "WriteinVotes" => "Write-ins".to_string(),
            s => s.to_string(),
        }
    }
}

impl RowFormat for PrecinctDetail {
    fn name(&self) -> &'static str {
        "precinct_detail"
    }

    fn should_skip(&self, row: &SourceRow) -> bool {
        let contest = row.get("contest_name");
        let skip = !TARGET_OFFICES.iter().any(|o| contest.contains(o));
        if skip {
            debug!("Skipping precinct result for contest '{}'", contest.trim());
        }
        skip
    }

    fn extract(&self, row: &SourceRow) -> Extracted {
        let office = row.get("contest_name").trim().to_string();
        let district = if DISTRICT_OFFICES.iter().any(|o| office.contains(o)) {
            Some(row.get("district").trim().to_string())
        } else {
            None
        };
        let full_name = Self::candidate_name(row.get("candidate"));
        let slug = slugify(&full_name);
        let precinct_id = row.get("precinct_id").to_string();
        let jurisdiction = format!("{} {}", precinct_id, row.get("polling_location"))
            .trim()
            .to_string();
        Extracted {
            office,
            district,
            candidate: CandidateName::Full { full_name, slug },
            party: row.get("party").trim().to_string(),
            jurisdiction,
            raw_votes: row.get("votes").to_string(),
            place: Place::Precinct {
                precinct_id,
                county_name: row.get("county_name").trim().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn county_row(office: &str, juris1num: &str) -> SourceRow {
        let header: Rc<[String]> = CountySummary::REQUIRED_COLUMNS
            .iter()
            .map(|s| s.to_string())
            .collect();
        let values = [
            office,
            juris1num,
            " Braynon,, II ",
            "Oscar",
            "(Doc)",
            "Democratic Party",
            "Miami-Dade",
            "42",
        ];
        SourceRow::new(header, values.iter().map(|s| s.to_string()).collect())
    }

    fn precinct_row(contest: &str, candidate: &str, district: &str) -> SourceRow {
        let header: Rc<[String]> = PrecinctDetail::FIELD_NAMES
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut values: Vec<String> = vec![String::new(); header.len()];
        values[1] = "Leon".to_string();
        values[5] = "0012".to_string();
        values[6] = "Faith Presbyterian ".to_string();
        values[11] = contest.to_string();
        values[12] = district.to_string();
        values[14] = candidate.to_string();
        values[15] = " REP ".to_string();
        values[18] = "17".to_string();
        SourceRow::new(header, values)
    }

    #[test]
    fn county_skips_non_target_offices() {
        assert!(CountySummary.should_skip(&county_row("City Council", "")));
        assert!(!CountySummary.should_skip(&county_row("  Governor ", "")));
        // Exact match only.
        assert!(CountySummary.should_skip(&county_row("Governor (Special)", "")));
    }

    #[test]
    fn county_skips_ballot_initiatives() {
        let text = "Amendment 5 ".repeat(20);
        assert!(CountySummary.should_skip(&county_row(&text, "")));
    }

    #[test]
    fn county_district_only_for_district_offices() {
        let e = CountySummary.extract(&county_row("State Senate", " 27 "));
        assert_eq!(e.district, Some("27".to_string()));
        let e = CountySummary.extract(&county_row("Attorney General", "27"));
        assert_eq!(e.district, None);
    }

    #[test]
    fn county_names_pass_through() {
        let e = CountySummary.extract(&county_row("Governor", ""));
        assert_eq!(
            e.candidate,
            CandidateName::Parts {
                family_name: "Braynon,, II".to_string(),
                given_name: "Oscar".to_string(),
                additional_name: "(Doc)".to_string(),
            }
        );
        assert_eq!(e.jurisdiction, "Miami-Dade");
    }

    #[test]
    fn precinct_matches_substrings() {
        let row = precinct_row("United States Senator (REP)", "Connie Mack", "");
        assert!(!PrecinctDetail.should_skip(&row));
        let row = precinct_row("Soil and Water Conservation", "Jane Doe", "");
        assert!(PrecinctDetail.should_skip(&row));
    }

    #[test]
    fn precinct_candidate_vocabulary() {
        assert_eq!(PrecinctDetail::candidate_name("UnderVotes"), "Under Votes");
        assert_eq!(PrecinctDetail::candidate_name("OverVotes"), "Over Votes");
        assert_eq!(PrecinctDetail::candidate_name(" WriteinVotes"), "Write-ins");
        assert_eq!(PrecinctDetail::candidate_name("Bill Nelson"), "Bill Nelson");
    }

    #[test]
    fn precinct_fields() {
        let e = PrecinctDetail.extract(&precinct_row(
            "State Representative",
            "WriteinVotes",
            " 9 ",
        ));
        assert_eq!(
            e.candidate,
            CandidateName::Full {
                full_name: "Write-ins".to_string(),
                slug: "write-ins".to_string()
            }
        );
        assert_eq!(e.district, Some("9".to_string()));
        assert_eq!(e.jurisdiction, "0012 Faith Presbyterian");
        assert_eq!(e.party, "REP");
        assert_eq!(
            e.place,
            Place::Precinct {
                precinct_id: "0012".to_string(),
                county_name: "Leon".to_string()
            }
        );
    }

    #[test]
    fn precinct_district_absent_for_statewide_offices() {
        let e = PrecinctDetail.extract(&precinct_row("Governor", "Rick Scott", "1"));
        assert_eq!(e.district, None);
    }
}
