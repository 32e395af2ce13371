use crate::config::*;
use crate::format::{CandidateName, Extracted, Place};
use crate::jurisdiction::{county_reference, JurisdictionResolver};
use crate::text::{ocd_type_id, slugify};

/// Reads a vote count.
///
/// Blank, non-numeric, non-finite and negative values count as zero.
/// Fractional values are truncated.
///
/// ```
/// use fl_results::normalize::coerce_votes;
///
/// assert_eq!(coerce_votes("123.9"), 123);
/// assert_eq!(coerce_votes(" "), 0);
/// assert_eq!(coerce_votes("n/a"), 0);
/// ```
pub fn coerce_votes(raw: &str) -> u64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0;
    }
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() && x > 0.0 => x.trunc() as u64,
        _ => 0,
    }
}

/// Builds the result record for an extracted row.
///
/// Precinct rows need the code of their county: a county missing from the
/// resolver is an error.
pub fn normalize<R: JurisdictionResolver>(
    extracted: Extracted,
    context: &ElectionContext,
    resolver: &R,
) -> Result<RawResult, ResolveError> {
    let Extracted {
        office,
        district,
        candidate,
        party,
        jurisdiction,
        raw_votes,
        place,
    } = extracted;

    let (reporting_level, reporting_district, ocd_id, parent_jurisdiction) = match place {
        Place::County { district_num } => {
            let ocd_id = format!("{}/county:{}", context.ocd_id, ocd_type_id(&jurisdiction));
            if office == PRESIDENT_BY_CONGRESSIONAL_DISTRICT {
                (
                    ReportingLevel::CongressionalDistrictByCounty,
                    Some(district_num),
                    ocd_id,
                    None,
                )
            } else {
                (ReportingLevel::County, None, ocd_id, None)
            }
        }
        Place::Precinct {
            precinct_id,
            county_name,
        } => {
            let county_ocd_id = resolver.resolve(&county_reference(&county_name))?;
            let ocd_id = format!("{}/precinct:{}", county_ocd_id, ocd_type_id(&precinct_id));
            (ReportingLevel::Precinct, None, ocd_id, Some(county_name))
        }
    };

    let contest_slug = match district.as_deref() {
        Some(d) if !d.is_empty() => slugify(&format!("{} {}", office, d)),
        _ => slugify(&office),
    };

    let (family_name, given_name, additional_name, full_name, name_slug, candidate_slug) =
        match candidate {
            CandidateName::Parts {
                family_name,
                given_name,
                additional_name,
            } => {
                let joined: Vec<&str> = [
                    given_name.as_str(),
                    additional_name.as_str(),
                    family_name.as_str(),
                ]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
                let candidate_slug = slugify(&joined.join(" "));
                (
                    Some(family_name),
                    Some(given_name),
                    Some(additional_name),
                    None,
                    None,
                    candidate_slug,
                )
            }
            CandidateName::Full { full_name, slug } => {
                (None, None, None, Some(full_name), Some(slug.clone()), slug)
            }
        };

    Ok(RawResult {
        context: context.clone(),
        office,
        district,
        family_name,
        given_name,
        additional_name,
        full_name,
        name_slug,
        party,
        jurisdiction,
        ocd_id,
        reporting_level,
        reporting_district,
        parent_jurisdiction,
        votes: coerce_votes(&raw_votes),
        contest_slug,
        candidate_slug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::{Jurisdiction, JurisdictionTable};

    fn context() -> ElectionContext {
        ElectionContext {
            source: "20120814__fl__primary.tsv".to_string(),
            election_id: "fl-2012-08-14-primary".to_string(),
            start_date: "2012-08-14".to_string(),
            end_date: None,
            state: "FL".to_string(),
            election_type: "primary".to_string(),
            result_type: "certified".to_string(),
            special: false,
            ocd_id: "ocd-division/country:us/state:fl".to_string(),
        }
    }

    fn county(office: &str, district_num: &str, votes: &str) -> Extracted {
        Extracted {
            office: office.to_string(),
            district: None,
            candidate: CandidateName::Parts {
                family_name: "Romney".to_string(),
                given_name: "Mitt".to_string(),
                additional_name: "".to_string(),
            },
            party: "Republican Party".to_string(),
            jurisdiction: "Leon".to_string(),
            raw_votes: votes.to_string(),
            place: Place::County {
                district_num: district_num.to_string(),
            },
        }
    }

    #[test]
    fn votes_coercion() {
        assert_eq!(coerce_votes(""), 0);
        assert_eq!(coerce_votes("   "), 0);
        assert_eq!(coerce_votes("abc"), 0);
        assert_eq!(coerce_votes("123.9"), 123);
        assert_eq!(coerce_votes(" 100 "), 100);
        assert_eq!(coerce_votes("-4"), 0);
        assert_eq!(coerce_votes("inf"), 0);
        assert_eq!(coerce_votes("NaN"), 0);
    }

    #[test]
    fn county_level() {
        let r = normalize(
            county("Governor", "3", "100"),
            &context(),
            &JurisdictionTable::default(),
        )
        .unwrap();
        assert_eq!(r.reporting_level, ReportingLevel::County);
        assert_eq!(r.reporting_district, None);
        assert_eq!(r.ocd_id, "ocd-division/country:us/state:fl/county:leon");
        assert_eq!(r.votes, 100);
        assert_eq!(r.candidate_slug, "mitt-romney");
        assert_eq!(r.contest_slug, "governor");
    }

    #[test]
    fn congressional_district_by_county() {
        let r = normalize(
            county(PRESIDENT_BY_CONGRESSIONAL_DISTRICT, "5", "12.5"),
            &context(),
            &JurisdictionTable::default(),
        )
        .unwrap();
        assert_eq!(
            r.reporting_level,
            ReportingLevel::CongressionalDistrictByCounty
        );
        assert_eq!(r.reporting_district, Some("5".to_string()));
        assert_eq!(r.votes, 12);
    }

    fn precinct(county_name: &str) -> Extracted {
        Extracted {
            office: "Governor".to_string(),
            district: None,
            candidate: CandidateName::Full {
                full_name: "Under Votes".to_string(),
                slug: "under-votes".to_string(),
            },
            party: "".to_string(),
            jurisdiction: "0012 Faith Presbyterian".to_string(),
            raw_votes: "7".to_string(),
            place: Place::Precinct {
                precinct_id: "0012".to_string(),
                county_name: county_name.to_string(),
            },
        }
    }

    #[test]
    fn precinct_code_uses_county_code() {
        let table = JurisdictionTable::new(vec![Jurisdiction {
            name: "Leon County".to_string(),
            ocd_id: "ocd-division/country:us/state:fl/county:leon".to_string(),
        }]);
        let r = normalize(precinct("Leon"), &context(), &table).unwrap();
        assert_eq!(r.reporting_level, ReportingLevel::Precinct);
        assert_eq!(
            r.ocd_id,
            "ocd-division/country:us/state:fl/county:leon/precinct:12"
        );
        assert_eq!(r.parent_jurisdiction, Some("Leon".to_string()));
        assert_eq!(r.candidate_slug, "under-votes");
        assert_eq!(r.full_name, Some("Under Votes".to_string()));
    }

    #[test]
    fn precinct_unknown_county() {
        let err = normalize(precinct("Leon"), &context(), &JurisdictionTable::default())
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::Missing {
                name: "LEON COUNTY".to_string()
            }
        );
    }
}
