use serde::Deserialize;

use crate::config::ResolveError;

/// Looks up the canonical code of a jurisdiction by name.
pub trait JurisdictionResolver {
    fn resolve(&self, name: &str) -> Result<String, ResolveError>;
}

/// A named jurisdiction and its OCD division identifier.
#[derive(Eq, PartialEq, Debug, Clone, Deserialize)]
pub struct Jurisdiction {
    pub name: String,
    #[serde(rename = "ocdId")]
    pub ocd_id: String,
}

/// A read-only list of jurisdictions.
///
/// Names are matched exactly, ignoring case. A name must match exactly one
/// entry.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct JurisdictionTable {
    entries: Vec<Jurisdiction>,
}

impl JurisdictionTable {
    pub fn new(entries: Vec<Jurisdiction>) -> JurisdictionTable {
        JurisdictionTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl JurisdictionResolver for JurisdictionTable {
    fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        let wanted = name.to_uppercase();
        let mut found = self
            .entries
            .iter()
            .filter(|j| j.name.to_uppercase() == wanted);
        match (found.next(), found.count()) {
            (Some(j), 0) => Ok(j.ocd_id.clone()),
            (Some(_), others) => Err(ResolveError::Ambiguous {
                name: name.to_string(),
                count: others + 1,
            }),
            (None, _) => Err(ResolveError::Missing {
                name: name.to_string(),
            }),
        }
    }
}

/// The name under which a county is listed in the jurisdiction table.
pub fn county_reference(county_name: &str) -> String {
    format!("{} COUNTY", county_name.trim().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> JurisdictionTable {
        JurisdictionTable::new(vec![
            Jurisdiction {
                name: "Leon County".to_string(),
                ocd_id: "ocd-division/country:us/state:fl/county:leon".to_string(),
            },
            Jurisdiction {
                name: "Bay County".to_string(),
                ocd_id: "ocd-division/country:us/state:fl/county:bay".to_string(),
            },
            Jurisdiction {
                name: "BAY COUNTY".to_string(),
                ocd_id: "ocd-division/country:us/state:fl/county:bay2".to_string(),
            },
        ])
    }

    #[test]
    fn resolves_ignoring_case() {
        let code = table().resolve(&county_reference("leon")).unwrap();
        assert_eq!(code, "ocd-division/country:us/state:fl/county:leon");
    }

    #[test]
    fn missing_county() {
        let err = table().resolve(&county_reference("Gadsden")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::Missing {
                name: "GADSDEN COUNTY".to_string()
            }
        );
    }

    #[test]
    fn ambiguous_county() {
        let err = table().resolve("Bay County").unwrap_err();
        assert_eq!(
            err,
            ResolveError::Ambiguous {
                name: "Bay County".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn no_partial_match() {
        assert!(table().resolve("Leon").is_err());
    }
}
