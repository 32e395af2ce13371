use crate::fl::*;

use fl_results::jurisdiction::Jurisdiction;
use fl_results::ElectionContext;
use serde::Deserialize;
use snafu::ResultExt;
use std::fs;

use crate::fl::io_common::election_type_from_filename;

/// A source file and the election it holds.
#[derive(Eq, PartialEq, Debug, Clone, Deserialize)]
pub struct FileMapping {
    #[serde(rename = "generatedFilename")]
    pub generated_filename: String,
    pub election: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(rename = "electionType")]
    pub election_type: Option<String>,
    #[serde(rename = "resultType")]
    pub result_type: String,
    pub special: Option<bool>,
    /// Overrides the state division as prefix of the county codes.
    #[serde(rename = "ocdId")]
    pub ocd_id: Option<String>,
    /// One of county, precinct or generic. Guessed from the file name if absent.
    pub format: Option<String>,
}

impl FileMapping {
    pub fn election_context(&self, config: &FlConfig) -> ElectionContext {
        ElectionContext {
            source: self.generated_filename.clone(),
            election_id: self.election.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            state: config.state.to_uppercase(),
            election_type: self
                .election_type
                .clone()
                .unwrap_or_else(|| election_type_from_filename(&self.generated_filename)),
            result_type: self.result_type.clone(),
            special: self.special.unwrap_or(false),
            ocd_id: self.ocd_id.clone().unwrap_or_else(|| config.ocd_id.clone()),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Deserialize)]
pub struct FlConfig {
    pub state: String,
    #[serde(rename = "ocdId")]
    pub ocd_id: String,
    #[serde(default)]
    pub jurisdictions: Vec<Jurisdiction>,
    pub mappings: Vec<FileMapping>,
}

pub fn read_config(path: &str) -> FlResult<FlConfig> {
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "state": "fl",
        "ocdId": "ocd-division/country:us/state:fl",
        "jurisdictions": [
            {"name": "Leon County", "ocdId": "ocd-division/country:us/state:fl/county:leon"}
        ],
        "mappings": [
            {
                "generatedFilename": "20120814__fl__primary.tsv",
                "election": "fl-2012-08-14-primary",
                "startDate": "2012-08-14",
                "resultType": "certified"
            },
            {
                "generatedFilename": "20121106__fl__general__precinct.tsv",
                "election": "fl-2012-11-06-general",
                "startDate": "2012-11-06",
                "endDate": "2012-11-06",
                "electionType": "general",
                "resultType": "unofficial",
                "special": true,
                "ocdId": "ocd-division/country:us/state:fl/other",
                "format": "precinct"
            }
        ]
    }"#;

    #[test]
    fn parses_config() {
        let config: FlConfig = serde_json::from_str(CONFIG).unwrap();
        assert_eq!(config.jurisdictions.len(), 1);
        assert_eq!(config.mappings.len(), 2);
        assert_eq!(config.mappings[1].format, Some("precinct".to_string()));
    }

    #[test]
    fn context_defaults() {
        let config: FlConfig = serde_json::from_str(CONFIG).unwrap();
        let ctx = config.mappings[0].election_context(&config);
        assert_eq!(ctx.state, "FL");
        assert_eq!(ctx.election_type, "primary");
        assert!(!ctx.special);
        assert_eq!(ctx.ocd_id, "ocd-division/country:us/state:fl");

        let ctx = config.mappings[1].election_context(&config);
        assert!(ctx.special);
        assert_eq!(ctx.end_date, Some("2012-11-06".to_string()));
        assert_eq!(ctx.ocd_id, "ocd-division/country:us/state:fl/other");
    }
}
