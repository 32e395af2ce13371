/*!

This is the long-form manual for `fl_results` and `flelex`.

## Input formats

Florida results come in two flavours of tab-delimited text, encoded in
latin-1.

### County summaries

One row per candidate and county, with a header row. The columns read are:

| column          | field                                  |
|-----------------|----------------------------------------|
| `OfficeDesc`    | office                                 |
| `Juris1num`     | district, or congressional district    |
| `CanNameLast`   | family name                            |
| `CanNameFirst`  | given name                             |
| `CanNameMiddle` | additional name                        |
| `PartyName`     | party                                  |
| `CountyName`    | jurisdiction                           |
| `CanVotes`      | votes                                  |

Notes:
- results for "U.S. President by Congressional District" are reported by
  county and congressional district. The district is in `Juris1num`.
- `CanNameMiddle` also holds nicknames in no standard format, e.g.
  "Anne 'Libby'" or "(Doc)". It is kept as is.
- name suffixes stay in `CanNameLast`, e.g. "Braynon,, II".
- write-in candidates have the party "Write-In". "No Party Affiliation" is
  a different party from "Independent Party".
- some contests put the names of the governor and the lieutenant governor
  into `CanNameLast` and `CanNameFirst`, with `/` as `CanNameMiddle`.
- some files list the same result several times. Only the first one is kept.

### Precinct results

No header row. The columns are, in order, the ones listed in
[`PrecinctDetail::FIELD_NAMES`](crate::format::PrecinctDetail::FIELD_NAMES).
NUL bytes appear in some files and are removed before reading.

The contest name holds extra qualifiers, so a row is kept when any target
office appears in it. The pseudo-candidates `UnderVotes`, `OverVotes` and
`WriteinVotes` are renamed `Under Votes`, `Over Votes` and `Write-ins`.

The jurisdiction code of a precinct is built under the code of its county.
The county is looked up as `"<COUNTY NAME> COUNTY"` in the jurisdiction
list. A county that is missing from the list stops the load of the file.

## Configuration

`flelex` reads a JSON configuration:

```json
{
  "state": "FL",
  "ocdId": "ocd-division/country:us/state:fl",
  "jurisdictions": [
    { "name": "Leon County", "ocdId": "ocd-division/country:us/state:fl/county:leon" }
  ],
  "mappings": [
    {
      "generatedFilename": "20121106__fl__general.tsv",
      "election": "fl-2012-11-06-general",
      "startDate": "2012-11-06",
      "electionType": "general",
      "resultType": "certified"
    }
  ]
}
```

Each mapping may also set `endDate`, `special`, its own `ocdId` and a
`format` (`county`, `precinct` or `generic`). Without a `format`, files
with `precinct` in their name are read as precinct results and all the
others with the county summary rules.

## Output

Each file produces one JSON array of results, written in one go. With
`--out <directory>` it goes to `<directory>/<file stem>.json`, otherwise to
the standard output. With `--reference <directory>`, each batch is compared
against `<directory>/<file stem>.json` and any difference stops the run.

*/
