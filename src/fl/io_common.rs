use std::path::Path;

/// The name of a source file without directories or extension.
pub fn file_stem(source: &str) -> String {
    Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(source)
        .to_string()
}

/// The election type of a generated file name, e.g. `primary` for
/// `20120814__fl__primary.tsv`.
pub fn election_type_from_filename(source: &str) -> String {
    file_stem(source)
        .split("__")
        .nth(2)
        .unwrap_or("general")
        .to_string()
}
