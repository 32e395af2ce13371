/// Turns a name into a lowercase, path-safe string.
///
/// Runs of characters that are not ASCII letters or digits become a single
/// hyphen. Leading and trailing hyphens are dropped.
///
/// ```
/// use fl_results::text::slugify;
///
/// assert_eq!(slugify("Write-ins"), "write-ins");
/// assert_eq!(slugify("  St. Lucie "), "st-lucie");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Formats a name as the last segment of an OCD division identifier.
///
/// Leading zeros are stripped, letters are lowercased and any character not
/// allowed in a type id is replaced by an underscore.
pub fn ocd_type_id(text: &str) -> String {
    text.trim_start_matches('0')
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '.' | '_' | '~' | '-' => c,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_runs() {
        assert_eq!(
            slugify("U.S. President by Congressional District"),
            "u-s-president-by-congressional-district"
        );
        assert_eq!(slugify("Braynon,, II"), "braynon-ii");
        assert_eq!(slugify("Anne 'Libby'"), "anne-libby");
        assert_eq!(slugify("--"), "");
    }

    #[test]
    fn ocd_type_id_examples() {
        assert_eq!(ocd_type_id("Leon"), "leon");
        assert_eq!(ocd_type_id("St. Lucie"), "st._lucie");
        assert_eq!(ocd_type_id("0012"), "12");
        assert_eq!(ocd_type_id("Miami-Dade"), "miami-dade");
    }
}
