//! Name conversions between long-flag spellings and options-object keys.
//!
//! Hugo's flags are mostly camelCase (`--cleanDestinationDir`, `--baseURL`),
//! while generic keys and unknown-flag fallbacks use hyphen-separated form.
//! Both directions live here so the emitter and the argv builder agree on
//! the mapping.

/// Converts a name to hyphen-separated lowercase form.
///
/// A hyphen is inserted before an uppercase letter only when it follows a
/// lowercase letter or digit, so acronym runs stay together:
/// `baseURL` → `base-url`, not `base-u-r-l`.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::to_hyphen_case;
///
/// assert_eq!(to_hyphen_case("someUnknownFlag"), "some-unknown-flag");
/// assert_eq!(to_hyphen_case("baseURL"), "base-url");
/// assert_eq!(to_hyphen_case("base-url"), "base-url");
/// assert_eq!(to_hyphen_case("port"), "port");
/// ```
pub fn to_hyphen_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_breaks = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_breaks {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_breaks = false;
        } else {
            out.push(ch);
            prev_breaks = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// Converts a flag's long name to its options-object property name.
///
/// Hyphen-separated names are joined into camelCase; names that already
/// contain internal capitalization are treated as canonical and passed
/// through verbatim.
///
/// # Examples
///
/// ```
/// use hugo_schema_core::to_property_name;
///
/// assert_eq!(to_property_name("clean-destination-dir"), "cleanDestinationDir");
/// assert_eq!(to_property_name("baseURL"), "baseURL");
/// assert_eq!(to_property_name("minify"), "minify");
/// ```
pub fn to_property_name(name: &str) -> String {
    if name.chars().any(|ch| ch.is_ascii_uppercase()) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    for (idx, segment) in name.split('-').filter(|s| !s.is_empty()).enumerate() {
        if idx == 0 {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_case_keeps_acronym_runs_together() {
        assert_eq!(to_hyphen_case("baseURL"), "base-url");
        assert_eq!(to_hyphen_case("noHTTPCache"), "no-httpcache");
        assert_eq!(to_hyphen_case("buildDrafts"), "build-drafts");
    }

    #[test]
    fn test_hyphen_case_is_idempotent_on_hyphenated_input() {
        assert_eq!(to_hyphen_case("some-unknown-flag"), "some-unknown-flag");
    }

    #[test]
    fn test_property_name_round_trip_with_hyphen_case() {
        // A camel property hyphenated and camelized again is unchanged.
        let property = to_property_name("print-path-warnings");
        assert_eq!(property, "printPathWarnings");
        assert_eq!(to_hyphen_case(&property), "print-path-warnings");
    }

    #[test]
    fn test_property_name_passes_capitalized_names_through() {
        assert_eq!(to_property_name("baseURL"), "baseURL");
        assert_eq!(to_property_name("configDir"), "configDir");
    }
}
