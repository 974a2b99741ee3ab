//! Requirements-manifest parsing.
//!
//! The manifest is plain text, one declaration per line, `#` comments, with
//! the optional `name==version` pinning syntax of Python requirements files.

/// A declared `(name, version?)` pair, before any lookup has happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
}

/// Parses manifest text into the declared dependencies, in declaration order.
///
/// Per line: leading and trailing whitespace is stripped; empty lines and
/// lines starting with `#` are skipped. A line containing `==` is split on
/// the first occurrence into name and version, both stripped. A line without
/// `==` is a bare package name with no version. Lines matching neither shape
/// (e.g. a single `=`) are deliberately accepted as bare names rather than
/// rejected. Duplicate entries are preserved; uniqueness is not this
/// function's concern.
pub fn parse_manifest(text: &str) -> Vec<Dependency> {
    let mut dependencies = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once("==") {
            Some((name, version)) => dependencies.push(Dependency {
                name: name.trim().to_string(),
                version: Some(version.trim().to_string()),
            }),
            None => dependencies.push(Dependency {
                name: line.to_string(),
                version: None,
            }),
        }
    }

    dependencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, version: Option<&str>) -> Dependency {
        Dependency {
            name: name.to_string(),
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_text_yields_no_dependencies() {
        assert!(parse_manifest("").is_empty());
        assert!(parse_manifest("\n\n   \n").is_empty());
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let parsed = parse_manifest("# build deps\nflask==1.0\n  # pinned below\n");
        assert_eq!(parsed, vec![dep("flask", Some("1.0"))]);
    }

    #[test]
    fn test_pinned_line_round_trips_stripped() {
        let parsed = parse_manifest("  flask == 1.0  \n");
        assert_eq!(parsed, vec![dep("flask", Some("1.0"))]);
    }

    #[test]
    fn test_bare_name_has_no_version() {
        let parsed = parse_manifest("requests\n");
        assert_eq!(parsed, vec![dep("requests", None)]);
    }

    #[test]
    fn test_split_happens_on_first_separator() {
        let parsed = parse_manifest("weird==1.0==beta\n");
        assert_eq!(parsed, vec![dep("weird", Some("1.0==beta"))]);
    }

    #[test]
    fn test_single_equals_falls_back_to_bare_name() {
        // Malformed pin: kept as a bare name instead of failing the parse.
        let parsed = parse_manifest("flask=1.0\n");
        assert_eq!(parsed, vec![dep("flask=1.0", None)]);
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let parsed = parse_manifest("requests==2.0\nrequests==2.0\nrequests\n");
        assert_eq!(
            parsed,
            vec![
                dep("requests", Some("2.0")),
                dep("requests", Some("2.0")),
                dep("requests", None),
            ]
        );
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let parsed = parse_manifest("b==2\na==1\nc\n");
        let names: Vec<&str> = parsed.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
