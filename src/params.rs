//! The validated parameter record.
//!
//! [`ParameterRecord`] is the single outcome of a successful parse: every
//! mandatory field is present and non-empty, and the record is never mutated
//! after it is returned. The draft type in this module is the parser's
//! scratch space while arguments are still being consumed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DriverError, Result};

/// The host convention for separating entries in a classpath-style list.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
/// The host convention for separating entries in a classpath-style list.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// The validated, immutable outcome of argument parsing.
///
/// Invariant: `source_path`, `format` and `rulesets` are present and
/// non-empty whenever a record is returned. Optional fields hold exactly what
/// was passed on the command line; absence means the engine's own default
/// applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    /// The source filename or directory to analyze (`-d`).
    pub source_path: String,
    /// The report format identifier (`-f`).
    pub format: String,
    /// Ruleset filenames, in the order given (`-R`, comma-delimited).
    pub rulesets: Vec<String>,
    /// The target language terse name, if given (`-language`).
    pub language: Option<String>,
    /// The target language version, if given (`-version`).
    pub language_version: Option<String>,
    /// Auxiliary classpath entries, in the order given (`-auxclasspath`,
    /// delimited by the host path-list separator).
    pub aux_classpath: Vec<String>,
    /// The source file encoding, if given (`-encoding`).
    pub encoding: Option<String>,
    /// Renderer property overrides from repeated `-property key=value` flags.
    /// Last writer wins for duplicate keys.
    pub properties: BTreeMap<String, String>,
    /// Whether a help flag was present.
    pub help: bool,
    /// Whether the debug/verbose flag was present.
    pub debug: bool,
}

/// Mutable scratch space used by the parser while consuming arguments.
///
/// `validate` is the only way out: it either produces a complete
/// [`ParameterRecord`] or fails with the first missing mandatory argument.
#[derive(Debug, Default)]
pub(crate) struct ParameterDraft {
    pub(crate) source_path: Option<String>,
    pub(crate) format: Option<String>,
    pub(crate) rulesets: Vec<String>,
    pub(crate) language: Option<String>,
    pub(crate) language_version: Option<String>,
    pub(crate) aux_classpath: Vec<String>,
    pub(crate) encoding: Option<String>,
    pub(crate) properties: BTreeMap<String, String>,
    pub(crate) help: bool,
    pub(crate) debug: bool,
}

impl ParameterDraft {
    /// Checks the mandatory arguments and seals the draft into a record.
    pub(crate) fn validate(self) -> Result<ParameterRecord> {
        let source_path = match self.source_path {
            Some(path) if !path.is_empty() => path,
            _ => {
                return Err(DriverError::missing_required(
                    "a source filename or directory (-d)",
                ));
            }
        };
        let format = match self.format {
            Some(format) if !format.is_empty() => format,
            _ => return Err(DriverError::missing_required("a report format (-f)")),
        };
        if self.rulesets.is_empty() {
            return Err(DriverError::missing_required(
                "a ruleset filename or comma-delimited list of ruleset filenames (-R)",
            ));
        }

        Ok(ParameterRecord {
            source_path,
            format,
            rulesets: self.rulesets,
            language: self.language,
            language_version: self.language_version,
            aux_classpath: self.aux_classpath,
            encoding: self.encoding,
            properties: self.properties,
            help: self.help,
            debug: self.debug,
        })
    }
}

/// Splits a comma-delimited ruleset list, trimming whitespace and dropping
/// empty segments.
pub fn split_rulesets(raw: &str) -> Vec<String> {
    split_list(raw, ',')
}

/// Splits a classpath-style list on the host path-list separator.
pub fn split_classpath(raw: &str) -> Vec<String> {
    split_list(raw, PATH_LIST_SEPARATOR)
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ParameterDraft {
        ParameterDraft {
            source_path: Some("/src".to_string()),
            format: Some("xml".to_string()),
            rulesets: vec!["rules.xml".to_string()],
            ..ParameterDraft::default()
        }
    }

    #[test]
    fn test_validate_succeeds_with_all_mandatory_fields() {
        let record = complete_draft().validate().expect("draft is complete");
        assert_eq!(record.source_path, "/src");
        assert_eq!(record.format, "xml");
        assert_eq!(record.rulesets, vec!["rules.xml".to_string()]);
        assert!(!record.help);
        assert!(!record.debug);
    }

    #[test]
    fn test_validate_fails_without_source_path() {
        let mut draft = complete_draft();
        draft.source_path = None;
        let err = draft.validate().unwrap_err();
        assert_eq!(err.name(), "MissingRequired");
        assert!(err.to_string().contains("-d"));
    }

    #[test]
    fn test_validate_fails_with_empty_source_path() {
        let mut draft = complete_draft();
        draft.source_path = Some(String::new());
        let err = draft.validate().unwrap_err();
        assert_eq!(err.name(), "MissingRequired");
    }

    #[test]
    fn test_validate_fails_without_format() {
        let mut draft = complete_draft();
        draft.format = None;
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("-f"));
    }

    #[test]
    fn test_validate_fails_without_rulesets() {
        let mut draft = complete_draft();
        draft.rulesets.clear();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("-R"));
    }

    #[test]
    fn test_split_rulesets_on_commas_trims_whitespace() {
        let rulesets = split_rulesets("rulesets/quickstart.xml, category/codestyle.xml");
        assert_eq!(
            rulesets,
            vec![
                "rulesets/quickstart.xml".to_string(),
                "category/codestyle.xml".to_string()
            ]
        );
    }

    #[test]
    fn test_split_rulesets_drops_empty_segments() {
        let rulesets = split_rulesets("a.xml,,b.xml,");
        assert_eq!(rulesets, vec!["a.xml".to_string(), "b.xml".to_string()]);
    }

    #[test]
    fn test_split_classpath_uses_host_separator() {
        let raw = format!("commons.jar{}derby.jar", PATH_LIST_SEPARATOR);
        let entries = split_classpath(&raw);
        assert_eq!(
            entries,
            vec!["commons.jar".to_string(), "derby.jar".to_string()]
        );
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = complete_draft().validate().expect("draft is complete");
        let json = serde_json::to_string(&record).expect("record serializes");
        assert!(json.contains("\"source_path\":\"/src\""));
        assert!(json.contains("\"format\":\"xml\""));
    }
}
