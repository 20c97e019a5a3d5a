//! Argument parsing against the driver's parameter schema.
//!
//! The schema is a fixed table of flag spellings: the original interface uses
//! single-dash long options (`-rulesets`, `-auxclasspath`) alongside
//! single-character ones, so the lexer here matches whole tokens against the
//! table instead of splitting short-option clusters.
//!
//! Two entry points:
//!
//! - [`parse`] is the pure half: raw arguments in, [`ParameterRecord`] or
//!   [`DriverError`] out, no I/O.
//! - [`extract_parameters`] is the driver half: it adds the help
//!   short-circuit and the reporting side effects. Usage text is always
//!   written and flushed to the output stream before any diagnostic reaches
//!   the error stream, so a reader of interleaved output can rely on
//!   usage-before-diagnostic ordering.

use std::io::Write;

use tracing::debug;

use crate::error::{DriverError, Result};
use crate::language::LanguageRegistry;
use crate::params::{split_classpath, split_rulesets, ParameterDraft, ParameterRecord};
use crate::renderer::RendererRegistry;
use crate::usage::build_usage_text;

/// What a flag writes into the parameter draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OptionKey {
    SourcePath,
    Format,
    Rulesets,
    Language,
    LanguageVersion,
    AuxClasspath,
    Encoding,
    Property,
    Debug,
    Help,
}

/// One entry in the parameter schema: the accepted spellings for a flag and
/// whether it consumes the following argument as its value.
struct OptionSpec {
    names: &'static [&'static str],
    takes_value: bool,
    key: OptionKey,
}

/// The full parameter schema. Order is documentation order only; lookup is
/// by spelling.
const SCHEMA: &[OptionSpec] = &[
    OptionSpec {
        names: &["-d", "-dir"],
        takes_value: true,
        key: OptionKey::SourcePath,
    },
    OptionSpec {
        names: &["-f", "-format"],
        takes_value: true,
        key: OptionKey::Format,
    },
    OptionSpec {
        names: &["-R", "-rulesets"],
        takes_value: true,
        key: OptionKey::Rulesets,
    },
    OptionSpec {
        names: &["-l", "-language"],
        takes_value: true,
        key: OptionKey::Language,
    },
    OptionSpec {
        names: &["-v", "-version"],
        takes_value: true,
        key: OptionKey::LanguageVersion,
    },
    OptionSpec {
        names: &["-auxclasspath"],
        takes_value: true,
        key: OptionKey::AuxClasspath,
    },
    OptionSpec {
        names: &["-e", "-encoding"],
        takes_value: true,
        key: OptionKey::Encoding,
    },
    OptionSpec {
        names: &["-P", "-property"],
        takes_value: true,
        key: OptionKey::Property,
    },
    OptionSpec {
        names: &["-debug", "-verbose"],
        takes_value: false,
        key: OptionKey::Debug,
    },
    OptionSpec {
        names: &["-h", "-help", "--help"],
        takes_value: false,
        key: OptionKey::Help,
    },
];

fn lookup(token: &str) -> Option<&'static OptionSpec> {
    SCHEMA.iter().find(|spec| spec.names.contains(&token))
}

/// Returns `true` when any argument is a help spelling.
///
/// This is a raw pre-scan, deliberately performed before schema validation:
/// a help request wins even when the rest of the vector is invalid.
pub fn help_requested(args: &[String]) -> bool {
    args.iter().any(|arg| {
        lookup(arg).is_some_and(|spec| spec.key == OptionKey::Help)
    })
}

/// Returns `true` when any argument is a debug/verbose spelling.
///
/// Used by the binary to pick a log level before parsing proper begins.
pub fn debug_requested(args: &[String]) -> bool {
    args.iter().any(|arg| {
        lookup(arg).is_some_and(|spec| spec.key == OptionKey::Debug)
    })
}

/// Parses the raw argument vector into a validated [`ParameterRecord`].
///
/// No side effects: the record is returned, or the first failure is. Failures
/// are unknown flags, flags missing their value, malformed `key=value`
/// properties, stray positional arguments, and missing mandatory arguments.
///
/// # Errors
///
/// Returns a [`DriverError`] naming the offending flag or argument.
pub fn parse(args: &[String]) -> Result<ParameterRecord> {
    let mut draft = ParameterDraft::default();
    let mut iter = args.iter();

    while let Some(token) = iter.next() {
        let Some(spec) = lookup(token) else {
            if token.starts_with('-') {
                return Err(DriverError::unknown_option(token.clone()));
            }
            return Err(DriverError::unexpected_argument(token.clone()));
        };

        if !spec.takes_value {
            match spec.key {
                OptionKey::Debug => draft.debug = true,
                OptionKey::Help => draft.help = true,
                _ => unreachable!("only boolean flags omit a value"),
            }
            continue;
        }

        let value = iter
            .next()
            .ok_or_else(|| DriverError::missing_value(token.clone()))?;

        match spec.key {
            OptionKey::SourcePath => draft.source_path = Some(value.clone()),
            OptionKey::Format => draft.format = Some(value.clone()),
            OptionKey::Rulesets => draft.rulesets = split_rulesets(value),
            OptionKey::Language => draft.language = Some(value.clone()),
            OptionKey::LanguageVersion => draft.language_version = Some(value.clone()),
            OptionKey::AuxClasspath => draft.aux_classpath = split_classpath(value),
            OptionKey::Encoding => draft.encoding = Some(value.clone()),
            OptionKey::Property => {
                let (key, prop_value) = parse_property(token, value)?;
                draft.properties.insert(key, prop_value);
            }
            OptionKey::Debug | OptionKey::Help => {
                unreachable!("boolean flags never consume a value")
            }
        }
    }

    let record = draft.validate()?;
    debug!(?record, "parsed parameters");
    Ok(record)
}

/// Splits a `key=value` property override, rejecting values without a `=` or
/// with an empty key.
fn parse_property(flag: &str, raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(DriverError::invalid_value(flag, raw, "expected key=value"));
    };
    if key.is_empty() {
        return Err(DriverError::invalid_value(
            flag,
            raw,
            "property key must not be empty",
        ));
    }
    Ok((key.to_owned(), value.to_owned()))
}

/// The three terminal results of running the parser against an argument
/// vector.
#[derive(Debug)]
pub enum ParseOutcome {
    /// A help flag was present; usage text has been written to the output
    /// stream.
    HelpRequested,
    /// Parsing failed; usage text and a one-line diagnostic have been
    /// written.
    Failed(DriverError),
    /// Parsing succeeded with no side effects.
    Parsed(ParameterRecord),
}

/// Runs the parser with the reporting side effects of the original driver.
///
/// On a help request the full usage text goes to `out` and parsing stops. On
/// failure the full usage text goes to `out`, is flushed, and the single-line
/// diagnostic goes to `err`. On success nothing is written.
///
/// Stream write failures are deliberately ignored: this is the terminal
/// reporting path and there is nowhere left to report to.
pub fn extract_parameters<O: Write, E: Write>(
    args: &[String],
    program_name: &str,
    languages: &LanguageRegistry,
    renderers: &RendererRegistry,
    out: &mut O,
    err: &mut E,
) -> ParseOutcome {
    if help_requested(args) {
        let usage = build_usage_text(program_name, languages, renderers);
        let _ = out.write_all(usage.as_bytes());
        let _ = out.flush();
        return ParseOutcome::HelpRequested;
    }

    match parse(args) {
        Ok(record) => ParseOutcome::Parsed(record),
        Err(error) => {
            debug!(%error, "argument parsing failed");
            let usage = build_usage_text(program_name, languages, renderers);
            let _ = out.write_all(usage.as_bytes());
            // Usage must reach the reader before the diagnostic.
            let _ = out.flush();
            let _ = writeln!(err, "{}", error);
            let _ = err.flush();
            ParseOutcome::Failed(error)
        }
    }
}
