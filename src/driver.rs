//! The top-level driver: parse, run the engine, report a status.
//!
//! [`Driver`] ties the parser, the capability catalogs and an
//! [`AnalysisEngine`] together. It never terminates the process itself; it
//! returns a [`StatusCode`] and leaves the terminate-or-record decision to
//! the [`crate::status::ExitCoordinator`] owned by the caller, so the same
//! driver runs standalone or embedded.

use std::io::Write;

use tracing::debug;

use crate::language::LanguageRegistry;
use crate::params::ParameterRecord;
use crate::parser::{extract_parameters, ParseOutcome};
use crate::renderer::RendererRegistry;
use crate::status::StatusCode;

/// The program name used in usage text and example invocations.
pub const PROG_NAME: &str = "srclint";

/// The seam to the analysis engine proper.
///
/// The engine is out of scope for this crate: it receives the validated
/// parameter record and reports back a status code, which the driver forwards
/// unchanged. Implementations must not terminate the process.
pub trait AnalysisEngine {
    /// Runs the analysis described by `params` and returns its status.
    fn analyze(&self, params: &ParameterRecord) -> StatusCode;
}

/// Engine stand-in that accepts every parameter record and reports success.
///
/// Used by the binary when no analysis backend is linked in, and by tests
/// that only exercise the driver's parse and reporting paths.
#[derive(Debug, Default)]
pub struct NoopEngine;

impl AnalysisEngine for NoopEngine {
    fn analyze(&self, params: &ParameterRecord) -> StatusCode {
        debug!(source_path = %params.source_path, "no analysis backend linked, reporting success");
        StatusCode::Success
    }
}

/// The command-line driver core.
pub struct Driver<E> {
    engine: E,
    languages: LanguageRegistry,
    renderers: RendererRegistry,
}

impl<E: AnalysisEngine> Driver<E> {
    /// Creates a driver over the builtin capability catalogs.
    pub fn new(engine: E) -> Self {
        Self::with_catalogs(engine, LanguageRegistry::builtin(), RendererRegistry::builtin())
    }

    /// Creates a driver over explicit catalogs.
    ///
    /// Embedding callers and tests use this to control exactly what the
    /// usage text advertises.
    pub fn with_catalogs(
        engine: E,
        languages: LanguageRegistry,
        renderers: RendererRegistry,
    ) -> Self {
        Self {
            engine,
            languages,
            renderers,
        }
    }

    /// Runs one driver invocation over `args`.
    ///
    /// A help request short-circuits to usage text on `out` and
    /// [`StatusCode::Success`]. A parse failure reports usage on `out`, a
    /// diagnostic on `err`, and yields [`StatusCode::Error`]. A successful
    /// parse hands the record to the engine, whose status is returned
    /// unchanged. Each invocation traverses this chain exactly once.
    pub fn run<O: Write, Er: Write>(
        &self,
        args: &[String],
        out: &mut O,
        err: &mut Er,
    ) -> StatusCode {
        match extract_parameters(
            args,
            PROG_NAME,
            &self.languages,
            &self.renderers,
            out,
            err,
        ) {
            ParseOutcome::HelpRequested => StatusCode::Success,
            ParseOutcome::Failed(_) => StatusCode::Error,
            ParseOutcome::Parsed(record) => self.engine.analyze(&record),
        }
    }
}
