//! # srclint - static analysis command-line driver
//!
//! srclint_core is the command-line driver of the srclint static-analysis
//! tool. It turns raw process arguments into a validated parameter set,
//! assembles help text dynamically from the registered output formats and
//! supported languages, and decouples "the run finished with code X" from
//! "the process should terminate now", so the same driver works as a
//! standalone executable or embedded inside a larger process.
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`parser`] - Argument parsing against the parameter schema
//! - [`params`] - The validated, immutable [`ParameterRecord`]
//! - [`usage`] - Catalog-driven usage text assembly
//! - [`language`] - Read-only supported-language catalog
//! - [`renderer`] - Read-only output-renderer catalog
//! - [`status`] - Status codes and the exit coordinator
//! - [`driver`] - The top-level driver and the engine seam
//! - [`error`] - Centralized error types for the crate
//!
//! What the driver does *not* do: parse or analyze source code, load rules,
//! or implement any report format. Those live behind the
//! [`AnalysisEngine`] seam and the catalog interfaces.
//!
//! ## Usage as a Library
//!
//! Embedding callers run the driver directly and keep the process alive:
//!
//! ```rust
//! use srclint_core::{Driver, ExitCoordinator, NoopEngine, StatusCode};
//!
//! let driver = Driver::new(NoopEngine);
//! let args: Vec<String> = vec![
//!     "-d".into(), "/src".into(),
//!     "-f".into(), "xml".into(),
//!     "-R".into(), "rules.xml".into(),
//! ];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let status = driver.run(&args, &mut out, &mut err);
//!
//! let mut coordinator = ExitCoordinator::new(true);
//! coordinator.finish(status);
//! assert_eq!(coordinator.recorded(), Some(StatusCode::Success));
//! ```
//!
//! ## Error Handling
//!
//! All fallible parsing operations return [`Result<T>`], a type alias for
//! `std::result::Result<T, DriverError>`. See the [`error`] module for the
//! failure taxonomy.

// Module declarations
pub mod driver;
pub mod error;
pub mod language;
pub mod params;
pub mod parser;
pub mod renderer;
pub mod status;
pub mod usage;

// Public API exports
pub use crate::driver::{AnalysisEngine, Driver, NoopEngine, PROG_NAME};
pub use crate::params::{split_classpath, split_rulesets, ParameterRecord, PATH_LIST_SEPARATOR};
pub use crate::parser::{debug_requested, extract_parameters, help_requested, parse, ParseOutcome};
pub use crate::usage::build_usage_text;

// Catalog exports
pub use crate::language::{LanguageDescriptor, LanguageRegistry};
pub use crate::renderer::{PropertyDescriptor, RendererDescriptor, RendererRegistry};

// Status exports
pub use crate::status::{ExitCoordinator, StatusCode, NO_EXIT_ENV_VAR};

// Error exports
pub use crate::error::{DriverError as Error, Result};
