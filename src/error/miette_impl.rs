//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{DebugError, Stage};

/// A diagnostic wrapper for debug output errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct DebugDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::ResolveOutput => {
            "Use \"-\", \"stdout\" or \"stderr\"; pass other sinks with set_output"
        }
        Stage::Parse => "Check the debug configuration syntax",
        Stage::Write => "The debug destination rejected the write",
        Stage::Install => "A global log backend was already installed",
    }
}

impl From<DebugError> for DebugDiagnostic {
    fn from(e: DebugError) -> Self {
        DebugDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
            severity: Severity::Error,
        }
    }
}

impl From<DebugError> for miette::Report {
    fn from(e: DebugError) -> Self {
        miette::Report::new(DebugDiagnostic::from(e))
    }
}
