//! Diagnostics accumulated while evaluating impacts

use crate::core::error::{ImpactError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// The evaluation failure behind an error, when there is one
    pub error: Option<ImpactError>,
}

/// Ordered collection of diagnostics, owned by the caller
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message,
            error: None,
        });
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            message,
            error: None,
        });
    }

    /// Record an evaluation failure, keeping the typed error
    pub fn record_impact_error(&mut self, error: ImpactError) {
        let message = error.to_string();
        tracing::error!("{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            message,
            error: Some(error),
        });
    }

    /// Unwrap a result into a value, reporting a failure as error + 0.0
    pub fn settle(&mut self, result: Result<f64>) -> f64 {
        match result {
            Ok(value) => value,
            Err(error) => {
                self.record_impact_error(error);
                0.0
            }
        }
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.entries.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
