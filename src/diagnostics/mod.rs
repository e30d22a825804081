//! Diagnostics interface for kernel conditions
//!
//! The kernel never formats or prints diagnostics itself. Every condition is
//! handed to a `DiagnosticsSink` together with the source location that was
//! being processed; the host decides what to do with it.

use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{KernelError, KernelResult};

/// Severity level for kernel diagnostics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

/// Where in the input a condition was detected
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InputLocation {
    /// Name of the source document (file name, URL, "-" for stdin)
    pub source_name: String,
    /// 1-based line number in the source document
    pub line_number: usize,
}

impl InputLocation {
    pub fn new(source_name: impl Into<String>, line_number: usize) -> Self {
        Self {
            source_name: source_name.into(),
            line_number,
        }
    }
}

impl fmt::Display for InputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_name, self.line_number)
    }
}

/// Receiver for every condition the kernel detects
pub trait DiagnosticsSink {
    fn report(&self, location: &InputLocation, severity: Severity, message: &str);
}

/// Sink forwarding to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn report(&self, location: &InputLocation, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!(target: "notation_kernel", "{}: {}", location, message),
            Severity::Warning => log::warn!(target: "notation_kernel", "{}: {}", location, message),
            Severity::Error | Severity::Fatal => {
                log::error!(target: "notation_kernel", "{}: {}: {}", location, severity, message)
            }
        }
    }
}

/// A single recorded diagnostic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: InputLocation,
    pub severity: Severity,
    pub message: String,
}

/// Sink that keeps every diagnostic for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Check if anything at `Error` or above was reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.severity >= Severity::Error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl DiagnosticsSink for CollectingSink {
    fn report(&self, location: &InputLocation, severity: Severity, message: &str) {
        self.diagnostics.borrow_mut().push(Diagnostic {
            location: location.clone(),
            severity,
            message: message.to_string(),
        });
    }
}

/// A sink bound to the location currently being processed
///
/// Implements the propagation policy: recoverable errors are reported once
/// and replaced locally, fatal errors are reported and handed back so the
/// caller can abandon the current document.
pub struct Reporter<'a> {
    sink: &'a dyn DiagnosticsSink,
    location: InputLocation,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a dyn DiagnosticsSink, location: InputLocation) -> Self {
        Self { sink, location }
    }

    pub fn location(&self) -> &InputLocation {
        &self.location
    }

    /// Same sink, different source line
    pub fn at_line(&self, line_number: usize) -> Reporter<'a> {
        Reporter {
            sink: self.sink,
            location: InputLocation::new(self.location.source_name.clone(), line_number),
        }
    }

    pub fn warning(&self, message: &str) {
        self.sink.report(&self.location, Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.sink.report(&self.location, Severity::Error, message);
    }

    /// Report `err` with its own severity
    pub fn report_error(&self, err: &KernelError) {
        self.sink
            .report(&self.location, err.severity(), &err.to_string());
    }

    /// Replace a recoverable error with `fallback`
    pub fn recover<T>(&self, result: KernelResult<T>, fallback: T) -> KernelResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                self.report_error(&err);
                if err.is_fatal() {
                    Err(err)
                } else {
                    Ok(fallback)
                }
            }
        }
    }

    /// Replace a recoverable error with the `None` sentinel
    pub fn recover_or_none<T>(&self, result: KernelResult<T>) -> KernelResult<Option<T>> {
        self.recover(result.map(Some), None)
    }
}
