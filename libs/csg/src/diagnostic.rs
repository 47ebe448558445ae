//! # Diagnostics
//!
//! Non-fatal findings attached to a [`crate::Solid`]. The caller decides
//! whether to proceed or re-parameterize.

use serde::{Deserialize, Serialize};

/// Why a composition turned out degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Degeneracy {
    /// A subtractor misses the base entirely; the difference is a no-op.
    DisjointSubtractor { index: usize },
    /// A subtractor encloses the base; nothing is left.
    FullySubtracted { index: usize },
    /// All hull children coincide; the hull adds nothing.
    CoincidentHull,
}

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// No-op or near-zero-volume composition.
    GeometryDegenerate(Degeneracy),
}

/// A finding about one composite node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Child indices from the root down to the offending composite.
    /// Color wrappers do not add a step.
    pub path: Vec<usize>,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn degenerate(reason: Degeneracy, message: impl Into<String>, path: Vec<usize>) -> Self {
        Self {
            kind: DiagnosticKind::GeometryDegenerate(reason),
            message: message.into(),
            path,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self.kind, DiagnosticKind::GeometryDegenerate(_))
    }

    /// The degeneracy reason, if this is a degenerate-geometry finding.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self.kind {
            DiagnosticKind::GeometryDegenerate(reason) => Some(reason),
        }
    }
}
