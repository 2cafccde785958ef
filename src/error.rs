use serde::Serialize;
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use crate::symbol::FqName;

pub type Result<T> = std::result::Result<T, Diagnostic>;

/// The category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
pub enum DiagnosticKind {
    TooManyQualifiers,
    TooManyMapKeys,
    NonPublicContribution,
    AmbiguousOrMissingBoundType,
    UnsatisfiedBoundType,
    MissingBoundType,
    InvalidContributesToTarget,
    MissingContributionAnnotation,
}

/// A validation failure anchored at the declaration that caused it.
///
/// Hosts are expected to turn this into a compiler error at the source location of
/// `node` and skip code generation for that declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    node: FqName,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, node: &FqName) -> Self {
        Self {
            kind,
            message: message.into(),
            node: node.clone(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Qualified name of the offending declaration.
    pub fn node(&self) -> &FqName {
        &self.node
    }
}

/// Errors raised while assembling an in-memory symbol graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate declaration: {name}")]
    DuplicateDeclaration { name: FqName },

    #[error("{class} declares unknown super type {super_type}")]
    UnknownSuperType { class: FqName, super_type: FqName },

    #[error("{class} is its own super type")]
    CyclicSuperTypes { class: FqName },
}

/// Errors raised while parsing processor options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for option '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("Option '{key}' must not be empty")]
    Empty { key: String },
}
