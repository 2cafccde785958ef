//! # Bindery
//!
//! Contribution validation for a compile-time dependency injection code generator.
//!
//! A host symbol processor hands the crate a [`Resolver`](symbol::Resolver) over the
//! current compilation's types. Bindery checks that every class carrying a
//! contribution annotation (`@ContributesBinding`, `@ContributesMultibinding`,
//! `@ContributesTo`) uses its annotations correctly and actually satisfies the type it
//! binds, then hands validated metadata to the generation stage.
//!
//! ## Features
//!
//! - **Declaration inspection**: classify resolvable annotations as qualifiers, map keys
//!   or contributions
//! - **Cardinality checks**: at most one qualifier, at most one map key
//! - **Bound types**: explicit `boundType` or the single direct supertype, checked for
//!   assignability
//! - **Rounds**: aggregate diagnostics across declarations, skip or abort on failure
//!
//! ## Quick Start
//!
//! ```rust
//! use bindery::prelude::*;
//!
//! let graph = SymbolGraph::builder()
//!     .declare(ClassDeclaration::annotation_class(names::CONTRIBUTES_BINDING))
//!     .declare(ClassDeclaration::interface("com.example.Bar"))
//!     .declare(ClassDeclaration::interface("com.example.Baz"))
//!     .declare(
//!         ClassDeclaration::class("com.example.Foo")
//!             .with_super_type("com.example.Bar")
//!             .with_super_type("com.example.Baz")
//!             .with_annotation(Annotation::new(names::CONTRIBUTES_BINDING)),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let config = ProcessorConfig::default();
//! let validator = ContributionValidator::new(&graph, &config);
//! let foo = graph.declaration(&FqName::new("com.example.Foo")).unwrap();
//!
//! let err = validator
//!     .check_single_super_type(foo, &FqName::new(names::CONTRIBUTES_BINDING))
//!     .unwrap_err();
//! assert_eq!(err.kind(), DiagnosticKind::AmbiguousOrMissingBoundType);
//! ```

pub mod config;
pub mod contribution;
pub mod error;
pub mod inspect;
pub mod names;
pub mod processor;
pub mod symbol;
pub mod validate;

// Re-export core types
pub use config::{ProcessorConfig, ProcessorOptions};
pub use contribution::{ContributionKind, ValidatedContribution};
pub use error::{Diagnostic, DiagnosticKind, Result};
pub use inspect::DeclarationInspector;
pub use processor::{ContributionProcessor, RoundOutcome};
pub use validate::ContributionValidator;

/// Prelude module for convenient imports
///
/// ```
/// use bindery::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ProcessorConfig, ProcessorOptions};
    pub use crate::contribution::{ContributionKind, ValidatedContribution};
    pub use crate::error::{Diagnostic, DiagnosticKind, Result};
    pub use crate::inspect::{AnnotationRole, AnnotationSummary, DeclarationInspector};
    pub use crate::names;
    pub use crate::processor::{ContributionProcessor, ContributionSink, JsonManifestSink, RoundOutcome};
    pub use crate::symbol::{
        Annotation, AnnotationValue, ClassDeclaration, ClassKind, FqName, Resolver, SymbolGraph,
        TypeRef, Visibility,
    };
    pub use crate::validate::ContributionValidator;
}
