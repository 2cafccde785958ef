//! In-memory view of the host's symbol graph.
//!
//! Everything here is a read-only snapshot built per processing round. Validators only
//! talk to the graph through the [`Resolver`] trait, so a live compiler session and the
//! bundled [`SymbolGraph`] are interchangeable.

mod annotation;
mod declaration;
mod graph;
mod name;
mod resolver;
mod types;

pub use annotation::{Annotation, AnnotationValue};
pub use declaration::ClassDeclaration;
pub use graph::{SymbolGraph, SymbolGraphBuilder};
pub use name::FqName;
pub use resolver::{Resolver, SuperTypes};
pub use types::{ClassKind, TypeRef, Visibility};
