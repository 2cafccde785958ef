//! Classification of the annotations attached to a declaration.

use serde::Serialize;
use strum_macros::Display;

use crate::config::ProcessorConfig;
use crate::symbol::{Annotation, ClassDeclaration, FqName, Resolver};

/// What an annotation means to the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum AnnotationRole {
    Qualifier,
    MapKey,
    Contribution,
    Other,
}

/// Counts over the resolvable annotations of one declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnnotationSummary {
    pub total: usize,
    pub qualifiers: usize,
    pub map_keys: usize,
    pub contributions: usize,
}

/// Read-only view over a declaration's annotations.
///
/// Annotations whose type does not resolve in the current compilation unit are
/// invisible to every method here. Iteration follows source order, but callers should
/// only rely on counts and membership.
pub struct DeclarationInspector<'a, R: Resolver + ?Sized> {
    resolver: &'a R,
    config: &'a ProcessorConfig,
}

impl<'a, R: Resolver + ?Sized> DeclarationInspector<'a, R> {
    pub fn new(resolver: &'a R, config: &'a ProcessorConfig) -> Self {
        Self { resolver, config }
    }

    pub fn resolvable_annotations<'d>(
        &'d self,
        declaration: &'d ClassDeclaration,
    ) -> impl Iterator<Item = &'d Annotation> {
        declaration
            .annotations()
            .iter()
            .filter(|annotation| self.resolver.is_annotation_resolvable(annotation))
    }

    /// Resolvable annotations with the given qualified name.
    pub fn annotations_by_name<'d>(
        &'d self,
        declaration: &'d ClassDeclaration,
        name: &'d FqName,
    ) -> impl Iterator<Item = &'d Annotation> {
        self.resolvable_annotations(declaration)
            .filter(move |annotation| annotation.fq_name() == name)
    }

    /// Whether the annotation's own class is meta-annotated as a qualifier.
    pub fn is_qualifier(&self, annotation: &Annotation) -> bool {
        self.has_meta_annotation(annotation, &self.config.vocabulary.qualifier_markers)
    }

    /// Whether the annotation's own class is meta-annotated as a map key.
    pub fn is_map_key(&self, annotation: &Annotation) -> bool {
        self.has_meta_annotation(annotation, &self.config.vocabulary.map_key_markers)
    }

    pub fn is_contribution(&self, annotation: &Annotation) -> bool {
        let names = &self.config.annotations;
        let name = annotation.fq_name();
        *name == names.contributes_binding
            || *name == names.contributes_multibinding
            || *name == names.contributes_to
    }

    pub fn is_interface(&self, declaration: &ClassDeclaration) -> bool {
        declaration.is_interface()
    }

    pub fn role_of(&self, annotation: &Annotation) -> AnnotationRole {
        if self.is_contribution(annotation) {
            AnnotationRole::Contribution
        } else if self.is_qualifier(annotation) {
            AnnotationRole::Qualifier
        } else if self.is_map_key(annotation) {
            AnnotationRole::MapKey
        } else {
            AnnotationRole::Other
        }
    }

    pub fn summarize(&self, declaration: &ClassDeclaration) -> AnnotationSummary {
        self.resolvable_annotations(declaration)
            .fold(AnnotationSummary::default(), |mut summary, annotation| {
                summary.total += 1;
                if self.is_qualifier(annotation) {
                    summary.qualifiers += 1;
                }
                if self.is_map_key(annotation) {
                    summary.map_keys += 1;
                }
                if self.is_contribution(annotation) {
                    summary.contributions += 1;
                }
                summary
            })
    }

    fn has_meta_annotation(&self, annotation: &Annotation, markers: &[FqName]) -> bool {
        self.resolver
            .declaration(annotation.fq_name())
            .is_some_and(|class| {
                class
                    .annotations()
                    .iter()
                    .any(|meta| markers.contains(meta.fq_name()))
            })
    }
}
