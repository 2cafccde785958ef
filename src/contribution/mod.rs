//! Contribution shapes and the validated metadata handed to code generation.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::config::ContributionAnnotations;
use crate::error::{Diagnostic, DiagnosticKind, Result};
use crate::names;
use crate::symbol::{Annotation, ClassDeclaration, FqName, Resolver, TypeRef};
use crate::validate::ContributionValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum ContributionKind {
    /// A single binding of the class to its bound type.
    ContributesBinding,
    /// A set or map multibinding of the class to its bound type.
    ContributesMultibinding,
    /// A component interface or module merged into a scope.
    ContributesTo,
}

impl ContributionKind {
    pub fn annotation_name(self, annotations: &ContributionAnnotations) -> &FqName {
        match self {
            Self::ContributesBinding => &annotations.contributes_binding,
            Self::ContributesMultibinding => &annotations.contributes_multibinding,
            Self::ContributesTo => &annotations.contributes_to,
        }
    }

    pub fn is_binding(self) -> bool {
        matches!(self, Self::ContributesBinding | Self::ContributesMultibinding)
    }
}

/// Everything the generation stage needs to emit wiring for one contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedContribution {
    pub class: FqName,
    pub kind: ContributionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<TypeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_type: Option<TypeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_key: Option<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<TypeRef>,
}

impl<R: Resolver + ?Sized> ContributionValidator<'_, R> {
    /// Runs every check that applies to `kind`, stopping at the first failure.
    pub fn validate_contribution(
        &self,
        declaration: &ClassDeclaration,
        kind: ContributionKind,
    ) -> Result<ValidatedContribution> {
        let annotation_name = kind.annotation_name(&self.config().annotations);
        tracing::debug!("Validating @{} on {}", annotation_name.short_name(), declaration.qualified_name());

        // The cardinality short-circuits count this annotation, so it has to be present.
        let Some(annotation) = self
            .inspector()
            .annotations_by_name(declaration, annotation_name)
            .next()
            .cloned()
        else {
            tracing::warn!("{} is not annotated with @{}", declaration.qualified_name(), annotation_name);
            return Err(Diagnostic::new(
                DiagnosticKind::MissingContributionAnnotation,
                format!(
                    "{} is validated as a @{} contribution, but doesn't carry a resolvable @{} annotation.",
                    declaration.qualified_name(),
                    annotation_name.short_name(),
                    annotation_name.short_name()
                ),
                declaration.qualified_name(),
            ));
        };

        if kind == ContributionKind::ContributesTo {
            return self.validate_contributed_to(declaration, &annotation);
        }

        self.check_class_is_public(declaration, || {
            format!(
                "{} is binding a type, but the class is not public. Only public types are supported.",
                declaration.qualified_name()
            )
        })?;
        self.check_not_more_than_one_qualifier(declaration, annotation_name)?;
        if kind == ContributionKind::ContributesMultibinding {
            self.check_not_more_than_one_map_key(declaration)?;
        }
        self.check_single_super_type(declaration, annotation_name)?;
        let bound_type = self.check_class_extends_bound_type(declaration, annotation_name)?;

        let inspector = self.inspector();
        let qualifier = if annotation.ignore_qualifier() {
            None
        } else {
            inspector
                .resolvable_annotations(declaration)
                .find(|a| inspector.is_qualifier(a))
                .cloned()
        };
        let map_key = if kind == ContributionKind::ContributesMultibinding {
            inspector
                .resolvable_annotations(declaration)
                .find(|a| inspector.is_map_key(a))
                .cloned()
        } else {
            None
        };

        Ok(ValidatedContribution {
            class: declaration.qualified_name().clone(),
            kind,
            scope: annotation.scope().cloned(),
            bound_type: Some(bound_type),
            qualifier,
            map_key,
            replaces: annotation.replaces(),
        })
    }

    fn validate_contributed_to(
        &self,
        declaration: &ClassDeclaration,
        annotation: &Annotation,
    ) -> Result<ValidatedContribution> {
        let module = FqName::new(names::DAGGER_MODULE);
        let is_module = self
            .inspector()
            .annotations_by_name(declaration, &module)
            .next()
            .is_some();

        if !self.inspector().is_interface(declaration) && !is_module {
            return Err(Diagnostic::new(
                DiagnosticKind::InvalidContributesToTarget,
                format!(
                    "@{} annotation is only supported on interfaces and Dagger modules.",
                    annotation.fq_name().short_name()
                ),
                declaration.qualified_name(),
            ));
        }
        self.check_class_is_public(declaration, || {
            format!(
                "{} is contributed to the Dagger graph, but the type is not public. Only public types are supported.",
                declaration.qualified_name()
            )
        })?;

        Ok(ValidatedContribution {
            class: declaration.qualified_name().clone(),
            kind: ContributionKind::ContributesTo,
            scope: annotation.scope().cloned(),
            bound_type: None,
            qualifier: None,
            map_key: None,
            replaces: annotation.replaces(),
        })
    }
}
