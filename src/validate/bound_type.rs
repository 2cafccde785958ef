use super::ContributionValidator;
use crate::error::{Diagnostic, DiagnosticKind, Result};
use crate::symbol::{Annotation, ClassDeclaration, FqName, Resolver, SuperTypes, TypeRef};

impl<'a, R: Resolver + ?Sized> ContributionValidator<'a, R> {
    /// Supertypes of the declaration without the root type.
    ///
    /// `shallow` limits the walk to direct supertypes. The sequence is recomputed on
    /// every call.
    pub fn super_types_excluding_any(
        &self,
        declaration: &ClassDeclaration,
        shallow: bool,
    ) -> SuperTypes<'a, R> {
        SuperTypes::new(self.resolver, declaration, shallow)
    }

    /// The `boundType` argument of the first resolvable `annotation_name` annotation.
    pub fn explicit_bound_type(
        &self,
        declaration: &ClassDeclaration,
        annotation_name: &FqName,
    ) -> Option<TypeRef> {
        self.inspector
            .annotations_by_name(declaration, annotation_name)
            .next()
            .and_then(Annotation::bound_type)
            .cloned()
    }

    /// Without an explicit bound type the class needs exactly one direct supertype.
    pub fn check_single_super_type(
        &self,
        declaration: &ClassDeclaration,
        annotation_name: &FqName,
    ) -> Result<()> {
        if self.explicit_bound_type(declaration, annotation_name).is_some() {
            return Ok(());
        }

        if self.super_types_excluding_any(declaration, true).take(2).count() != 1 {
            return Err(Diagnostic::new(
                DiagnosticKind::AmbiguousOrMissingBoundType,
                format!(
                    "{} contributes a binding, but does not specify the bound type. This is only \
                     allowed with exactly one direct super type. If there are multiple or none, \
                     then the bound type must be explicitly defined in the @{} annotation.",
                    declaration.qualified_name(),
                    annotation_name.short_name()
                ),
                declaration.qualified_name(),
            ));
        }
        Ok(())
    }

    /// The explicit bound type, else the single direct supertype.
    pub fn resolve_bound_type(
        &self,
        declaration: &ClassDeclaration,
        annotation_name: &FqName,
    ) -> Result<TypeRef> {
        if let Some(bound_type) = self.explicit_bound_type(declaration, annotation_name) {
            return Ok(bound_type);
        }

        let mut direct = self.super_types_excluding_any(declaration, true);
        match (direct.next(), direct.next()) {
            (Some(only), None) => Ok(only),
            _ => Err(Diagnostic::new(
                DiagnosticKind::MissingBoundType,
                "Couldn't find the bound type.",
                declaration.qualified_name(),
            )),
        }
    }

    /// Resolves the bound type and checks the class actually satisfies it.
    pub fn check_class_extends_bound_type(
        &self,
        declaration: &ClassDeclaration,
        annotation_name: &FqName,
    ) -> Result<TypeRef> {
        let bound_type = self.resolve_bound_type(declaration, annotation_name)?;

        // Every class extends the root type.
        if bound_type == self.resolver.any_type() {
            return Ok(bound_type);
        }

        if !self.resolver.is_assignable_from(&bound_type, declaration) {
            return Err(Diagnostic::new(
                DiagnosticKind::UnsatisfiedBoundType,
                format!(
                    "{} contributes a binding for {}, but doesn't extend this type.",
                    declaration.qualified_name(),
                    bound_type.declaration()
                ),
                declaration.qualified_name(),
            ));
        }
        Ok(bound_type)
    }
}
