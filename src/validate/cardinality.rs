use super::ContributionValidator;
use crate::error::{Diagnostic, DiagnosticKind, Result};
use crate::symbol::{Annotation, ClassDeclaration, FqName, Resolver};

impl<R: Resolver + ?Sized> ContributionValidator<'_, R> {
    /// Fails when more than one resolvable qualifier is attached.
    ///
    /// Assumes the triggering contribution annotation is attached and resolvable, so
    /// with two or fewer annotations in total there cannot be two qualifiers.
    pub fn check_not_more_than_one_qualifier(
        &self,
        declaration: &ClassDeclaration,
        annotation_name: &FqName,
    ) -> Result<()> {
        let annotations: Vec<&Annotation> =
            self.inspector.resolvable_annotations(declaration).collect();
        if annotations.len() <= 2 {
            return Ok(());
        }

        let qualifiers = annotations
            .iter()
            .filter(|annotation| self.inspector.is_qualifier(annotation))
            .count();
        if qualifiers > 1 {
            tracing::debug!("{} carries {} qualifiers", declaration.qualified_name(), qualifiers);
            return Err(Diagnostic::new(
                DiagnosticKind::TooManyQualifiers,
                format!(
                    "Classes annotated with @{} may not use more than one @Qualifier.",
                    annotation_name.short_name()
                ),
                declaration.qualified_name(),
            ));
        }
        Ok(())
    }

    /// Fails when more than one resolvable map key is attached.
    ///
    /// Same precondition and short-circuit as the qualifier check.
    pub fn check_not_more_than_one_map_key(&self, declaration: &ClassDeclaration) -> Result<()> {
        let annotations: Vec<&Annotation> =
            self.inspector.resolvable_annotations(declaration).collect();
        if annotations.len() <= 2 {
            return Ok(());
        }

        let map_keys = annotations
            .iter()
            .filter(|annotation| self.inspector.is_map_key(annotation))
            .count();
        if map_keys > 1 {
            tracing::debug!("{} carries {} map keys", declaration.qualified_name(), map_keys);
            return Err(Diagnostic::new(
                DiagnosticKind::TooManyMapKeys,
                format!(
                    "Classes annotated with @{} may not use more than one @MapKey.",
                    self.config.annotations.contributes_multibinding.short_name()
                ),
                declaration.qualified_name(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessorConfig;
    use crate::inspect::tests::vocabulary;
    use crate::names;
    use crate::symbol::SymbolGraph;

    fn foo_with(annotations: &[&str]) -> (SymbolGraph, FqName) {
        let mut decl = ClassDeclaration::class("com.example.Foo");
        for name in annotations {
            decl = decl.with_annotation(Annotation::new(*name));
        }
        let graph = vocabulary().declare(decl).build().unwrap();
        (graph, FqName::new("com.example.Foo"))
    }

    fn check_qualifiers(annotations: &[&str]) -> Result<()> {
        let (graph, foo) = foo_with(annotations);
        let config = ProcessorConfig::default();
        let validator = ContributionValidator::new(&graph, &config);
        let decl = graph.declaration(&foo).unwrap();
        validator.check_not_more_than_one_qualifier(decl, &FqName::new(names::CONTRIBUTES_BINDING))
    }

    fn check_map_keys(annotations: &[&str]) -> Result<()> {
        let (graph, foo) = foo_with(annotations);
        let config = ProcessorConfig::default();
        let validator = ContributionValidator::new(&graph, &config);
        validator.check_not_more_than_one_map_key(graph.declaration(&foo).unwrap())
    }

    #[test]
    fn test_two_qualifiers_with_contribution_fail() {
        let err = check_qualifiers(&[
            names::CONTRIBUTES_BINDING,
            "com.example.Named",
            "com.example.Remote",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), DiagnosticKind::TooManyQualifiers);
        assert_eq!(
            err.message(),
            "Classes annotated with @ContributesBinding may not use more than one @Qualifier."
        );
        assert_eq!(err.node().as_str(), "com.example.Foo");
    }

    #[test]
    fn test_zero_or_one_qualifier_passes() {
        assert!(check_qualifiers(&[
            names::CONTRIBUTES_BINDING,
            "com.example.Deprecated",
            "com.example.StringKey",
        ])
        .is_ok());
        assert!(check_qualifiers(&[
            names::CONTRIBUTES_BINDING,
            "com.example.Named",
            "com.example.Deprecated",
            "com.example.StringKey",
        ])
        .is_ok());
    }

    #[test]
    fn test_two_or_fewer_annotations_always_pass() {
        assert!(check_qualifiers(&[]).is_ok());
        assert!(check_qualifiers(&["com.example.Named"]).is_ok());
        assert!(check_qualifiers(&[names::CONTRIBUTES_BINDING, "com.example.Named"]).is_ok());
        assert!(check_map_keys(&[names::CONTRIBUTES_MULTIBINDING, "com.example.StringKey"]).is_ok());
    }

    #[test]
    fn test_unresolvable_annotations_do_not_count() {
        assert!(check_qualifiers(&[
            names::CONTRIBUTES_BINDING,
            "com.example.Named",
            "com.example.NotOnClasspath",
            "com.example.AlsoMissing",
        ])
        .is_ok());
    }

    #[test]
    fn test_two_map_keys_fail() {
        let err = check_map_keys(&[
            names::CONTRIBUTES_MULTIBINDING,
            "com.example.StringKey",
            "com.example.ClassKey",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), DiagnosticKind::TooManyMapKeys);
        assert_eq!(
            err.message(),
            "Classes annotated with @ContributesMultibinding may not use more than one @MapKey."
        );
    }

    #[test]
    fn test_no_map_key_passes() {
        assert!(check_map_keys(&[
            names::CONTRIBUTES_MULTIBINDING,
            "com.example.Named",
            "com.example.Deprecated",
        ])
        .is_ok());
    }

    #[test]
    fn test_single_map_key_passes() {
        assert!(check_map_keys(&[
            names::CONTRIBUTES_MULTIBINDING,
            "com.example.StringKey",
            "com.example.Named",
            "com.example.Remote",
        ])
        .is_ok());
    }
}
