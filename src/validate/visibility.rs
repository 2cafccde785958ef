use super::ContributionValidator;
use crate::error::{Diagnostic, DiagnosticKind, Result};
use crate::symbol::{ClassDeclaration, Resolver, Visibility};

impl<R: Resolver + ?Sized> ContributionValidator<'_, R> {
    /// Fails unless the declaration is exactly public.
    ///
    /// `message` is only invoked on failure.
    pub fn check_class_is_public(
        &self,
        declaration: &ClassDeclaration,
        message: impl FnOnce() -> String,
    ) -> Result<()> {
        if declaration.visibility() != Visibility::Public {
            return Err(Diagnostic::new(
                DiagnosticKind::NonPublicContribution,
                message(),
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
    use crate::symbol::SymbolGraph;

    #[test]
    fn test_non_public_classes_fail() {
        let graph = SymbolGraph::builder().build().unwrap();
        let config = ProcessorConfig::default();
        let validator = ContributionValidator::new(&graph, &config);

        for visibility in [
            Visibility::Internal,
            Visibility::Protected,
            Visibility::Private,
            Visibility::Local,
        ] {
            let decl = ClassDeclaration::class("com.example.Foo").with_visibility(visibility);
            let err = validator
                .check_class_is_public(&decl, || format!("{visibility} is not public"))
                .unwrap_err();
            assert_eq!(err.kind(), DiagnosticKind::NonPublicContribution);
            assert_eq!(err.message(), format!("{visibility} is not public"));
            assert_eq!(err.node().as_str(), "com.example.Foo");
        }
    }

    #[test]
    fn test_public_class_passes_without_building_message() {
        let graph = SymbolGraph::builder().build().unwrap();
        let config = ProcessorConfig::default();
        let validator = ContributionValidator::new(&graph, &config);
        let decl = ClassDeclaration::class("com.example.Foo");

        let result = validator.check_class_is_public(&decl, || panic!("message must stay lazy"));
        assert!(result.is_ok());
    }
}
