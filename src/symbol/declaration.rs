use serde::{Deserialize, Serialize};

use super::{Annotation, ClassKind, FqName, TypeRef, Visibility};

/// A class-like declaration as seen by the processor.
///
/// `super_types` holds the direct supertypes only, in declaration order. The
/// transitive closure is computed on demand through a [`Resolver`](super::Resolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    qualified_name: FqName,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    kind: ClassKind,
    #[serde(default)]
    super_types: Vec<TypeRef>,
    #[serde(default)]
    annotations: Vec<Annotation>,
}

impl ClassDeclaration {
    /// A public class with no supertypes and no annotations.
    pub fn class(qualified_name: impl Into<FqName>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            visibility: Visibility::Public,
            kind: ClassKind::Class,
            super_types: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn interface(qualified_name: impl Into<FqName>) -> Self {
        Self::class(qualified_name).with_kind(ClassKind::Interface)
    }

    pub fn annotation_class(qualified_name: impl Into<FqName>) -> Self {
        Self::class(qualified_name).with_kind(ClassKind::AnnotationClass)
    }

    pub fn with_kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_super_type(mut self, super_type: impl Into<TypeRef>) -> Self {
        self.super_types.push(super_type.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn qualified_name(&self) -> &FqName {
        &self.qualified_name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn super_types(&self) -> &[TypeRef] {
        &self.super_types
    }

    /// All annotations in source order, resolvable or not.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// The declaration's own type, without type arguments.
    pub fn as_type(&self) -> TypeRef {
        TypeRef::new(self.qualified_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let decl = ClassDeclaration::class("com.example.Foo");
        assert_eq!(decl.visibility(), Visibility::Public);
        assert_eq!(decl.kind(), ClassKind::Class);
        assert!(decl.super_types().is_empty());
        assert!(!decl.is_interface());
        assert_eq!(decl.as_type(), TypeRef::from("com.example.Foo"));
    }

    #[test]
    fn test_is_interface() {
        assert!(ClassDeclaration::interface("com.example.Bar").is_interface());
        assert!(!ClassDeclaration::class("com.example.Bar")
            .with_kind(ClassKind::Object)
            .is_interface());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let decl: ClassDeclaration = serde_json::from_str(
            r#"{"qualified_name":"com.example.Foo","super_types":["com.example.Bar"]}"#,
        )
        .unwrap();

        assert_eq!(decl.visibility(), Visibility::Public);
        assert_eq!(decl.super_types(), &[TypeRef::from("com.example.Bar")]);
    }
}
