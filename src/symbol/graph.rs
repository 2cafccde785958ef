use std::collections::HashMap;

use super::{ClassDeclaration, FqName, Resolver, TypeRef};
use crate::error::GraphError;
use crate::names;

/// An immutable, closed symbol table implementing [`Resolver`].
///
/// Every supertype named by a declaration is itself declared, and the root type is
/// always present.
#[derive(Debug, Clone)]
pub struct SymbolGraph {
    any: TypeRef,
    declarations: Vec<ClassDeclaration>,
    index: HashMap<FqName, usize>,
}

impl SymbolGraph {
    pub fn builder() -> SymbolGraphBuilder {
        SymbolGraphBuilder::new()
    }

    /// Declarations in the order they were added.
    pub fn declarations(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Resolver for SymbolGraph {
    fn any_type(&self) -> TypeRef {
        self.any.clone()
    }

    fn declaration(&self, name: &FqName) -> Option<&ClassDeclaration> {
        self.index.get(name).map(|&position| &self.declarations[position])
    }

    fn symbols_with_annotation(&self, annotation: &FqName) -> Vec<&ClassDeclaration> {
        self.declarations
            .iter()
            .filter(|decl| {
                decl.annotations()
                    .iter()
                    .any(|a| a.fq_name() == annotation && self.is_annotation_resolvable(a))
            })
            .collect()
    }
}

/// Builder for a [`SymbolGraph`].
///
/// # Example
/// ```
/// use bindery::symbol::{ClassDeclaration, SymbolGraph};
///
/// let graph = SymbolGraph::builder()
///     .declare(ClassDeclaration::interface("com.example.Bar"))
///     .declare(ClassDeclaration::class("com.example.Foo").with_super_type("com.example.Bar"))
///     .build()
///     .unwrap();
/// assert_eq!(graph.len(), 3);
/// ```
pub struct SymbolGraphBuilder {
    any: FqName,
    declarations: Vec<ClassDeclaration>,
}

impl SymbolGraphBuilder {
    pub fn new() -> Self {
        Self {
            any: FqName::new(names::ANY),
            declarations: Vec::new(),
        }
    }

    /// Use a different universal root type than `kotlin.Any`.
    pub fn root_type(mut self, name: impl Into<FqName>) -> Self {
        self.any = name.into();
        self
    }

    pub fn declare(mut self, declaration: ClassDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn declare_all(mut self, declarations: impl IntoIterator<Item = ClassDeclaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    /// Validate and freeze the graph.
    ///
    /// # Errors
    /// Fails on duplicate qualified names, on supertypes that are not declared, and on
    /// supertype cycles.
    pub fn build(self) -> Result<SymbolGraph, GraphError> {
        let mut declarations = Vec::with_capacity(self.declarations.len() + 1);
        if !self.declarations.iter().any(|d| *d.qualified_name() == self.any) {
            declarations.push(ClassDeclaration::class(self.any.clone()));
        }
        declarations.extend(self.declarations);

        let mut index = HashMap::with_capacity(declarations.len());
        for (position, decl) in declarations.iter().enumerate() {
            if index.insert(decl.qualified_name().clone(), position).is_some() {
                return Err(GraphError::DuplicateDeclaration {
                    name: decl.qualified_name().clone(),
                });
            }
        }

        for decl in &declarations {
            if let Some(missing) = decl
                .super_types()
                .iter()
                .find(|ty| !index.contains_key(ty.declaration()))
            {
                return Err(GraphError::UnknownSuperType {
                    class: decl.qualified_name().clone(),
                    super_type: missing.declaration().clone(),
                });
            }
        }

        if let Some(position) = find_super_type_cycle(&declarations, &index) {
            return Err(GraphError::CyclicSuperTypes {
                class: declarations[position].qualified_name().clone(),
            });
        }

        tracing::debug!("Symbol graph built ({} declarations)", declarations.len());
        Ok(SymbolGraph {
            any: TypeRef::new(self.any),
            declarations,
            index,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Position of a declaration that is its own transitive supertype, if any.
fn find_super_type_cycle(
    declarations: &[ClassDeclaration],
    index: &HashMap<FqName, usize>,
) -> Option<usize> {
    let mut marks = vec![Mark::Unvisited; declarations.len()];
    for start in 0..declarations.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::InProgress;
        // (declaration, next supertype to visit)
        let mut stack = vec![(start, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            match declarations[node].super_types().get(next) {
                Some(super_type) => {
                    frame.1 += 1;
                    let Some(&child) = index.get(super_type.declaration()) else {
                        continue;
                    };
                    match marks[child] {
                        Mark::InProgress => return Some(child),
                        Mark::Unvisited => {
                            marks[child] = Mark::InProgress;
                            stack.push((child, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }
    None
}

impl Default for SymbolGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Annotation, SuperTypes};

    fn hierarchy() -> SymbolGraph {
        SymbolGraph::builder()
            .declare(ClassDeclaration::interface("com.example.Base"))
            .declare(ClassDeclaration::interface("com.example.Bar").with_super_type("com.example.Base"))
            .declare(ClassDeclaration::interface("com.example.Baz").with_super_type("com.example.Base"))
            .declare(ClassDeclaration::annotation_class("com.example.Marker"))
            .declare(
                ClassDeclaration::class("com.example.Foo")
                    .with_super_type(names::ANY)
                    .with_super_type("com.example.Bar")
                    .with_super_type("com.example.Baz")
                    .with_annotation(Annotation::new("com.example.Marker"))
                    .with_annotation(Annotation::new("com.example.Missing")),
            )
            .build()
            .unwrap()
    }

    fn names_of(types: impl Iterator<Item = TypeRef>) -> Vec<String> {
        let mut names: Vec<String> = types.map(|ty| ty.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_root_type_is_always_declared() {
        let graph = SymbolGraph::builder().build().unwrap();
        assert_eq!(graph.len(), 1);
        assert!(graph.declaration(&FqName::new(names::ANY)).is_some());
        assert_eq!(graph.any_type(), TypeRef::from(names::ANY));
    }

    #[test]
    fn test_custom_root_type() {
        let graph = SymbolGraph::builder().root_type("java.lang.Object").build().unwrap();
        assert_eq!(graph.any_type(), TypeRef::from("java.lang.Object"));
        assert!(graph.declaration(&FqName::new(names::ANY)).is_none());
    }

    #[test]
    fn test_duplicate_declaration_is_rejected() {
        let err = SymbolGraph::builder()
            .declare(ClassDeclaration::class("com.example.Foo"))
            .declare(ClassDeclaration::interface("com.example.Foo"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateDeclaration {
                name: FqName::new("com.example.Foo")
            }
        );
    }

    #[test]
    fn test_unknown_super_type_is_rejected() {
        let err = SymbolGraph::builder()
            .declare(ClassDeclaration::class("com.example.Foo").with_super_type("com.example.Nope"))
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownSuperType { .. }));
    }

    #[test]
    fn test_shallow_super_types_exclude_root() {
        let graph = hierarchy();
        let foo = graph.declaration(&FqName::new("com.example.Foo")).unwrap();
        assert_eq!(
            names_of(SuperTypes::new(&graph, foo, true)),
            vec!["com.example.Bar", "com.example.Baz"]
        );
    }

    #[test]
    fn test_deep_super_types_are_deduplicated() {
        let graph = hierarchy();
        let foo = graph.declaration(&FqName::new("com.example.Foo")).unwrap();
        assert_eq!(
            names_of(SuperTypes::new(&graph, foo, false)),
            vec!["com.example.Bar", "com.example.Base", "com.example.Baz"]
        );
    }

    #[test]
    fn test_super_types_are_restartable() {
        let graph = hierarchy();
        let foo = graph.declaration(&FqName::new("com.example.Foo")).unwrap();
        assert_eq!(SuperTypes::new(&graph, foo, false).count(), 3);
        assert_eq!(SuperTypes::new(&graph, foo, false).count(), 3);
    }

    #[test]
    fn test_assignability() {
        let graph = hierarchy();
        let foo = graph.declaration(&FqName::new("com.example.Foo")).unwrap();
        let bar = graph.declaration(&FqName::new("com.example.Bar")).unwrap();
        assert!(graph.is_assignable_from(&TypeRef::from("com.example.Base"), foo));
        assert!(graph.is_assignable_from(&foo.as_type(), foo));
        assert!(graph.is_assignable_from(&graph.any_type(), foo));
        assert!(!graph.is_assignable_from(&foo.as_type(), bar));
        assert!(!graph.is_assignable_from(&TypeRef::from("com.example.Baz"), bar));
    }

    #[test]
    fn test_assignability_of_undeclared_source() {
        let graph = hierarchy();
        let outside = ClassDeclaration::class("com.example.Outside").with_super_type("com.example.Bar");
        assert!(graph.is_assignable_from(&TypeRef::from("com.example.Base"), &outside));
        assert!(!graph.is_assignable_from(&TypeRef::from("com.example.Baz"), &outside));
    }

    #[test]
    fn test_super_type_cycle_is_rejected() {
        let err = SymbolGraph::builder()
            .declare(ClassDeclaration::interface("com.example.Foo").with_super_type("com.example.Bar"))
            .declare(ClassDeclaration::interface("com.example.Bar").with_super_type("com.example.Foo"))
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::CyclicSuperTypes { .. }));

        let err = SymbolGraph::builder()
            .declare(ClassDeclaration::interface("com.example.Foo").with_super_type("com.example.Foo"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::CyclicSuperTypes {
                class: FqName::new("com.example.Foo")
            }
        );
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let graph = SymbolGraph::builder()
            .declare(ClassDeclaration::interface("com.example.Base"))
            .declare(ClassDeclaration::interface("com.example.Left").with_super_type("com.example.Base"))
            .declare(ClassDeclaration::interface("com.example.Right").with_super_type("com.example.Base"))
            .declare(
                ClassDeclaration::class("com.example.Foo")
                    .with_super_type("com.example.Left")
                    .with_super_type("com.example.Right"),
            )
            .build();
        assert!(graph.is_ok());
    }

    #[test]
    fn test_symbols_with_annotation_skips_unresolvable() {
        let graph = hierarchy();
        let marked = graph.symbols_with_annotation(&FqName::new("com.example.Marker"));
        assert_eq!(marked.len(), 1);
        assert!(graph.symbols_with_annotation(&FqName::new("com.example.Missing")).is_empty());
    }
}
