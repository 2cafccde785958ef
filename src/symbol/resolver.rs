use std::collections::{HashSet, VecDeque};

use super::{Annotation, ClassDeclaration, FqName, TypeRef};

/// The capabilities the validators need from the host's symbol-processing session.
///
/// Implementations own the declarations; validators only borrow them for the duration
/// of a single check.
pub trait Resolver {
    /// The universal root type, e.g. `kotlin.Any`.
    fn any_type(&self) -> TypeRef;

    fn declaration(&self, name: &FqName) -> Option<&ClassDeclaration>;

    /// Declarations carrying an annotation with the given qualified name, in source order.
    fn symbols_with_annotation(&self, annotation: &FqName) -> Vec<&ClassDeclaration>;

    /// Whether the annotation's defining type resolves in the current compilation unit.
    ///
    /// Unresolvable annotations are skipped by the inspector, never reported.
    fn is_annotation_resolvable(&self, annotation: &Annotation) -> bool {
        self.declaration(annotation.fq_name()).is_some()
    }

    /// Whether a value of the `source` declaration's type satisfies `target`.
    ///
    /// The walk starts from `source` itself, so its own supertypes are authoritative
    /// even when the resolver holds no copy of it.
    fn is_assignable_from(&self, target: &TypeRef, source: &ClassDeclaration) -> bool {
        if *target == source.as_type() || *target == self.any_type() {
            return true;
        }
        SuperTypes::new(self, source, false).any(|super_type| super_type == *target)
    }
}

/// Lazily walks the supertypes of a declaration, never yielding the root type.
///
/// In shallow mode only the direct supertypes are produced. Otherwise the transitive
/// closure is walked breadth first; every type is produced once even when it is
/// reachable over several paths.
pub struct SuperTypes<'a, R: Resolver + ?Sized> {
    resolver: &'a R,
    any: TypeRef,
    shallow: bool,
    queue: VecDeque<TypeRef>,
    seen: HashSet<TypeRef>,
}

impl<'a, R: Resolver + ?Sized> SuperTypes<'a, R> {
    pub fn new(resolver: &'a R, declaration: &ClassDeclaration, shallow: bool) -> Self {
        Self {
            resolver,
            any: resolver.any_type(),
            shallow,
            queue: declaration.super_types().iter().cloned().collect(),
            seen: HashSet::new(),
        }
    }
}

impl<R: Resolver + ?Sized> Iterator for SuperTypes<'_, R> {
    type Item = TypeRef;

    fn next(&mut self) -> Option<TypeRef> {
        while let Some(super_type) = self.queue.pop_front() {
            if !self.seen.insert(super_type.clone()) {
                continue;
            }
            if !self.shallow {
                if let Some(decl) = self.resolver.declaration(super_type.declaration()) {
                    self.queue.extend(decl.super_types().iter().cloned());
                }
            }
            if super_type == self.any {
                continue;
            }
            return Some(super_type);
        }
        None
    }
}
