use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FqName, TypeRef};
use crate::names;

/// A constant argument value of an annotation application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationValue {
    Type(TypeRef),
    String(String),
    Bool(bool),
    Int(i64),
    Array(Vec<AnnotationValue>),
}

/// One application of an annotation to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    fq_name: FqName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    arguments: BTreeMap<String, AnnotationValue>,
}

impl Annotation {
    pub fn new(fq_name: impl Into<FqName>) -> Self {
        Self {
            fq_name: fq_name.into(),
            arguments: BTreeMap::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    pub fn with_bound_type(self, bound_type: impl Into<TypeRef>) -> Self {
        self.with_argument(names::ARG_BOUND_TYPE, AnnotationValue::Type(bound_type.into()))
    }

    pub fn with_scope(self, scope: impl Into<TypeRef>) -> Self {
        self.with_argument(names::ARG_SCOPE, AnnotationValue::Type(scope.into()))
    }

    pub fn fq_name(&self) -> &FqName {
        &self.fq_name
    }

    pub fn argument(&self, name: &str) -> Option<&AnnotationValue> {
        self.arguments.get(name)
    }

    fn type_argument(&self, name: &str) -> Option<&TypeRef> {
        match self.argument(name)? {
            AnnotationValue::Type(ty) => Some(ty),
            _ => None,
        }
    }

    /// The explicitly declared bound type, if any.
    pub fn bound_type(&self) -> Option<&TypeRef> {
        self.type_argument(names::ARG_BOUND_TYPE)
    }

    pub fn scope(&self) -> Option<&TypeRef> {
        self.type_argument(names::ARG_SCOPE)
    }

    /// Types listed in `replaces`. A single type value is accepted as a one element list.
    pub fn replaces(&self) -> Vec<TypeRef> {
        match self.argument(names::ARG_REPLACES) {
            Some(AnnotationValue::Array(values)) => values
                .iter()
                .filter_map(|value| match value {
                    AnnotationValue::Type(ty) => Some(ty.clone()),
                    _ => None,
                })
                .collect(),
            Some(AnnotationValue::Type(ty)) => vec![ty.clone()],
            _ => Vec::new(),
        }
    }

    pub fn ignore_qualifier(&self) -> bool {
        matches!(
            self.argument(names::ARG_IGNORE_QUALIFIER),
            Some(AnnotationValue::Bool(true))
        )
    }
}
