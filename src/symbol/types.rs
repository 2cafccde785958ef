use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::FqName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Object,
    EnumClass,
    AnnotationClass,
}

/// A resolved reference to a declared type.
///
/// Types are compared by the qualified name of their declaration; type arguments are
/// not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef {
    declaration: FqName,
}

impl TypeRef {
    pub fn new(declaration: impl Into<FqName>) -> Self {
        Self {
            declaration: declaration.into(),
        }
    }

    pub fn declaration(&self) -> &FqName {
        &self.declaration
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<FqName> for TypeRef {
    fn from(name: FqName) -> Self {
        Self { declaration: name }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.declaration.fmt(f)
    }
}
