//! Well-known qualified names and annotation argument names.

/// The universal root type every class extends.
pub const ANY: &str = "kotlin.Any";

pub const JAVAX_QUALIFIER: &str = "javax.inject.Qualifier";
pub const JAKARTA_QUALIFIER: &str = "jakarta.inject.Qualifier";
pub const MAP_KEY: &str = "dagger.MapKey";
pub const DAGGER_MODULE: &str = "dagger.Module";

pub const CONTRIBUTES_BINDING: &str = "com.squareup.anvil.annotations.ContributesBinding";
pub const CONTRIBUTES_MULTIBINDING: &str = "com.squareup.anvil.annotations.ContributesMultibinding";
pub const CONTRIBUTES_TO: &str = "com.squareup.anvil.annotations.ContributesTo";

// Argument names on contribution annotations
pub const ARG_BOUND_TYPE: &str = "boundType";
pub const ARG_SCOPE: &str = "scope";
pub const ARG_REPLACES: &str = "replaces";
pub const ARG_IGNORE_QUALIFIER: &str = "ignoreQualifier";
