//! Contract checks for classes carrying contribution annotations.
//!
//! Every check is a pure function of the declaration and the resolver. Checks fail fast
//! with a [`Diagnostic`](crate::error::Diagnostic) anchored at the declaration; nothing is
//! accumulated or retried here.

mod bound_type;
mod cardinality;
mod visibility;

use crate::config::ProcessorConfig;
use crate::inspect::DeclarationInspector;
use crate::symbol::Resolver;

pub struct ContributionValidator<'a, R: Resolver + ?Sized> {
    resolver: &'a R,
    config: &'a ProcessorConfig,
    inspector: DeclarationInspector<'a, R>,
}

impl<'a, R: Resolver + ?Sized> ContributionValidator<'a, R> {
    pub fn new(resolver: &'a R, config: &'a ProcessorConfig) -> Self {
        Self {
            resolver,
            config,
            inspector: DeclarationInspector::new(resolver, config),
        }
    }

    pub fn resolver(&self) -> &'a R {
        self.resolver
    }

    pub fn config(&self) -> &'a ProcessorConfig {
        self.config
    }

    pub fn inspector(&self) -> &DeclarationInspector<'a, R> {
        &self.inspector
    }
}
