//! Drives validation over a whole processing round.

mod sink;

pub use sink::{ContributionSink, JsonManifestSink};

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::config::ProcessorConfig;
use crate::contribution::{ContributionKind, ValidatedContribution};
use crate::error::Diagnostic;
use crate::symbol::Resolver;
use crate::validate::ContributionValidator;

/// What a round produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoundOutcome {
    pub contributions: Vec<ValidatedContribution>,
    pub diagnostics: Vec<Diagnostic>,
    /// Set when `fail_fast` stopped the round early.
    pub aborted: bool,
}

impl RoundOutcome {
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Validates every contributed declaration the resolver knows about.
///
/// A failing declaration is reported and skipped. With `fail_fast` the round stops at
/// the first diagnostic instead.
///
/// # Example
///
/// ```
/// use bindery::config::ProcessorConfig;
/// use bindery::names;
/// use bindery::processor::ContributionProcessor;
/// use bindery::symbol::{Annotation, ClassDeclaration, SymbolGraph};
///
/// let graph = SymbolGraph::builder()
///     .declare(ClassDeclaration::annotation_class(names::CONTRIBUTES_BINDING))
///     .declare(ClassDeclaration::interface("com.example.Bar"))
///     .declare(
///         ClassDeclaration::class("com.example.Foo")
///             .with_super_type("com.example.Bar")
///             .with_annotation(Annotation::new(names::CONTRIBUTES_BINDING)),
///     )
///     .build()
///     .unwrap();
///
/// let config = ProcessorConfig::default();
/// let outcome = ContributionProcessor::new(&graph, &config).process();
/// assert!(outcome.is_success());
/// assert_eq!(outcome.contributions.len(), 1);
/// ```
pub struct ContributionProcessor<'a, R: Resolver + ?Sized> {
    validator: ContributionValidator<'a, R>,
}

impl<'a, R: Resolver + ?Sized> ContributionProcessor<'a, R> {
    pub fn new(resolver: &'a R, config: &'a ProcessorConfig) -> Self {
        Self {
            validator: ContributionValidator::new(resolver, config),
        }
    }

    pub fn validator(&self) -> &ContributionValidator<'a, R> {
        &self.validator
    }

    pub fn process(&self) -> RoundOutcome {
        let config = self.validator.config();
        let resolver = self.validator.resolver();
        let mut outcome = RoundOutcome::default();

        tracing::info!("Processing contributions...");

        'kinds: for kind in ContributionKind::iter() {
            let annotation_name = kind.annotation_name(&config.annotations);
            for declaration in resolver.symbols_with_annotation(annotation_name) {
                match self.validator.validate_contribution(declaration, kind) {
                    Ok(contribution) => {
                        tracing::debug!("Validated @{} on {}", annotation_name.short_name(), contribution.class);
                        outcome.contributions.push(contribution);
                    }
                    Err(diagnostic) => {
                        tracing::error!(
                            kind = %diagnostic.kind(),
                            node = %diagnostic.node(),
                            "{}",
                            diagnostic
                        );
                        outcome.diagnostics.push(diagnostic);
                        if config.fail_fast {
                            tracing::warn!("Aborting round after first failure (fail-fast)");
                            outcome.aborted = true;
                            break 'kinds;
                        }
                    }
                }
            }
        }

        tracing::info!(
            "Processing complete ({} contributions, {} diagnostics)",
            outcome.contributions.len(),
            outcome.diagnostics.len()
        );
        outcome
    }

    /// Processes the round and hands every validated contribution to `sink`.
    ///
    /// Nothing is emitted for declarations that failed validation, and nothing at all
    /// when the round was aborted.
    pub fn run(&self, sink: &mut dyn ContributionSink) -> RoundOutcome {
        let outcome = self.process();
        if outcome.aborted {
            return outcome;
        }
        for contribution in &outcome.contributions {
            sink.accept(contribution);
        }
        outcome
    }
}
