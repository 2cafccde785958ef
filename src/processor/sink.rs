use serde_json::{Value, json};

use crate::contribution::ValidatedContribution;

/// Receives validated contributions, typically the code generation stage.
pub trait ContributionSink {
    fn accept(&mut self, contribution: &ValidatedContribution);
}

/// Collects contributions into a JSON manifest.
#[derive(Debug, Default)]
pub struct JsonManifestSink {
    entries: Vec<Value>,
}

impl JsonManifestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_manifest(self) -> Value {
        json!({ "contributions": self.entries })
    }
}

impl ContributionSink for JsonManifestSink {
    fn accept(&mut self, contribution: &ValidatedContribution) {
        match serde_json::to_value(contribution) {
            Ok(entry) => self.entries.push(entry),
            Err(e) => tracing::error!("Failed to serialize contribution {}: {}", contribution.class, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contribution::ContributionKind;
    use crate::symbol::{FqName, TypeRef};

    #[test]
    fn test_manifest() {
        let mut sink = JsonManifestSink::new();
        assert!(sink.is_empty());

        sink.accept(&ValidatedContribution {
            class: FqName::new("com.example.Foo"),
            kind: ContributionKind::ContributesMultibinding,
            scope: Some(TypeRef::from("com.example.AppScope")),
            bound_type: Some(TypeRef::from("com.example.Bar")),
            qualifier: None,
            map_key: None,
            replaces: Vec::new(),
        });
        assert_eq!(sink.len(), 1);

        let manifest = sink.into_manifest();
        assert_eq!(
            manifest,
            json!({
                "contributions": [{
                    "class": "com.example.Foo",
                    "kind": "ContributesMultibinding",
                    "scope": "com.example.AppScope",
                    "bound_type": "com.example.Bar",
                }]
            })
        );
    }
}
