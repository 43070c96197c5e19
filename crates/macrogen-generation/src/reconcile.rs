//! Reconciliation of macro definitions against template requests
//!
//! Keeps the persisted definition list in step with what the templates
//! reference, without throwing away values for identifiers still in use.

use serde::{Deserialize, Serialize};

use crate::models::{MacroDefinition, MacroRequest};

/// What a reconciliation changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileSummary {
    /// Identifiers appended as empty scalars
    pub added: Vec<String>,
    /// Identifiers whose definitions were pruned
    pub removed: Vec<String>,
}

impl ReconcileSummary {
    /// Whether the definitions were left untouched
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Prune unrequested definitions and append missing ones
///
/// Surviving definitions keep their order and values; new identifiers are
/// appended in request order as empty scalars.
pub fn reconcile(definitions: &mut Vec<MacroDefinition>, request: &MacroRequest) -> ReconcileSummary {
    let mut summary = ReconcileSummary::default();

    definitions.retain(|definition| {
        let keep = request.contains(&definition.name);
        if !keep {
            summary.removed.push(definition.name.clone());
        }
        keep
    });

    for identifier in request.identifiers() {
        if definitions.iter().any(|d| d.name == identifier) {
            continue;
        }
        definitions.push(MacroDefinition::scalar(identifier, ""));
        summary.added.push(identifier.to_string());
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(identifiers: &[&str]) -> MacroRequest {
        let mut request = MacroRequest::new();
        for identifier in identifiers {
            request.insert(*identifier, None);
        }
        request
    }

    #[test]
    fn test_removes_unrequested_and_adds_missing() {
        let mut definitions = vec![
            MacroDefinition::scalar("OLD", "x"),
            MacroDefinition::scalar("KEEP", "kept"),
        ];

        let summary = reconcile(&mut definitions, &request(&["KEEP", "NEW"]));

        assert_eq!(summary.removed, vec!["OLD"]);
        assert_eq!(summary.added, vec!["NEW"]);
        assert_eq!(
            definitions,
            vec![
                MacroDefinition::scalar("KEEP", "kept"),
                MacroDefinition::scalar("NEW", ""),
            ]
        );
    }

    #[test]
    fn test_preserves_existing_order_and_batch_values() {
        let mut definitions = vec![
            MacroDefinition::scalar("B", "b"),
            MacroDefinition::batch("A", ["1", "2"]),
        ];

        let summary = reconcile(&mut definitions, &request(&["A", "B"]));

        assert!(summary.is_unchanged());
        assert_eq!(definitions[0].name, "B");
        assert_eq!(definitions[1].batch_values, vec!["1", "2"]);
    }

    #[test]
    fn test_is_idempotent() {
        let mut definitions = vec![MacroDefinition::scalar("GONE", "")];
        let request = request(&["X", "Y"]);

        reconcile(&mut definitions, &request);
        let once = definitions.clone();
        let summary = reconcile(&mut definitions, &request);

        assert!(summary.is_unchanged());
        assert_eq!(definitions, once);
    }

    #[test]
    fn test_empty_request_clears_definitions() {
        let mut definitions = vec![MacroDefinition::scalar("A", "a")];
        reconcile(&mut definitions, &MacroRequest::new());
        assert!(definitions.is_empty());
    }
}
