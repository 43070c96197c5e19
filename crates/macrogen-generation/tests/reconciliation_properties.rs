//! Property-based tests for macro reconciliation
//!
//! Property: after reconciling, the definition names are exactly the
//! requested identifiers, surviving values are untouched, and reconciling
//! again changes nothing.

use std::collections::BTreeSet;

use macrogen_generation::{reconcile, MacroDefinition, MacroRequest};
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-E]{1,2}".prop_map(|s| s.to_string())
}

/// Definitions with unique names and arbitrary values
fn definitions_strategy() -> impl Strategy<Value = Vec<MacroDefinition>> {
    prop::collection::btree_map(identifier_strategy(), "[a-z]{0,5}", 0..8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, value)| MacroDefinition::scalar(name, value))
            .collect()
    })
}

fn request_strategy() -> impl Strategy<Value = MacroRequest> {
    prop::collection::vec(identifier_strategy(), 0..8).prop_map(|identifiers| {
        let mut request = MacroRequest::new();
        for identifier in identifiers {
            request.insert(identifier, None);
        }
        request
    })
}

proptest! {
    /// Reconciliation is idempotent
    #[test]
    fn prop_reconcile_is_idempotent(
        definitions in definitions_strategy(),
        request in request_strategy(),
    ) {
        let mut definitions = definitions;
        reconcile(&mut definitions, &request);
        let once = definitions.clone();

        let summary = reconcile(&mut definitions, &request);

        prop_assert!(summary.is_unchanged());
        prop_assert_eq!(definitions, once);
    }

    /// Names after reconciling are exactly the requested identifiers
    #[test]
    fn prop_reconcile_matches_request(
        definitions in definitions_strategy(),
        request in request_strategy(),
    ) {
        let mut definitions = definitions;
        reconcile(&mut definitions, &request);

        let names: BTreeSet<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        let requested: BTreeSet<&str> = request.identifiers().collect();
        prop_assert_eq!(names.len(), definitions.len());
        prop_assert_eq!(names, requested);
    }

    /// Values of surviving definitions are preserved
    #[test]
    fn prop_reconcile_preserves_values(
        definitions in definitions_strategy(),
        request in request_strategy(),
    ) {
        let original = definitions.clone();
        let mut definitions = definitions;
        let summary = reconcile(&mut definitions, &request);

        for definition in &definitions {
            match original.iter().find(|d| d.name == definition.name) {
                Some(before) => prop_assert_eq!(before, definition),
                None => {
                    prop_assert!(summary.added.contains(&definition.name));
                    prop_assert!(definition.is_scalar);
                    prop_assert!(definition.value.is_empty());
                }
            }
        }
    }
}
