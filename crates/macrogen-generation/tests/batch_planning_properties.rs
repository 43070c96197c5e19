//! Property-based tests for batch planning
//!
//! Property: with batch definitions of equal length L the plan has L passes;
//! any disagreement fails naming the first offending identifier.

use macrogen_generation::{BatchPlanner, GenerationError, MacroDefinition};
use proptest::prelude::*;

fn batch_definitions(count: usize, len: usize) -> Vec<MacroDefinition> {
    (0..count)
        .map(|i| {
            let values: Vec<String> = (0..len).map(|j| format!("v{}_{}", i, j)).collect();
            MacroDefinition::batch(format!("B{}", i), values)
        })
        .collect()
}

proptest! {
    /// Equal-length batches give that many passes, whatever scalars are mixed in
    #[test]
    fn prop_equal_lengths_plan_that_many_passes(
        batches in 1usize..5,
        len in 0usize..10,
        scalars in 0usize..4,
    ) {
        let mut definitions = batch_definitions(batches, len);
        for i in 0..scalars {
            definitions.insert(i, MacroDefinition::scalar(format!("S{}", i), "s"));
        }

        let plan = BatchPlanner::plan(&definitions).unwrap();

        prop_assert_eq!(plan.count(), len);
        prop_assert!(plan.is_batched());
        prop_assert_eq!(plan.indices().count(), len);
    }

    /// Scalar-only definitions always give exactly one pass
    #[test]
    fn prop_scalars_plan_one_pass(values in prop::collection::vec("[a-z]{0,4}", 0..6)) {
        let definitions: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, v)| MacroDefinition::scalar(format!("S{}", i), v.as_str()))
            .collect();

        let plan = BatchPlanner::plan(&definitions).unwrap();

        prop_assert_eq!(plan.count(), 1);
        prop_assert!(!plan.is_batched());
    }

    /// A single batch of different length is reported with both lengths
    #[test]
    fn prop_mismatch_names_offender(
        len in 0usize..8,
        other in 0usize..8,
        position in 1usize..4,
    ) {
        prop_assume!(len != other);
        let mut definitions = batch_definitions(4, len);
        definitions[position] = MacroDefinition::batch("ODD", vec!["x".to_string(); other]);

        match BatchPlanner::plan(&definitions) {
            Err(GenerationError::BatchLengthMismatch { identifier, expected, found }) => {
                prop_assert_eq!(identifier, "ODD");
                prop_assert_eq!(expected, len);
                prop_assert_eq!(found, other);
            }
            other => prop_assert!(false, "unexpected plan result: {:?}", other),
        }
    }
}
