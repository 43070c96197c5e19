//! Batch planning
//!
//! Decides how many generation passes a definition set produces.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::models::{MacroDefinition, MacroValue};

/// Number of generation passes for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPlan {
    count: usize,
    batched: bool,
}

impl BatchPlan {
    /// Number of passes
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether any definition is batch-valued
    pub fn is_batched(&self) -> bool {
        self.batched
    }

    /// Batch indices in pass order
    pub fn indices(&self) -> Range<usize> {
        0..self.count
    }
}

/// Plans generation passes from macro definitions
pub struct BatchPlanner;

impl BatchPlanner {
    /// Plan the passes for `definitions`
    ///
    /// Scalar-only definitions give a single pass. Otherwise every batch
    /// definition must have the same length, which becomes the pass count.
    pub fn plan(definitions: &[MacroDefinition]) -> Result<BatchPlan, GenerationError> {
        let mut expected: Option<usize> = None;

        for definition in definitions {
            let MacroValue::Batch(values) = definition.kind() else {
                continue;
            };
            match expected {
                None => expected = Some(values.len()),
                Some(len) if len != values.len() => {
                    return Err(GenerationError::BatchLengthMismatch {
                        identifier: definition.name.clone(),
                        expected: len,
                        found: values.len(),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(match expected {
            Some(count) => BatchPlan {
                count,
                batched: true,
            },
            None => BatchPlan {
                count: 1,
                batched: false,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_only_is_single_pass() {
        let plan = BatchPlanner::plan(&[
            MacroDefinition::scalar("A", "a"),
            MacroDefinition::scalar("B", ""),
        ])
        .unwrap();
        assert_eq!(plan.count(), 1);
        assert!(!plan.is_batched());
    }

    #[test]
    fn test_no_definitions_is_single_pass() {
        assert_eq!(BatchPlanner::plan(&[]).unwrap().count(), 1);
    }

    #[test]
    fn test_batch_length_becomes_count() {
        let plan = BatchPlanner::plan(&[
            MacroDefinition::batch("A", ["1", "2", "3"]),
            MacroDefinition::scalar("S", "s"),
            MacroDefinition::batch("B", ["x", "y", "z"]),
        ])
        .unwrap();
        assert_eq!(plan.count(), 3);
        assert!(plan.is_batched());
        assert_eq!(plan.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_mismatch_names_offending_identifier() {
        let err = BatchPlanner::plan(&[
            MacroDefinition::batch("A", ["1", "2", "3"]),
            MacroDefinition::batch("B", ["x", "y"]),
        ])
        .unwrap_err();

        match err {
            GenerationError::BatchLengthMismatch {
                identifier,
                expected,
                found,
            } => {
                assert_eq!(identifier, "B");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_batch_gives_zero_passes() {
        let plan = BatchPlanner::plan(&[MacroDefinition::batch("A", Vec::<String>::new())]).unwrap();
        assert_eq!(plan.count(), 0);
        assert!(plan.indices().next().is_none());
    }

    #[test]
    fn test_scalar_flag_wins_over_leftover_batch_values() {
        let mut definition = MacroDefinition::batch("A", ["1", "2"]);
        definition.is_scalar = true;
        let plan = BatchPlanner::plan(&[definition, MacroDefinition::batch("B", ["x"])]).unwrap();
        assert_eq!(plan.count(), 1);
    }
}
