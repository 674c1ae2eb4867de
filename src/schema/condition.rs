use super::InputValue;
use crate::ids::InputId;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A boolean predicate over the current input values of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Condition {
    And {
        items: Vec<Condition>,
    },
    Or {
        items: Vec<Condition>,
    },
    Not {
        condition: Box<Condition>,
    },
    /// True iff the input currently holds one of `values`.
    Enum {
        #[serde(rename = "enum")]
        input: InputId,
        values: Vec<InputValue>,
    },
    /// Tests the type of the input against an opaque type expression.
    #[serde(rename_all = "camelCase")]
    Type {
        input: InputId,
        condition: serde_json::Value,
        if_not_connected: bool,
    },
}

/// Answers the type-level questions a `Condition::Type` asks.
///
/// The expression type system lives outside this crate; implementors classify
/// the value or connection of an input and report whether it is compatible
/// with the given expression.
pub trait TypeOracle {
    /// Returns `None` when the input's type is unknown, e.g. because it is not connected.
    fn matches(&self, input: InputId, expression: &serde_json::Value) -> Option<bool>;
}

/// An oracle that never knows any type. Every `type` condition falls back to its
/// `ifNotConnected` flag.
pub struct NoTypeInformation;

impl TypeOracle for NoTypeInformation {
    fn matches(&self, _input: InputId, _expression: &serde_json::Value) -> Option<bool> {
        None
    }
}

impl Condition {
    /// Conjunction of the given conditions. Empty yields `None`, a single
    /// condition is returned as is.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Option<Condition> {
        let mut items: Vec<Condition> = conditions.into_iter().collect();
        match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Condition::And { items }),
        }
    }

    pub fn negate(self) -> Condition {
        Condition::Not {
            condition: Box::new(self),
        }
    }

    /// Evaluates the predicate against the stored input values of a node.
    pub fn evaluate(
        &self,
        input_data: &AHashMap<InputId, Option<InputValue>>,
        oracle: &dyn TypeOracle,
    ) -> bool {
        match self {
            Condition::And { items } => items.iter().all(|c| c.evaluate(input_data, oracle)),
            Condition::Or { items } => items.iter().any(|c| c.evaluate(input_data, oracle)),
            Condition::Not { condition } => !condition.evaluate(input_data, oracle),
            Condition::Enum { input, values } => match input_data.get(input) {
                Some(Some(current)) => values.contains(current),
                _ => false,
            },
            Condition::Type {
                input,
                condition,
                if_not_connected,
            } => oracle
                .matches(*input, condition)
                .unwrap_or(*if_not_connected),
        }
    }

    /// Collects every input id this condition depends on.
    pub fn referenced_inputs(&self, inputs: &mut BTreeSet<InputId>) {
        match self {
            Condition::And { items } | Condition::Or { items } => {
                for item in items {
                    item.referenced_inputs(inputs);
                }
            }
            Condition::Not { condition } => condition.referenced_inputs(inputs),
            Condition::Enum { input, .. } | Condition::Type { input, .. } => {
                inputs.insert(*input);
            }
        }
    }

    /// Higher numbers bind more tightly.
    fn precedence(&self) -> u8 {
        match self {
            Condition::Or { .. } => 1,
            Condition::And { .. } => 2,
            Condition::Not { .. } => 3,
            Condition::Enum { .. } | Condition::Type { .. } => 4,
        }
    }

    fn fmt_with_precedence(&self, f: &mut fmt::Formatter<'_>, parent_precedence: u8) -> fmt::Result {
        let current_precedence = self.precedence();
        let needs_parens = current_precedence < parent_precedence;

        if needs_parens {
            write!(f, "(")?;
        }

        match self {
            Condition::And { items } if items.is_empty() => write!(f, "true")?,
            Condition::Or { items } if items.is_empty() => write!(f, "false")?,
            Condition::And { items } => self.fmt_joined(f, " AND ", items, current_precedence)?,
            Condition::Or { items } => self.fmt_joined(f, " OR ", items, current_precedence)?,
            Condition::Not { condition } => {
                write!(f, "NOT ")?;
                condition.fmt_with_precedence(f, current_precedence)?;
            }
            Condition::Enum { input, values } => {
                let rendered = values
                    .iter()
                    .map(|v| match v {
                        InputValue::Number(_) => v.to_string(),
                        InputValue::Text(s) => format!("{:?}", s),
                    })
                    .join(", ");
                write!(f, "#{} in [{}]", input, rendered)?;
            }
            Condition::Type {
                input,
                condition,
                if_not_connected,
            } => {
                write!(f, "#{}: {}", input, condition)?;
                if *if_not_connected {
                    write!(f, " (or not connected)")?;
                }
            }
        }

        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }

    fn fmt_joined(
        &self,
        f: &mut fmt::Formatter<'_>,
        op: &str,
        items: &[Condition],
        current_precedence: u8,
    ) -> fmt::Result {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", op)?;
            }
            // One level tighter so nested chains of the same operator keep their grouping.
            item.fmt_with_precedence(f, current_precedence + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_precedence(f, 0)
    }
}
