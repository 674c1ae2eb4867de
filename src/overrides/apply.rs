use super::{InputOverrideId, OverrideFile};
use crate::error::{Bound, OverrideError};
use crate::graph::Graph;
use crate::ids::{InputId, NodeId};
use crate::schema::{Input, InputKind, InputValue, SchemaLookup};
use ahash::AHashMap;
use itertools::Itertools;
use std::path::Path;

/// Outcome of a successful override application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverrideReport {
    /// Number of input values that were replaced.
    pub applied: usize,
    /// Number of overrides whose node is not part of the graph.
    pub unmatched: usize,
}

/// A validated change waiting to be committed.
struct StagedChange {
    node_index: usize,
    input_id: InputId,
    value: Option<InputValue>,
}

/// Applies the overrides of `file` to the stored input values of `graph`.
///
/// Every override is decoded and validated before any node is touched: a
/// malformed id, an unknown schema or input, or a value rejected by the input's
/// kind aborts the run and leaves the graph unchanged. Overrides that name a
/// node missing from the graph are counted in the report instead.
pub fn apply_overrides<L: SchemaLookup + ?Sized>(
    file: &OverrideFile,
    graph: &mut Graph,
    schemas: &L,
) -> Result<OverrideReport, OverrideError> {
    let Some(inputs) = &file.inputs else {
        return Ok(OverrideReport::default());
    };

    let mut pending: AHashMap<NodeId, Vec<(InputId, Option<&InputValue>)>> = AHashMap::new();
    for (key, value) in inputs {
        let (node_id, input_id) = InputOverrideId::parse(key)?.decode()?;
        pending
            .entry(node_id)
            .or_default()
            .push((input_id, value.as_ref()));
    }

    let mut staged = Vec::new();
    for (node_index, node) in graph.nodes.iter().enumerate() {
        let Some(overrides) = pending.remove(&node.id) else {
            continue;
        };
        let schema = schemas.get_schema(&node.data.schema_id).ok_or_else(|| {
            OverrideError::SchemaLookup {
                node_id: node.id.clone(),
                schema_id: node.data.schema_id.clone(),
            }
        })?;

        for (input_id, raw) in overrides {
            let input = schema
                .input(input_id)
                .ok_or_else(|| OverrideError::UnknownInput {
                    input_id,
                    node_id: node.id.clone(),
                })?;
            let value = validate_override(input, raw, &node.id)?;
            staged.push(StagedChange {
                node_index,
                input_id,
                value,
            });
        }
    }

    let unmatched: usize = pending.values().map(Vec::len).sum();
    let applied = staged.len();

    for change in staged {
        let node = &mut graph.nodes[change.node_index];
        log::debug!(
            "Overriding input {} of node '{}'",
            change.input_id,
            node.id
        );
        node.data.input_data.insert(change.input_id, change.value);
    }

    if unmatched > 0 {
        log::warn!(
            "{} input override(s) reference nodes that are not part of the graph",
            unmatched
        );
    }

    Ok(OverrideReport { applied, unmatched })
}

/// Checks a raw override against the constraints of `input` and returns the
/// value to store.
pub fn validate_override(
    input: &Input,
    raw: Option<&InputValue>,
    node_id: &NodeId,
) -> Result<Option<InputValue>, OverrideError> {
    let Some(raw) = raw else {
        return if input.optional {
            Ok(None)
        } else {
            Err(OverrideError::RequiredInput {
                input_id: input.id,
                node_id: node_id.clone(),
            })
        };
    };

    match &input.kind {
        InputKind::Directory => match raw {
            InputValue::Text(_) => Ok(Some(raw.clone())),
            InputValue::Number(_) => Err(OverrideError::TypeMismatch {
                input_id: input.id,
                node_id: node_id.clone(),
                expected: "string",
                found: raw.to_string(),
            }),
        },
        InputKind::File { filetypes } => {
            let accepted = match raw {
                InputValue::Text(path) => {
                    let extension = Path::new(path)
                        .extension()
                        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()));
                    extension.is_some_and(|ext| {
                        filetypes.iter().any(|ft| ft.to_lowercase() == ext)
                    })
                }
                InputValue::Number(_) => false,
            };
            if accepted {
                Ok(Some(raw.clone()))
            } else {
                Err(OverrideError::Extension {
                    input_id: input.id,
                    node_id: node_id.clone(),
                    value: raw.to_string(),
                    accepted: filetypes.iter().join(" or "),
                })
            }
        }
        InputKind::Number { constraints, .. } | InputKind::Slider { constraints, .. } => {
            let InputValue::Number(value) = raw else {
                return Err(OverrideError::TypeMismatch {
                    input_id: input.id,
                    node_id: node_id.clone(),
                    expected: "number",
                    found: raw.to_string(),
                });
            };
            let value = *value;
            if constraints.precision == 0 && value.fract() != 0.0 {
                return Err(OverrideError::IntegerRequired {
                    input_id: input.id,
                    node_id: node_id.clone(),
                    value,
                });
            }
            if let Some(min) = constraints.min.filter(|&min| value < min) {
                return Err(OverrideError::Range {
                    input_id: input.id,
                    node_id: node_id.clone(),
                    value,
                    bound: Bound::Min,
                    limit: min,
                });
            }
            if let Some(max) = constraints.max.filter(|&max| value > max) {
                return Err(OverrideError::Range {
                    input_id: input.id,
                    node_id: node_id.clone(),
                    value,
                    bound: Bound::Max,
                    limit: max,
                });
            }
            Ok(Some(InputValue::Number(value)))
        }
        InputKind::Text {
            min_length,
            max_length,
            ..
        } => {
            let text = raw.to_string();
            let length = text.chars().count();
            if let Some(min) = min_length.filter(|&min| length < min) {
                return Err(OverrideError::Length {
                    input_id: input.id,
                    node_id: node_id.clone(),
                    length,
                    bound: Bound::Min,
                    limit: min,
                });
            }
            if let Some(max) = max_length.filter(|&max| length > max) {
                return Err(OverrideError::Length {
                    input_id: input.id,
                    node_id: node_id.clone(),
                    length,
                    bound: Bound::Max,
                    limit: max,
                });
            }
            Ok(Some(InputValue::Text(text)))
        }
        InputKind::Generic
        | InputKind::Dropdown { .. }
        | InputKind::Color { .. }
        | InputKind::Static { .. } => Err(OverrideError::UnsupportedKind {
            input_id: input.id,
            node_id: node_id.clone(),
            kind: input.kind.name(),
        }),
    }
}
