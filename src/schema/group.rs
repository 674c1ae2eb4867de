use super::Condition;
use crate::ids::{GroupId, InputId};
use serde::{Deserialize, Serialize};

/// The variant of a layout group, together with the options that variant carries.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupKind {
    /// Inputs inside are only active while `condition` holds.
    Conditional { condition: Condition },
    /// Inputs inside are required while `condition` holds (always, when absent).
    Required { condition: Option<Condition> },
    Seed,
    IconSet { label: Option<String> },
    FromToDropdowns,
    LinkedInputs,
    OptionalList,
    MenuIconRow,
    NcnnFileInputs,
}

impl GroupKind {
    pub fn name(&self) -> &'static str {
        match self {
            GroupKind::Conditional { .. } => "conditional",
            GroupKind::Required { .. } => "required",
            GroupKind::Seed => "seed",
            GroupKind::IconSet { .. } => "icon-set",
            GroupKind::FromToDropdowns => "from-to-dropdowns",
            GroupKind::LinkedInputs => "linked-inputs",
            GroupKind::OptionalList => "optional-list",
            GroupKind::MenuIconRow => "menu-icon-row",
            GroupKind::NcnnFileInputs => "ncnn-file-inputs",
        }
    }
}

/// A node of a schema's input layout tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroup", into = "RawGroup")]
pub struct Group {
    pub id: GroupId,
    pub kind: GroupKind,
    pub items: Vec<GroupItem>,
}

/// An element of a layout sequence: a bare input reference or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupItem {
    Input(InputId),
    Group(Box<Group>),
}

impl Group {
    /// Every input id referenced in this group's subtree, in layout order.
    pub fn inputs(&self) -> Vec<InputId> {
        let mut ids = Vec::new();
        collect_inputs(&self.items, &mut ids);
        ids
    }
}

/// Appends every input id referenced by `items` (recursively) to `ids`.
pub(crate) fn collect_inputs(items: &[GroupItem], ids: &mut Vec<InputId>) {
    for item in items {
        match item {
            GroupItem::Input(id) => ids.push(*id),
            GroupItem::Group(group) => collect_inputs(&group.items, ids),
        }
    }
}

// --- Wire format ---
// Groups travel as `{ id, kind, options, items }` where the shape of `options`
// depends on `kind`.

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawGroupKind {
    Conditional,
    Required,
    Seed,
    IconSet,
    FromToDropdowns,
    LinkedInputs,
    OptionalList,
    MenuIconRow,
    NcnnFileInputs,
}

#[derive(Serialize, Deserialize, Default)]
struct RawGroupOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct RawGroup {
    id: GroupId,
    kind: RawGroupKind,
    #[serde(default)]
    options: RawGroupOptions,
    items: Vec<GroupItem>,
}

impl TryFrom<RawGroup> for Group {
    type Error = String;

    fn try_from(raw: RawGroup) -> Result<Self, Self::Error> {
        let options = raw.options;
        let kind = match raw.kind {
            RawGroupKind::Conditional => GroupKind::Conditional {
                condition: options.condition.ok_or_else(|| {
                    format!("Conditional group {} has no condition", raw.id)
                })?,
            },
            RawGroupKind::Required => GroupKind::Required {
                condition: options.condition,
            },
            RawGroupKind::Seed => GroupKind::Seed,
            RawGroupKind::IconSet => GroupKind::IconSet {
                label: options.label,
            },
            RawGroupKind::FromToDropdowns => GroupKind::FromToDropdowns,
            RawGroupKind::LinkedInputs => GroupKind::LinkedInputs,
            RawGroupKind::OptionalList => GroupKind::OptionalList,
            RawGroupKind::MenuIconRow => GroupKind::MenuIconRow,
            RawGroupKind::NcnnFileInputs => GroupKind::NcnnFileInputs,
        };
        Ok(Group {
            id: raw.id,
            kind,
            items: raw.items,
        })
    }
}

impl From<Group> for RawGroup {
    fn from(group: Group) -> Self {
        let mut options = RawGroupOptions::default();
        let kind = match group.kind {
            GroupKind::Conditional { condition } => {
                options.condition = Some(condition);
                RawGroupKind::Conditional
            }
            GroupKind::Required { condition } => {
                options.condition = condition;
                RawGroupKind::Required
            }
            GroupKind::Seed => RawGroupKind::Seed,
            GroupKind::IconSet { label } => {
                options.label = label;
                RawGroupKind::IconSet
            }
            GroupKind::FromToDropdowns => RawGroupKind::FromToDropdowns,
            GroupKind::LinkedInputs => RawGroupKind::LinkedInputs,
            GroupKind::OptionalList => RawGroupKind::OptionalList,
            GroupKind::MenuIconRow => RawGroupKind::MenuIconRow,
            GroupKind::NcnnFileInputs => RawGroupKind::NcnnFileInputs,
        };
        RawGroup {
            id: group.id,
            kind,
            options,
            items: group.items,
        }
    }
}
