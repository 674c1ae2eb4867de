use crate::ids::InputId;
use crate::schema::{Condition, GroupItem, GroupKind, InputValue, NodeSchema, TypeOracle};
use ahash::AHashMap;

/// The effective activation condition of every input of a schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputConditions {
    conditions: AHashMap<InputId, Option<Condition>>,
    duplicates: Vec<InputId>,
}

impl InputConditions {
    /// The condition under which `input` is active. `None` means it always is.
    pub fn get(&self, input: InputId) -> Option<&Condition> {
        self.conditions.get(&input).and_then(Option::as_ref)
    }

    /// Whether the layout references `input` at all.
    pub fn contains(&self, input: InputId) -> bool {
        self.conditions.contains_key(&input)
    }

    /// Whether `input` is active for the given input values.
    pub fn is_active(
        &self,
        input: InputId,
        input_data: &AHashMap<InputId, Option<InputValue>>,
        oracle: &dyn TypeOracle,
    ) -> bool {
        self.get(input)
            .is_none_or(|condition| condition.evaluate(input_data, oracle))
    }

    /// Inputs the layout referenced more than once. Empty for a valid schema.
    pub fn duplicates(&self) -> &[InputId] {
        &self.duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = (InputId, Option<&Condition>)> {
        self.conditions.iter().map(|(id, c)| (*id, c.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Computes the activation condition of every input from the nesting of
/// conditional groups in the schema's layout.
///
/// The condition of an input is the conjunction of the conditions of all
/// enclosing conditional groups, outermost first. Other group kinds are
/// traversed without contributing a condition.
pub fn resolve_input_conditions(schema: &NodeSchema) -> InputConditions {
    let mut result = InputConditions::default();
    let mut stack = Vec::new();
    visit(&schema.group_layout, &mut stack, &mut result);
    result
}

fn visit<'a>(
    items: &'a [GroupItem],
    stack: &mut Vec<&'a Condition>,
    result: &mut InputConditions,
) {
    for item in items {
        match item {
            GroupItem::Input(id) => {
                let condition = Condition::all(stack.iter().map(|c| (*c).clone()));
                if result.conditions.insert(*id, condition).is_some() {
                    result.duplicates.push(*id);
                }
            }
            GroupItem::Group(group) => match &group.kind {
                GroupKind::Conditional { condition } => {
                    stack.push(condition);
                    visit(&group.items, stack, result);
                    stack.pop();
                }
                GroupKind::Required { .. }
                | GroupKind::Seed
                | GroupKind::IconSet { .. }
                | GroupKind::FromToDropdowns
                | GroupKind::LinkedInputs
                | GroupKind::OptionalList
                | GroupKind::MenuIconRow
                | GroupKind::NcnnFileInputs => visit(&group.items, stack, result),
            },
        }
    }
}
