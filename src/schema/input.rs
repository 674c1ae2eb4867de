use super::InputValue;
use crate::ids::{InputId, OutputId};
use serde::{Deserialize, Serialize};

/// Numeric constraints shared by `number` and `slider` inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberConstraints {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Number of decimal places. `0` restricts the input to integers.
    #[serde(default)]
    pub precision: u32,
}

/// A selectable entry of a `dropdown` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub option: String,
    pub value: InputValue,
}

/// The kind of an input together with its kind-specific constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InputKind {
    Generic,
    #[serde(rename_all = "camelCase")]
    File {
        /// Accepted extensions including the leading dot, e.g. `".png"`.
        #[serde(default)]
        filetypes: Vec<String>,
    },
    Directory,
    #[serde(rename_all = "camelCase")]
    Text {
        #[serde(default)]
        min_length: Option<usize>,
        #[serde(default)]
        max_length: Option<usize>,
        #[serde(default)]
        multiline: bool,
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        def: Option<String>,
    },
    Dropdown {
        options: Vec<DropdownOption>,
        #[serde(default)]
        def: Option<InputValue>,
    },
    #[serde(rename_all = "camelCase")]
    Slider {
        #[serde(flatten)]
        constraints: NumberConstraints,
        #[serde(default)]
        def: Option<f64>,
        #[serde(default)]
        ends: Option<(Option<String>, Option<String>)>,
    },
    #[serde(rename_all = "camelCase")]
    Number {
        #[serde(flatten)]
        constraints: NumberConstraints,
        #[serde(default)]
        def: Option<f64>,
        #[serde(default)]
        unit: Option<String>,
    },
    Color {
        #[serde(default)]
        channels: Option<Vec<u8>>,
    },
    Static {
        value: String,
    },
}

impl InputKind {
    /// The wire name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Generic => "generic",
            InputKind::File { .. } => "file",
            InputKind::Directory => "directory",
            InputKind::Text { .. } => "text",
            InputKind::Dropdown { .. } => "dropdown",
            InputKind::Slider { .. } => "slider",
            InputKind::Number { .. } => "number",
            InputKind::Color { .. } => "color",
            InputKind::Static { .. } => "static",
        }
    }

    /// The numeric constraints of `number` and `slider` inputs.
    pub fn number_constraints(&self) -> Option<&NumberConstraints> {
        match self {
            InputKind::Number { constraints, .. } | InputKind::Slider { constraints, .. } => {
                Some(constraints)
            }
            _ => None,
        }
    }
}

/// Definition of one input of a node schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub id: InputId,
    pub label: String,
    #[serde(flatten)]
    pub kind: InputKind,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub has_handle: bool,
}

fn default_true() -> bool {
    true
}

/// The kind of an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    #[default]
    Generic,
    Image,
    LargeImage,
    Tagged,
}

/// Definition of one output of a node schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub id: OutputId,
    pub label: String,
    #[serde(default)]
    pub kind: OutputKind,
    #[serde(default)]
    pub description: Option<String>,
}
