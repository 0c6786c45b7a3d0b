//! Configuration for the alignment pass.
//!
//!     Hosts hand the engine a partial set of per-construct flags, usually
//!     deserialized from a larger formatter configuration document. Flags
//!     are boolean-like: JSON `true`/`false` and the conventional `1`/`0`
//!     are both accepted. Unrecognized keys are ignored. Options merge
//!     field-by-field over the current configuration rather than replacing
//!     it wholesale.

use serde::{Deserialize, Deserializer};

/// Partial per-construct flags, as supplied by a host.
///
/// Field names follow the construct names the host configuration uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AlignOptions {
    #[serde(rename = "ObjectExpression", default, deserialize_with = "flag")]
    pub object_expression: Option<bool>,
    #[serde(rename = "VariableDeclaration", default, deserialize_with = "flag")]
    pub variable_declaration: Option<bool>,
    #[serde(rename = "AssignmentExpression", default, deserialize_with = "flag")]
    pub assignment_expression: Option<bool>,
    #[serde(rename = "TernaryExpression", default, deserialize_with = "flag")]
    pub ternary_expression: Option<bool>,
    #[serde(rename = "OrExpression", default, deserialize_with = "flag")]
    pub or_expression: Option<bool>,
}

impl AlignOptions {
    /// Parse options from a JSON document. Unknown keys are ignored.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

/// Accept `true`/`false` as well as the 0/1 convention.
fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
    }

    let value = Option::<Flag>::deserialize(deserializer)?;
    Ok(value.map(|flag| match flag {
        Flag::Bool(b) => b,
        Flag::Number(n) => n != 0,
    }))
}

/// Resolved configuration the orchestrator dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignConfig {
    pub object_expression: bool,
    pub variable_declaration: bool,
    pub assignment_expression: bool,
    pub ternary_expression: bool,
    pub or_expression: bool,
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            object_expression: true,
            variable_declaration: true,
            assignment_expression: true,
            ternary_expression: false,
            or_expression: false,
        }
    }
}

impl AlignConfig {
    /// Merge `options` over this configuration: `Some` fields override,
    /// `None` fields keep their current value.
    pub fn apply(&mut self, options: &AlignOptions) {
        if let Some(value) = options.object_expression {
            self.object_expression = value;
        }
        if let Some(value) = options.variable_declaration {
            self.variable_declaration = value;
        }
        if let Some(value) = options.assignment_expression {
            self.assignment_expression = value;
        }
        if let Some(value) = options.ternary_expression {
            self.ternary_expression = value;
        }
        if let Some(value) = options.or_expression {
            self.or_expression = value;
        }
    }
}
