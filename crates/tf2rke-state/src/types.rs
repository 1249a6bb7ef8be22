//! Typed view of a Terraform state document
//!
//! Only the parts of the state file tf2rke consumes are modelled here. Every other
//! field Terraform writes (serial, lineage, resources, ...) is ignored during
//! deserialization, while the `modules` -> `outputs` -> `value` path is required.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level provisioning state document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StateDocument {
    pub modules: Vec<ModuleState>,
}

/// A single module entry of the state document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModuleState {
    /// Module path as written by Terraform (e.g. `["root"]`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    pub outputs: BTreeMap<String, OutputRecord>,
}

impl ModuleState {
    /// Dotted module path for log messages
    pub fn display_path(&self) -> String {
        if self.path.is_empty() {
            "<unnamed>".to_string()
        } else {
            self.path.join(".")
        }
    }
}

/// An output record published by a module
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputRecord {
    pub value: OutputValue,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<Value>,
}

/// Raw output value: either a list or a single value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OutputValue {
    List(Vec<Value>),
    Single(Value),
}

impl OutputValue {
    /// Normalize the value into a list of node addresses.
    ///
    /// A single value becomes a one-element list. Elements are passed through
    /// without validation: strings verbatim, any other JSON value in its JSON
    /// text form.
    pub fn into_list(self) -> Vec<String> {
        match self {
            OutputValue::List(items) => items.into_iter().map(address_text).collect(),
            OutputValue::Single(item) => vec![address_text(item)],
        }
    }
}

fn address_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_value_becomes_one_element_list() {
        let value = OutputValue::Single(json!("10.0.0.1"));
        assert_eq!(value.into_list(), vec!["10.0.0.1".to_string()]);
    }

    #[test]
    fn test_list_value_is_kept_in_order() {
        let value = OutputValue::List(vec![json!("10.0.0.2"), json!("10.0.0.1")]);
        assert_eq!(value.into_list(), vec!["10.0.0.2", "10.0.0.1"]);
    }

    #[test]
    fn test_non_string_elements_pass_through() {
        let value = OutputValue::List(vec![json!(42), json!(true)]);
        assert_eq!(value.into_list(), vec!["42", "true"]);
    }

    #[test]
    fn test_untagged_deserialization() {
        let Ok(record) = serde_json::from_value::<OutputRecord>(json!({
            "sensitive": false,
            "type": "list",
            "value": ["a", "b"]
        })) else {
            panic!("record should deserialize");
        };
        assert_eq!(
            record.value,
            OutputValue::List(vec![json!("a"), json!("b")])
        );

        let Ok(record) = serde_json::from_value::<OutputRecord>(json!({ "value": "a" })) else {
            panic!("record should deserialize");
        };
        assert_eq!(record.value, OutputValue::Single(json!("a")));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let result = serde_json::from_value::<OutputRecord>(json!({ "type": "string" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_path() {
        let module = ModuleState {
            path: vec!["root".to_string(), "nodes".to_string()],
            ..Default::default()
        };
        assert_eq!(module.display_path(), "root.nodes");
        assert_eq!(ModuleState::default().display_path(), "<unnamed>");
    }
}
