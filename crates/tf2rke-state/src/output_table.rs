//! Flattened view of every module output in a state document

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::types::{OutputValue, StateDocument};

/// Mapping from output name to its raw value, flattened across modules.
///
/// Modules are visited in document order and each module's outputs in name
/// order. When two modules publish the same output name the later one wins.
#[derive(Debug, Clone, Default)]
pub struct OutputTable {
    entries: AHashMap<String, OutputValue>,
}

impl OutputTable {
    pub fn from_document(document: StateDocument) -> Self {
        let mut entries = AHashMap::new();

        for module in document.modules {
            let module_path = module.display_path();
            for (name, record) in module.outputs {
                debug!("Output '{}' found in module {}", name, module_path);
                if entries.insert(name.clone(), record.value).is_some() {
                    warn!(
                        "Output '{}' redefined by module {}; keeping the later value",
                        name, module_path
                    );
                }
            }
        }

        OutputTable { entries }
    }

    pub fn get(&self, name: &str) -> Option<&OutputValue> {
        self.entries.get(name)
    }

    /// Remove an output from the table, returning its raw value
    pub fn take(&mut self, name: &str) -> Option<OutputValue> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Output names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ModuleState, OutputRecord};
    use serde_json::json;

    fn module(outputs: &[(&str, OutputValue)]) -> ModuleState {
        ModuleState {
            path: vec!["root".to_string()],
            outputs: outputs
                .iter()
                .map(|(name, value)| {
                    (
                        (*name).to_string(),
                        OutputRecord {
                            value: value.clone(),
                            sensitive: false,
                            output_type: None,
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_flattens_all_modules() {
        let document = StateDocument {
            modules: vec![
                module(&[("a", OutputValue::Single(json!("1")))]),
                module(&[("b", OutputValue::Single(json!("2")))]),
            ],
        };
        let table = OutputTable::from_document(document);
        assert_eq!(table.len(), 2);
        assert_eq!(table.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_later_module_overwrites_earlier() {
        let document = StateDocument {
            modules: vec![
                module(&[("nodes", OutputValue::Single(json!("first")))]),
                module(&[("nodes", OutputValue::Single(json!("second")))]),
            ],
        };
        let table = OutputTable::from_document(document);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("nodes"),
            Some(&OutputValue::Single(json!("second")))
        );
    }

    #[test]
    fn test_take_removes_entry() {
        let document = StateDocument {
            modules: vec![module(&[("a", OutputValue::Single(json!("1")))])],
        };
        let mut table = OutputTable::from_document(document);
        assert!(table.take("a").is_some());
        assert!(table.take("a").is_none());
        assert!(table.is_empty());
    }
}
