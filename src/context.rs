//! The configuration context shared by every hook.
//! An explicit value passed by reference through the question pipeline and
//! the whole-run hooks; there is no process-wide state.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Holds the target directory of the generation run and every answer keyed
/// by its dotted variable name, in question order. Hooks read and write
/// entries; the generation run owns the value itself.
#[derive(Debug, Clone)]
pub struct Configurator {
    target_dir: PathBuf,
    answers: IndexMap<String, serde_json::Value>,
}

impl Configurator {
    pub fn new<P: Into<PathBuf>>(target_dir: P) -> Self {
        Self { target_dir: target_dir.into(), answers: IndexMap::new() }
    }

    /// Directory the package is generated into.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Last path segment of the target directory, i.e. the name the package
    /// directory was created with (`collective.task`).
    pub fn dir_name(&self) -> &str {
        self.target_dir.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.answers.get(key)
    }

    /// String answer under `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.answers.get(key).and_then(|v| v.as_str())
    }

    /// Boolean answer under `key`; missing or non-boolean values read as
    /// false, matching how forced "disabled" markers are treated.
    pub fn get_bool(&self, key: &str) -> bool {
        self.answers.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn set<V: Into<serde_json::Value>>(&mut self, key: &str, value: V) {
        self.answers.insert(key.to_string(), value.into());
    }

    /// Render context for the template engine: dotted keys nested into JSON
    /// objects so templates resolve `{{ package.name }}` style expressions.
    pub fn render_context(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        for (key, value) in &self.answers {
            insert_dotted(&mut root, key, value.clone());
        }
        serde_json::Value::Object(root)
    }
}

fn insert_dotted(
    map: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    value: serde_json::Value,
) {
    match key.split_once('.') {
        None => {
            map.insert(key.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
            if !entry.is_object() {
                *entry = serde_json::Value::Object(serde_json::Map::new());
            }
            if let Some(child) = entry.as_object_mut() {
                insert_dotted(child, rest, value);
            }
        }
    }
}
