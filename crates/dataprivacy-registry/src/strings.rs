// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! String table localizer backed by TOML.
//!
//! Each top-level table is a component; its keys are string identifiers:
//!
//! ```toml
//! [mod_forum]
//! "privacy:metadata:forum_posts" = "Information about forum posts."
//!
//! [tool_dataprivacy]
//! datarequestemailsubject = "Data request: {$a}"
//! ```
//!
//! `{$a}` is replaced by the first argument, `{$a1}`, `{$a2}`, ... by later ones.

use std::collections::HashMap;
use std::path::Path;

use dataprivacy_core::traits::Localizer;
use dataprivacy_core::PrivacyError;

/// Localized strings keyed by component, then by string key.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    components: HashMap<String, HashMap<String, String>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(toml_content: &str) -> Result<Self, PrivacyError> {
        let components: HashMap<String, HashMap<String, String>> = toml::from_str(toml_content)
            .map_err(|e| PrivacyError::Config(format!("invalid string table: {e}")))?;
        Ok(Self { components })
    }

    /// Read a string table file. An unreadable file means localization is unavailable.
    pub fn from_path(path: &Path) -> Result<Self, PrivacyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrivacyError::unavailable("localizer", format!("{}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Add or replace a string.
    pub fn insert(&mut self, component: &str, key: &str, text: &str) {
        self.components
            .entry(component.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    /// Merge another table into this one; entries in `other` win.
    pub fn merge(&mut self, other: StringTable) {
        for (component, strings) in other.components {
            self.components.entry(component).or_default().extend(strings);
        }
    }

    /// Total number of strings across all components.
    pub fn len(&self) -> usize {
        self.components.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Substitute `{$a}`, `{$a1}`, `{$a2}`, ... placeholders.
fn substitute(template: &str, args: &[&str]) -> String {
    let mut text = template.to_string();
    for (i, arg) in args.iter().enumerate().skip(1).rev() {
        text = text.replace(&format!("{{$a{i}}}"), arg);
    }
    if let Some(first) = args.first() {
        text = text.replace("{$a}", first);
    }
    text
}

impl Localizer for StringTable {
    fn translate(&self, key: &str, component: &str, args: &[&str]) -> Result<String, PrivacyError> {
        self.components
            .get(component)
            .and_then(|strings| strings.get(key))
            .map(|template| substitute(template, args))
            .ok_or_else(|| PrivacyError::missing_translation(key, component))
    }
}
