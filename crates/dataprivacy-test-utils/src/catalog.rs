// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture catalog implementing every registry collaborator.
//!
//! `FixtureCatalog` is assembled with chained builder calls and can be told
//! to fail a specific collaborator to exercise error propagation.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use dataprivacy_core::traits::{
    ComplianceOracle, ComponentCatalog, ContributedPluginIndex, Localizer, MetadataSource,
};
use dataprivacy_core::{DeclaredField, MetadataDeclaration, MetadataKind, PrivacyError};

/// Which collaborator a [`FixtureCatalog`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Catalog,
    Compliance,
    Metadata,
    Contributed,
    Localizer,
}

impl Collaborator {
    fn name(self) -> &'static str {
        match self {
            Collaborator::Catalog => "catalog",
            Collaborator::Compliance => "compliance",
            Collaborator::Metadata => "metadata",
            Collaborator::Contributed => "contributed",
            Collaborator::Localizer => "localizer",
        }
    }
}

/// How a fixture component answers compliance and metadata queries.
#[derive(Debug, Clone)]
pub enum FixtureCompliance {
    NonCompliant,
    /// Compliant with no declared collection; carries the reason string key.
    NullProvider(String),
    Declared(Vec<MetadataDeclaration>),
}

#[derive(Debug, Clone)]
struct FixtureComponent {
    display: Option<String>,
    compliance: FixtureCompliance,
}

/// Build a metadata declaration from borrowed parts.
pub fn declaration(
    kind: &str,
    name: &str,
    fields: &[(&str, &str)],
    summary_key: &str,
) -> MetadataDeclaration {
    MetadataDeclaration {
        name: name.to_string(),
        kind: MetadataKind::from(kind),
        fields: fields
            .iter()
            .map(|(field, key)| DeclaredField {
                name: field.to_string(),
                description_key: key.to_string(),
            })
            .collect(),
        summary_key: summary_key.to_string(),
    }
}

/// In-memory catalog, compliance oracle, metadata source, contributed index,
/// and string table in one value.
#[derive(Debug, Default)]
pub struct FixtureCatalog {
    plugin_types: Vec<(String, Option<String>)>,
    plugins: HashMap<String, Vec<String>>,
    subsystems: Vec<(String, Option<String>)>,
    components: HashMap<String, FixtureComponent>,
    contributed: HashMap<String, HashSet<String>>,
    strings: HashMap<(String, String), String>,
    failing: Option<Collaborator>,
    display_lookups: Mutex<Vec<String>>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin type with an optional display label.
    pub fn plugin_type(mut self, key: &str, display: Option<&str>) -> Self {
        self.plugin_types
            .push((key.to_string(), display.map(str::to_string)));
        self.plugins.entry(key.to_string()).or_default();
        self
    }

    /// Add a plugin under an existing type. Its raw identifier is `{type}_{name}`.
    pub fn plugin(
        mut self,
        plugin_type: &str,
        name: &str,
        display: Option<&str>,
        compliance: FixtureCompliance,
    ) -> Self {
        self.plugins
            .entry(plugin_type.to_string())
            .or_default()
            .push(name.to_string());
        self.components.insert(
            format!("{plugin_type}_{name}"),
            FixtureComponent {
                display: display.map(str::to_string),
                compliance,
            },
        );
        self
    }

    /// Add a core subsystem. Its raw identifier is `core_{name}`.
    pub fn subsystem(
        mut self,
        name: &str,
        path: Option<&str>,
        compliance: FixtureCompliance,
    ) -> Self {
        self.subsystems
            .push((name.to_string(), path.map(str::to_string)));
        self.components.insert(
            format!("core_{name}"),
            FixtureComponent {
                display: None,
                compliance,
            },
        );
        self
    }

    /// Mark a plugin short name as third-party under `plugin_type`.
    pub fn contributed(mut self, plugin_type: &str, short_name: &str) -> Self {
        self.contributed
            .entry(plugin_type.to_string())
            .or_default()
            .insert(short_name.to_string());
        self
    }

    /// Register a localized string.
    pub fn string(mut self, component: &str, key: &str, text: &str) -> Self {
        self.strings
            .insert((component.to_string(), key.to_string()), text.to_string());
        self
    }

    /// Make every call on `collaborator` fail with `CollaboratorUnavailable`.
    pub fn failing(mut self, collaborator: Collaborator) -> Self {
        self.failing = Some(collaborator);
        self
    }

    /// Raw identifiers passed to `resolve_plugin_display_name`, in call order.
    pub fn display_lookups(&self) -> Vec<String> {
        self.display_lookups
            .lock()
            .map(|lookups| lookups.clone())
            .unwrap_or_default()
    }

    fn check(&self, collaborator: Collaborator) -> Result<(), PrivacyError> {
        if self.failing == Some(collaborator) {
            return Err(PrivacyError::unavailable(
                collaborator.name(),
                "fixture failure",
            ));
        }
        Ok(())
    }

    fn component(&self, raw_identifier: &str) -> Result<&FixtureComponent, PrivacyError> {
        self.components.get(raw_identifier).ok_or_else(|| {
            PrivacyError::unavailable("compliance", format!("unknown component {raw_identifier}"))
        })
    }
}

impl ComponentCatalog for FixtureCatalog {
    fn list_plugin_types(&self) -> Result<Vec<String>, PrivacyError> {
        self.check(Collaborator::Catalog)?;
        Ok(self.plugin_types.iter().map(|(key, _)| key.clone()).collect())
    }

    fn list_plugins(&self, plugin_type: &str) -> Result<Vec<String>, PrivacyError> {
        self.check(Collaborator::Catalog)?;
        Ok(self.plugins.get(plugin_type).cloned().unwrap_or_default())
    }

    fn list_core_subsystems(&self) -> Result<Vec<(String, Option<String>)>, PrivacyError> {
        self.check(Collaborator::Catalog)?;
        Ok(self.subsystems.clone())
    }

    fn resolve_plugin_display_name(
        &self,
        raw_identifier: &str,
    ) -> Result<Option<String>, PrivacyError> {
        self.check(Collaborator::Catalog)?;
        if let Ok(mut lookups) = self.display_lookups.lock() {
            lookups.push(raw_identifier.to_string());
        }
        Ok(self
            .components
            .get(raw_identifier)
            .and_then(|c| c.display.clone()))
    }

    fn resolve_plugin_type_display_name(
        &self,
        plugin_type: &str,
    ) -> Result<Option<String>, PrivacyError> {
        self.check(Collaborator::Catalog)?;
        Ok(self
            .plugin_types
            .iter()
            .find(|(key, _)| key == plugin_type)
            .and_then(|(_, display)| display.clone()))
    }
}

impl ComplianceOracle for FixtureCatalog {
    fn is_component_compliant(&self, raw_identifier: &str) -> Result<bool, PrivacyError> {
        self.check(Collaborator::Compliance)?;
        Ok(!matches!(
            self.component(raw_identifier)?.compliance,
            FixtureCompliance::NonCompliant
        ))
    }

    fn null_provider_reason_key(&self, raw_identifier: &str) -> Result<String, PrivacyError> {
        self.check(Collaborator::Compliance)?;
        match &self.component(raw_identifier)?.compliance {
            FixtureCompliance::NullProvider(key) => Ok(key.clone()),
            _ => Ok("privacy:metadata".to_string()),
        }
    }
}

impl MetadataSource for FixtureCatalog {
    fn get_declared_metadata(
        &self,
        raw_identifier: &str,
    ) -> Result<Option<Vec<MetadataDeclaration>>, PrivacyError> {
        self.check(Collaborator::Metadata)?;
        match &self.component(raw_identifier)?.compliance {
            FixtureCompliance::Declared(items) => Ok(Some(items.clone())),
            _ => Ok(None),
        }
    }
}

impl ContributedPluginIndex for FixtureCatalog {
    fn list_contributed_plugins(&self) -> Result<HashMap<String, HashSet<String>>, PrivacyError> {
        self.check(Collaborator::Contributed)?;
        Ok(self.contributed.clone())
    }
}

impl Localizer for FixtureCatalog {
    fn translate(&self, key: &str, component: &str, args: &[&str]) -> Result<String, PrivacyError> {
        self.check(Collaborator::Localizer)?;
        let text = self
            .strings
            .get(&(component.to_string(), key.to_string()))
            .ok_or_else(|| PrivacyError::missing_translation(key, component))?;
        Ok(match args.first() {
            Some(arg) => text.replace("{$a}", arg),
            None => text.clone(),
        })
    }
}
