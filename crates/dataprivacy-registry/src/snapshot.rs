// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog snapshots parsed from TOML.
//!
//! A snapshot describes installed plugin types, their plugins, and the core
//! subsystems, together with each component's compliance answer and declared
//! metadata. It implements every catalog-side registry collaborator, so a
//! registry can be built from a file:
//!
//! ```toml
//! [[plugin_type]]
//! key = "mod"
//! display = "Activity modules"
//!
//! [[plugin_type.plugin]]
//! name = "forum"
//! display = "Forum"
//! compliant = true
//!
//! [[plugin_type.plugin.metadata]]
//! kind = "database_table"
//! name = "forum_posts"
//! summary_key = "privacy:metadata:forum_posts"
//! fields = [{ name = "userid", description_key = "privacy:metadata:forum_posts:userid" }]
//!
//! [[subsystem]]
//! name = "files"
//! path = "lib/filestorage"
//! compliant = true
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use dataprivacy_core::traits::{
    ComplianceOracle, ComponentCatalog, ContributedPluginIndex, MetadataSource,
};
use dataprivacy_core::{MetadataDeclaration, PrivacyError, CORE_PLUGIN_TYPE};
use serde::Deserialize;

/// Reason key reported by null providers that do not name their own.
const DEFAULT_NULL_PROVIDER_KEY: &str = "privacy:metadata";

/// Intermediate TOML deserialization struct for a snapshot file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotFile {
    #[serde(default)]
    plugin_type: Vec<PluginTypeSection>,
    #[serde(default)]
    subsystem: Vec<SubsystemSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginTypeSection {
    key: String,
    display: Option<String>,
    #[serde(default)]
    plugin: Vec<PluginSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSection {
    name: String,
    display: Option<String>,
    /// Shipped with the core distribution. Non-standard plugins are contributed.
    #[serde(default = "default_true")]
    standard: bool,
    #[serde(default)]
    compliant: bool,
    null_provider_reason: Option<String>,
    metadata: Option<Vec<MetadataDeclaration>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SubsystemSection {
    name: String,
    path: Option<String>,
    #[serde(default)]
    compliant: bool,
    null_provider_reason: Option<String>,
    metadata: Option<Vec<MetadataDeclaration>>,
}

/// Privacy answers of one component, keyed by raw identifier in the snapshot.
#[derive(Debug, Clone)]
struct PrivacySection {
    compliant: bool,
    null_provider_reason: Option<String>,
    metadata: Option<Vec<MetadataDeclaration>>,
}

fn default_true() -> bool {
    true
}

/// A validated, in-memory catalog snapshot.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    plugin_types: Vec<(String, Option<String>)>,
    plugins: HashMap<String, Vec<String>>,
    plugin_names: HashMap<String, String>,
    subsystems: Vec<(String, Option<String>)>,
    privacy: HashMap<String, PrivacySection>,
    contributed: HashMap<String, HashSet<String>>,
}

/// Parse and validate a catalog snapshot from TOML content.
///
/// Rejects empty names, the reserved `core` plugin type, and duplicate
/// raw identifiers across the whole snapshot.
pub fn parse_catalog_snapshot(toml_content: &str) -> Result<CatalogSnapshot, PrivacyError> {
    let file: SnapshotFile = toml::from_str(toml_content)
        .map_err(|e| PrivacyError::Config(format!("invalid catalog snapshot: {e}")))?;

    let mut snapshot = CatalogSnapshot {
        plugin_types: Vec::with_capacity(file.plugin_type.len()),
        plugins: HashMap::new(),
        plugin_names: HashMap::new(),
        subsystems: Vec::with_capacity(file.subsystem.len()),
        privacy: HashMap::new(),
        contributed: HashMap::new(),
    };

    for section in file.plugin_type {
        if section.key.is_empty() {
            return Err(PrivacyError::Config(
                "catalog snapshot: plugin type key must not be empty".to_string(),
            ));
        }
        if section.key == CORE_PLUGIN_TYPE {
            return Err(PrivacyError::Config(format!(
                "catalog snapshot: plugin type `{CORE_PLUGIN_TYPE}` is reserved for subsystems"
            )));
        }
        if snapshot.plugins.contains_key(&section.key) {
            return Err(PrivacyError::Config(format!(
                "catalog snapshot: duplicate plugin type `{}`",
                section.key
            )));
        }

        let mut names = Vec::with_capacity(section.plugin.len());
        for plugin in section.plugin {
            if plugin.name.is_empty() {
                return Err(PrivacyError::Config(format!(
                    "catalog snapshot: plugin name must not be empty (type `{}`)",
                    section.key
                )));
            }
            let raw = format!("{}_{}", section.key, plugin.name);
            snapshot.insert_privacy(
                &raw,
                PrivacySection {
                    compliant: plugin.compliant,
                    null_provider_reason: plugin.null_provider_reason,
                    metadata: plugin.metadata,
                },
            )?;
            if let Some(display) = plugin.display {
                snapshot.plugin_names.insert(raw, display);
            }
            if !plugin.standard {
                snapshot
                    .contributed
                    .entry(section.key.clone())
                    .or_default()
                    .insert(plugin.name.clone());
            }
            names.push(plugin.name);
        }
        snapshot.plugins.insert(section.key.clone(), names);
        snapshot.plugin_types.push((section.key, section.display));
    }

    for subsystem in file.subsystem {
        if subsystem.name.is_empty() {
            return Err(PrivacyError::Config(
                "catalog snapshot: subsystem name must not be empty".to_string(),
            ));
        }
        let raw = format!("{CORE_PLUGIN_TYPE}_{}", subsystem.name);
        snapshot.insert_privacy(
            &raw,
            PrivacySection {
                compliant: subsystem.compliant,
                null_provider_reason: subsystem.null_provider_reason,
                metadata: subsystem.metadata,
            },
        )?;
        snapshot.subsystems.push((subsystem.name, subsystem.path));
    }

    Ok(snapshot)
}

impl CatalogSnapshot {
    /// Read and parse a snapshot file.
    ///
    /// An unreadable file means the catalog is unavailable.
    pub fn from_path(path: &Path) -> Result<Self, PrivacyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrivacyError::unavailable("catalog", format!("{}: {e}", path.display()))
        })?;
        parse_catalog_snapshot(&content)
    }

    /// Number of components (plugins and subsystems) in the snapshot.
    pub fn len(&self) -> usize {
        self.privacy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.privacy.is_empty()
    }

    fn insert_privacy(&mut self, raw: &str, privacy: PrivacySection) -> Result<(), PrivacyError> {
        if self.privacy.insert(raw.to_string(), privacy).is_some() {
            return Err(PrivacyError::Config(format!(
                "catalog snapshot: duplicate component `{raw}`"
            )));
        }
        Ok(())
    }

    fn privacy(&self, raw_identifier: &str) -> Result<&PrivacySection, PrivacyError> {
        self.privacy.get(raw_identifier).ok_or_else(|| {
            PrivacyError::unavailable(
                "catalog",
                format!("component `{raw_identifier}` is not in the snapshot"),
            )
        })
    }
}

impl ComponentCatalog for CatalogSnapshot {
    fn list_plugin_types(&self) -> Result<Vec<String>, PrivacyError> {
        Ok(self.plugin_types.iter().map(|(key, _)| key.clone()).collect())
    }

    fn list_plugins(&self, plugin_type: &str) -> Result<Vec<String>, PrivacyError> {
        Ok(self.plugins.get(plugin_type).cloned().unwrap_or_default())
    }

    fn list_core_subsystems(&self) -> Result<Vec<(String, Option<String>)>, PrivacyError> {
        Ok(self.subsystems.clone())
    }

    fn resolve_plugin_display_name(
        &self,
        raw_identifier: &str,
    ) -> Result<Option<String>, PrivacyError> {
        Ok(self.plugin_names.get(raw_identifier).cloned())
    }

    fn resolve_plugin_type_display_name(
        &self,
        plugin_type: &str,
    ) -> Result<Option<String>, PrivacyError> {
        Ok(self
            .plugin_types
            .iter()
            .find(|(key, _)| key == plugin_type)
            .and_then(|(_, display)| display.clone()))
    }
}

impl ComplianceOracle for CatalogSnapshot {
    fn is_component_compliant(&self, raw_identifier: &str) -> Result<bool, PrivacyError> {
        Ok(self.privacy(raw_identifier)?.compliant)
    }

    fn null_provider_reason_key(&self, raw_identifier: &str) -> Result<String, PrivacyError> {
        Ok(self
            .privacy(raw_identifier)?
            .null_provider_reason
            .clone()
            .unwrap_or_else(|| DEFAULT_NULL_PROVIDER_KEY.to_string()))
    }
}

impl MetadataSource for CatalogSnapshot {
    fn get_declared_metadata(
        &self,
        raw_identifier: &str,
    ) -> Result<Option<Vec<MetadataDeclaration>>, PrivacyError> {
        Ok(self.privacy(raw_identifier)?.metadata.clone())
    }
}

impl ContributedPluginIndex for CatalogSnapshot {
    fn list_contributed_plugins(&self) -> Result<HashMap<String, HashSet<String>>, PrivacyError> {
        Ok(self.contributed.clone())
    }
}
