// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog collaborators: installed plugin types, plugins, and core subsystems.

use std::collections::{HashMap, HashSet};

use crate::error::PrivacyError;

/// Source of the installed component catalog.
///
/// Listings are returned in the catalog's own iteration order; the registry
/// preserves that order in its output.
pub trait ComponentCatalog: Send + Sync {
    /// All plugin type keys, e.g. `["mod", "block"]`.
    fn list_plugin_types(&self) -> Result<Vec<String>, PrivacyError>;

    /// Short names of the plugins installed under `plugin_type`, e.g. `["forum"]`.
    fn list_plugins(&self, plugin_type: &str) -> Result<Vec<String>, PrivacyError>;

    /// Core subsystem names paired with their directory, if any.
    ///
    /// Only subsystems with a path are reported by the registry.
    fn list_core_subsystems(&self) -> Result<Vec<(String, Option<String>)>, PrivacyError>;

    /// Human-readable name of a plugin, `None` when the catalog has no label.
    fn resolve_plugin_display_name(
        &self,
        raw_identifier: &str,
    ) -> Result<Option<String>, PrivacyError>;

    /// Human-readable name of a plugin type, `None` when the catalog has no label.
    fn resolve_plugin_type_display_name(
        &self,
        plugin_type: &str,
    ) -> Result<Option<String>, PrivacyError>;
}

/// Index of third-party (non-standard) plugins.
pub trait ContributedPluginIndex: Send + Sync {
    /// Contributed plugin short names keyed by plugin type.
    fn list_contributed_plugins(&self) -> Result<HashMap<String, HashSet<String>>, PrivacyError>;
}
