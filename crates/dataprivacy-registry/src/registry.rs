// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata registry tree builder.
//!
//! Walks every plugin type and core subsystem reported by the catalog and
//! enriches each component with its compliance outcome, declared metadata,
//! and contributed-plugin flag. Any collaborator failure aborts the build.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use dataprivacy_core::traits::{
    ComplianceOracle, ComponentCatalog, ContributedPluginIndex, Localizer, MetadataSource,
};
use dataprivacy_core::{
    Compliance, ComponentRecord, ComponentTypeGroup, PrivacyError, CORE_PLUGIN_TYPE,
};
use tracing::{debug, info};

use crate::format::format_collection;

/// Last underscore-delimited segment of a raw identifier.
///
/// `mod_forum` gives `forum`; `local_my_tool` gives `tool`.
pub fn short_name(raw_identifier: &str) -> &str {
    raw_identifier.rsplit('_').next().unwrap_or(raw_identifier)
}

/// Read-only aggregator over the five registry collaborators.
pub struct MetadataRegistry {
    catalog: Arc<dyn ComponentCatalog>,
    compliance: Arc<dyn ComplianceOracle>,
    metadata: Arc<dyn MetadataSource>,
    contributed: Arc<dyn ContributedPluginIndex>,
    localizer: Arc<dyn Localizer>,
}

impl MetadataRegistry {
    pub fn new(
        catalog: Arc<dyn ComponentCatalog>,
        compliance: Arc<dyn ComplianceOracle>,
        metadata: Arc<dyn MetadataSource>,
        contributed: Arc<dyn ContributedPluginIndex>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            catalog,
            compliance,
            metadata,
            contributed,
            localizer,
        }
    }

    /// Build a registry over one value that implements every collaborator.
    pub fn from_source<S>(source: Arc<S>) -> Self
    where
        S: ComponentCatalog
            + ComplianceOracle
            + MetadataSource
            + ContributedPluginIndex
            + Localizer
            + 'static,
    {
        Self::new(
            source.clone(),
            source.clone(),
            source.clone(),
            source.clone(),
            source,
        )
    }

    /// Build the full tree: one group per plugin type, then the `core` group.
    pub fn build_registry_tree(&self) -> Result<Vec<ComponentTypeGroup>, PrivacyError> {
        let contributed = self.contributed.list_contributed_plugins()?;
        let listing = self.full_component_list()?;

        let mut tree = Vec::with_capacity(listing.len());
        let mut total = 0usize;
        for (plugin_type, identifiers) in listing {
            let components = identifiers
                .into_iter()
                .map(|raw| self.enrich(&plugin_type, raw, &contributed))
                .collect::<Result<Vec<_>, PrivacyError>>()?;

            let plugin_type_display = self
                .catalog
                .resolve_plugin_type_display_name(&plugin_type)?
                .unwrap_or_else(|| plugin_type.clone());

            debug!(
                plugin_type = %plugin_type,
                components = components.len(),
                "registry group enriched"
            );
            total += components.len();
            tree.push(ComponentTypeGroup {
                plugin_type_key: plugin_type,
                plugin_type_display,
                components,
            });
        }

        info!(groups = tree.len(), components = total, "metadata registry tree built");
        Ok(tree)
    }

    /// Plugin types with their raw component identifiers, plus the `core` group
    /// holding every subsystem that has a path.
    fn full_component_list(&self) -> Result<Vec<(String, Vec<String>)>, PrivacyError> {
        let mut listing = Vec::new();
        for plugin_type in self.catalog.list_plugin_types()? {
            let identifiers = self
                .catalog
                .list_plugins(&plugin_type)?
                .into_iter()
                .map(|name| format!("{plugin_type}_{name}"))
                .collect();
            listing.push((plugin_type, identifiers));
        }

        let subsystems = self
            .catalog
            .list_core_subsystems()?
            .into_iter()
            .filter(|(_, path)| path.is_some())
            .map(|(name, _)| format!("{CORE_PLUGIN_TYPE}_{name}"))
            .collect();
        listing.push((CORE_PLUGIN_TYPE.to_string(), subsystems));
        Ok(listing)
    }

    fn enrich(
        &self,
        plugin_type: &str,
        raw_identifier: String,
        contributed: &HashMap<String, HashSet<String>>,
    ) -> Result<ComponentRecord, PrivacyError> {
        let display_name = if plugin_type == CORE_PLUGIN_TYPE {
            raw_identifier.clone()
        } else {
            self.catalog
                .resolve_plugin_display_name(&raw_identifier)?
                .unwrap_or_else(|| raw_identifier.clone())
        };

        let compliance = self.compliance_for(&raw_identifier)?;

        let is_external = contributed
            .get(plugin_type)
            .is_some_and(|names| names.contains(short_name(&raw_identifier)));

        Ok(ComponentRecord {
            display_name,
            raw_identifier,
            is_external,
            compliance,
        })
    }

    fn compliance_for(&self, raw_identifier: &str) -> Result<Compliance, PrivacyError> {
        if !self.compliance.is_component_compliant(raw_identifier)? {
            return Ok(Compliance::NonCompliant);
        }

        let declared = match self.metadata.get_declared_metadata(raw_identifier)? {
            Some(collection) => Compliance::declared(format_collection(
                &collection,
                raw_identifier,
                self.localizer.as_ref(),
            )?),
            None => None,
        };

        match declared {
            Some(outcome) => Ok(outcome),
            // An empty collection declares nothing, same as a null provider.
            None => {
                let key = self.compliance.null_provider_reason_key(raw_identifier)?;
                Ok(Compliance::NullProvider {
                    reason: self.localizer.translate(&key, raw_identifier, &[])?,
                })
            }
        }
    }
}
