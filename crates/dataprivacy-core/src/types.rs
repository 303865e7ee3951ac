// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry tree types and metadata declarations.
//!
//! The registry produces one [`ComponentTypeGroup`] per plugin type plus a
//! synthetic `core` group for subsystems. Each group holds the enriched
//! [`ComponentRecord`]s in catalog order.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Plugin type key of the synthetic group holding core subsystems.
pub const CORE_PLUGIN_TYPE: &str = "core";

/// Identifier of a site user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a site role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub u64);

/// Declared variant of a metadata item.
///
/// Carried explicitly in the data rather than derived from a runtime type.
/// Unrecognized kinds are kept verbatim in [`MetadataKind::Other`] so link
/// classification still works on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetadataKind {
    DatabaseTable,
    ExternalLocation,
    SubsystemLink,
    PluginTypeLink,
    UserPreference,
    Other(String),
}

impl MetadataKind {
    pub fn as_str(&self) -> &str {
        match self {
            MetadataKind::DatabaseTable => "database_table",
            MetadataKind::ExternalLocation => "external_location",
            MetadataKind::SubsystemLink => "subsystem_link",
            MetadataKind::PluginTypeLink => "plugintype_link",
            MetadataKind::UserPreference => "user_preference",
            MetadataKind::Other(kind) => kind,
        }
    }

    /// True when the data lives in another component (case-sensitive prefix match).
    pub fn is_link(&self) -> bool {
        let kind = self.as_str();
        kind.starts_with("subsystem_link") || kind.starts_with("plugintype_link")
    }
}

impl From<&str> for MetadataKind {
    fn from(kind: &str) -> Self {
        match kind {
            "database_table" => MetadataKind::DatabaseTable,
            "external_location" => MetadataKind::ExternalLocation,
            "subsystem_link" => MetadataKind::SubsystemLink,
            "plugintype_link" => MetadataKind::PluginTypeLink,
            "user_preference" => MetadataKind::UserPreference,
            other => MetadataKind::Other(other.to_string()),
        }
    }
}

impl From<String> for MetadataKind {
    fn from(kind: String) -> Self {
        MetadataKind::from(kind.as_str())
    }
}

impl From<MetadataKind> for String {
    fn from(kind: MetadataKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(field name, description string key)` pair declared by a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclaredField {
    pub name: String,
    pub description_key: String,
}

/// One metadata entry as declared by a compliant component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataDeclaration {
    /// Table name, external service name, or linked component.
    pub name: String,
    pub kind: MetadataKind,
    /// Declared fields in declaration order.
    #[serde(default)]
    pub fields: Vec<DeclaredField>,
    /// String key for the human-readable summary.
    pub summary_key: String,
}

/// A resolved field of a [`MetadataItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataField {
    pub field_name: String,
    pub field_description: String,
}

/// A metadata declaration with all strings resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataItem {
    pub name: String,
    pub kind: String,
    pub fields: Vec<MetadataField>,
    pub summary: String,
    pub is_link: bool,
}

/// Outcome of the compliance check for a single component.
///
/// The three outcomes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compliance {
    /// The component does not declare privacy metadata at all.
    NonCompliant,
    /// Compliant, but stores no personal data.
    NullProvider { reason: String },
    /// Compliant with declared metadata. Never empty; build it with
    /// [`Compliance::declared`].
    Declared { metadata: Vec<MetadataItem> },
}

impl Compliance {
    /// `Declared` outcome for `metadata`, or `None` when nothing was declared.
    pub fn declared(metadata: Vec<MetadataItem>) -> Option<Self> {
        if metadata.is_empty() {
            None
        } else {
            Some(Compliance::Declared { metadata })
        }
    }
}

/// An enriched component inside a [`ComponentTypeGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Human-readable plugin name, or the raw identifier for core subsystems.
    pub display_name: String,
    /// Frankenstyle identifier such as `mod_forum` or `core_files`.
    pub raw_identifier: String,
    pub is_external: bool,
    pub compliance: Compliance,
}

impl ComponentRecord {
    pub fn compliant(&self) -> bool {
        !matches!(self.compliance, Compliance::NonCompliant)
    }

    pub fn null_provider_reason(&self) -> Option<&str> {
        match &self.compliance {
            Compliance::NullProvider { reason } => Some(reason),
            _ => None,
        }
    }

    /// Declared metadata, empty unless the component declared some.
    pub fn metadata(&self) -> &[MetadataItem] {
        match &self.compliance {
            Compliance::Declared { metadata } => metadata,
            _ => &[],
        }
    }
}

impl Serialize for ComponentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComponentRecord", 5)?;
        state.serialize_field("display_name", &self.display_name)?;
        state.serialize_field("raw_identifier", &self.raw_identifier)?;
        state.serialize_field("compliant", &self.compliant())?;
        state.serialize_field("is_external", &self.is_external)?;
        match &self.compliance {
            Compliance::NonCompliant => {}
            Compliance::NullProvider { reason } => {
                state.serialize_field("null_provider_reason", reason)?;
            }
            Compliance::Declared { metadata } => {
                state.serialize_field("metadata", metadata)?;
            }
        }
        state.end()
    }
}

/// All components of one plugin type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTypeGroup {
    /// Machine-readable plugin type, e.g. `mod` or `core`.
    pub plugin_type_key: String,
    /// Resolved display string for the plugin type.
    pub plugin_type_display: String,
    pub components: Vec<ComponentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_kinds_parse_to_variants() {
        assert_eq!(MetadataKind::from("database_table"), MetadataKind::DatabaseTable);
        assert_eq!(MetadataKind::from("plugintype_link"), MetadataKind::PluginTypeLink);
        assert_eq!(
            MetadataKind::from("subsystem_link_provider"),
            MetadataKind::Other("subsystem_link_provider".into())
        );
    }

    #[test]
    fn link_kinds_are_prefix_matched() {
        assert!(MetadataKind::SubsystemLink.is_link());
        assert!(MetadataKind::PluginTypeLink.is_link());
        assert!(MetadataKind::from("subsystem_link_provider").is_link());
        assert!(!MetadataKind::DatabaseTable.is_link());
        assert!(!MetadataKind::from("Subsystem_link").is_link());
        assert!(!MetadataKind::from("external_subsystem_link").is_link());
    }

    #[test]
    fn kind_serializes_as_plain_string() {
        let json = serde_json::to_string(&MetadataKind::UserPreference).unwrap();
        assert_eq!(json, "\"user_preference\"");
        let parsed: MetadataKind = serde_json::from_str("\"custom_store\"").unwrap();
        assert_eq!(parsed, MetadataKind::Other("custom_store".into()));
    }

    #[test]
    fn record_serialization_omits_absent_outcomes() {
        let record = ComponentRecord {
            display_name: "Forum".into(),
            raw_identifier: "mod_forum".into(),
            is_external: false,
            compliance: Compliance::NonCompliant,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["compliant"], false);
        assert!(value.get("null_provider_reason").is_none());
        assert!(value.get("metadata").is_none());

        let record = ComponentRecord {
            compliance: Compliance::NullProvider {
                reason: "No data".into(),
            },
            ..record
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["compliant"], true);
        assert_eq!(value["null_provider_reason"], "No data");
    }

    #[test]
    fn accessors_follow_compliance_outcome() {
        let record = ComponentRecord {
            display_name: "core_files".into(),
            raw_identifier: "core_files".into(),
            is_external: false,
            compliance: Compliance::declared(vec![MetadataItem {
                name: "files".into(),
                kind: "database_table".into(),
                fields: Vec::new(),
                summary: "Stored files".into(),
                is_link: false,
            }])
            .unwrap(),
        };
        assert!(record.compliant());
        assert!(record.null_provider_reason().is_none());
        assert_eq!(record.metadata().len(), 1);
    }

    #[test]
    fn empty_declaration_is_not_an_outcome() {
        assert_eq!(Compliance::declared(Vec::new()), None);
    }

    proptest! {
        #[test]
        fn kind_string_round_trips(kind in "[a-z_]{1,24}") {
            let parsed = MetadataKind::from(kind.as_str());
            prop_assert_eq!(parsed.as_str(), kind.as_str());
        }

        #[test]
        fn link_classification_matches_prefix(suffix in "[a-z_]{0,12}") {
            let subsystem = format!("subsystem_link{suffix}");
            let plugintype = format!("plugintype_link{suffix}");
            let table = format!("database_table{suffix}");
            prop_assert!(MetadataKind::from(subsystem.as_str()).is_link());
            prop_assert!(MetadataKind::from(plugintype.as_str()).is_link());
            prop_assert!(!MetadataKind::from(table.as_str()).is_link());
        }
    }
}
