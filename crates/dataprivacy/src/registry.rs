// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `dataprivacy registry` command implementation.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use dataprivacy_core::{Compliance, ComponentTypeGroup, PrivacyError};
use dataprivacy_registry::{CatalogSnapshot, MetadataRegistry, StringTable};

/// Load a catalog snapshot and optional string table, then build the tree.
pub fn build_tree(
    catalog: &Path,
    strings: Option<&Path>,
) -> Result<Vec<ComponentTypeGroup>, PrivacyError> {
    let snapshot = Arc::new(CatalogSnapshot::from_path(catalog)?);
    let strings = match strings {
        Some(path) => StringTable::from_path(path)?,
        None => StringTable::new(),
    };
    tracing::debug!(
        components = snapshot.len(),
        strings = strings.len(),
        "registry inputs loaded"
    );

    MetadataRegistry::new(
        snapshot.clone(),
        snapshot.clone(),
        snapshot.clone(),
        snapshot,
        Arc::new(strings),
    )
    .build_registry_tree()
}

/// Indented outline: one line per group, component, item, and field.
pub fn render_text(tree: &[ComponentTypeGroup]) -> String {
    let mut out = String::new();
    for group in tree {
        let _ = writeln!(
            out,
            "{} ({})",
            group.plugin_type_display, group.plugin_type_key
        );
        for record in &group.components {
            let external = if record.is_external { " [external]" } else { "" };
            let _ = write!(
                out,
                "  {} <{}>{external}",
                record.display_name, record.raw_identifier
            );
            match &record.compliance {
                Compliance::NonCompliant => {
                    let _ = writeln!(out, ": not compliant");
                }
                Compliance::NullProvider { reason } => {
                    let _ = writeln!(out, ": no personal data ({reason})");
                }
                Compliance::Declared { metadata } => {
                    let _ = writeln!(out);
                    for item in metadata {
                        let link = if item.is_link { " (link)" } else { "" };
                        let _ = writeln!(
                            out,
                            "    {} {}{link}: {}",
                            item.kind, item.name, item.summary
                        );
                        for field in &item.fields {
                            let _ = writeln!(
                                out,
                                "      {}: {}",
                                field.field_name, field.field_description
                            );
                        }
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use dataprivacy_test_utils::{declaration, FixtureCatalog, FixtureCompliance};

    fn fixture_tree() -> Vec<ComponentTypeGroup> {
        let catalog = FixtureCatalog::new()
            .plugin_type("mod", Some("Activity modules"))
            .plugin(
                "mod",
                "forum",
                Some("Forum"),
                FixtureCompliance::Declared(vec![
                    declaration(
                        "database_table",
                        "forum_posts",
                        &[("userid", "privacy:metadata:forum_posts:userid")],
                        "privacy:metadata:forum_posts",
                    ),
                    declaration("subsystem_link", "core_files", &[], "privacy:metadata:core_files"),
                ]),
            )
            .plugin("mod", "wiki", Some("Wiki"), FixtureCompliance::NonCompliant)
            .subsystem(
                "files",
                Some("lib/filestorage"),
                FixtureCompliance::NullProvider("privacy:metadata".into()),
            )
            .contributed("mod", "wiki")
            .string("mod_forum", "privacy:metadata:forum_posts", "Forum posts")
            .string("mod_forum", "privacy:metadata:forum_posts:userid", "Author")
            .string("mod_forum", "privacy:metadata:core_files", "Attachments")
            .string("core_files", "privacy:metadata", "Stored by owners");
        MetadataRegistry::from_source(Arc::new(catalog))
            .build_registry_tree()
            .unwrap()
    }

    #[test]
    fn text_outline_covers_every_outcome() {
        let text = render_text(&fixture_tree());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Activity modules (mod)",
                "  Forum <mod_forum>",
                "    database_table forum_posts: Forum posts",
                "      userid: Author",
                "    subsystem_link core_files (link): Attachments",
                "  Wiki <mod_wiki> [external]: not compliant",
                "core (core)",
                "  core_files <core_files>: no personal data (Stored by owners)",
            ]
        );
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert!(render_text(&[]).is_empty());
    }

    #[test]
    fn build_tree_reads_snapshot_files() {
        let mut catalog = tempfile::NamedTempFile::new().unwrap();
        catalog
            .write_all(
                b"[[plugin_type]]\nkey = \"block\"\n\n[[plugin_type.plugin]]\nname = \"html\"\n",
            )
            .unwrap();

        let tree = build_tree(catalog.path(), None).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].plugin_type_key, "block");
        assert!(!tree[0].components[0].compliant());
        assert!(tree[1].components.is_empty());
    }

    #[test]
    fn missing_catalog_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = build_tree(&dir.path().join("absent.toml"), None).unwrap_err();
        assert!(matches!(err, PrivacyError::CollaboratorUnavailable { .. }));
    }
}
