// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata registry: the per-plugin-type view of what personal data each
//! installed component stores.
//!
//! [`MetadataRegistry`] joins the component catalog, compliance oracle,
//! metadata source, and contributed-plugin index into a tree of
//! [`ComponentTypeGroup`](dataprivacy_core::ComponentTypeGroup)s. The tree is
//! rebuilt on every call. [`CatalogSnapshot`] and [`StringTable`] let the
//! registry run against TOML files.

pub mod format;
pub mod registry;
pub mod snapshot;
pub mod strings;

pub use format::{format_collection, format_item};
pub use registry::{short_name, MetadataRegistry};
pub use snapshot::{parse_catalog_snapshot, CatalogSnapshot};
pub use strings::StringTable;
