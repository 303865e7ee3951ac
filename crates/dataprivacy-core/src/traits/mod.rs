// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits.
//!
//! Registry collaborators are synchronous in-process lookups. Workflow
//! collaborators are async and use `#[async_trait]` for dynamic dispatch.

pub mod catalog;
pub mod compliance;
pub mod delivery;
pub mod directory;
pub mod localization;
pub mod store;

pub use catalog::{ComponentCatalog, ContributedPluginIndex};
pub use compliance::{ComplianceOracle, MetadataSource};
pub use delivery::{MessageSink, TaskQueue};
pub use directory::Directory;
pub use localization::Localizer;
pub use store::{ClassificationStore, RequestStore};
