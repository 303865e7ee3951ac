// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data request workflow for the data privacy tool.
//!
//! Users submit export, deletion, or other requests about their personal
//! data. Site data protection officers (DPOs) review, approve, or deny them,
//! and maintain the purposes and categories of the data registry.
//!
//! All persistence, messaging, and background execution goes through the
//! collaborator traits in `dataprivacy_core::traits`. [`InMemoryStore`] backs
//! both stores for tests and single-process use.

pub mod api;
pub mod store;

pub use api::{is_active, Collaborators, DataPrivacyApi, DpoSettings};
pub use store::InMemoryStore;
