// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the data privacy workspace.
//!
//! Provides deterministic, in-process collaborators so registry and workflow
//! tests run without a real catalog, directory, or message transport.
//!
//! # Components
//!
//! - [`FixtureCatalog`] - implements every registry collaborator, with failure injection
//! - [`MockDirectory`] - users, roles, capabilities, and names
//! - [`RecordingTaskQueue`] - captures queued adhoc tasks
//! - [`RecordingMessageSink`] - captures sent messages

pub mod catalog;
pub mod directory;
pub mod recording;

pub use catalog::{declaration, Collaborator, FixtureCatalog, FixtureCompliance};
pub use directory::MockDirectory;
pub use recording::{RecordingMessageSink, RecordingTaskQueue};
