// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the data privacy registry and request workflow.

use thiserror::Error;

use crate::request::RequestStatus;
use crate::types::UserId;

/// The primary error type used across collaborator traits and core operations.
#[derive(Debug, Error)]
pub enum PrivacyError {
    /// A collaborator (catalog, compliance oracle, metadata source, index) failed.
    /// Aborts the whole registry build; no partial tree is produced.
    #[error("collaborator `{collaborator}` unavailable: {message}")]
    CollaboratorUnavailable {
        collaborator: String,
        message: String,
    },

    /// A localized string key did not resolve.
    #[error("missing translation `{key}` in component `{component}`")]
    MissingTranslation { key: String, component: String },

    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// No data request exists with the given id.
    #[error("data request {0} not found")]
    RequestNotFound(u64),

    /// A numeric status code outside the known request lifecycle.
    #[error("invalid data request status code {0}")]
    InvalidStatus(i64),

    /// Approval or denial attempted on a request that is not awaiting approval.
    #[error("data request {id} is not awaiting approval (status: {status})")]
    RequestNotAwaitingApproval { id: u64, status: RequestStatus },

    /// The acting user lacks a required capability.
    #[error("user {user} lacks capability `{capability}`")]
    MissingCapability { user: UserId, capability: String },

    /// A purpose, category, or other registry record was not found.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    /// Input rejected before reaching a store.
    #[error("validation error: {0}")]
    Validation(String),

    /// Storage backend errors.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PrivacyError {
    /// Shorthand for a [`PrivacyError::CollaboratorUnavailable`].
    pub fn unavailable(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CollaboratorUnavailable {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`PrivacyError::MissingTranslation`].
    pub fn missing_translation(key: impl Into<String>, component: impl Into<String>) -> Self {
        Self::MissingTranslation {
            key: key.into(),
            component: component.into(),
        }
    }
}
