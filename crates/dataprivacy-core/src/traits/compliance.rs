// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compliance collaborators: who declares privacy metadata, and what.

use crate::error::PrivacyError;
use crate::types::MetadataDeclaration;

/// Reports whether a component implements the privacy API.
pub trait ComplianceOracle: Send + Sync {
    fn is_component_compliant(&self, raw_identifier: &str) -> Result<bool, PrivacyError>;

    /// String key, scoped to the component, explaining why it stores no personal data.
    fn null_provider_reason_key(&self, raw_identifier: &str) -> Result<String, PrivacyError>;
}

/// Supplies the metadata collection declared by a compliant component.
pub trait MetadataSource: Send + Sync {
    /// `None` when the component declares no collection (a null provider).
    fn get_declared_metadata(
        &self,
        raw_identifier: &str,
    ) -> Result<Option<Vec<MetadataDeclaration>>, PrivacyError>;
}
