// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Localization collaborator.

use crate::error::PrivacyError;

/// Resolves string keys to localized text.
///
/// A key that does not resolve is a hard [`PrivacyError::MissingTranslation`];
/// implementations must never fall back to the raw key.
pub trait Localizer: Send + Sync {
    fn translate(&self, key: &str, component: &str, args: &[&str]) -> Result<String, PrivacyError>;
}
