// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::DataPrivacyConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration, collecting every error.
pub fn validate_config(config: &DataPrivacyConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.general.log_level.trim();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "general.log_level `{level}` must be one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.dpo.admin_user_id == 0 {
        errors.push(ConfigError::Validation {
            message: "dpo.admin_user_id must be non-zero".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for role in &config.dpo.roles {
        if !seen.insert(role) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate role `{role}` in dpo.roles"),
            });
        }
    }

    for (key, value) in [
        ("registry.catalog_path", &config.registry.catalog_path),
        ("registry.strings_path", &config.registry.strings_path),
    ] {
        if value.as_deref().is_some_and(|p| p.trim().is_empty()) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be blank when set"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
