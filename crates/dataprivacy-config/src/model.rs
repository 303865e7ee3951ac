// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DataPrivacyConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    /// Data protection officer settings.
    #[serde(default)]
    pub dpo: DpoConfig,

    /// Where the registry reads its catalog snapshot and strings.
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Data protection officer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DpoConfig {
    /// Role ids mapped to the DPO role. Empty means the site admin acts as DPO.
    #[serde(default)]
    pub roles: Vec<u64>,

    /// Whether users may contact the DPO.
    #[serde(default = "default_true")]
    pub contact_dpo: bool,

    /// User id of the primary site administrator.
    #[serde(default = "default_admin_user_id")]
    pub admin_user_id: u64,
}

impl Default for DpoConfig {
    fn default() -> Self {
        Self {
            roles: Vec::new(),
            contact_dpo: true,
            admin_user_id: default_admin_user_id(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_admin_user_id() -> u64 {
    2
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// TOML catalog snapshot describing installed components.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// TOML string table used for translations.
    #[serde(default)]
    pub strings_path: Option<String>,
}
