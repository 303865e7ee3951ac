// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./dataprivacy.toml` > `~/.config/dataprivacy/dataprivacy.toml`
//! > `/etc/dataprivacy/dataprivacy.toml`, with `DATAPRIVACY_` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::DataPrivacyConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/dataprivacy/dataprivacy.toml";

/// Local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "dataprivacy.toml";

/// XDG user configuration file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dataprivacy").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/dataprivacy/dataprivacy.toml`
/// 3. `~/.config/dataprivacy/dataprivacy.toml`
/// 4. `./dataprivacy.toml`
/// 5. `DATAPRIVACY_*` environment variables
pub fn load_config() -> Result<DataPrivacyConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<DataPrivacyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DataPrivacyConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DataPrivacyConfig, figment::Error> {
    tracing::debug!(path = %path.display(), "loading configuration file");
    Figment::new()
        .merge(Serialized::defaults(DataPrivacyConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment used by [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(DataPrivacyConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `DATAPRIVACY_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys themselves
/// contain underscores: `DATAPRIVACY_DPO_ADMIN_USER_ID` is `dpo.admin_user_id`.
fn env_provider() -> Env {
    Env::prefixed("DATAPRIVACY_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("general_", "general.", 1)
            .replacen("dpo_", "dpo.", 1)
            .replacen("registry_", "registry.", 1);
        mapped.into()
    })
}
