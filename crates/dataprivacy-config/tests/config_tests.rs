// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading, env overrides and diagnostics.

use dataprivacy_config::diagnostic::ConfigError;
use dataprivacy_config::model::DataPrivacyConfig;
use dataprivacy_config::{load_and_validate_str, load_config_from_path, load_config_from_str};
use figment::providers::{Format, Serialized, Toml};
use figment::{Figment, Jail};
use miette::Diagnostic;
use serial_test::serial;

#[test]
fn empty_config_uses_defaults() {
    let config = load_and_validate_str("").unwrap();
    assert_eq!(config.general.log_level, "info");
    assert!(config.dpo.roles.is_empty());
    assert!(config.dpo.contact_dpo);
    assert_eq!(config.dpo.admin_user_id, 2);
    assert!(config.registry.catalog_path.is_none());
}

#[test]
fn full_config_parses() {
    let toml = r#"
[general]
log_level = "debug"

[dpo]
roles = [5, 9]
contact_dpo = false
admin_user_id = 7

[registry]
catalog_path = "/var/lib/dataprivacy/catalog.toml"
strings_path = "/var/lib/dataprivacy/strings.toml"
"#;
    let config = load_and_validate_str(toml).unwrap();
    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.dpo.roles, vec![5, 9]);
    assert!(!config.dpo.contact_dpo);
    assert_eq!(config.dpo.admin_user_id, 7);
    assert_eq!(
        config.registry.strings_path.as_deref(),
        Some("/var/lib/dataprivacy/strings.toml")
    );
}

#[test]
fn unknown_key_suggests_closest_match() {
    let errors = load_and_validate_str("[dpo]\ncontact_dop = true\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            span,
            ..
        } => {
            assert_eq!(key, "contact_dop");
            assert_eq!(suggestion.as_deref(), Some("contact_dpo"));
            assert!(span.is_some());
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[agent]\nname = \"x\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::UnknownKey { key, .. } if key == "agent"));
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[dpo]\nadmin_user_id = \"two\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::InvalidType { key, .. } if key.contains("admin_user_id")));
}

#[test]
fn validation_errors_surface_after_parsing() {
    let errors = load_and_validate_str("[dpo]\nroles = [3, 3]\nadmin_user_id = 0\n").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| matches!(e, ConfigError::Validation { .. })));
}

#[test]
fn diagnostics_carry_codes_and_help() {
    let errors = load_and_validate_str("[general]\nlog_levl = \"info\"\n").unwrap_err();
    let error = &errors[0];
    assert_eq!(
        error.code().map(|c| c.to_string()).as_deref(),
        Some("dataprivacy::config::unknown_key")
    );
    let help = error.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("did you mean `log_level`?"), "help was: {help}");
}

#[test]
fn diagnostics_render_with_source_label() {
    let errors = load_and_validate_str("[registry]\ncatalog = \"x.toml\"\n").unwrap_err();
    let mut rendered = String::new();
    miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
        .render_report(&mut rendered, &errors[0])
        .unwrap();
    assert!(rendered.contains("unrecognized key `catalog`"));
    assert!(rendered.contains("this key is not recognized"));
}

#[test]
fn tuple_override_wins_over_file_value() {
    let config: DataPrivacyConfig = Figment::new()
        .merge(Serialized::defaults(DataPrivacyConfig::default()))
        .merge(Toml::string("[dpo]\nadmin_user_id = 4\n"))
        .merge(("dpo.admin_user_id", 11))
        .extract()
        .unwrap();
    assert_eq!(config.dpo.admin_user_id, 11);
}

#[test]
fn string_loader_ignores_environment() {
    let config = load_config_from_str("[general]\nlog_level = \"warn\"\n").unwrap();
    assert_eq!(config.general.log_level, "warn");
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "dataprivacy.toml",
            "[dpo]\nadmin_user_id = 4\ncontact_dpo = true\n",
        )?;
        jail.set_env("DATAPRIVACY_DPO_ADMIN_USER_ID", "12");
        jail.set_env("DATAPRIVACY_DPO_CONTACT_DPO", "false");
        jail.set_env("DATAPRIVACY_GENERAL_LOG_LEVEL", "trace");

        let config = load_config_from_path(&jail.directory().join("dataprivacy.toml"))?;
        assert_eq!(config.dpo.admin_user_id, 12);
        assert!(!config.dpo.contact_dpo);
        assert_eq!(config.general.log_level, "trace");
        Ok(())
    });
}

#[test]
#[serial]
fn hierarchy_reads_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "dataprivacy.toml",
            "[registry]\ncatalog_path = \"site/catalog.toml\"\n",
        )?;
        let config = dataprivacy_config::load_and_validate().map_err(|errors| {
            figment::Error::from(format!("{} config errors", errors.len()))
        })?;
        assert_eq!(
            config.registry.catalog_path.as_deref(),
            Some("site/catalog.toml")
        );
        Ok(())
    });
}
