// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the data privacy registry.
//!
//! Holds the error type, the typed registry tree and request model, and the
//! collaborator traits every other crate in the workspace builds on.

pub mod error;
pub mod request;
pub mod traits;
pub mod types;

pub use error::PrivacyError;
pub use request::{
    AdhocTask, Category, DataRequest, Message, Purpose, RequestStatus, RequestType,
};
pub use types::{
    Compliance, ComponentRecord, ComponentTypeGroup, DeclaredField, MetadataDeclaration,
    MetadataField, MetadataItem, MetadataKind, RoleId, UserId, CORE_PLUGIN_TYPE,
};

pub use traits::{
    ClassificationStore, ComplianceOracle, ComponentCatalog, ContributedPluginIndex, Directory,
    Localizer, MessageSink, MetadataSource, RequestStore, TaskQueue,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_error_messages() {
        let err = PrivacyError::unavailable("catalog", "connection refused");
        assert_eq!(
            err.to_string(),
            "collaborator `catalog` unavailable: connection refused"
        );

        let err = PrivacyError::missing_translation("privacy:metadata", "mod_forum");
        assert_eq!(
            err.to_string(),
            "missing translation `privacy:metadata` in component `mod_forum`"
        );

        let err = PrivacyError::RequestNotAwaitingApproval {
            id: 4,
            status: RequestStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "data request 4 is not awaiting approval (status: pending)"
        );

        let err = PrivacyError::MissingCapability {
            user: UserId(7),
            capability: request::CAP_MANAGE_DATA_REQUESTS.into(),
        };
        assert!(err.to_string().contains("managedatarequests"));
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_catalog<T: ComponentCatalog>() {}
        fn _assert_index<T: ContributedPluginIndex>() {}
        fn _assert_oracle<T: ComplianceOracle>() {}
        fn _assert_source<T: MetadataSource>() {}
        fn _assert_localizer<T: Localizer>() {}
        fn _assert_directory<T: Directory>() {}
        fn _assert_request_store<T: RequestStore>() {}
        fn _assert_classification_store<T: ClassificationStore>() {}
        fn _assert_queue<T: TaskQueue>() {}
        fn _assert_sink<T: MessageSink>() {}
    }
}
