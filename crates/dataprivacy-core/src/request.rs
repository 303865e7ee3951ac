// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data request workflow types: requests, purposes, categories, tasks, messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::PrivacyError;
use crate::types::UserId;

/// Component that owns the workflow's strings and messages.
pub const DATAPRIVACY_COMPONENT: &str = "tool_dataprivacy";

/// Capability required to approve, deny, and list all data requests.
pub const CAP_MANAGE_DATA_REQUESTS: &str = "tool/dataprivacy:managedatarequests";

/// Capability required to edit purposes and categories.
pub const CAP_MANAGE_DATA_REGISTRY: &str = "tool/dataprivacy:managedataregistry";

/// Kind of data request a user can submit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Export,
    Delete,
    Others,
}

impl RequestType {
    pub fn code(self) -> i64 {
        match self {
            RequestType::Export => 1,
            RequestType::Delete => 2,
            RequestType::Others => 3,
        }
    }

    /// Key of the localized label for this type.
    pub fn string_key(self) -> &'static str {
        match self {
            RequestType::Export => "requesttypeexport",
            RequestType::Delete => "requesttypedelete",
            RequestType::Others => "requesttypeothers",
        }
    }
}

/// Lifecycle state of a data request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Preprocessing,
    AwaitingApproval,
    Approved,
    Processing,
    Complete,
    Cancelled,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 8] = [
        RequestStatus::Pending,
        RequestStatus::Preprocessing,
        RequestStatus::AwaitingApproval,
        RequestStatus::Approved,
        RequestStatus::Processing,
        RequestStatus::Complete,
        RequestStatus::Cancelled,
        RequestStatus::Rejected,
    ];

    pub fn code(self) -> i64 {
        match self {
            RequestStatus::Pending => 0,
            RequestStatus::Preprocessing => 1,
            RequestStatus::AwaitingApproval => 2,
            RequestStatus::Approved => 3,
            RequestStatus::Processing => 4,
            RequestStatus::Complete => 5,
            RequestStatus::Cancelled => 6,
            RequestStatus::Rejected => 7,
        }
    }

    /// Whether a request in this state is still ongoing.
    pub fn is_active(self) -> bool {
        !matches!(
            self,
            RequestStatus::Complete | RequestStatus::Cancelled | RequestStatus::Rejected
        )
    }
}

impl TryFrom<i64> for RequestStatus {
    type Error = PrivacyError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        RequestStatus::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(PrivacyError::InvalidStatus(code))
    }
}

/// A persisted data request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRequest {
    pub id: u64,
    /// The user whose data is concerned.
    pub user_id: UserId,
    /// The user who submitted the request (may differ from `user_id`).
    pub requested_by: UserId,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub comments: String,
    /// Officer who approved or denied the request.
    pub dpo: Option<UserId>,
    pub dpo_comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Processing purpose recorded in the data registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purpose {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub lawful_bases: Vec<String>,
    /// ISO 8601 duration, e.g. `P1Y`.
    pub retention_period: String,
}

/// Data category recorded in the data registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// Background work queued by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdhocTask {
    /// Gathers the contexts a new request touches.
    InitiateDataRequest { request_id: u64 },
    /// Runs an approved export or deletion.
    ProcessDataRequest { request_id: u64 },
}

/// A notification handed to the messaging collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: UserId,
    pub to: UserId,
    pub subject: String,
    pub full_message: String,
    pub component: String,
    pub event_type: String,
}
