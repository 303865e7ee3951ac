// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence collaborators for requests, purposes, and categories.

use async_trait::async_trait;

use crate::error::PrivacyError;
use crate::request::{Category, DataRequest, Purpose};
use crate::types::UserId;

/// Persistence for data requests.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Persist a new request. The store assigns `id` and returns the stored record.
    async fn insert_request(&self, request: DataRequest) -> Result<DataRequest, PrivacyError>;

    async fn get_request(&self, id: u64) -> Result<Option<DataRequest>, PrivacyError>;

    /// Overwrite an existing request. Fails with `RequestNotFound` for unknown ids.
    async fn update_request(&self, request: &DataRequest) -> Result<(), PrivacyError>;

    /// Requests concerning `user`, or every request when `None`, ordered by id.
    async fn list_requests(&self, user: Option<UserId>) -> Result<Vec<DataRequest>, PrivacyError>;
}

/// Persistence for the purposes and categories of the data registry.
#[async_trait]
pub trait ClassificationStore: Send + Sync {
    async fn insert_purpose(&self, purpose: Purpose) -> Result<Purpose, PrivacyError>;
    async fn get_purpose(&self, id: u64) -> Result<Option<Purpose>, PrivacyError>;
    async fn list_purposes(&self) -> Result<Vec<Purpose>, PrivacyError>;
    async fn update_purpose(&self, purpose: &Purpose) -> Result<(), PrivacyError>;
    /// Returns false when nothing was deleted.
    async fn delete_purpose(&self, id: u64) -> Result<bool, PrivacyError>;

    async fn insert_category(&self, category: Category) -> Result<Category, PrivacyError>;
    async fn get_category(&self, id: u64) -> Result<Option<Category>, PrivacyError>;
    async fn list_categories(&self) -> Result<Vec<Category>, PrivacyError>;
    async fn update_category(&self, category: &Category) -> Result<(), PrivacyError>;
    async fn delete_category(&self, id: u64) -> Result<bool, PrivacyError>;
}
