// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User directory collaborator: site admin, role holders, capabilities.

use async_trait::async_trait;

use crate::error::PrivacyError;
use crate::types::{RoleId, UserId};

/// Read-only view over users, roles, and capabilities at system context.
#[async_trait]
pub trait Directory: Send + Sync {
    /// The primary site administrator.
    async fn site_admin(&self) -> Result<UserId, PrivacyError>;

    /// Users assigned `role` at system context, in assignment order.
    async fn users_with_role(&self, role: RoleId) -> Result<Vec<UserId>, PrivacyError>;

    async fn has_capability(&self, user: UserId, capability: &str) -> Result<bool, PrivacyError>;

    async fn full_name(&self, user: UserId) -> Result<String, PrivacyError>;
}
