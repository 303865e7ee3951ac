// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock user directory.
//!
//! The site admin holds every capability, matching how a real site treats
//! its primary administrator.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use dataprivacy_core::traits::Directory;
use dataprivacy_core::{PrivacyError, RoleId, UserId};

/// In-memory users, role assignments, and capability grants.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    admin: UserId,
    roles: HashMap<RoleId, Vec<UserId>>,
    capabilities: HashMap<UserId, HashSet<String>>,
    names: HashMap<UserId, String>,
}

impl MockDirectory {
    /// Create a directory whose site admin is `admin`, named "Admin User".
    pub fn new(admin: UserId) -> Self {
        let mut names = HashMap::new();
        names.insert(admin, "Admin User".to_string());
        Self {
            admin,
            roles: HashMap::new(),
            capabilities: HashMap::new(),
            names,
        }
    }

    /// Assign `user` to `role` at system context.
    pub fn assign_role(mut self, role: RoleId, user: UserId) -> Self {
        self.roles.entry(role).or_default().push(user);
        self
    }

    pub fn grant(mut self, user: UserId, capability: &str) -> Self {
        self.capabilities
            .entry(user)
            .or_default()
            .insert(capability.to_string());
        self
    }

    pub fn named(mut self, user: UserId, full_name: &str) -> Self {
        self.names.insert(user, full_name.to_string());
        self
    }
}

#[async_trait]
impl Directory for MockDirectory {
    async fn site_admin(&self) -> Result<UserId, PrivacyError> {
        Ok(self.admin)
    }

    async fn users_with_role(&self, role: RoleId) -> Result<Vec<UserId>, PrivacyError> {
        Ok(self.roles.get(&role).cloned().unwrap_or_default())
    }

    async fn has_capability(&self, user: UserId, capability: &str) -> Result<bool, PrivacyError> {
        if user == self.admin {
            return Ok(true);
        }
        Ok(self
            .capabilities
            .get(&user)
            .is_some_and(|caps| caps.contains(capability)))
    }

    async fn full_name(&self, user: UserId) -> Result<String, PrivacyError> {
        Ok(self
            .names
            .get(&user)
            .cloned()
            .unwrap_or_else(|| format!("User {user}")))
    }
}
