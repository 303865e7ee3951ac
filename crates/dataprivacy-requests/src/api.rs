// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data request workflow operations.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use dataprivacy_config::model::DpoConfig;
use dataprivacy_core::request::{
    CAP_MANAGE_DATA_REGISTRY, CAP_MANAGE_DATA_REQUESTS, DATAPRIVACY_COMPONENT,
};
use dataprivacy_core::traits::{
    ClassificationStore, Directory, Localizer, MessageSink, RequestStore, TaskQueue,
};
use dataprivacy_core::{
    AdhocTask, Category, DataRequest, Message, PrivacyError, Purpose, RequestStatus, RequestType,
    RoleId, UserId,
};

/// Message event type used when a user contacts the DPO.
pub const CONTACT_DPO_EVENT: &str = "contactdataprotectionofficer";

/// Whether a request in `status` is still ongoing.
pub fn is_active(status: RequestStatus) -> bool {
    status.is_active()
}

/// Site-level DPO settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpoSettings {
    /// Roles mapped to the DPO role.
    pub roles: Vec<RoleId>,
    /// Whether users may contact the DPO.
    pub contact_dpo: bool,
    /// Fallback DPO when no role holder qualifies. `None` asks the directory
    /// for the site admin.
    pub admin: Option<UserId>,
}

impl Default for DpoSettings {
    fn default() -> Self {
        Self {
            roles: Vec::new(),
            contact_dpo: true,
            admin: None,
        }
    }
}

impl From<&DpoConfig> for DpoSettings {
    fn from(config: &DpoConfig) -> Self {
        Self {
            roles: config.roles.iter().copied().map(RoleId).collect(),
            contact_dpo: config.contact_dpo,
            admin: Some(UserId(config.admin_user_id)),
        }
    }
}

/// Everything the workflow talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub directory: Arc<dyn Directory>,
    pub requests: Arc<dyn RequestStore>,
    pub classification: Arc<dyn ClassificationStore>,
    pub tasks: Arc<dyn TaskQueue>,
    pub messages: Arc<dyn MessageSink>,
    pub localizer: Arc<dyn Localizer>,
}

/// Entry point for data request and data registry operations.
pub struct DataPrivacyApi {
    collaborators: Collaborators,
    settings: DpoSettings,
}

impl DataPrivacyApi {
    pub fn new(collaborators: Collaborators, settings: DpoSettings) -> Self {
        Self {
            collaborators,
            settings,
        }
    }

    pub fn settings(&self) -> &DpoSettings {
        &self.settings
    }

    /// Submit a request about `for_user` on behalf of `actor`.
    ///
    /// The request starts Pending and an `InitiateDataRequest` task is queued.
    pub async fn create_data_request(
        &self,
        actor: UserId,
        for_user: UserId,
        request_type: RequestType,
        comments: &str,
    ) -> Result<DataRequest, PrivacyError> {
        let now = Utc::now();
        let request = self
            .collaborators
            .requests
            .insert_request(DataRequest {
                id: 0,
                user_id: for_user,
                requested_by: actor,
                request_type,
                status: RequestStatus::Pending,
                comments: comments.to_string(),
                dpo: None,
                dpo_comment: String::new(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        self.collaborators
            .tasks
            .queue(AdhocTask::InitiateDataRequest {
                request_id: request.id,
            })
            .await?;

        info!(
            request_id = request.id,
            user = %for_user,
            requested_by = %actor,
            request_type = %request_type,
            "data request created"
        );
        Ok(request)
    }

    /// Set the status of a request from its numeric code.
    pub async fn update_request_status(
        &self,
        id: u64,
        status_code: i64,
    ) -> Result<DataRequest, PrivacyError> {
        let status = RequestStatus::try_from(status_code)?;
        let mut request = self.load_request(id).await?;
        request.status = status;
        request.updated_at = Utc::now();
        self.collaborators.requests.update_request(&request).await?;
        debug!(request_id = id, status = %status, "data request status updated");
        Ok(request)
    }

    /// Requests about `user`, or every request when `user` is `None`.
    ///
    /// Listing every request needs [`Self::can_manage_data_requests`]; other
    /// actors get an empty list.
    pub async fn get_data_requests(
        &self,
        actor: UserId,
        user: Option<UserId>,
    ) -> Result<Vec<DataRequest>, PrivacyError> {
        if user.is_none() && !self.can_manage_data_requests(actor).await? {
            return Ok(Vec::new());
        }
        self.collaborators.requests.list_requests(user).await
    }

    /// Approve a request awaiting approval and queue its processing.
    pub async fn approve_data_request(
        &self,
        actor: UserId,
        id: u64,
        comment: &str,
    ) -> Result<DataRequest, PrivacyError> {
        let request = self
            .resolve_request(actor, id, RequestStatus::Approved, comment)
            .await?;
        self.collaborators
            .tasks
            .queue(AdhocTask::ProcessDataRequest { request_id: id })
            .await?;
        info!(request_id = id, dpo = %actor, "data request approved");
        Ok(request)
    }

    /// Reject a request awaiting approval.
    pub async fn deny_data_request(
        &self,
        actor: UserId,
        id: u64,
        comment: &str,
    ) -> Result<DataRequest, PrivacyError> {
        let request = self
            .resolve_request(actor, id, RequestStatus::Rejected, comment)
            .await?;
        info!(request_id = id, dpo = %actor, "data request denied");
        Ok(request)
    }

    /// Whether `user` has an active request of `request_type`.
    pub async fn has_ongoing_request(
        &self,
        user: UserId,
        request_type: RequestType,
    ) -> Result<bool, PrivacyError> {
        Ok(self
            .collaborators
            .requests
            .list_requests(Some(user))
            .await?
            .iter()
            .any(|r| r.request_type == request_type && r.status.is_active()))
    }

    /// Users acting as DPO for the site.
    ///
    /// Holders of a configured DPO role who also have the manage capability,
    /// in first-seen order. The site admin when nobody qualifies.
    pub async fn get_site_dpos(&self) -> Result<Vec<UserId>, PrivacyError> {
        let directory = &self.collaborators.directory;
        let mut dpos = Vec::new();
        for role in &self.settings.roles {
            for user in directory.users_with_role(*role).await? {
                if !dpos.contains(&user)
                    && directory.has_capability(user, CAP_MANAGE_DATA_REQUESTS).await?
                {
                    dpos.push(user);
                }
            }
        }

        if dpos.is_empty() {
            let admin = match self.settings.admin {
                Some(admin) => admin,
                None => directory.site_admin().await?,
            };
            warn!(admin = %admin, "no qualifying DPO, using the site admin");
            dpos.push(admin);
        }
        Ok(dpos)
    }

    pub async fn is_site_dpo(&self, user: UserId) -> Result<bool, PrivacyError> {
        Ok(self.get_site_dpos().await?.contains(&user))
    }

    /// Capability check combined with site DPO membership.
    pub async fn can_manage_data_requests(&self, user: UserId) -> Result<bool, PrivacyError> {
        let capable = self
            .collaborators
            .directory
            .has_capability(user, CAP_MANAGE_DATA_REQUESTS)
            .await?;
        Ok(capable && self.is_site_dpo(user).await?)
    }

    pub fn can_contact_dpo(&self) -> bool {
        self.settings.contact_dpo
    }

    /// Tell `dpo` about `request`. Returns the message id.
    pub async fn notify_dpo(&self, dpo: UserId, request: &DataRequest) -> Result<u64, PrivacyError> {
        let localizer = &self.collaborators.localizer;
        let type_label = localizer.translate(
            request.request_type.string_key(),
            DATAPRIVACY_COMPONENT,
            &[],
        )?;
        let subject = localizer.translate(
            "datarequestemailsubject",
            DATAPRIVACY_COMPONENT,
            &[&type_label],
        )?;

        let directory = &self.collaborators.directory;
        let dpo_name = directory.full_name(dpo).await?;
        let requester_name = directory.full_name(request.requested_by).await?;
        let mut full_message = format!(
            "Dear {dpo_name},\n\n{requester_name} has made a request: {type_label}."
        );
        if !request.comments.is_empty() {
            full_message.push_str("\n\n");
            full_message.push_str(&request.comments);
        }

        let id = self
            .collaborators
            .messages
            .send(Message {
                from: request.requested_by,
                to: dpo,
                subject,
                full_message,
                component: DATAPRIVACY_COMPONENT.to_string(),
                event_type: CONTACT_DPO_EVENT.to_string(),
            })
            .await?;
        debug!(request_id = request.id, dpo = %dpo, message_id = id, "DPO notified");
        Ok(id)
    }

    pub async fn create_purpose(
        &self,
        actor: UserId,
        purpose: Purpose,
    ) -> Result<Purpose, PrivacyError> {
        self.require_registry_manager(actor).await?;
        require_name("purpose", &purpose.name)?;
        self.collaborators.classification.insert_purpose(purpose).await
    }

    pub async fn get_purpose(&self, actor: UserId, id: u64) -> Result<Purpose, PrivacyError> {
        self.require_registry_manager(actor).await?;
        self.collaborators
            .classification
            .get_purpose(id)
            .await?
            .ok_or(PrivacyError::NotFound { kind: "purpose", id })
    }

    /// All purposes, ordered by name.
    pub async fn get_purposes(&self, actor: UserId) -> Result<Vec<Purpose>, PrivacyError> {
        self.require_registry_manager(actor).await?;
        let mut purposes = self.collaborators.classification.list_purposes().await?;
        purposes.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(purposes)
    }

    pub async fn update_purpose(
        &self,
        actor: UserId,
        purpose: Purpose,
    ) -> Result<Purpose, PrivacyError> {
        self.require_registry_manager(actor).await?;
        require_name("purpose", &purpose.name)?;
        self.collaborators
            .classification
            .update_purpose(&purpose)
            .await?;
        Ok(purpose)
    }

    pub async fn delete_purpose(&self, actor: UserId, id: u64) -> Result<(), PrivacyError> {
        self.require_registry_manager(actor).await?;
        if self.collaborators.classification.delete_purpose(id).await? {
            Ok(())
        } else {
            Err(PrivacyError::NotFound { kind: "purpose", id })
        }
    }

    pub async fn create_category(
        &self,
        actor: UserId,
        category: Category,
    ) -> Result<Category, PrivacyError> {
        self.require_registry_manager(actor).await?;
        require_name("category", &category.name)?;
        self.collaborators
            .classification
            .insert_category(category)
            .await
    }

    pub async fn get_category(&self, actor: UserId, id: u64) -> Result<Category, PrivacyError> {
        self.require_registry_manager(actor).await?;
        self.collaborators
            .classification
            .get_category(id)
            .await?
            .ok_or(PrivacyError::NotFound {
                kind: "category",
                id,
            })
    }

    /// All categories, ordered by name.
    pub async fn get_categories(&self, actor: UserId) -> Result<Vec<Category>, PrivacyError> {
        self.require_registry_manager(actor).await?;
        let mut categories = self.collaborators.classification.list_categories().await?;
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    pub async fn update_category(
        &self,
        actor: UserId,
        category: Category,
    ) -> Result<Category, PrivacyError> {
        self.require_registry_manager(actor).await?;
        require_name("category", &category.name)?;
        self.collaborators
            .classification
            .update_category(&category)
            .await?;
        Ok(category)
    }

    pub async fn delete_category(&self, actor: UserId, id: u64) -> Result<(), PrivacyError> {
        self.require_registry_manager(actor).await?;
        if self.collaborators.classification.delete_category(id).await? {
            Ok(())
        } else {
            Err(PrivacyError::NotFound {
                kind: "category",
                id,
            })
        }
    }

    async fn load_request(&self, id: u64) -> Result<DataRequest, PrivacyError> {
        self.collaborators
            .requests
            .get_request(id)
            .await?
            .ok_or(PrivacyError::RequestNotFound(id))
    }

    /// Shared approve/deny path. Records the deciding officer and their comment.
    async fn resolve_request(
        &self,
        actor: UserId,
        id: u64,
        outcome: RequestStatus,
        comment: &str,
    ) -> Result<DataRequest, PrivacyError> {
        if !self.can_manage_data_requests(actor).await? {
            return Err(PrivacyError::MissingCapability {
                user: actor,
                capability: CAP_MANAGE_DATA_REQUESTS.to_string(),
            });
        }

        let mut request = self.load_request(id).await?;
        if request.status != RequestStatus::AwaitingApproval {
            return Err(PrivacyError::RequestNotAwaitingApproval {
                id,
                status: request.status,
            });
        }

        request.status = outcome;
        request.dpo = Some(actor);
        request.dpo_comment = comment.to_string();
        request.updated_at = Utc::now();
        self.collaborators.requests.update_request(&request).await?;
        Ok(request)
    }

    async fn require_registry_manager(&self, actor: UserId) -> Result<(), PrivacyError> {
        let allowed = self
            .collaborators
            .directory
            .has_capability(actor, CAP_MANAGE_DATA_REGISTRY)
            .await?;
        if allowed {
            Ok(())
        } else {
            Err(PrivacyError::MissingCapability {
                user: actor,
                capability: CAP_MANAGE_DATA_REGISTRY.to_string(),
            })
        }
    }
}

fn require_name(kind: &str, name: &str) -> Result<(), PrivacyError> {
    if name.trim().is_empty() {
        return Err(PrivacyError::Validation(format!("{kind} name must not be empty")));
    }
    Ok(())
}
