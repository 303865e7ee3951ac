// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory request and classification store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dataprivacy_core::traits::{ClassificationStore, RequestStore};
use dataprivacy_core::{Category, DataRequest, PrivacyError, Purpose, UserId};

#[derive(Debug, Default)]
struct Tables {
    requests: BTreeMap<u64, DataRequest>,
    purposes: BTreeMap<u64, Purpose>,
    categories: BTreeMap<u64, Category>,
    last_request_id: u64,
    last_purpose_id: u64,
    last_category_id: u64,
}

/// Store for requests, purposes, and categories held in process memory.
///
/// Ids start at 1 and are never reused. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestStore for InMemoryStore {
    async fn insert_request(&self, mut request: DataRequest) -> Result<DataRequest, PrivacyError> {
        let mut tables = self.tables.write().await;
        tables.last_request_id += 1;
        request.id = tables.last_request_id;
        tables.requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn get_request(&self, id: u64) -> Result<Option<DataRequest>, PrivacyError> {
        Ok(self.tables.read().await.requests.get(&id).cloned())
    }

    async fn update_request(&self, request: &DataRequest) -> Result<(), PrivacyError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .requests
            .get_mut(&request.id)
            .ok_or(PrivacyError::RequestNotFound(request.id))?;
        *slot = request.clone();
        Ok(())
    }

    async fn list_requests(&self, user: Option<UserId>) -> Result<Vec<DataRequest>, PrivacyError> {
        let tables = self.tables.read().await;
        Ok(tables
            .requests
            .values()
            .filter(|r| user.is_none_or(|u| r.user_id == u))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ClassificationStore for InMemoryStore {
    async fn insert_purpose(&self, mut purpose: Purpose) -> Result<Purpose, PrivacyError> {
        let mut tables = self.tables.write().await;
        tables.last_purpose_id += 1;
        purpose.id = tables.last_purpose_id;
        tables.purposes.insert(purpose.id, purpose.clone());
        Ok(purpose)
    }

    async fn get_purpose(&self, id: u64) -> Result<Option<Purpose>, PrivacyError> {
        Ok(self.tables.read().await.purposes.get(&id).cloned())
    }

    async fn list_purposes(&self) -> Result<Vec<Purpose>, PrivacyError> {
        Ok(self.tables.read().await.purposes.values().cloned().collect())
    }

    async fn update_purpose(&self, purpose: &Purpose) -> Result<(), PrivacyError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .purposes
            .get_mut(&purpose.id)
            .ok_or(PrivacyError::NotFound {
                kind: "purpose",
                id: purpose.id,
            })?;
        *slot = purpose.clone();
        Ok(())
    }

    async fn delete_purpose(&self, id: u64) -> Result<bool, PrivacyError> {
        Ok(self.tables.write().await.purposes.remove(&id).is_some())
    }

    async fn insert_category(&self, mut category: Category) -> Result<Category, PrivacyError> {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;
        category.id = tables.last_category_id;
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn get_category(&self, id: u64) -> Result<Option<Category>, PrivacyError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, PrivacyError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn update_category(&self, category: &Category) -> Result<(), PrivacyError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .categories
            .get_mut(&category.id)
            .ok_or(PrivacyError::NotFound {
                kind: "category",
                id: category.id,
            })?;
        *slot = category.clone();
        Ok(())
    }

    async fn delete_category(&self, id: u64) -> Result<bool, PrivacyError> {
        Ok(self.tables.write().await.categories.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dataprivacy_core::{RequestStatus, RequestType};

    fn request(user: u64) -> DataRequest {
        let now = Utc::now();
        DataRequest {
            id: 0,
            user_id: UserId(user),
            requested_by: UserId(user),
            request_type: RequestType::Export,
            status: RequestStatus::Pending,
            comments: String::new(),
            dpo: None,
            dpo_comment: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let first = store.insert_request(request(3)).await.unwrap();
        let second = store.insert_request(request(4)).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(store.get_request(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn list_filters_by_subject_user() {
        let store = InMemoryStore::new();
        store.insert_request(request(3)).await.unwrap();
        store.insert_request(request(4)).await.unwrap();
        store.insert_request(request(3)).await.unwrap();

        let ids: Vec<u64> = store
            .list_requests(Some(UserId(3)))
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.list_requests(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn updating_unknown_request_fails() {
        let store = InMemoryStore::new();
        let mut missing = request(3);
        missing.id = 42;
        assert!(matches!(
            store.update_request(&missing).await,
            Err(PrivacyError::RequestNotFound(42))
        ));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = InMemoryStore::new();
        let category = Category {
            id: 0,
            name: "Contact".into(),
            description: String::new(),
        };
        let first = store.insert_category(category.clone()).await.unwrap();
        assert!(store.delete_category(first.id).await.unwrap());
        assert!(!store.delete_category(first.id).await.unwrap());
        let second = store.insert_category(category).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn clones_share_tables() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.insert_request(request(3)).await.unwrap();
        assert_eq!(other.list_requests(None).await.unwrap().len(), 1);
    }
}
