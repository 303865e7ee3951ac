// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording task queue and message sink.
//!
//! Both capture what the workflow hands them so tests can assert on it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dataprivacy_core::traits::{MessageSink, TaskQueue};
use dataprivacy_core::{AdhocTask, Message, PrivacyError};

/// Captures queued adhoc tasks.
#[derive(Debug, Clone, Default)]
pub struct RecordingTaskQueue {
    tasks: Arc<Mutex<Vec<AdhocTask>>>,
}

impl RecordingTaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn tasks(&self) -> Vec<AdhocTask> {
        self.tasks.lock().await.clone()
    }
}

#[async_trait]
impl TaskQueue for RecordingTaskQueue {
    async fn queue(&self, task: AdhocTask) -> Result<(), PrivacyError> {
        self.tasks.lock().await.push(task);
        Ok(())
    }
}

/// Captures sent messages. Message ids start at 1.
#[derive(Debug, Clone, Default)]
pub struct RecordingMessageSink {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl RecordingMessageSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl MessageSink for RecordingMessageSink {
    async fn send(&self, message: Message) -> Result<u64, PrivacyError> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        Ok(messages.len() as u64)
    }
}
