// SPDX-FileCopyrightText: 2026 Dataprivacy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound collaborators: the adhoc task queue and the message sink.

use async_trait::async_trait;

use crate::error::PrivacyError;
use crate::request::{AdhocTask, Message};

/// Queue for background tasks. Execution is the queue's concern.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    async fn queue(&self, task: AdhocTask) -> Result<(), PrivacyError>;
}

/// Delivers notifications to users.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Returns the id assigned to the sent message.
    async fn send(&self, message: Message) -> Result<u64, PrivacyError>;
}
