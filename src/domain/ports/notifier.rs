use crate::domain::error::DomainError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A structured message for a chat-style notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub fields: Vec<NotificationField>,
    /// 0xRRGGBB
    pub color: u32,
    pub thumbnail_url: Option<String>,
    pub url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    async fn send(&self, notification: &Notification) -> Result<(), DomainError>;
}
