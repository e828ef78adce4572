use crate::domain::error::DomainError;
use crate::domain::ports::notifier::{Notification, Notifier};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Posts notifications as embeds to a Discord webhook.
pub struct DiscordWebhook {
    webhook_url: String,
    client: reqwest::Client,
}

impl DiscordWebhook {
    pub fn new(webhook_url: String, timeout: Duration) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct WebhookMessage<'a> {
    embeds: [Embed<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Embed<'a> {
    title: &'a str,
    description: &'a str,
    color: u32,
    fields: Vec<EmbedField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<Thumbnail<'a>>,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct EmbedField<'a> {
    name: &'a str,
    value: &'a str,
    inline: bool,
}

#[derive(Debug, Serialize)]
struct Thumbnail<'a> {
    url: &'a str,
}

fn to_message(n: &Notification) -> WebhookMessage<'_> {
    WebhookMessage {
        embeds: [Embed {
            title: &n.title,
            description: &n.description,
            color: n.color,
            fields: n
                .fields
                .iter()
                .map(|f| EmbedField {
                    name: &f.name,
                    value: &f.value,
                    inline: f.inline,
                })
                .collect(),
            url: n.url.as_deref(),
            thumbnail: n.thumbnail_url.as_deref().map(|url| Thumbnail { url }),
            timestamp: n.timestamp.to_rfc3339(),
        }],
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    fn name(&self) -> &str {
        "discord"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DomainError> {
        let resp = self
            .client
            .post(&self.webhook_url)
            .json(&to_message(notification))
            .send()
            .await
            .map_err(|e| DomainError::Notify(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Notify(format!(
                "Discord webhook returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
