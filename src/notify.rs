//! Chat notification delivery.

use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::debug;

use crate::error::NotifyError;

/// Sink for user-facing notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the configured chat.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Notifier backed by the Telegram Bot API.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(token: &str, chat_id: ChatId) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        debug!(chat_id = self.chat_id.0, "Sending Telegram message");
        self.bot.send_message(self.chat_id, text).await?;
        debug!("Telegram message delivered");
        Ok(())
    }
}
