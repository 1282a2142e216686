//! Telegram client using teloxide.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::KeyboardMarkup as ReplyKeyboardMarkup;
use tracing::warn;

/// Outbound message sink. Implemented by [`TelegramClient`] for the real
/// Telegram API and by recording doubles in tests.
#[async_trait]
pub trait Sender: Send + Sync {
    /// Send a plain text message. Returns the id of the sent message.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<i64, String>;

    /// Send a text message with a reply keyboard attached.
    async fn send_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: ReplyKeyboardMarkup,
    ) -> Result<i64, String>;
}

/// Telegram API client.
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Sender for TelegramClient {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<i64, String> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map(|msg| msg.id.0 as i64)
            .map_err(|e| {
                let msg = format!("Failed to send: {e}");
                warn!("{}", msg);
                msg
            })
    }

    async fn send_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: ReplyKeyboardMarkup,
    ) -> Result<i64, String> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .reply_markup(keyboard)
            .await
            .map(|msg| msg.id.0 as i64)
            .map_err(|e| {
                let msg = format!("Failed to send: {e}");
                warn!("{}", msg);
                msg
            })
    }
}
