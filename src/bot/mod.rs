//! Bot module - command registry, handlers and the Telegram client.

pub mod dispatch;
pub mod handlers;
pub mod keyboard;
pub mod telegram;

use std::sync::Arc;

pub use dispatch::{CommandRegistry, Inbound, default_registry};
pub use keyboard::main_keyboard;
pub use telegram::{Sender, TelegramClient};

/// Everything a request handler needs, constructed once at startup and
/// shared read-only across requests.
pub struct BotState {
    pub sender: Arc<dyn Sender>,
    pub registry: CommandRegistry,
}

impl BotState {
    pub fn new(sender: Arc<dyn Sender>, registry: CommandRegistry) -> Self {
        Self { sender, registry }
    }
}
