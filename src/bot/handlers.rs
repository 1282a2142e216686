//! Built-in command handlers: canned replies for /start, /help and /about.

use tracing::info;

use super::dispatch::Inbound;
use super::keyboard::main_keyboard;
use super::telegram::Sender;

pub const WELCOME_TEXT: &str = "👋 Welcome!\n\n\
    Pick an option from the menu below:\n\
    📚 Help - usage guide\n\
    ℹ️ About - what this bot is\n\
    🔍 Search - find content\n\
    ⚙️ Settings - tune the bot";

pub const HELP_TEXT: &str = "Available commands:\n\n\
    /start - show the welcome message and menu\n\
    /help - show this help\n\
    /about - about this bot\n\n\
    Use the menu buttons for quick access.";

pub const ABOUT_TEXT: &str = "🤖 menubot\n\n\
    A small Telegram bot that greets you with a quick-reply menu.\n\
    It keeps no data about you and forgets every message once handled.";

/// Sent when a handler fails mid-reply.
pub const APOLOGY_TEXT: &str =
    "Sorry, something went wrong while handling your request. Please try again later.";

/// /start - welcome message with the main menu keyboard attached.
pub async fn start(sender: &dyn Sender, msg: &Inbound) -> Result<(), String> {
    info!("📨 /start from {} ({})", msg.username, msg.user_id);
    sender
        .send_with_keyboard(msg.chat_id, WELCOME_TEXT, main_keyboard())
        .await?;
    Ok(())
}

/// /help - static usage text.
pub async fn help(sender: &dyn Sender, msg: &Inbound) -> Result<(), String> {
    sender.send_text(msg.chat_id, HELP_TEXT).await?;
    Ok(())
}

/// /about - static description text.
pub async fn about(sender: &dyn Sender, msg: &Inbound) -> Result<(), String> {
    sender.send_text(msg.chat_id, ABOUT_TEXT).await?;
    Ok(())
}
