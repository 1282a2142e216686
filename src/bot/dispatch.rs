//! Command registry and update dispatch.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use teloxide::types::{Update, UpdateKind};
use tracing::{debug, info, warn};

use super::handlers;
use super::telegram::Sender;

/// Future returned by a command handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), String>> + Send>>;

/// A command handler: gets the shared sender and the inbound message.
pub type Handler = fn(Arc<dyn Sender>, Inbound) -> HandlerFuture;

/// The parts of an update the handlers care about.
#[derive(Debug, Clone)]
pub struct Inbound {
    pub chat_id: i64,
    pub user_id: i64,
    pub username: String,
    /// Command name, if the text starts with one ("/start" -> "start").
    pub command: Option<String>,
    pub text: String,
}

impl Inbound {
    /// Reduce an update to the fields handlers need. Returns None for
    /// anything that is not a text message.
    pub fn from_update(update: &Update) -> Option<Self> {
        let UpdateKind::Message(msg) = &update.kind else {
            return None;
        };
        let text = msg.text()?.to_string();
        let user = msg.from.as_ref();
        let user_id = user.map(|u| u.id.0 as i64).unwrap_or(0);
        let username = user
            .and_then(|u| u.username.as_deref())
            .unwrap_or_else(|| user.map(|u| u.first_name.as_str()).unwrap_or("unknown"))
            .to_string();

        Some(Self {
            chat_id: msg.chat.id.0,
            user_id,
            username,
            command: parse_command(&text),
            text,
        })
    }
}

/// Extract the command name from a message text: first token, leading '/'
/// stripped, optional '@botname' suffix stripped, lowercased.
pub fn parse_command(text: &str) -> Option<String> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    if name.is_empty() {
        return None;
    }
    Some(name.to_lowercase())
}

/// Command name -> handler table, built once at startup and read-only
/// afterwards.
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under a command name. Registering the same name
    /// again replaces the previous handler.
    pub fn register(&mut self, name: &str, handler: Handler) {
        info!("Registered command /{name}");
        self.handlers.insert(name.to_lowercase(), handler);
    }

    /// Dispatch an update to the matching handler. Updates that are not
    /// text messages, carry no command, or name an unknown command are
    /// dropped without error.
    ///
    /// Handler failures stay here: log, one best-effort apology to the
    /// same chat, then give up.
    pub async fn dispatch(&self, sender: &Arc<dyn Sender>, update: &Update) {
        let Some(inbound) = Inbound::from_update(update) else {
            return;
        };
        let Some(name) = inbound.command.clone() else {
            debug!("Ignoring non-command message in chat {}", inbound.chat_id);
            return;
        };
        let Some(handler) = self.handlers.get(&name) else {
            debug!("No handler for /{name}, dropping update");
            return;
        };

        let chat_id = inbound.chat_id;
        if let Err(err) = handler(Arc::clone(sender), inbound).await {
            warn!("Command /{name} failed: {err}");
            sender.send_text(chat_id, handlers::APOLOGY_TEXT).await.ok();
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the built-in commands.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register("start", |sender, msg| {
        Box::pin(async move { handlers::start(sender.as_ref(), &msg).await })
    });
    registry.register("help", |sender, msg| {
        Box::pin(async move { handlers::help(sender.as_ref(), &msg).await })
    });
    registry.register("about", |sender, msg| {
        Box::pin(async move { handlers::about(sender.as_ref(), &msg).await })
    });
    registry
}
