//! # Reply Helper
//!
//! Addresses every bot message to the user who issued the command (`nick: text`).

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub struct Reply<'a, C: ChatProvider + ?Sized> {
    chat: &'a C,
    nick: String,
}

impl<'a, C: ChatProvider + ?Sized> Reply<'a, C> {
    pub fn new(chat: &'a C, nick: impl Into<String>) -> Self {
        Self {
            chat,
            nick: nick.into(),
        }
    }

    pub async fn say(&self, text: &str) -> Result<()> {
        self.chat
            .send_message(&crate::strings::messages::addressed(&self.nick, text))
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!(e))
    }

    /// Typing notices are cosmetic; failures are only logged.
    pub async fn typing(&self, active: bool) {
        if let Err(e) = self.chat.typing(active).await {
            tracing::debug!("Typing notice failed in {}: {}", self.chat.room_id(), e);
        }
    }
}
