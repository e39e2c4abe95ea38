//! # Domain Traits
//!
//! Abstract interface for the chat transport.
//! Allows the command handlers to run against Matrix or an in-memory recorder.

use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room, returning the event id
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}
