#![allow(dead_code)]

use async_trait::async_trait;
use fedbot::application::context::BotContext;
use fedbot::application::router::CommandRouter;
use fedbot::domain::config::AppConfig;
use fedbot::domain::traits::ChatProvider;
use httpmock::MockServer;
use std::sync::{Arc, Mutex};

pub const SENDER: &str = "@nirik:fedora.im";

/// Chat double that records everything the bot says.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<String>>,
}

impl RecordingChat {
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    async fn typing(&self, _active: bool) -> Result<(), String> {
        Ok(())
    }

    fn room_id(&self) -> String {
        "!test:fedora.im".to_string()
    }
}

pub fn config_for(server: &MockServer) -> AppConfig {
    let base = server.base_url();
    let yaml = format!(
        r#"
services:
  matrix:
    username: zodbot
    password: secret
    homeserver: http://localhost
  fas:
    url: "{base}/accounts"
    username: zodbot
    password: hunter2
  pkgdb:
    url: "{base}/pkgdb"
  calendar:
    url: "{base}/calendar"
  badges:
    url: "{base}/badges"
  datagrepper:
    url: "{base}/datagrepper"
"#
    );
    AppConfig::from_yaml(&yaml).unwrap()
}

pub fn context_for(server: &MockServer) -> Arc<BotContext> {
    Arc::new(BotContext::new(config_for(server)).unwrap())
}

/// Routes `message` as if sent by [`SENDER`] and returns the bot's replies.
pub async fn run(ctx: &Arc<BotContext>, message: &str) -> Vec<String> {
    let chat = RecordingChat::default();
    CommandRouter::new(ctx.clone())
        .route(&chat, message, SENDER)
        .await
        .unwrap();
    chat.messages()
}
