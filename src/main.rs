//! # Main Entry Point
//!
//! Loads the configuration, installs logging, builds the service context,
//! logs into Matrix and dispatches room messages to the command router.

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::RoomId,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use fedbot::application::context::BotContext;
use fedbot::application::router::CommandRouter;
use fedbot::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use fedbot::domain::traits::ChatProvider;
use fedbot::infrastructure::matrix::MatrixService;
use fedbot::strings::{logs, messages};

#[derive(Parser, Debug)]
#[command(name = "fedbot", version, about = "Fedora community chat bot")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory for session.log
    #[arg(long, default_value = "data")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let _guard = fedbot::application::logging::init(&args.log_dir)?;
    tracing::info!("{}", logs::STARTING);

    // 3. Remote services
    let ctx = Arc::new(BotContext::new(config.clone()).context("Failed to build HTTP client")?);
    ctx.load_acls().await;
    if let Some(minutes) = config.system.acl_refresh_minutes.filter(|m| *m > 0) {
        ctx.acls
            .spawn_refresh(ctx.pkgdb.clone(), Duration::from_secs(minutes * 60));
    }
    let router = Arc::new(CommandRouter::new(ctx.clone()));

    // 4. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password)
        .send()
        .await?;
    tracing::info!("{}", logs::logged_in(&matrix.username));

    if let Some(name) = &matrix.display_name {
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();
    let loop_router = router.clone();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = loop_router.clone();
        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time = std::time::UNIX_EPOCH + Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }
            if original_msg.sender == room.own_user_id() {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let chat = MatrixService::new(room);
                if let Err(e) = router
                    .route(&chat, &text_content.body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("Failed to route message: {}", e);
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // Startup Announcement
    if !config.bridges.is_empty() {
        let startup_client = client.clone();
        let rooms = config.bridges.clone();
        let prefix = config.commands.prefix.clone();
        tokio::spawn(async move {
            // Wait for the initial sync to populate joined rooms
            tokio::time::sleep(Duration::from_secs(5)).await;
            for id in rooms {
                let Ok(room_id) = RoomId::parse(id.as_str()) else {
                    tracing::warn!("Invalid room id in bridges: {}", id);
                    continue;
                };
                if let Some(room) = startup_client.get_room(&room_id) {
                    let chat = MatrixService::new(room);
                    if let Err(e) = chat.send_message(&messages::online(&prefix)).await {
                        tracing::error!("Failed to send startup announcement to {}: {}", id, e);
                    }
                }
            }
        });
    }

    // 6. Sync Loop
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}
