//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot: command routing, the
//! shared service context, the package ACL cache, and the meeting and statistics helpers.

pub mod acl;
pub mod context;
pub mod logging;
pub mod meetings;
pub mod reply;
pub mod router;
pub mod stats;
