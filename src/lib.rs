//! # fedbot
//!
//! Chat bot answering questions about the Fedora account system, package
//! ownership, meeting schedule and message-bus activity.
//!
//! - Domain: Configuration, Types and Traits
//! - Infrastructure: Matrix and the Fedora web service clients
//! - Application: Router, Context, ACL cache, Meetings, Statistics
//! - Interface: Command Handlers

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod strings;
