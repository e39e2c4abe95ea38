//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services: the Matrix chat
//! transport and the Fedora web services queried by the commands.

pub mod badges;
pub mod datagrepper;
pub mod fas;
pub mod fedocal;
pub mod http;
pub mod matrix;
pub mod pkgdb;
