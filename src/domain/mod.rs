//! # Domain Layer
//!
//! Configuration, remote data shapes, errors and the traits that the
//! infrastructure layer implements.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
