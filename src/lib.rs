//! cfq - quota definitions for Cloud Foundry style platforms
//!
//! The interesting parts live in [`crate::core`]: turning command-line flags into a
//! quota request ([`crate::core::quota`], [`crate::core::size`]) and deciding which
//! preconditions must hold first ([`crate::core::requirements`]). Everything else is
//! plumbing around a single `create-quota` command.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod session;
pub mod test_utils;

pub use error::{CfqError, Result};
