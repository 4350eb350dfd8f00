// src/lib.rs
// Resolve.Ai - generation proxy for fraud and theft recovery guidance

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod proxy;
pub mod web;

pub use error::{ResolveError, Result};
