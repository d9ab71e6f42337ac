// src/lib.rs
// mindful - sentiment classification and mood tracking for a wellness companion

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod companion;
pub mod config;
pub mod error;
pub mod llm;
pub mod mood;
pub mod sentiment;
pub mod state;

pub use error::{MindfulError, Result};
