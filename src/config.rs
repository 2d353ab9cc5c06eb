//! Startup configuration.

use std::env;

use crate::error::{BotError, Result};

const TOKEN_VAR: &str = "TOKEN";

/// Everything the bot needs before it can connect.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot authentication token.
    pub token: String,
}

impl Config {
    /// Reads configuration from the process environment. A missing or
    /// empty token is fatal; the process must not attempt to connect.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_VAR).ok().filter(|t| !t.is_empty());
        match token {
            Some(token) => Ok(Self { token }),
            None => Err(BotError::MissingCredential),
        }
    }
}
