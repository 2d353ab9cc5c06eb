//! Gateway Adapter
//!
//! Thin serenity glue between Discord and the dispatch core: interactions
//! in, interaction responses out. Nothing in here makes routing decisions.

mod handler;
mod register;

pub use handler::Handler;
pub use register::register_commands;

use serenity::all::GatewayIntents;
use serenity::Client;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::favorites::FavoritesStore;

/// Connects to the gateway and serves command events until the connection
/// ends. Slash commands need no gateway intents.
pub async fn run(config: &Config) -> Result<()> {
    let dispatcher = Dispatcher::new(FavoritesStore::new());
    let mut client = Client::builder(&config.token, GatewayIntents::empty())
        .event_handler(Handler::new(dispatcher))
        .await?;
    client.start().await?;
    Ok(())
}
