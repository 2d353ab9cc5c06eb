use serenity::all::{Command, CommandOptionType, CreateCommand, CreateCommandOption};
use serenity::http::Http;
use tracing::info;

use crate::error::Result;

fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("qr")
            .description("Turn text into a QR code image")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "text", "Text to encode")
                    .required(true),
            ),
        CreateCommand::new("qrsave")
            .description("Save text as a named QR favorite")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "text", "Text to save")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Name to save it under")
                    .required(true),
            ),
        CreateCommand::new("qrload")
            .description("Render a saved favorite as a QR code image")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Name of the favorite")
                    .required(true),
            ),
    ]
}

/// Registers the three global slash commands. Global registration can take
/// Discord up to an hour to propagate.
pub async fn register_commands(token: &str) -> Result<()> {
    let http = Http::new(token);
    let registered = Command::set_global_commands(&http, command_definitions()).await?;
    info!(count = registered.len(), "registered global slash commands");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defines_all_three_commands() {
        assert_eq!(command_definitions().len(), 3);
    }
}
