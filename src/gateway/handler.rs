use serenity::all::{
    CommandInteraction, Context, CreateAttachment, CreateInteractionResponse,
    CreateInteractionResponseMessage, EventHandler, Interaction, Ready, ResolvedValue,
};
use serenity::async_trait;
use tracing::{error, info, warn};

use crate::dispatch::{CommandInvocation, Dispatcher, Reply};

/// Serenity event handler wrapping the dispatch core.
pub struct Handler {
    dispatcher: Dispatcher,
}

impl Handler {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

/// Resolves a command interaction down to its name, caller, and
/// string-valued options. Non-string option values are skipped; the
/// dispatcher treats a skipped option as absent.
fn to_invocation(command: &CommandInteraction) -> CommandInvocation {
    let mut invocation =
        CommandInvocation::new(command.data.name.clone(), command.user.id.to_string());
    for option in command.data.options() {
        if let ResolvedValue::String(value) = option.value {
            invocation = invocation.with_option(option.name, value);
        }
    }
    invocation
}

fn to_response(reply: Reply) -> CreateInteractionResponseMessage {
    match reply {
        Reply::Text(content) => CreateInteractionResponseMessage::new().content(content),
        Reply::Attachment { filename, bytes } => CreateInteractionResponseMessage::new()
            .add_file(CreateAttachment::bytes(bytes, filename)),
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.tag());
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let invocation = to_invocation(&command);
        let dispatcher = self.dispatcher.clone();

        // Rendering is CPU-bound; keep it off the event loop.
        let reply = match tokio::task::spawn_blocking(move || dispatcher.handle(&invocation)).await
        {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "dispatch task panicked");
                return;
            }
        };

        // No reply means the command was ignored on purpose.
        let Some(reply) = reply else {
            return;
        };

        let response = CreateInteractionResponse::Message(to_response(reply));
        if let Err(err) = command.create_response(&ctx.http, response).await {
            warn!(command = %command.data.name, error = %err, "failed to send reply");
        }
    }
}
