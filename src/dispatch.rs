//! Command Dispatcher
//!
//! Pure routing core: a resolved command invocation goes in, an optional
//! reply comes out. Everything gateway-specific stays in `gateway`; this
//! module never touches the wire.
//!
//! Failure policy: per-command errors are swallowed here and become "no
//! reply" (a malformed or unresolvable command should not spam the
//! channel). The one exception is `qrsave`, which acknowledges with `OK`
//! whether or not the save actually ran.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::favorites::FavoritesStore;
use crate::qr;
use crate::render::{render, RenderConfig};

/// A slash command resolved down to its name, caller, and string options.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    /// Registered command name, e.g. `qr`.
    pub name: String,
    /// Opaque identity of the invoking user.
    pub caller_id: String,
    /// String-valued options by option name.
    pub options: HashMap<String, String>,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>, caller_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            caller_id: caller_id.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

/// What the bot sends back for an invocation, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Message with an attached file.
    Attachment { filename: String, bytes: Vec<u8> },
    /// Plain text message.
    Text(String),
}

/// Routes invocations to encode, save, or load behavior.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    favorites: FavoritesStore,
}

impl Dispatcher {
    pub fn new(favorites: FavoritesStore) -> Self {
        Self { favorites }
    }

    /// Handles one invocation. `None` means no reply is produced, which
    /// covers unrecognized commands, missing options, lookup misses, and
    /// encode/render failures alike.
    pub fn handle(&self, invocation: &CommandInvocation) -> Option<Reply> {
        match invocation.name.as_str() {
            "qr" => self.handle_encode(invocation),
            "qrsave" => self.handle_save(invocation),
            "qrload" => self.handle_load(invocation),
            other => {
                debug!(command = other, "ignoring unrecognized command");
                None
            }
        }
    }

    fn handle_encode(&self, invocation: &CommandInvocation) -> Option<Reply> {
        let text = invocation.option("text")?;
        let bytes = encode_to_png(text)?;
        Some(Reply::Attachment {
            filename: "QR.png".to_string(),
            bytes,
        })
    }

    fn handle_save(&self, invocation: &CommandInvocation) -> Option<Reply> {
        // The acknowledgment is unconditional: a save skipped for missing
        // options still gets an OK.
        if let (Some(text), Some(name)) = (invocation.option("text"), invocation.option("name")) {
            self.favorites.store(&invocation.caller_id, name, text);
            debug!(
                caller = %invocation.caller_id,
                name,
                total = self.favorites.len(),
                "favorite saved"
            );
        } else {
            debug!(caller = %invocation.caller_id, "qrsave missing an option, save skipped");
        }
        Some(Reply::Text("OK".to_string()))
    }

    fn handle_load(&self, invocation: &CommandInvocation) -> Option<Reply> {
        let name = invocation.option("name")?;
        let content = match self.favorites.retrieve(&invocation.caller_id, name) {
            Some(content) => content,
            None => {
                debug!(caller = %invocation.caller_id, name, "favorite not found");
                return None;
            }
        };
        let bytes = encode_to_png(&content)?;
        Some(Reply::Attachment {
            filename: name.to_string(),
            bytes,
        })
    }
}

/// Encode and render with the fixed production settings, swallowing
/// failures into `None`.
fn encode_to_png(text: &str) -> Option<Vec<u8>> {
    let grid = match qr::encode(text) {
        Ok(grid) => grid,
        Err(err) => {
            warn!(error = %err, "QR encoding failed");
            return None;
        }
    };
    match render(&grid, &RenderConfig::default()) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!(error = %err, "rendering failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_command_produces_no_reply() {
        let dispatcher = Dispatcher::default();
        let invocation = CommandInvocation::new("ping", "42");
        assert_eq!(dispatcher.handle(&invocation), None);
    }

    #[test]
    fn qr_without_text_produces_no_reply() {
        let dispatcher = Dispatcher::default();
        let invocation = CommandInvocation::new("qr", "42");
        assert_eq!(dispatcher.handle(&invocation), None);
    }

    #[test]
    fn qr_replies_with_png_attachment() {
        let dispatcher = Dispatcher::default();
        let invocation = CommandInvocation::new("qr", "42").with_option("text", "hello");
        match dispatcher.handle(&invocation) {
            Some(Reply::Attachment { filename, bytes }) => {
                assert_eq!(filename, "QR.png");
                assert_eq!(&bytes[1..4], b"PNG");
            }
            other => panic!("expected attachment, got {other:?}"),
        }
    }

    #[test]
    fn qrsave_acknowledges_even_without_options() {
        let dispatcher = Dispatcher::default();
        let invocation = CommandInvocation::new("qrsave", "42");
        assert_eq!(
            dispatcher.handle(&invocation),
            Some(Reply::Text("OK".to_string()))
        );
    }

    #[test]
    fn qrload_uses_saved_name_as_filename() {
        let favorites = FavoritesStore::new();
        let dispatcher = Dispatcher::new(favorites);

        let save = CommandInvocation::new("qrsave", "42")
            .with_option("text", "abc")
            .with_option("name", "x");
        assert_eq!(dispatcher.handle(&save), Some(Reply::Text("OK".to_string())));

        let load = CommandInvocation::new("qrload", "42").with_option("name", "x");
        match dispatcher.handle(&load) {
            Some(Reply::Attachment { filename, .. }) => assert_eq!(filename, "x"),
            other => panic!("expected attachment, got {other:?}"),
        }
    }

    #[test]
    fn qrload_by_other_user_produces_no_reply() {
        let dispatcher = Dispatcher::default();
        let save = CommandInvocation::new("qrsave", "42")
            .with_option("text", "abc")
            .with_option("name", "x");
        dispatcher.handle(&save);

        let load = CommandInvocation::new("qrload", "99").with_option("name", "x");
        assert_eq!(dispatcher.handle(&load), None);
    }
}
