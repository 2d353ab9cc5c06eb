pub mod config;
pub mod dispatch;
pub mod error;
pub mod favorites;
pub mod gateway;
pub mod qr;
pub mod render;

pub use config::Config;
pub use dispatch::{CommandInvocation, Dispatcher, Reply};
pub use error::{BotError, Result};
pub use favorites::FavoritesStore;
pub use qr::ModuleGrid;
pub use render::{render, ImageFormat, RenderConfig};
