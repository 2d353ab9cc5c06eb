use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot token not found: set the TOKEN environment variable")]
    MissingCredential,

    #[error("Invalid render dimensions: {0}")]
    InvalidDimension(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Image encoding error: {0}")]
    Encoding(#[from] image::ImageError),

    #[error("Text too long for a QR symbol: {0}")]
    DataTooLong(#[from] qrcodegen::DataTooLong),

    #[error("Gateway error: {0}")]
    Gateway(#[from] serenity::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
