//! Funnty Export - getting a rendered design out of the process
//!
//! - PNG encoding and `data:` URLs
//! - Saving to the download directory, optionally cropped to the text
//! - Clipboard with an image -> data URL fallback chain
//! - Share links carrying only the non-default style fields

pub mod image;
pub mod download;
pub mod clipboard;
pub mod share;

pub use image::{encode_png, png_data_url, to_data_url};
pub use download::{to_download, tight_crop, DownloadOptions};
pub use clipboard::{to_clipboard, CLIPBOARD_FAILURE_MESSAGE, ClipboardAttempt, ClipboardBackend, ClipboardOutcome, SystemClipboard};
pub use share::{
    decode_share_query, encode_share_query, share_url, to_shareable_url,
    NoShareSheet, SHARE_TEXT, SHARE_TITLE, ShareData, ShareError, ShareLink, ShareOutcome, ShareSheet, SystemShareSheet,
};

/// Export error types
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Image serialization produced no data")]
    EmptyImage,

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Every clipboard attempt failed; the message is meant for the user
    #[error("{0}")]
    Clipboard(String),

    #[error("Invalid share URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
