//! Funnty
//!
//! Styled text rendered to images. The [`Engine`] owns the font library and
//! turns a [`StyleConfig`](funnty_text::StyleConfig) into pixels; the
//! export crate takes the pixels from there.
//!
//! # Example
//! ```rust,ignore
//! use funnty::{Config, Engine};
//! use funnty::text::StyleConfig;
//!
//! let mut engine = Engine::new(Config::default())?;
//! let rendered = engine.render(&StyleConfig::default())?;
//! let png = funnty::export::encode_png(&rendered.surface)?;
//! ```

mod config;
mod engine;
pub mod fonts;
pub mod logging;
pub mod remote_fonts;

pub use config::{Config, RemoteFontsConfig};
pub use engine::{Engine, Rendered};
pub use fonts::FontLibrary;
pub use remote_fonts::GoogleFonts;

// Re-export sub-crates
pub use funnty_text as text;
pub use funnty_render as render;
pub use funnty_export as export;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Text error: {0}")]
    Text(#[from] funnty_text::TextError),

    #[error("Render error: {0}")]
    Render(#[from] funnty_render::RenderError),

    #[error("Export error: {0}")]
    Export(#[from] funnty_export::ExportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
