//! Clipboard export
//!
//! Copying a design tries an ordered chain of strategies: the PNG itself,
//! then the PNG as a `data:` URL in plain text. The first one the platform
//! accepts wins; when none does the caller gets a message to show the user.

#[cfg(target_os = "linux")]
use std::process::{Command, Stdio};

use funnty_render::Surface;

use crate::image::{encode_png, png_data_url};
use crate::{ExportError, Result};

/// Message shown when nothing could be placed on the clipboard
pub const CLIPBOARD_FAILURE_MESSAGE: &str =
    "Could not copy the image to the clipboard. Try downloading it instead.";

/// Access to a system clipboard
pub trait ClipboardBackend {
    /// Place PNG bytes on the clipboard as an image
    fn write_image(&self, png: &[u8]) -> bool;

    /// Place plain text on the clipboard
    fn write_text(&self, text: &str) -> bool;
}

impl<B: ClipboardBackend + ?Sized> ClipboardBackend for &B {
    fn write_image(&self, png: &[u8]) -> bool {
        (**self).write_image(png)
    }

    fn write_text(&self, text: &str) -> bool {
        (**self).write_text(text)
    }
}

/// One way of getting the design onto the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardAttempt {
    /// The PNG as an image item
    Image,
    /// A `data:image/png;base64,...` string
    DataUrl,
}

impl ClipboardAttempt {
    /// Strategies in the order they are tried
    pub const CHAIN: [ClipboardAttempt; 2] = [ClipboardAttempt::Image, ClipboardAttempt::DataUrl];

    fn run<B: ClipboardBackend + ?Sized>(self, png: &[u8], backend: &B) -> bool {
        match self {
            ClipboardAttempt::Image => backend.write_image(png),
            ClipboardAttempt::DataUrl => backend.write_text(&png_data_url(png)),
        }
    }
}

/// Which strategy ended up on the clipboard
pub type ClipboardOutcome = ClipboardAttempt;

/// Copy the surface to the clipboard, walking [`ClipboardAttempt::CHAIN`].
///
/// Fails with [`ExportError::EmptyImage`] when the surface cannot be
/// serialized, and with [`ExportError::Clipboard`] carrying a user-facing
/// message when every strategy is rejected.
pub fn to_clipboard<B: ClipboardBackend + ?Sized>(surface: &Surface, backend: &B) -> Result<ClipboardOutcome> {
    let png = encode_png(surface)?;

    for attempt in ClipboardAttempt::CHAIN {
        if attempt.run(&png, backend) {
            tracing::info!(?attempt, "copied to clipboard");
            return Ok(attempt);
        }
        tracing::warn!(?attempt, "clipboard rejected copy");
    }

    Err(ExportError::Clipboard(CLIPBOARD_FAILURE_MESSAGE.to_string()))
}

/// The desktop clipboard via `wl-copy`, `xclip` or `xsel`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Check if any clipboard tool is installed
    pub fn is_available(&self) -> bool {
        #[cfg(target_os = "linux")]
        {
            ["wl-copy", "xclip", "xsel"].iter().any(|tool| {
                Command::new("which")
                    .arg(tool)
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .map(|s| s.success())
                    .unwrap_or(false)
            })
        }

        #[cfg(not(target_os = "linux"))]
        {
            false
        }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_image(&self, png: &[u8]) -> bool {
        #[cfg(target_os = "linux")]
        {
            let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
            (wayland && pipe_to("wl-copy", &["--type", "image/png"], png))
                || pipe_to("xclip", &["-selection", "clipboard", "-t", "image/png", "-i"], png)
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = png;
            false
        }
    }

    fn write_text(&self, text: &str) -> bool {
        #[cfg(target_os = "linux")]
        {
            let data = text.as_bytes();
            let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
            (wayland && pipe_to("wl-copy", &[], data))
                || pipe_to("xclip", &["-selection", "clipboard"], data)
                || pipe_to("xsel", &["--clipboard", "--input"], data)
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = text;
            false
        }
    }
}

/// Run `program` with `data` on stdin; true when it exits successfully
#[cfg(target_os = "linux")]
fn pipe_to(program: &str, args: &[&str], data: &[u8]) -> bool {
    use std::io::Write;

    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let written = child.stdin.take().is_some_and(|mut stdin| stdin.write_all(data).is_ok());
    let exited = child.wait().map(|s| s.success()).unwrap_or(false);
    written && exited
}
