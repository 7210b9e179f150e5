//! Image serialization

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use funnty_render::Surface;

use crate::{ExportError, Result};

/// Encode the surface's device pixels as PNG.
///
/// A zero-area surface has nothing to encode and is reported as
/// [`ExportError::EmptyImage`].
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    let pixmap = surface.pixmap().ok_or(ExportError::EmptyImage)?;
    let bytes = pixmap.encode_png().map_err(|e| ExportError::Encode(e.to_string()))?;
    if bytes.is_empty() {
        return Err(ExportError::EmptyImage);
    }
    Ok(bytes)
}

/// `data:image/png;base64,...` representation of the surface
pub fn to_data_url(surface: &Surface) -> Result<String> {
    encode_png(surface).map(|bytes| png_data_url(&bytes))
}

/// `data:` URL for already-encoded PNG bytes
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
