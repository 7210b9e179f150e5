//! Share links
//!
//! A share link is the app URL with the style in its query string. Only the
//! fields that differ from the defaults are written, so a link to an
//! unmodified design has no query at all.
//!
//! Query keys, in the order they are emitted:
//!
//! | key             | field                    |
//! |-----------------|--------------------------|
//! | `text`          | `text`                   |
//! | `font`          | `font_family`            |
//! | `size`          | `size_px`                |
//! | `weight`        | `weight` (100..=900)     |
//! | `color`         | `fill_color`             |
//! | `strokeWidth`   | `stroke_width_px`        |
//! | `strokeColor`   | `stroke_color`           |
//! | `letterSpacing` | `letter_spacing_px`      |
//! | `lineHeight`    | `line_height_multiplier` |
//! | `alignment`     | `alignment`              |
//! | `rotation`      | `rotation_deg`           |
//! | `scale`         | `scale_factor`           |
//! | `padding`       | `padding_px`             |
//! | `maxWidth`      | `max_width_px`           |

use url::Url;
use url::form_urlencoded;

use funnty_text::{StyleConfig, StyleOverride};

use crate::clipboard::ClipboardBackend;
use crate::Result;

/// Title handed to the share sheet
pub const SHARE_TITLE: &str = "Check out this text design!";

/// Message handed to the share sheet
pub const SHARE_TEXT: &str = "I created this cool text design with Funnty";

/// Encode the fields of `config` that differ from `defaults`.
///
/// Numbers use Rust's shortest round-trip formatting, so decoding yields
/// exactly the same `f32`. Returns an empty string when nothing differs.
pub fn encode_share_query(config: &StyleConfig, defaults: &StyleConfig) -> String {
    type Pairs = Vec<(&'static str, String)>;
    fn text(pairs: &mut Pairs, key: &'static str, value: &str, default: &str) {
        if value != default {
            pairs.push((key, value.to_string()));
        }
    }
    // Compared as numbers, so `-0.0` matches a `0.0` default
    fn number(pairs: &mut Pairs, key: &'static str, value: f32, default: f32) {
        if value != default {
            pairs.push((key, value.to_string()));
        }
    }

    let mut pairs = Pairs::new();
    text(&mut pairs, "text", &config.text, &defaults.text);
    text(&mut pairs, "font", &config.font_family, &defaults.font_family);
    number(&mut pairs, "size", config.size_px, defaults.size_px);
    if config.weight != defaults.weight {
        pairs.push(("weight", config.weight.to_string()));
    }
    text(&mut pairs, "color", &config.fill_color, &defaults.fill_color);
    number(&mut pairs, "strokeWidth", config.stroke_width_px, defaults.stroke_width_px);
    text(&mut pairs, "strokeColor", &config.stroke_color, &defaults.stroke_color);
    number(&mut pairs, "letterSpacing", config.letter_spacing_px, defaults.letter_spacing_px);
    number(&mut pairs, "lineHeight", config.line_height_multiplier, defaults.line_height_multiplier);
    text(&mut pairs, "alignment", config.alignment.as_str(), defaults.alignment.as_str());
    number(&mut pairs, "rotation", config.rotation_deg, defaults.rotation_deg);
    number(&mut pairs, "scale", config.scale_factor, defaults.scale_factor);
    number(&mut pairs, "padding", config.padding_px, defaults.padding_px);
    number(&mut pairs, "maxWidth", config.max_width_px, defaults.max_width_px);

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Rebuild a partial style from a share query (with or without a leading `?`).
///
/// Unknown keys are ignored. Invalid values (a weight outside the nine
/// hundreds, an unknown alignment, a number that is malformed or not
/// finite) are dropped. Returns `None` when no recognised key is present at
/// all, which callers treat as "no override" rather than an empty one.
pub fn decode_share_query(query: &str) -> Option<StyleOverride> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut over = StyleOverride::default();
    let mut recognised = false;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.as_ref();
        match key.as_ref() {
            "text" => over.text = Some(value.to_string()),
            "font" => over.font_family = Some(value.to_string()),
            "color" => over.fill_color = Some(value.to_string()),
            "strokeColor" => over.stroke_color = Some(value.to_string()),
            "size" => set_number(&mut over.size_px, value),
            "strokeWidth" => set_number(&mut over.stroke_width_px, value),
            "letterSpacing" => set_number(&mut over.letter_spacing_px, value),
            "lineHeight" => set_number(&mut over.line_height_multiplier, value),
            "rotation" => set_number(&mut over.rotation_deg, value),
            "scale" => set_number(&mut over.scale_factor, value),
            "padding" => set_number(&mut over.padding_px, value),
            "maxWidth" => set_number(&mut over.max_width_px, value),
            "weight" => {
                if let Ok(weight) = value.parse() {
                    over.weight = Some(weight);
                }
            }
            "alignment" => {
                if let Ok(align) = value.parse() {
                    over.alignment = Some(align);
                }
            }
            other => {
                tracing::debug!(key = other, "ignoring unknown share key");
                continue;
            }
        }
        recognised = true;
    }

    recognised.then_some(over)
}

fn set_number(slot: &mut Option<f32>, value: &str) {
    match value.trim().parse::<f32>() {
        Ok(n) if n.is_finite() => *slot = Some(n),
        _ => tracing::debug!(value, "ignoring invalid share number"),
    }
}

/// Append the share query for `config` to `base_url`
pub fn share_url(config: &StyleConfig, defaults: &StyleConfig, base_url: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    let query = encode_share_query(config, defaults);
    url.set_query((!query.is_empty()).then_some(query.as_str()));
    Ok(url.into())
}

/// Share data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareData {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
}

/// Share error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShareError {
    #[error("Share not supported")]
    NotSupported,

    #[error("Share canceled")]
    Canceled,

    #[error("Share failed: {0}")]
    Failed(String),
}

/// A native share capability
pub trait ShareSheet {
    fn can_share(&self, data: &ShareData) -> bool;

    fn share(&self, data: &ShareData) -> std::result::Result<(), ShareError>;
}

impl<S: ShareSheet + ?Sized> ShareSheet for &S {
    fn can_share(&self, data: &ShareData) -> bool {
        (**self).can_share(data)
    }

    fn share(&self, data: &ShareData) -> std::result::Result<(), ShareError> {
        (**self).share(data)
    }
}

/// No share capability; links always go to the clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShareSheet;

impl ShareSheet for NoShareSheet {
    fn can_share(&self, _data: &ShareData) -> bool {
        false
    }

    fn share(&self, _data: &ShareData) -> std::result::Result<(), ShareError> {
        Err(ShareError::NotSupported)
    }
}

/// Hands the link to the desktop with `xdg-open`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShareSheet;

impl ShareSheet for SystemShareSheet {
    fn can_share(&self, data: &ShareData) -> bool {
        cfg!(target_os = "linux") && data.url.is_some()
    }

    #[cfg(target_os = "linux")]
    fn share(&self, data: &ShareData) -> std::result::Result<(), ShareError> {
        use std::process::Command;

        let url = data.url.as_deref().ok_or(ShareError::NotSupported)?;
        let status = Command::new("xdg-open")
            .arg(url)
            .status()
            .map_err(|e| ShareError::Failed(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ShareError::Failed(format!("xdg-open exited with {status}")))
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn share(&self, _data: &ShareData) -> std::result::Result<(), ShareError> {
        Err(ShareError::NotSupported)
    }
}

/// How a share link reached the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the share sheet
    Shared,
    /// The user dismissed the share sheet
    Canceled,
    /// Copied to the clipboard
    Copied,
    /// Neither worked; the caller should show the URL
    Unshared,
}

/// A built share link and what happened to it
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLink {
    pub url: String,
    pub outcome: ShareOutcome,
}

/// Build the share link for `config` and deliver it: through `share_sheet`
/// when it can share, otherwise (or when sharing fails) by copying the URL
/// with `clipboard`.
pub fn to_shareable_url<S, B>(
    config: &StyleConfig,
    defaults: &StyleConfig,
    base_url: &str,
    share_sheet: &S,
    clipboard: &B,
) -> Result<ShareLink>
where
    S: ShareSheet + ?Sized,
    B: ClipboardBackend + ?Sized,
{
    let url = share_url(config, defaults, base_url)?;
    let data = ShareData {
        title: Some(SHARE_TITLE.to_string()),
        text: Some(SHARE_TEXT.to_string()),
        url: Some(url.clone()),
    };

    if share_sheet.can_share(&data) {
        match share_sheet.share(&data) {
            Ok(()) => {
                tracing::info!(%url, "shared link");
                return Ok(ShareLink { url, outcome: ShareOutcome::Shared });
            }
            Err(ShareError::Canceled) => {
                return Ok(ShareLink { url, outcome: ShareOutcome::Canceled });
            }
            Err(e) => tracing::warn!(error = %e, "share sheet failed, copying link instead"),
        }
    }

    let outcome = if clipboard.write_text(&url) {
        tracing::info!(%url, "copied share link");
        ShareOutcome::Copied
    } else {
        tracing::warn!("could not copy share link");
        ShareOutcome::Unshared
    };
    Ok(ShareLink { url, outcome })
}
