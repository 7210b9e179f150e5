//! Funnty - Main Entry Point

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use funnty::export::{
    decode_share_query, encode_png, to_clipboard, to_download, to_shareable_url, ClipboardAttempt,
    DownloadOptions, NoShareSheet, ShareOutcome, ShareSheet, SystemClipboard, SystemShareSheet,
};
use funnty::text::{FontWeight, StyleConfig, StyleOverride, TextAlign};
use funnty::{Config, Engine};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (defaults to funnty/config.json in the config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the design to a PNG file
    Render {
        #[command(flatten)]
        style: StyleArgs,

        /// Output file (defaults to <font-slug>.png in the download directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Crop to the text, keeping this many pixels of margin
        #[arg(long)]
        crop: Option<f32>,
    },
    /// Copy the rendered design to the clipboard
    Copy {
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Build a share link for the design
    Share {
        #[command(flatten)]
        style: StyleArgs,

        /// Open the link with the desktop instead of copying it
        #[arg(long)]
        open: bool,

        /// Page the link points at
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print the style a share link or query string describes
    Decode {
        /// Share URL or query string
        link: String,
    },
}

/// Style sources, applied in order: file, share link, individual flags
#[derive(Args)]
struct StyleArgs {
    /// JSON style file
    #[arg(long)]
    style: Option<PathBuf>,

    /// Share URL or query string to start from
    #[arg(long)]
    link: Option<String>,

    #[arg(long)]
    text: Option<String>,

    #[arg(long)]
    font: Option<String>,

    /// Font size in pixels
    #[arg(long)]
    size: Option<f32>,

    /// 100, 200, ... 900
    #[arg(long)]
    weight: Option<FontWeight>,

    /// Fill colour (any CSS colour)
    #[arg(long)]
    color: Option<String>,

    #[arg(long)]
    stroke_width: Option<f32>,

    #[arg(long)]
    stroke_color: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    letter_spacing: Option<f32>,

    #[arg(long, allow_hyphen_values = true)]
    line_height: Option<f32>,

    /// left, center or right
    #[arg(long)]
    align: Option<TextAlign>,

    /// Degrees
    #[arg(long, allow_hyphen_values = true)]
    rotation: Option<f32>,

    #[arg(long)]
    scale: Option<f32>,

    #[arg(long)]
    padding: Option<f32>,

    #[arg(long)]
    max_width: Option<f32>,

    /// Surface width in logical pixels
    #[arg(long)]
    width: Option<f32>,

    /// Surface height in logical pixels
    #[arg(long)]
    height: Option<f32>,

    /// Device pixel ratio
    #[arg(long)]
    dpr: Option<f32>,
}

impl StyleArgs {
    fn overrides(&self) -> StyleOverride {
        StyleOverride {
            text: self.text.clone(),
            font_family: self.font.clone(),
            size_px: self.size,
            weight: self.weight,
            fill_color: self.color.clone(),
            stroke_width_px: self.stroke_width,
            stroke_color: self.stroke_color.clone(),
            letter_spacing_px: self.letter_spacing,
            line_height_multiplier: self.line_height,
            alignment: self.align,
            rotation_deg: self.rotation,
            scale_factor: self.scale,
            padding_px: self.padding,
            max_width_px: self.max_width,
        }
    }

    fn resolve(&self, config: &Config) -> Result<StyleConfig> {
        let mut style = match &self.style {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading style {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("parsing style {}", path.display()))?
            }
            None => config.style.clone(),
        };

        if let Some(link) = &self.link {
            match decode_share_query(query_of(link)) {
                Some(over) => style.apply(&over),
                None => tracing::warn!(link, "share link carries no style"),
            }
        }

        style.apply(&self.overrides());
        Ok(style)
    }

    fn apply_surface(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.surface_width = width;
        }
        if let Some(height) = self.height {
            config.surface_height = height;
        }
        if let Some(dpr) = self.dpr {
            config.device_pixel_ratio = dpr;
        }
    }
}

/// The query part of a share URL, or the input itself when it has none
fn query_of(link: &str) -> &str {
    match link.split_once('?') {
        Some((_, query)) => query.split('#').next().unwrap_or(query),
        None => link,
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let path = path.cloned().or_else(Config::default_path);
    match path {
        Some(path) => Config::load(&path).with_context(|| format!("loading config {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    funnty::logging::init(if cli.verbose { "debug" } else { "info" });

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Render { style, output, crop } => {
            style.apply_surface(&mut config);
            let design = style.resolve(&config)?;
            let download_dir = config.download_dir();
            let mut engine = Engine::new(config)?;
            let rendered = engine.render(&design)?;

            let surface = match crop {
                Some(margin) => rendered.cropped(margin).context("nothing to crop: the design has no visible text")?,
                None => rendered.surface,
            };

            let path = match output {
                Some(path) => {
                    let png = encode_png(&surface)?;
                    fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
                    path
                }
                None => to_download(&surface, &design.font_slug(), &DownloadOptions::new(download_dir))?,
            };
            println!("{}", path.display());
        }
        Commands::Copy { style } => {
            style.apply_surface(&mut config);
            let design = style.resolve(&config)?;
            let mut engine = Engine::new(config)?;
            let rendered = engine.render(&design)?;

            let clipboard = SystemClipboard::new();
            if !clipboard.is_available() {
                tracing::warn!("no clipboard tool found (wl-copy, xclip or xsel)");
            }
            match to_clipboard(&rendered.surface, &clipboard)? {
                ClipboardAttempt::Image => println!("Copied image to clipboard"),
                ClipboardAttempt::DataUrl => println!("Copied image to clipboard as a data URL"),
            }
        }
        Commands::Share { style, open, base_url } => {
            let design = style.resolve(&config)?;
            let base_url = base_url.unwrap_or_else(|| config.share_base_url.clone());
            let sheet: &dyn ShareSheet = if open { &SystemShareSheet } else { &NoShareSheet };

            let link = to_shareable_url(&design, &StyleConfig::default(), &base_url, sheet, &SystemClipboard::new())?;
            println!("{}", link.url);
            match link.outcome {
                ShareOutcome::Shared => eprintln!("Opened share link"),
                ShareOutcome::Copied => eprintln!("Link copied to clipboard"),
                ShareOutcome::Canceled => eprintln!("Share canceled"),
                ShareOutcome::Unshared => eprintln!("Could not share or copy the link"),
            }
        }
        Commands::Decode { link } => {
            let defaults = StyleConfig::default();
            let design = match decode_share_query(query_of(&link)) {
                Some(over) => defaults.with_override(&over),
                None => {
                    eprintln!("No style in link; defaults apply");
                    defaults
                }
            };
            println!("{}", serde_json::to_string_pretty(&design)?);
        }
    }

    Ok(())
}
