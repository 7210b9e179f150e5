//! Font library - local faces plus on-demand remote families

use std::collections::HashSet;

use funnty_text::{FontDatabase, FontLoader, FontReadiness, FontSpec, FontWeight};

use crate::config::Config;
use crate::remote_fonts::GoogleFonts;
use crate::Result;

/// The font database used for rendering, filled from the system, configured
/// directories and (optionally) Google Fonts
pub struct FontLibrary {
    db: FontDatabase,
    remote: Option<GoogleFonts>,
    /// Remote requests already made, successful or not
    attempted: HashSet<(String, FontWeight)>,
}

impl FontLibrary {
    pub fn new(db: FontDatabase, remote: Option<GoogleFonts>) -> Self {
        Self { db, remote, attempted: HashSet::new() }
    }

    /// Build the library described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut db = FontDatabase::new();
        if config.system_fonts {
            db.load_system_fonts();
        }
        for dir in &config.font_dirs {
            db.load_fonts_dir(dir);
        }

        let remote = if config.remote_fonts.enabled {
            Some(GoogleFonts::new(&config.remote_fonts)?)
        } else {
            None
        };

        tracing::info!(faces = db.len(), remote = remote.is_some(), "font library ready");
        Ok(Self::new(db, remote))
    }

    pub fn database(&self) -> &FontDatabase {
        &self.db
    }

    /// Whether any face (requested family or fallback) can serve `font`
    pub fn can_render(&self, font: &FontSpec) -> bool {
        self.db.query(&font.query()).is_some()
    }
}

impl FontLoader for FontLibrary {
    fn ensure_font_loaded(&mut self, family: &str, weight: FontWeight) -> funnty_text::Result<FontReadiness> {
        if self.db.has_face(family, weight) {
            return Ok(FontReadiness::Ready);
        }

        if let Some(remote) = &self.remote {
            if self.attempted.insert((family.to_lowercase(), weight)) {
                match remote.fetch_font(family, weight) {
                    Ok(data) => self.db.load_font_data(data),
                    Err(e) => tracing::warn!(family, %weight, error = %e, "remote font unavailable"),
                }
            }
        }

        self.db.ensure_font_loaded(family, weight)
    }
}
