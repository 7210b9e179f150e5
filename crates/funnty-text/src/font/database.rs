//! Font database for loading and managing fonts

use std::path::Path;
use fontdb::{Database, FaceInfo};
use super::{FontId, FontQuery, FontWeight};
use crate::{Result, TextError};

/// Font database for loading and matching fonts
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self {
            db: Database::new(),
        }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Self::new();
        db.load_system_fonts();
        db
    }

    /// Load system fonts into the database
    pub fn load_system_fonts(&mut self) {
        self.db.load_system_fonts();
        tracing::debug!(faces = self.db.len(), "loaded system fonts");
    }

    /// Load every font found under a directory (recursively)
    pub fn load_fonts_dir(&mut self, dir: &Path) {
        let before = self.db.len();
        self.db.load_fonts_dir(dir);
        tracing::debug!(dir = %dir.display(), added = self.db.len() - before, "loaded font directory");
    }

    /// Load a font from file
    pub fn load_font_file(&mut self, path: &Path) -> Result<()> {
        self.db.load_font_file(path)
            .map_err(|e| TextError::FontParsing(format!("{}: {e}", path.display())))
    }

    /// Load a font from memory
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Find a font matching the query
    pub fn query(&self, query: &FontQuery) -> Option<FontId> {
        let families = query.fontdb_families();
        self.db.query(&fontdb::Query {
            families: &families,
            weight: fontdb::Weight(query.weight.value()),
            stretch: fontdb::Stretch::Normal,
            style: query.style.into(),
        }).map(FontId)
    }

    /// Whether any loaded face belongs to `family` (case-insensitive)
    pub fn has_family(&self, family: &str) -> bool {
        self.db.faces().any(|face| {
            face.families.iter().any(|(name, _)| name.eq_ignore_ascii_case(family))
        })
    }

    /// Whether a face of `family` with exactly `weight` is loaded
    pub fn has_face(&self, family: &str, weight: FontWeight) -> bool {
        self.db.faces().any(|face| {
            face.weight.0 == weight.value()
                && face.families.iter().any(|(name, _)| name.eq_ignore_ascii_case(family))
        })
    }

    /// Get font info by ID
    pub fn face_info(&self, id: FontId) -> Option<&FaceInfo> {
        self.db.face(id.0)
    }

    /// Get font data by ID (for shaping and outlining)
    pub fn with_face_data<R>(&self, id: FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        self.db.with_face_data(id.0, f)
    }

    /// List all loaded font families
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.db.faces().filter_map(|f| f.families.first().map(|(name, _)| name.as_str()))
    }

    /// Number of loaded fonts
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database_matches_nothing() {
        let db = FontDatabase::new();
        assert!(db.is_empty());
        assert!(!db.has_family("Montserrat"));
        assert!(!db.has_face("Montserrat", FontWeight::NORMAL));
        let query = FontQuery::new(&["Montserrat", "sans-serif"]).weight(FontWeight::BOLD);
        assert!(db.query(&query).is_none());
    }

    #[test]
    fn test_garbage_font_data_is_ignored() {
        let mut db = FontDatabase::new();
        db.load_font_data(vec![0, 1, 2, 3]);
        assert!(db.is_empty());
    }

    #[test]
    fn test_missing_font_file_is_an_error() {
        let mut db = FontDatabase::new();
        let err = db.load_font_file(Path::new("/definitely/not/here.ttf"));
        assert!(matches!(err, Err(TextError::FontParsing(_))));
    }

    #[test]
    fn test_query_system_fonts() {
        let db = FontDatabase::with_system_fonts();
        if db.is_empty() {
            // Skip on systems without fonts
            return;
        }
        let query = FontQuery::new(&["sans-serif", "Arial", "DejaVu Sans", "Liberation Sans"]);
        // Result depends on installed fonts
        let _ = db.query(&query);
    }
}
