//! Saving designs to disk

use std::fs;
use std::path::{Path, PathBuf};

use funnty_render::Surface;
use funnty_text::RenderPlan;

use crate::image::encode_png;
use crate::Result;

/// Where and how [`to_download`] writes
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOptions {
    /// Target directory, created when missing
    pub directory: PathBuf,
    /// Replace an existing file instead of picking `name-1.png`, `name-2.png`, ...
    pub overwrite: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            directory: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            overwrite: false,
        }
    }
}

impl DownloadOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), ..Self::default() }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Write the surface as `<filename>.png` and return the saved path.
///
/// `filename` may already end in `.png`. A blank name, or one that would
/// leave `options.directory`, is replaced by `funnty-design`. An empty
/// serialization (zero-area surface) is an error and nothing is written.
pub fn to_download(surface: &Surface, filename: &str, options: &DownloadOptions) -> Result<PathBuf> {
    let bytes = encode_png(surface)?;

    fs::create_dir_all(&options.directory)?;
    let stem = file_stem(filename);
    let path = if options.overwrite {
        options.directory.join(format!("{stem}.png"))
    } else {
        unused_path(&options.directory, stem)
    };

    fs::write(&path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved image");
    Ok(path)
}

/// Crop the surface to the plan's bounding box grown by `margin` logical
/// pixels on every side.
///
/// `None` when the plan has no visible extent or the box lies entirely
/// outside the surface.
pub fn tight_crop(surface: &Surface, plan: &RenderPlan, margin: f32) -> Option<Surface> {
    let bbox = plan.bounding_box;
    if plan.is_empty() || bbox.is_empty() {
        return None;
    }
    surface.crop(bbox.inflate(margin.max(0.0)))
}

fn file_stem(filename: &str) -> &str {
    let stem = filename.trim().trim_end_matches(".png");
    let escapes = stem.contains(['/', '\\', '\0']) || stem.chars().all(|c| c == '.');
    if escapes {
        if !stem.is_empty() {
            tracing::warn!(filename, "rejected file name, using fallback");
        }
        "funnty-design"
    } else {
        stem
    }
}

fn unused_path(dir: &Path, stem: &str) -> PathBuf {
    let first = dir.join(format!("{stem}.png"));
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| dir.join(format!("{stem}-{n}.png")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportError;

    #[test]
    fn test_writes_png_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let surface = Surface::new(8.0, 8.0, 1.0).unwrap();
        let path = to_download(&surface, "montserrat", &DownloadOptions::new(dir.path())).unwrap();
        assert_eq!(path, dir.path().join("montserrat.png"));
        assert!(path.exists());

        // An explicit extension is not doubled
        let path = to_download(&surface, "logo.png", &DownloadOptions::new(dir.path())).unwrap();
        assert_eq!(path.file_name().unwrap(), "logo.png");
    }

    #[test]
    fn test_existing_file_gets_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let surface = Surface::new(8.0, 8.0, 1.0).unwrap();
        let options = DownloadOptions::new(dir.path());
        let first = to_download(&surface, "open-sans", &options).unwrap();
        let second = to_download(&surface, "open-sans", &options).unwrap();
        assert_eq!(first.file_name().unwrap(), "open-sans.png");
        assert_eq!(second.file_name().unwrap(), "open-sans-1.png");

        let replaced = to_download(&surface, "open-sans", &options.clone().overwrite(true)).unwrap();
        assert_eq!(replaced, first);
    }

    #[test]
    fn test_blank_name_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let surface = Surface::new(8.0, 8.0, 1.0).unwrap();
        let path = to_download(&surface, "  ", &DownloadOptions::new(dir.path())).unwrap();
        assert_eq!(path.file_name().unwrap(), "funnty-design.png");
    }

    #[test]
    fn test_path_like_name_stays_in_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("downloads");
        let surface = Surface::new(8.0, 8.0, 1.0).unwrap();
        let options = DownloadOptions::new(&dir).overwrite(true);

        for name in ["../escaped", "a/b", "..\\escaped", "..", "."] {
            let path = to_download(&surface, name, &options).unwrap();
            assert_eq!(path.parent(), Some(dir.as_path()), "{name}");
            assert_eq!(path.file_name().unwrap(), "funnty-design.png", "{name}");
        }
        assert!(!root.path().join("escaped.png").exists());
    }

    #[test]
    fn test_zero_area_reports_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let surface = Surface::new(0.0, 0.0, 1.0).unwrap();
        let result = to_download(&surface, "empty", &DownloadOptions::new(dir.path()));
        assert!(matches!(result, Err(ExportError::EmptyImage)));
        assert!(!dir.path().join("empty.png").exists());
    }

    #[test]
    fn test_tight_crop_of_empty_plan() {
        let surface = Surface::new(8.0, 8.0, 1.0).unwrap();
        assert!(tight_crop(&surface, &RenderPlan::empty(8.0, 8.0), 4.0).is_none());
    }
}
