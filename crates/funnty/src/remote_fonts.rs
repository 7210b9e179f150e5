//! Google Fonts loader
//!
//! Missing families are fetched through the CSS2 API: the stylesheet for
//! `family:wght@weight` names the font file in its first `url(...)`, which is
//! downloaded and kept in the cache directory for the next run.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use funnty_text::FontWeight;

use crate::config::RemoteFontsConfig;
use crate::{EngineError, Result};

/// Without a browser user agent the API serves TrueType, which fontdb reads
const USER_AGENT: &str = concat!("funnty/", env!("CARGO_PKG_VERSION"));

/// Fetches font files from Google Fonts
pub struct GoogleFonts {
    client: reqwest::blocking::Client,
    base_url: String,
    cache_dir: Option<PathBuf>,
}

impl GoogleFonts {
    pub fn new(config: &RemoteFontsConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EngineError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            cache_dir: config.cache_dir(),
        })
    }

    /// Stylesheet URL for one family and weight
    pub fn css_url(&self, family: &str, weight: FontWeight) -> String {
        let family = family
            .split_whitespace()
            .map(|word| url::form_urlencoded::byte_serialize(word.as_bytes()).collect::<String>())
            .collect::<Vec<_>>()
            .join("+");
        format!("{}?family={family}:wght@{weight}&display=swap", self.base_url)
    }

    /// Font file bytes for `family` at `weight`, from the cache when present
    pub fn fetch_font(&self, family: &str, weight: FontWeight) -> Result<Vec<u8>> {
        let cached = self.cache_path(family, weight);
        if let Some(path) = cached.as_ref().filter(|p| p.is_file()) {
            tracing::debug!(path = %path.display(), "font cache hit");
            return Ok(fs::read(path)?);
        }

        let css_url = self.css_url(family, weight);
        tracing::debug!(url = %css_url, "fetching font stylesheet");
        let css = self.get(&css_url)?;
        let css = String::from_utf8(css)
            .map_err(|e| EngineError::Network(format!("stylesheet is not UTF-8: {e}")))?;
        let font_url = first_font_url(&css)
            .ok_or_else(|| EngineError::Network(format!("no font source for {family:?}")))?;

        let data = self.get(font_url)?;
        tracing::info!(family, %weight, bytes = data.len(), "downloaded font");

        if let Some(path) = cached {
            let written = path.parent().map_or(Ok(()), fs::create_dir_all)
                .and_then(|()| fs::write(&path, &data));
            if let Err(e) = written {
                tracing::warn!(path = %path.display(), error = %e, "could not cache font");
            }
        }

        Ok(data)
    }

    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()
            .map_err(|e| EngineError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(EngineError::Network(format!("{url}: HTTP {}", response.status().as_u16())));
        }
        let body = response.bytes()
            .map_err(|e| EngineError::Network(e.to_string()))?;
        Ok(body.to_vec())
    }

    fn cache_path(&self, family: &str, weight: FontWeight) -> Option<PathBuf> {
        let slug = family
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        if slug.is_empty() || slug.contains(['/', '\\', '.']) {
            return None;
        }
        self.cache_dir.as_ref().map(|dir| dir.join(format!("{slug}-{weight}.ttf")))
    }
}

/// Target of the first `url(...)` in a stylesheet, without quotes
pub fn first_font_url(css: &str) -> Option<&str> {
    let start = css.find("url(")? + "url(".len();
    let len = css[start..].find(')')?;
    let url = css[start..start + len].trim().trim_matches(['"', '\'']);
    (!url.is_empty()).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts(cache_dir: Option<PathBuf>) -> GoogleFonts {
        let config = RemoteFontsConfig { cache_dir, ..Default::default() };
        let mut fonts = GoogleFonts::new(&config).unwrap();
        fonts.cache_dir = config.cache_dir;
        fonts
    }

    #[test]
    fn test_css_url() {
        let fonts = fonts(None);
        assert_eq!(
            fonts.css_url("Open  Sans", FontWeight::BOLD),
            "https://fonts.googleapis.com/css2?family=Open+Sans:wght@700&display=swap"
        );
    }

    #[test]
    fn test_first_font_url() {
        let css = r#"
/* latin */
@font-face {
  font-family: 'Montserrat';
  font-weight: 400;
  src: url(https://fonts.gstatic.com/s/montserrat/v26/abc.ttf) format('truetype');
}
@font-face {
  src: url(https://fonts.gstatic.com/s/montserrat/v26/def.ttf) format('truetype');
}"#;
        assert_eq!(first_font_url(css), Some("https://fonts.gstatic.com/s/montserrat/v26/abc.ttf"));
        assert_eq!(first_font_url("src: url('a.ttf')"), Some("a.ttf"));
        assert_eq!(first_font_url("src: url()"), None);
        assert_eq!(first_font_url("no sources"), None);
    }

    #[test]
    fn test_cache_hit_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("open-sans-700.ttf"), b"cached").unwrap();
        let fonts = fonts(Some(dir.path().to_path_buf()));
        assert_eq!(fonts.fetch_font("Open Sans", FontWeight::BOLD).unwrap(), b"cached");
    }

    #[test]
    fn test_cache_path_rejects_path_like_names() {
        let fonts = fonts(Some(PathBuf::from("/cache")));
        assert_eq!(fonts.cache_path("Roboto Mono", FontWeight::NORMAL), Some(PathBuf::from("/cache/roboto-mono-400.ttf")));
        assert_eq!(fonts.cache_path("../etc", FontWeight::NORMAL), None);
        assert_eq!(fonts.cache_path("  ", FontWeight::NORMAL), None);
    }
}
