//! Engine - Main entry point

use funnty_render::{render, Surface};
use funnty_text::{
    compute_render_plan, BlockOutliner, FontLoader, FontMeasurer, FontOutliner, FontReadiness,
    GlyphOutliner, MonospaceMeasurer, RenderPlan, StyleConfig, TextMeasurer,
};

use crate::{Config, FontLibrary, Result};

/// A finished render: the plan and the pixels drawn from it
#[derive(Debug)]
pub struct Rendered {
    pub plan: RenderPlan,
    pub surface: Surface,
}

impl Rendered {
    /// The surface cropped to the text plus `margin` logical pixels
    pub fn cropped(&self, margin: f32) -> Option<Surface> {
        funnty_export::tight_crop(&self.surface, &self.plan, margin)
    }
}

/// The Funnty engine
pub struct Engine {
    config: Config,
    fonts: FontLibrary,
}

impl Engine {
    /// Create an engine, loading fonts as configured
    pub fn new(config: Config) -> Result<Self> {
        let fonts = FontLibrary::from_config(&config)?;
        Ok(Self::with_fonts(config, fonts))
    }

    /// Create an engine around an existing font library
    pub fn with_fonts(config: Config, fonts: FontLibrary) -> Self {
        tracing::info!("Funnty {} initialized", crate::VERSION);
        Self { config, fonts }
    }

    /// Get engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// Make the style's font available, tolerating failure
    pub fn prepare_font(&mut self, style: &StyleConfig) -> FontReadiness {
        match self.fonts.ensure_font_loaded(&style.font_family, style.weight) {
            Ok(readiness) => readiness,
            Err(e) => {
                tracing::warn!(family = %style.font_family, error = %e, "font loading failed");
                FontReadiness::Fallback
            }
        }
    }

    /// Lay out `style` on the configured surface size
    pub fn plan(&mut self, style: &StyleConfig) -> Result<RenderPlan> {
        self.prepare_font(style);
        let (measurer, _) = self.text_backend(style);
        Ok(compute_render_plan(
            style,
            self.config.surface_width,
            self.config.surface_height,
            measurer.as_ref(),
        )?)
    }

    /// Lay out and draw `style` onto a fresh surface
    pub fn render(&mut self, style: &StyleConfig) -> Result<Rendered> {
        let readiness = self.prepare_font(style);
        let mut surface = Surface::new(
            self.config.surface_width,
            self.config.surface_height,
            self.config.device_pixel_ratio,
        )?;

        let (measurer, outliner) = self.text_backend(style);
        let plan = compute_render_plan(style, surface.width(), surface.height(), measurer.as_ref())?;
        render(&plan, style, &mut surface, outliner.as_ref())?;

        tracing::info!(
            "Rendered {}x{} ({} lines, font {:?})",
            surface.device_width(),
            surface.device_height(),
            plan.line_count(),
            readiness,
        );
        Ok(Rendered { plan, surface })
    }

    /// Real font metrics when any face can serve the style; placeholder
    /// blocks otherwise
    fn text_backend(&self, style: &StyleConfig) -> (Box<dyn TextMeasurer + '_>, Box<dyn GlyphOutliner + '_>) {
        if self.fonts.can_render(&style.font_spec()) {
            let db = self.fonts.database();
            (Box::new(FontMeasurer::new(db)), Box::new(FontOutliner::new(db)))
        } else {
            tracing::warn!(family = %style.font_family, "no font face available, drawing placeholder blocks");
            (Box::new(MonospaceMeasurer::default()), Box::new(BlockOutliner::default()))
        }
    }
}
