//! Font matching and query

use super::{FontStyle, FontWeight};

/// Families tried after the requested one, mirroring the CSS font
/// string `"<family>", Arial, sans-serif`
pub const FALLBACK_FAMILIES: &[&str] = &["Arial", "sans-serif"];

/// Font query for matching
#[derive(Debug, Clone)]
pub struct FontQuery {
    /// Font families to try (in order)
    pub families: Vec<String>,
    /// Desired weight
    pub weight: FontWeight,
    /// Desired style
    pub style: FontStyle,
}

impl FontQuery {
    /// Create a new font query
    pub fn new(families: &[&str]) -> Self {
        Self {
            families: families.iter().map(|s| s.to_string()).collect(),
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Set font weight
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set font style
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Families as fontdb understands them, generic names mapped to
    /// their fontdb counterparts
    pub(crate) fn fontdb_families(&self) -> Vec<fontdb::Family<'_>> {
        self.families.iter().map(|f| generic_family(f)).collect()
    }
}

impl Default for FontQuery {
    fn default() -> Self {
        Self::new(&["sans-serif"])
    }
}

fn generic_family(family: &str) -> fontdb::Family<'_> {
    match family.to_ascii_lowercase().as_str() {
        "serif" => fontdb::Family::Serif,
        "sans-serif" => fontdb::Family::SansSerif,
        "monospace" => fontdb::Family::Monospace,
        "cursive" => fontdb::Family::Cursive,
        "fantasy" => fontdb::Family::Fantasy,
        _ => fontdb::Family::Name(family),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_families_are_mapped() {
        let query = FontQuery::new(&["Montserrat", "SANS-SERIF"]);
        let families = query.fontdb_families();
        assert_eq!(families[0], fontdb::Family::Name("Montserrat"));
        assert_eq!(families[1], fontdb::Family::SansSerif);
    }
}
