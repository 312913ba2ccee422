//! Immutable theme descriptors looked up by page category at render time.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::color::Rgb;

/// Hard fallback so category lookup stays total even if a descriptor is
/// somehow missing its default entry (not constructible via the builder).
static FALLBACK_PAGE_THEME: Lazy<PageTheme> = Lazy::new(|| {
    PageTheme::new(
        vec![Rgb::new(0x03, 0x13, 0x29), Rgb::new(0x1b, 0x73, 0xee)],
        PageShape::Wave,
    )
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
}

/// Header shape rendered behind a page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageShape {
    Wave,
    Wave2,
    Round,
}

/// Gradient colors plus header shape for one page category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTheme {
    pub colors: Vec<Rgb>,
    pub shape: PageShape,
}

impl PageTheme {
    pub fn new(colors: Vec<Rgb>, shape: PageShape) -> Self {
        Self { colors, shape }
    }
}

/// Sidebar/navigation colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationPalette {
    pub background: Rgb,
    pub indicator: Rgb,
    pub color: Rgb,
    pub selected_color: Rgb,
}

/// Application-wide palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub info: Rgb,
    pub success: Rgb,
    pub background: Rgb,
    pub paper: Rgb,
    pub navigation: NavigationPalette,
}

/// Immutable theme: identity, palette, and page themes keyed by category.
/// Constructed once via [`ThemeBuilder`]; pure lookups afterwards.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
    id: String,
    title: String,
    variant: ThemeVariant,
    palette: Palette,
    default_category: String,
    page_themes: BTreeMap<String, PageTheme>,
}

impl ThemeDescriptor {
    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(id, title)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Pure lookup; absent categories fall back to the default category.
    pub fn page_theme(&self, category: &str) -> &PageTheme {
        self.page_themes
            .get(category)
            .or_else(|| self.page_themes.get(&self.default_category))
            .unwrap_or(&FALLBACK_PAGE_THEME)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.page_themes.keys().map(String::as_str)
    }
}

/// Builder for [`ThemeDescriptor`]. `build` fails if the declared default
/// category has no page-theme entry.
pub struct ThemeBuilder {
    id: String,
    title: String,
    variant: ThemeVariant,
    palette: Palette,
    default_category: String,
    page_themes: BTreeMap<String, PageTheme>,
}

impl ThemeBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            variant: ThemeVariant::Light,
            palette: Palette::default(),
            default_category: "other".to_string(),
            page_themes: BTreeMap::new(),
        }
    }

    pub fn variant(mut self, variant: ThemeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    pub fn page_theme(mut self, category: impl Into<String>, theme: PageTheme) -> Self {
        self.page_themes.insert(category.into(), theme);
        self
    }

    pub fn build(self) -> Result<ThemeDescriptor, ConfigError> {
        if !self.page_themes.contains_key(&self.default_category) {
            return Err(ConfigError::MissingDefaultPageTheme {
                theme: self.id,
                category: self.default_category,
            });
        }
        Ok(ThemeDescriptor {
            id: self.id,
            title: self.title,
            variant: self.variant,
            palette: self.palette,
            default_category: self.default_category,
            page_themes: self.page_themes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> ThemeDescriptor {
        ThemeDescriptor::builder("test-theme", "Test Theme")
            .page_theme(
                "home",
                PageTheme::new(vec![Rgb::new(1, 2, 3)], PageShape::Wave),
            )
            .page_theme(
                "other",
                PageTheme::new(vec![Rgb::new(9, 9, 9)], PageShape::Round),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn known_category_returns_its_theme() {
        assert_eq!(theme().page_theme("home").shape, PageShape::Wave);
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        let theme = theme();
        assert_eq!(
            theme.page_theme("nonexistent-category"),
            theme.page_theme("other")
        );
    }

    #[test]
    fn missing_default_category_fails_at_build_time() {
        let err = ThemeDescriptor::builder("broken", "Broken")
            .page_theme(
                "home",
                PageTheme::new(vec![Rgb::default()], PageShape::Wave),
            )
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingDefaultPageTheme { ref category, .. } if category == "other"
        ));
    }
}
