//! The portal's custom light theme.

use gangway_core::{
    ConfigError, NavigationPalette, PageShape, PageTheme, Palette, Rgb, ThemeDescriptor,
    ThemeVariant,
};

const PRIMARY: Rgb = Rgb::new(0x03, 0x13, 0x29);
const SECONDARY: Rgb = Rgb::new(0x1b, 0x73, 0xee);
const ERROR: Rgb = Rgb::new(0xf4, 0x43, 0x36);
const WARNING: Rgb = Rgb::new(0xff, 0xc1, 0x07);
const SUCCESS: Rgb = Rgb::new(0x4c, 0xaf, 0x50);
const BACKGROUND: Rgb = Rgb::new(0xf8, 0xf9, 0xfa);
const PAPER: Rgb = Rgb::new(0xff, 0xff, 0xff);
const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

fn header(shape: PageShape) -> PageTheme {
    PageTheme::new(vec![PRIMARY, SECONDARY], shape)
}

/// The `gangway-light` theme: dark navy primary over a light background,
/// with per-category header shapes.
pub fn portal_theme() -> Result<ThemeDescriptor, ConfigError> {
    let mut builder = ThemeDescriptor::builder("gangway-light", "Gangway Light")
        .variant(ThemeVariant::Light)
        .palette(Palette {
            primary: PRIMARY,
            secondary: SECONDARY,
            error: ERROR,
            warning: WARNING,
            info: PRIMARY,
            success: SUCCESS,
            background: BACKGROUND,
            paper: PAPER,
            navigation: NavigationPalette {
                background: PRIMARY,
                indicator: ERROR,
                color: WHITE,
                selected_color: WHITE,
            },
        })
        .default_category("other");

    // Wave headers for content-heavy categories, round for utility pages.
    for category in ["home", "service", "website", "library", "other", "app", "apis"] {
        builder = builder.page_theme(category, header(PageShape::Wave));
    }
    builder = builder.page_theme("documentation", header(PageShape::Wave2));
    for category in ["tool", "settings", "search", "component", "team", "about"] {
        builder = builder.page_theme(category, header(PageShape::Round));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_builds_with_default_category() {
        let theme = portal_theme().unwrap();
        assert_eq!(theme.id(), "gangway-light");
        assert_eq!(theme.default_category(), "other");
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        let theme = portal_theme().unwrap();
        assert_eq!(
            theme.page_theme("nonexistent-category"),
            theme.page_theme("other")
        );
        assert_eq!(theme.page_theme("other").shape, PageShape::Wave);
    }

    #[test]
    fn documentation_uses_the_second_wave() {
        let theme = portal_theme().unwrap();
        assert_eq!(theme.page_theme("documentation").shape, PageShape::Wave2);
        assert_eq!(
            theme.page_theme("documentation").colors,
            vec![PRIMARY, SECONDARY]
        );
    }
}
