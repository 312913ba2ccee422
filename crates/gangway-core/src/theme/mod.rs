//! Theme descriptors: static palette and per-category page themes consumed
//! by the rendering layer.

mod color;
mod descriptor;

pub use color::Rgb;
pub use descriptor::{
    NavigationPalette, PageShape, PageTheme, Palette, ThemeBuilder, ThemeDescriptor, ThemeVariant,
};
