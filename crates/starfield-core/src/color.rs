//! Colours and theme-dependent palettes.
//!
//! The host page owns the theme; scenes only read it once per frame through a
//! [`Theme`] value and look up the matching [`ThemeColors`].

use std::fmt;

/// Straight (non-premultiplied) RGBA colour with 8-bit channels and a unit alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with the alpha replaced, clamped to \[0, 1\].
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// CSS `rgba()` notation, as accepted by canvas fill and stroke styles.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret the host's `data-mode` attribute; anything but `dark` is light.
    pub fn from_mode_attr(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeColors {
    pub particle: Rgba,
    pub particle_glow: Rgba,
    pub connection: Rgba,
    pub constellation_point: Rgba,
    pub constellation_line: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl Palette {
    /// A palette that ignores the theme.
    pub const fn fixed(colors: ThemeColors) -> Self {
        Self {
            light: colors,
            dark: colors,
        }
    }

    pub fn colors(&self, theme: Theme) -> &ThemeColors {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_notation_matches_canvas_style_strings() {
        assert_eq!(
            Rgba::new(23, 23, 23, 0.4).to_string(),
            "rgba(23, 23, 23, 0.4)"
        );
        assert_eq!(Rgba::WHITE.to_string(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Rgba::WHITE.with_alpha(1.7).a, 1.0);
        assert_eq!(Rgba::WHITE.with_alpha(-0.2).a, 0.0);
    }

    #[test]
    fn only_dark_mode_attr_selects_dark() {
        assert_eq!(Theme::from_mode_attr(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_mode_attr(Some("light")), Theme::Light);
        assert_eq!(Theme::from_mode_attr(Some("")), Theme::Light);
        assert_eq!(Theme::from_mode_attr(None), Theme::Light);
    }
}
