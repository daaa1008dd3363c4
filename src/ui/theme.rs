use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl Theme {
    /// Look a theme up by its configured name, falling back to the default.
    ///
    pub fn from_name(name: &str) -> Self {
        match name {
            "dusk" => Self::dusk(),
            _ => Self::dawn(),
        }
    }

    /// Dawn theme: warm neutrals with the signature pin-red accent.
    ///
    pub fn dawn() -> Self {
        Theme {
            name: "dawn".to_string(),
            accent: rgb(216, 41, 41),
            banner: rgb(143, 22, 22),
            text: rgb(49, 50, 56),
            text_secondary: rgb(142, 143, 149),
            text_muted: rgb(182, 183, 186),
            surface: rgb(236, 236, 238),
            success: rgb(64, 160, 43),
            warning: rgb(223, 142, 29),
            error: rgb(210, 15, 57),
            border_active: rgb(216, 41, 41),
            border_normal: rgb(142, 143, 149),
            highlight_bg: rgb(216, 41, 41),
            highlight_fg: rgb(248, 248, 248),
        }
    }

    /// Dusk theme: the same palette tuned for dark terminals.
    ///
    pub fn dusk() -> Self {
        Theme {
            name: "dusk".to_string(),
            accent: rgb(235, 111, 111),
            banner: rgb(235, 111, 111),
            text: rgb(216, 215, 217),
            text_secondary: rgb(154, 155, 160),
            text_muted: rgb(114, 115, 119),
            surface: rgb(40, 41, 46),
            success: rgb(152, 195, 121),
            warning: rgb(229, 192, 123),
            error: rgb(224, 108, 117),
            border_active: rgb(235, 111, 111),
            border_normal: rgb(90, 91, 96),
            highlight_bg: rgb(235, 111, 111),
            highlight_fg: rgb(30, 30, 34),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dawn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_spec_to_color() {
        let spec = rgb(216, 41, 41);
        assert_eq!(spec.to_color(), Color::Rgb(216, 41, 41));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dusk").name, "dusk");
        assert_eq!(Theme::from_name("dawn").name, "dawn");
        // Unknown names fall back to the default.
        assert_eq!(Theme::from_name("no-such-theme").name, "dawn");
    }
}
