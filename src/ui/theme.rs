use crate::config::ConfigError;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl Default for Theme {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl Theme {
    /// Azure blue to violet palette used by the portfolio by default.
    ///
    pub fn portfolio() -> Self {
        Theme {
            name: "portfolio".to_string(),
            primary: rgb(0, 120, 212),      // Azure
            secondary: rgb(94, 92, 230),    // Violet
            accent: rgb(94, 92, 230),       // Violet
            banner: rgb(0, 120, 212),       // Azure
            text: rgb(222, 228, 236),       // Foreground
            text_secondary: rgb(164, 196, 236),
            text_muted: rgb(122, 132, 150), // Comment
            success: rgb(64, 196, 120),     // Green
            warning: rgb(255, 190, 64),     // Amber
            error: rgb(235, 92, 92),        // Red
            info: rgb(0, 120, 212),         // Azure
            border_active: rgb(94, 92, 230),
            border_normal: rgb(92, 102, 122),
            highlight_bg: rgb(0, 120, 212),
            highlight_fg: rgb(255, 255, 255),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255),   // Blue
            secondary: rgb(158, 206, 106), // Green
            accent: rgb(255, 159, 196),    // Magenta
            banner: rgb(255, 159, 196),    // Magenta
            text: rgb(169, 177, 214),      // Foreground
            text_secondary: rgb(192, 202, 245),
            text_muted: rgb(117, 121, 148), // Comment
            success: rgb(158, 206, 106),    // Green
            warning: rgb(255, 202, 40),     // Yellow
            error: rgb(247, 118, 142),      // Red
            info: rgb(125, 207, 255),       // Blue
            border_active: rgb(125, 207, 255),
            border_normal: rgb(117, 121, 148),
            highlight_bg: rgb(125, 207, 255),
            highlight_fg: rgb(26, 27, 38),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),   // Purple
            secondary: rgb(139, 233, 253), // Cyan
            accent: rgb(255, 121, 198),    // Pink
            banner: rgb(255, 121, 198),    // Pink
            text: rgb(248, 248, 242),      // Foreground
            text_secondary: rgb(189, 147, 249),
            text_muted: rgb(98, 114, 164), // Comment
            success: rgb(80, 250, 123),    // Green
            warning: rgb(255, 184, 108),   // Orange
            error: rgb(255, 85, 85),       // Red
            info: rgb(139, 233, 253),      // Cyan
            border_active: rgb(189, 147, 249),
            border_normal: rgb(98, 114, 164),
            highlight_bg: rgb(139, 233, 253),
            highlight_fg: rgb(40, 42, 54),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(161, 119, 255),  // Purple
            secondary: rgb(59, 247, 209), // Green
            accent: rgb(255, 109, 146),   // Pink
            banner: rgb(255, 109, 146),   // Pink
            text: rgb(88, 82, 96),        // Text
            text_secondary: rgb(121, 117, 147),
            text_muted: rgb(152, 147, 165), // Muted
            success: rgb(59, 247, 209),     // Pine
            warning: rgb(255, 210, 0),      // Gold
            error: rgb(235, 111, 146),      // Love
            info: rgb(61, 174, 233),        // Foam
            border_active: rgb(161, 119, 255),
            border_normal: rgb(88, 82, 96),
            highlight_bg: rgb(61, 174, 233),
            highlight_fg: rgb(0, 0, 0),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "portfolio" => Some(Self::portfolio()),
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get a theme by name or report the names that would have been accepted.
    ///
    pub fn try_from_name(name: &str) -> Result<Self, ConfigError> {
        Self::from_name(name).ok_or_else(|| ConfigError::UnknownTheme {
            name: name.to_string(),
            available: Self::available_themes().join(", "),
        })
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "portfolio".to_string(),
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}
