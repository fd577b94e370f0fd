//! Theme management
//!
//! Built-in color palettes for the viewer, addressable by name from the
//! configuration file. Custom themes can be registered at runtime; the
//! built-ins cannot be removed.

use std::collections::HashMap;
use std::fmt;

use eframe::egui::Color32;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// An sRGB color serialized as "#rrggbb"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn color32(self) -> Color32 {
        Color32::from_rgb(self.0[0], self.0[1], self.0[2])
    }

    fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self([r, g, b]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RgbVisitor;

        impl Visitor<'_> for RgbVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a color in '#rrggbb' form")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Rgb, E> {
                Rgb::parse(v).ok_or_else(|| E::custom(format!("invalid color '{}'", v)))
            }
        }

        deserializer.deserialize_str(RgbVisitor)
    }
}

/// The colors a theme provides to the views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub panel: Rgb,
    pub text_primary: Rgb,
    pub text_dim: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub code_bg: Rgb,
    pub terminal_bg: Rgb,
    pub terminal_text: Rgb,
    pub terminal_prompt: Rgb,
    pub link: Rgb,
}

/// A named palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
}

fn dark_theme() -> Theme {
    Theme {
        name: "dark".to_string(),
        palette: Palette {
            background: Rgb([18, 20, 26]),
            panel: Rgb([26, 29, 38]),
            text_primary: Rgb([224, 226, 235]),
            text_dim: Rgb([140, 146, 162]),
            accent: Rgb([94, 156, 255]),
            success: Rgb([96, 200, 120]),
            warning: Rgb([230, 180, 80]),
            error: Rgb([235, 105, 100]),
            code_bg: Rgb([32, 36, 48]),
            terminal_bg: Rgb([12, 14, 18]),
            terminal_text: Rgb([190, 200, 190]),
            terminal_prompt: Rgb([120, 230, 120]),
            link: Rgb([110, 170, 250]),
        },
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "light".to_string(),
        palette: Palette {
            background: Rgb([246, 247, 250]),
            panel: Rgb([255, 255, 255]),
            text_primary: Rgb([32, 36, 46]),
            text_dim: Rgb([110, 116, 130]),
            accent: Rgb([40, 100, 220]),
            success: Rgb([30, 140, 70]),
            warning: Rgb([180, 130, 30]),
            error: Rgb([190, 60, 55]),
            code_bg: Rgb([236, 238, 244]),
            terminal_bg: Rgb([28, 30, 36]),
            terminal_text: Rgb([200, 210, 200]),
            terminal_prompt: Rgb([110, 210, 110]),
            link: Rgb([35, 90, 200]),
        },
    }
}

fn high_contrast_theme() -> Theme {
    Theme {
        name: "high-contrast".to_string(),
        palette: Palette {
            background: Rgb([0, 0, 0]),
            panel: Rgb([10, 10, 10]),
            text_primary: Rgb([255, 255, 255]),
            text_dim: Rgb([200, 200, 200]),
            accent: Rgb([80, 180, 255]),
            success: Rgb([0, 255, 100]),
            warning: Rgb([255, 210, 0]),
            error: Rgb([255, 80, 80]),
            code_bg: Rgb([24, 24, 24]),
            terminal_bg: Rgb([0, 0, 0]),
            terminal_text: Rgb([230, 255, 230]),
            terminal_prompt: Rgb([0, 255, 0]),
            link: Rgb([120, 200, 255]),
        },
    }
}

/// Registry of themes with one active selection
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    active: String,
}

impl ThemeManager {
    /// Create a manager with the built-in themes, dark active
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [dark_theme(), light_theme(), high_contrast_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self {
            themes,
            active: "dark".to_string(),
        }
    }

    /// Switch the active theme by name
    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        if !self.themes.contains_key(name) {
            return Err(Error::ThemeNotFound {
                theme_name: name.to_string(),
            });
        }
        self.active = name.to_string();
        Ok(())
    }

    /// Register a custom theme; replaces any theme with the same name
    pub fn add_theme(&mut self, theme: Theme) {
        self.themes.insert(theme.name.clone(), theme);
    }

    /// The active theme
    pub fn active_theme(&self) -> &Theme {
        // The active name is only ever set through set_theme
        self.themes
            .get(&self.active)
            .unwrap_or_else(|| panic!("active theme '{}' missing from registry", self.active))
    }

    /// The active palette
    pub fn palette(&self) -> &Palette {
        &self.active_theme().palette
    }

    /// Name of the active theme
    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// All registered theme names, sorted
    pub fn theme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
