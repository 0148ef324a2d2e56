use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

/// Color overrides loaded from a `--theme` TOML file.
///
/// ```toml
/// [colors]
/// background = "#000000"
/// highlight = "#FF8800"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_theme_config(path: &Path) -> Result<ThemeConfig, ThemeError> {
    let text = fs::read_to_string(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub accent: Color,
    pub drag: Color,
    pub error: Color,
    pub year_header: Color,
    pub tile_border: Color,
    pub tile_date: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0D, 0x11, 0x17),
            text: Color::Rgb(0xC9, 0xD1, 0xD9),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x58, 0xA6, 0xFF),
            dim: Color::Rgb(0x76, 0x83, 0x90),
            accent: Color::Rgb(0x3F, 0xB9, 0x50),
            drag: Color::Rgb(0xD2, 0x99, 0x22),
            error: Color::Rgb(0xF8, 0x51, 0x49),
            year_header: Color::Rgb(0x79, 0xC0, 0xFF),
            tile_border: Color::Rgb(0x30, 0x36, 0x3D),
            tile_date: Color::Rgb(0xA5, 0xD6, 0xFF),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from a loaded config, falling back to defaults for
    /// keys the file leaves out (or spells wrong).
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &config.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "drag" => theme.drag = color,
                    "error" => theme.error = color,
                    "year_header" => theme.year_header = color,
                    "tile_border" => theme.tile_border = color,
                    "tile_date" => theme.tile_date = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
