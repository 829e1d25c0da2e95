use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::api::types::HeatLevel;
use crate::formatting::BoxChars;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Scoreboard poll interval in seconds.
    pub refresh_interval: u32,
    /// Base URL of the local data service.
    pub service_url: String,
    pub time_format: String,
    pub use_unicode: bool,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub highlight_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub live_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub crunch_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub map_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 30,
            service_url: crate::api::DEFAULT_SERVICE_URL.to_string(),
            time_format: "%H:%M:%S".to_string(),
            use_unicode: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 200, 0),  // Gold
            highlight_fg: Color::Rgb(0, 255, 255),  // Cyan
            live_fg: Color::Rgb(255, 60, 60),
            crunch_fg: Color::Rgb(255, 120, 0),
            map_fg: Color::Rgb(90, 90, 110),
        }
    }
}

/// Resolved display settings handed to every widget render call.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub box_chars: BoxChars,
    pub selection_fg: Color,
    pub highlight_fg: Color,
    pub live_fg: Color,
    pub crunch_fg: Color,
    pub map_fg: Color,
    pub marker_fg: Color,
    pub warm_fg: Color,
    pub hot_fg: Color,
    pub fire_fg: Color,
    pub error_fg: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl DisplayConfig {
    /// Foreground used to shade a marker by its heat level.
    pub fn heat_fg(&self, level: HeatLevel) -> Color {
        match level {
            HeatLevel::Cold => self.marker_fg,
            HeatLevel::Warm => self.warm_fg,
            HeatLevel::Hot => self.hot_fg,
            HeatLevel::Fire => self.fire_fg,
        }
    }
}

impl Config {
    /// Build the resolved display settings from the configured theme.
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
            selection_fg: self.theme.selection_fg,
            highlight_fg: self.theme.highlight_fg,
            live_fg: self.theme.live_fg,
            crunch_fg: self.theme.crunch_fg,
            map_fg: self.theme.map_fg,
            marker_fg: Color::White,
            warm_fg: Color::Rgb(255, 215, 130),
            hot_fg: Color::Rgb(255, 140, 60),
            fire_fg: Color::Rgb(255, 70, 40),
            error_fg: Color::Red,
        }
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    // Named colors
    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "lightred" => return Some(Color::LightRed),
        "lightgreen" => return Some(Color::LightGreen),
        "lightyellow" => return Some(Color::LightYellow),
        "lightblue" => return Some(Color::LightBlue),
        "lightmagenta" => return Some(Color::LightMagenta),
        "lightcyan" => return Some(Color::LightCyan),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    // Hex colors (#FF6600 or #f60)
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    // RGB tuples "255,165,0"
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}
