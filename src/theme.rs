//! Theme support for the seat-mapping GUI.
//!
//! Built-in color schemes (Light, Dark, Dracula, One Dark Pro) plus a
//! manager that applies them to egui visuals. The semantic slots
//! (red/green/blue) double as the occupancy overlay colors: occupied,
//! vacant, live drag.

use egui::Color32;
use std::collections::HashMap;

/// Color palette for one theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: Color32,
    pub panel_background: Color32,
    /// Darker fill used behind the canvas and input fields.
    pub extreme_background: Color32,

    pub text: Color32,
    pub text_dim: Color32,

    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    /// Occupied seats, errors.
    pub red: Color32,
    /// Warnings.
    pub orange: Color32,
    /// Highlights in the status bar.
    pub yellow: Color32,
    /// Vacant seats, success badges.
    pub green: Color32,
    /// Hyperlinks.
    pub cyan: Color32,
    /// Live drag rectangle, selected widgets.
    pub blue: Color32,
    /// De-emphasized counts.
    pub gray: Color32,
}

/// A named theme with its palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());
        themes.insert("One Dark Pro".to_string(), one_dark_pro_theme());

        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names, sorted for stable combo-box ordering.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme(&self) -> &Theme {
        self.themes
            .get(&self.current_theme_name)
            .expect("current theme always registered")
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's palette onto egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.blue;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.cyan;
        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.orange;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            red: Color32::from_rgb(220, 38, 38),
            orange: Color32::from_rgb(230, 120, 20),
            yellow: Color32::from_rgb(180, 140, 0),
            green: Color32::from_rgb(22, 163, 74),
            cyan: Color32::from_rgb(0, 160, 180),
            blue: Color32::from_rgb(59, 130, 246),
            gray: Color32::from_rgb(120, 120, 120),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            red: Color32::from_rgb(239, 68, 68),
            orange: Color32::from_rgb(243, 156, 18),
            yellow: Color32::from_rgb(241, 196, 15),
            green: Color32::from_rgb(34, 197, 94),
            cyan: Color32::from_rgb(26, 188, 156),
            blue: Color32::from_rgb(59, 130, 246),
            gray: Color32::from_rgb(149, 165, 166),
        },
    }
}

/// Official palette from https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            red: hex_to_color32("#ff5555"),
            orange: hex_to_color32("#ffb86c"),
            yellow: hex_to_color32("#f1fa8c"),
            green: hex_to_color32("#50fa7b"),
            cyan: hex_to_color32("#8be9fd"),
            blue: hex_to_color32("#bd93f9"),
            gray: hex_to_color32("#6272a4"),
        },
    }
}

/// Official palette from https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#282c34"),
            panel_background: hex_to_color32("#282c34"),
            extreme_background: hex_to_color32("#21252b"),

            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),

            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            border: hex_to_color32("#5c6370"),

            red: hex_to_color32("#e06c75"),
            orange: hex_to_color32("#d19a66"),
            yellow: hex_to_color32("#e5c07b"),
            green: hex_to_color32("#98c379"),
            cyan: hex_to_color32("#56b6c2"),
            blue: hex_to_color32("#61afef"),
            gray: hex_to_color32("#5c6370"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Scales a color's brightness (1.0 = unchanged).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_themes_resolve() {
        let manager = ThemeManager::new();
        for name in ["Light", "Dark", "Dracula", "One Dark Pro"] {
            assert!(manager.get_theme(name).is_some(), "missing theme {}", name);
        }
        assert_eq!(manager.list_themes().len(), 4);
    }

    #[test]
    fn set_current_theme_validates_name() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Dracula").is_ok());
        assert_eq!(manager.current_theme().name, "Dracula");
        assert!(manager.set_current_theme("Nope").is_err());
        assert_eq!(manager.current_theme().name, "Dracula");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("21222c"), Color32::from_rgb(33, 34, 44));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }
}
