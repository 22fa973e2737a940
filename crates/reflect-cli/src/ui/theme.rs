//! Theme definitions: badges, text styles and tag decorations.

use owo_colors::{OwoColorize, Style};

use reflect_core::{Category, Mood};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Badge label, with a symbol when unicode is enabled.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, true) => "[\u{2139}]",
            (Self::Info, false) => "[INFO]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::green(),
            Self::Warn => styles::yellow(),
            Self::Err => styles::red(),
            Self::Info => styles::cyan(),
        }
    }
}

/// Named styles used across renderers.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn green() -> Style {
        Style::new().green()
    }

    pub fn yellow() -> Style {
        Style::new().yellow()
    }

    pub fn red() -> Style {
        Style::new().red()
    }

    pub fn cyan() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Favorite marker.
pub fn favorite_marker(unicode: bool) -> &'static str {
    if unicode {
        "\u{2605}"
    } else {
        "*"
    }
}

/// Mood label, prefixed with its emoji in unicode mode.
pub fn mood_label(mood: Mood, unicode: bool) -> String {
    if unicode {
        format!("{} {}", mood.emoji(), mood.label())
    } else {
        mood.label().to_string()
    }
}

/// Category name drawn in the category's colour.
pub fn category_label(category: Category, color: bool) -> String {
    match (color, hex_rgb(category.color_hex())) {
        (true, Some((r, g, b))) => category
            .display_name()
            .style(Style::new().truecolor(r, g, b))
            .to_string(),
        _ => category.display_name().to_string(),
    }
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("hi", styles::bold(), false), "hi");
        assert_ne!(styled("hi", styles::bold(), true), "hi");
    }

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#FF8000"), Some((255, 128, 0)));
        assert_eq!(hex_rgb("12345"), None);
        assert_eq!(hex_rgb("#GG0000"), None);
    }

    #[test]
    fn test_tag_labels_without_decoration() {
        assert_eq!(mood_label(Mood::Happy, false), Mood::Happy.label());
        assert_eq!(
            category_label(Category::Work, false),
            Category::Work.display_name()
        );
    }
}
