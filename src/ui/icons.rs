use ratatui::{
    style::{Color, Style},
    text::Span,
};

use homefiles::model::Gradient;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📷, 📄, etc.)
    NerdFont, // Nerd Fonts icons (U+F03E, etc.)
}

impl IconMode {
    /// Parse the config value; unknown names fall back to emoji
    pub fn from_config(value: &str) -> Self {
        match value {
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        }
    }
}

/// Colors used around the icons (terminal palette, respects the user's theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub file_color: Color,
    pub upload_color: Color,
    pub delete_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            file_color: Color::Cyan,
            upload_color: Color::Yellow,
            delete_color: Color::Red,
        }
    }
}

/// The two ends of a category's color gradient (600 shade → 400 shade)
pub fn gradient_colors(gradient: Gradient) -> (Color, Color) {
    match gradient {
        Gradient::Purple => (Color::Rgb(0x93, 0x33, 0xea), Color::Rgb(0xc0, 0x84, 0xfc)),
        Gradient::Blue => (Color::Rgb(0x25, 0x63, 0xeb), Color::Rgb(0x60, 0xa5, 0xfa)),
        Gradient::Green => (Color::Rgb(0x16, 0xa3, 0x4a), Color::Rgb(0x4a, 0xde, 0x80)),
        Gradient::Red => (Color::Rgb(0xdc, 0x26, 0x26), Color::Rgb(0xf8, 0x71, 0x71)),
        Gradient::Orange => (Color::Rgb(0xea, 0x58, 0x0c), Color::Rgb(0xfb, 0x92, 0x3c)),
        Gradient::Pink => (Color::Rgb(0xdb, 0x27, 0x77), Color::Rgb(0xf4, 0x72, 0xb6)),
        Gradient::Indigo => (Color::Rgb(0x4f, 0x46, 0xe5), Color::Rgb(0x81, 0x8c, 0xf8)),
        Gradient::Cyan => (Color::Rgb(0x08, 0x91, 0xb2), Color::Rgb(0x22, 0xd3, 0xee)),
    }
}

/// Background color of row `row` out of `rows` when filling an area with the gradient
pub fn gradient_row_color(gradient: Gradient, row: u16, rows: u16) -> Color {
    let (from, to) = gradient_colors(gradient);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            if rows <= 1 {
                return from;
            }
            let t = row.min(rows - 1) as f32 / (rows - 1) as f32;
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ => from,
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Glyph for a category icon identifier (unknown identifiers get a folder)
    pub fn category_glyph(&self, icon: &str) -> &'static str {
        let (emoji, nerd) = match icon {
            "image" => ("📷", "\u{F03E}"),
            "video" => ("🎬", "\u{F03D}"),
            "file-text" => ("📄", "\u{F15C}"),
            "film" => ("🎥", "\u{F008}"),
            "briefcase" => ("💼", "\u{F0B1}"),
            "package" => ("💿", "\u{F487}"),
            "music" => ("🎵", "\u{F001}"),
            "archive" => ("📦", "\u{F187}"),
            _ => ("📁", "\u{E5FF}"),
        };
        match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        }
    }

    /// Category icon span in the category's primary color
    pub fn category_icon(&self, icon: &str, gradient: Gradient) -> Span<'static> {
        let (primary, _) = gradient_colors(gradient);
        Span::styled(
            format!("{} ", self.category_glyph(icon)),
            Style::default().fg(primary),
        )
    }

    /// Icon for a file row; files without a type take their category's icon
    pub fn file_icon(&self, file_type: Option<&str>, category_icon: &str) -> Span<'static> {
        let icon = match file_type {
            Some("image") => "image",
            Some("video") => "video",
            Some(_) => "file-text",
            None => category_icon,
        };
        Span::styled(
            format!("{} ", self.category_glyph(icon)),
            Style::default().fg(self.theme.file_color),
        )
    }

    /// Icon for an in-flight upload placeholder
    pub fn upload_icon(&self) -> Span<'static> {
        let glyph = match self.mode {
            IconMode::Emoji => "⏫ ",
            IconMode::NerdFont => "\u{F093} ",
        };
        Span::styled(glyph, Style::default().fg(self.theme.upload_color))
    }

    /// Icon for the delete action
    pub fn delete_icon(&self) -> Span<'static> {
        let glyph = match self.mode {
            IconMode::Emoji => "🗑 ",
            IconMode::NerdFont => "\u{F1F8} ",
        };
        Span::styled(glyph, Style::default().fg(self.theme.delete_color))
    }
}
